mod counts;
mod rules;

pub use counts::*;
use log::debug;
pub use rules::*;

use crate::types::TypeTag;

static LOGGING_TARGET: &str = "bindrs::classifier";

/// The result of classifying one sample collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub tag: TypeTag,
    pub counts: ClassificationCounts,
    /// (position, canonical form) for samples that must be bound rewritten
    pub rewrites: Vec<(usize, String)>,
}

/// Derives a bind tag from sample values when no type was declared.
pub struct ValueClassifier;

impl ValueClassifier {
    pub fn classify<S: AsRef<str>>(values: &[S]) -> TypeTag {
        Self::classify_samples(values).tag
    }

    pub fn classify_samples<S: AsRef<str>>(values: &[S]) -> Classification {
        let rules = RuleImpl::ordered();
        let mut counts = ClassificationCounts::default();
        let mut rewrites = vec![];

        for (idx, value) in values.iter().enumerate() {
            let sample = value.as_ref().trim_matches(|c: char| c == '"' || c == '\'');
            match rules.iter().find(|rule| rule.matches(sample)) {
                Some(rule) => {
                    counts.record(rule.shape());
                    if let Some(canonical) = rule.canonicalize(sample) {
                        rewrites.push((idx, canonical));
                    }
                }
                None if !sample.is_empty() => counts.record(Shape::Text),
                None => {}
            }
        }
        // never leave every counter at zero, e.g. for all-empty samples
        if counts.is_empty() {
            counts.record(Shape::Text);
        }

        let tag = Self::derive_tag(&counts);
        debug!(
            target: LOGGING_TARGET,
            "classified {} samples as {}: {:?}",
            values.len(),
            tag,
            counts
        );
        Classification {
            tag,
            counts,
            rewrites,
        }
    }

    /// Any text sample forces string binding. Otherwise float beats generic
    /// number beats integer, and dates bind as dates only when alone.
    pub fn derive_tag(counts: &ClassificationCounts) -> TypeTag {
        if counts.text > 0 {
            return TypeTag::Varchar;
        }
        if !counts.has_numeric_like() && counts.date > 0 {
            return TypeTag::Date;
        }
        if counts.has_numeric_like() {
            return if counts.float > 0 {
                TypeTag::Float
            } else if counts.numeric > 0 {
                TypeTag::Numeric
            } else {
                TypeTag::Integer
            };
        }
        // only reachable with all-zero counts, which classify_samples rules out
        TypeTag::Varchar
    }
}
