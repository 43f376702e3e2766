use enum_dispatch::enum_dispatch;
use regex::Regex;
use strum_macros::{AsRefStr, Display};

lazy_static! {
    // digit groups may be separated by single spaces, e.g. `1 000.50`
    static ref FLOAT_PATTERN: Regex =
        Regex::new(r"^[+-]?\d+(?: \d{3})*(?:\.\d+(?:[eE][+-]?\d+)?|[eE][+-]?\d+)$").unwrap();
    static ref NUMERIC_PATTERN: Regex = Regex::new(r"^[+-]?(?:\d+\.|\.\d+)$").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new(r"^[+-]?\d+$").unwrap();
    static ref DATE_PATTERN: Regex = Regex::new(
        r"(?i)^(?:\d{4}[-/]\d{2}[-/]\d{2}|\d{2}-[a-z]{3}-\d{2}(?:\d{2})?)(?:[ T]\d{2}:\d{2}(?::\d{2})?)?$"
    )
    .unwrap();
}

/// The primitive shape a sample value looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    Float,
    Numeric,
    Integer,
    Date,
    Text,
}

#[enum_dispatch]
pub trait ShapeRule {
    fn shape(&self) -> Shape;

    fn matches(&self, sample: &str) -> bool;

    /// The form the sample should be bound with once this rule matched.
    fn canonicalize(&self, _sample: &str) -> Option<String> {
        None
    }
}

#[enum_dispatch(ShapeRule)]
#[derive(Clone, Debug, AsRefStr)]
pub enum RuleImpl {
    FloatRule,
    NumericRule,
    IntegerRule,
    DateRule,
}

impl RuleImpl {
    /// Rules in priority order. The first rule that matches a sample wins.
    pub fn ordered() -> [RuleImpl; 4] {
        [
            FloatRule.into(),
            NumericRule.into(),
            IntegerRule.into(),
            DateRule.into(),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct FloatRule;

impl ShapeRule for FloatRule {
    fn shape(&self) -> Shape {
        Shape::Float
    }

    fn matches(&self, sample: &str) -> bool {
        FLOAT_PATTERN.is_match(sample)
    }

    /// Spaces in a float literal are bound as `+`.
    fn canonicalize(&self, sample: &str) -> Option<String> {
        sample.contains(' ').then(|| sample.replace(' ', "+"))
    }
}

#[derive(Clone, Debug)]
pub struct NumericRule;

impl ShapeRule for NumericRule {
    fn shape(&self) -> Shape {
        Shape::Numeric
    }

    fn matches(&self, sample: &str) -> bool {
        NUMERIC_PATTERN.is_match(sample)
    }
}

#[derive(Clone, Debug)]
pub struct IntegerRule;

impl ShapeRule for IntegerRule {
    fn shape(&self) -> Shape {
        Shape::Integer
    }

    fn matches(&self, sample: &str) -> bool {
        INTEGER_PATTERN.is_match(sample)
    }
}

#[derive(Clone, Debug)]
pub struct DateRule;

impl ShapeRule for DateRule {
    fn shape(&self) -> Shape {
        Shape::Date
    }

    fn matches(&self, sample: &str) -> bool {
        DATE_PATTERN.is_match(sample)
    }
}
