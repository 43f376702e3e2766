use derive_new::new;
use log::debug;
use serde_json::{Map, Value};

use super::{BindDescriptor, BindError, CompoundParameterParser, Direction};
use crate::classifier::ValueClassifier;
use crate::config::BindConfig;
use crate::resolver::{BindType, CustomTypeDetector, CustomTypeRef, TypeNameResolver};
use crate::types::{ParamValue, TypeTag, TypeVocabulary};

static LOGGING_TARGET: &str = "bindrs::binder";

/// A parameter ready to be handed to the driver's bind call.
#[derive(new, Debug, Clone, PartialEq)]
pub struct ResolvedParameter {
    /// The statement placeholder, e.g. `:p_ids`
    pub placeholder: String,
    pub direction: Direction,
    pub length: Option<i64>,
    pub bind_type: BindType,
    /// Set when the declared type names a `schema.type` object
    pub custom_type: Option<CustomTypeRef>,
    pub value: ParamValue,
}

impl ResolvedParameter {
    pub fn is_array(&self) -> bool {
        self.value.is_array()
    }

    /// The length passed to the driver, `-1` letting it size the buffer.
    pub fn bind_length(&self) -> i64 {
        self.length.unwrap_or(-1)
    }
}

/// A bind type together with the canonical forms some samples must be
/// bound with. Only a type derived as FLOAT carries rewrites.
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct DeterminedType {
    pub bind_type: BindType,
    pub rewrites: Vec<(usize, String)>,
}

impl DeterminedType {
    fn declared(bind_type: BindType) -> Self {
        Self::new(bind_type, vec![])
    }
}

/// Picks the bind type of a descriptor: the declared hint when one is given,
/// otherwise a type derived from the value. OUT parameters always get the
/// fixed OUT tag.
pub fn determine_bind_type(
    descriptor: &BindDescriptor,
    is_out_var: bool,
) -> Result<DeterminedType, BindError> {
    match descriptor.hint() {
        Some(hint) => Ok(DeterminedType::declared(TypeNameResolver::resolve(
            hint, is_out_var,
        )?)),
        None if is_out_var => Ok(DeterminedType::declared(BindType::Tag(
            TypeVocabulary::out_var_tag(),
        ))),
        None => {
            let classification = ValueClassifier::classify_samples(&descriptor.value().samples());
            let rewrites = if classification.tag == TypeTag::Float {
                classification.rewrites
            } else {
                vec![]
            };
            Ok(DeterminedType::new(
                BindType::Tag(classification.tag),
                rewrites,
            ))
        }
    }
}

/// Turns named JSON parameters into resolved, driver-ready parameters.
#[derive(new, Debug, Clone, Default)]
pub struct ParameterBinder {
    config: BindConfig,
}

impl ParameterBinder {
    pub fn direction_of(&self, name: &str) -> Direction {
        if self.config.is_output_parameter(name) {
            Direction::Out
        } else {
            Direction::In
        }
    }

    /// Reads the descriptor of one parameter; OUT parameters must be compound.
    pub fn parse_descriptor(
        &self,
        name: &str,
        value: &Value,
        direction: Direction,
    ) -> Result<BindDescriptor, BindError> {
        match direction {
            Direction::Out => CompoundParameterParser::process_out_var(name, value),
            Direction::In if CompoundParameterParser::is_compound(value) => {
                CompoundParameterParser::unpack(value)
            }
            Direction::In => Ok(BindDescriptor::plain(ParamValue::try_from(value)?)),
        }
    }

    pub fn bind_parameter(&self, name: &str, value: &Value) -> Result<ResolvedParameter, BindError> {
        let name = name.trim_start_matches(':');
        let direction = self.direction_of(name);
        let descriptor = self.parse_descriptor(name, value, direction)?;
        let resolved = self.resolve_descriptor(name, descriptor, direction)?;
        debug!(
            target: LOGGING_TARGET,
            "bind {} {} as {} (array: {}, length: {})",
            direction,
            resolved.placeholder,
            resolved.bind_type,
            resolved.is_array(),
            resolved.bind_length()
        );
        Ok(resolved)
    }

    /// Binds every parameter of a JSON object, stopping at the first error.
    pub fn bind_parameters(
        &self,
        params: &Map<String, Value>,
    ) -> Result<Vec<ResolvedParameter>, BindError> {
        params
            .iter()
            .map(|(name, value)| self.bind_parameter(name, value))
            .collect()
    }

    fn resolve_descriptor(
        &self,
        name: &str,
        descriptor: BindDescriptor,
        direction: Direction,
    ) -> Result<ResolvedParameter, BindError> {
        let is_out_var = direction.is_out();
        let DeterminedType {
            bind_type,
            rewrites,
        } = determine_bind_type(&descriptor, is_out_var)?;
        let BindDescriptor { length, value, .. } = descriptor;
        let value = value.with_rewrites(&rewrites);

        if let BindType::Tag(tag) = &bind_type {
            if is_out_var {
                TypeVocabulary::check_outvar(*tag)?;
            } else if value.is_array() {
                TypeVocabulary::check_array(*tag)?;
            }
        }
        let custom_type = match &bind_type {
            BindType::Custom(declared) => CustomTypeDetector::detect(declared),
            _ => None,
        };

        Ok(ResolvedParameter::new(
            format!(":{}", name),
            direction,
            length,
            bind_type,
            custom_type,
            value,
        ))
    }
}
