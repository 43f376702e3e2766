use serde_json::Value;

use super::{BindDescriptor, BindError};
use crate::resolver::BindHint;
use crate::types::ParamValue;

/// Field names of a compound descriptor.
pub const COMPOUND_KEYS: [&str; 3] = ["length", "type", "value"];

/// Recognizes and unpacks `{"length": .., "type": .., "value": ..}` objects.
pub struct CompoundParameterParser;

impl CompoundParameterParser {
    /// True when the value is an object with exactly the three compound keys.
    pub fn is_compound(value: &Value) -> bool {
        match value.as_object() {
            Some(fields) => {
                fields.len() == COMPOUND_KEYS.len()
                    && COMPOUND_KEYS.iter().all(|key| fields.contains_key(*key))
            }
            None => false,
        }
    }

    pub fn unpack(value: &Value) -> Result<BindDescriptor, BindError> {
        if !Self::is_compound(value) {
            return Err(BindError::InvalidDescriptor(format!(
                "expected the fields {:?}, got {}",
                COMPOUND_KEYS, value
            )));
        }
        let length = Self::parse_length(&value["length"])?;
        let bind_type = BindHint::from_json(&value["type"])?;
        let param_value = ParamValue::try_from(&value["value"])?;
        Ok(BindDescriptor::new(length, bind_type, param_value))
    }

    /// Unpacks an OUT parameter, which must be given in compound form.
    pub fn process_out_var(name: &str, value: &Value) -> Result<BindDescriptor, BindError> {
        if !Self::is_compound(value) {
            return Err(BindError::MalformedOutputParameter(name.to_string()));
        }
        Self::unpack(value)
    }

    fn parse_length(value: &Value) -> Result<Option<i64>, BindError> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_i64().map(Some).ok_or_else(|| {
                BindError::InvalidDescriptor(format!("length must be an integer, got {}", n))
            }),
            Value::String(s) => s.trim().parse::<i64>().map(Some).map_err(|_| {
                BindError::InvalidDescriptor(format!("length must be an integer, got {:?}", s))
            }),
            other => Err(BindError::InvalidDescriptor(format!(
                "length must be an integer, got {}",
                other
            ))),
        }
    }
}
