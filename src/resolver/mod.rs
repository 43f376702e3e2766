mod custom;

use std::fmt;

pub use custom::*;
use log::trace;
use serde_json::Value;

use crate::binder::BindError;
use crate::types::{TypeTag, TypeVocabulary, TYPE_NAMESPACE};

static LOGGING_TARGET: &str = "bindrs::resolver";

/// A caller-declared type hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindHint {
    /// A raw driver constant, trusted as is
    Code(u16),
    /// A canonical name, an abbreviated suffix, or a `schema.type` name
    Name(String),
}

impl From<u16> for BindHint {
    fn from(code: u16) -> Self {
        BindHint::Code(code)
    }
}

impl From<&str> for BindHint {
    fn from(hint: &str) -> Self {
        match hint.trim().parse::<u16>() {
            Ok(code) => BindHint::Code(code),
            Err(_) => BindHint::Name(hint.to_string()),
        }
    }
}

impl BindHint {
    /// Reads the `type` field of a compound descriptor.
    ///
    /// Null, false, empty and zero hints mean "no hint": the type is then
    /// derived from the value.
    pub fn from_json(value: &Value) -> Result<Option<BindHint>, BindError> {
        match value {
            Value::Null | Value::Bool(false) => Ok(None),
            Value::String(s) if s.is_empty() || s == "0" => Ok(None),
            Value::String(s) => Ok(Some(s.as_str().into())),
            Value::Number(n) if n.as_u64() == Some(0) => Ok(None),
            Value::Number(n) => match n.as_u64().and_then(|c| u16::try_from(c).ok()) {
                Some(code) => Ok(Some(BindHint::Code(code))),
                None => Err(BindError::UnknownBindType(n.to_string())),
            },
            other => Err(BindError::InvalidDescriptor(format!(
                "type must be a name or a numeric code, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for BindHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindHint::Code(code) => write!(f, "{}", code),
            BindHint::Name(name) => write!(f, "{}", name),
        }
    }
}

/// The outcome of type resolution for one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindType {
    Tag(TypeTag),
    /// A numeric hint passed through unvalidated
    Code(u16),
    /// A qualified custom type, left for object/collection binding
    Custom(String),
}

impl BindType {
    /// The driver constant to bind with; custom types have none.
    pub fn code(&self) -> Option<u16> {
        match self {
            BindType::Tag(tag) => Some(tag.code()),
            BindType::Code(code) => Some(*code),
            BindType::Custom(_) => None,
        }
    }

    pub fn tag(&self) -> Option<TypeTag> {
        match self {
            BindType::Tag(tag) => Some(*tag),
            BindType::Code(code) => TypeTag::from_code(*code),
            BindType::Custom(_) => None,
        }
    }
}

impl fmt::Display for BindType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindType::Tag(tag) => write!(f, "{}", tag),
            BindType::Code(code) => write!(f, "{}", code),
            BindType::Custom(name) => write!(f, "{}", name),
        }
    }
}

pub struct TypeNameResolver;

impl TypeNameResolver {
    pub fn resolve(hint: &BindHint, is_out_var: bool) -> Result<BindType, BindError> {
        if is_out_var {
            return Ok(BindType::Tag(TypeVocabulary::out_var_tag()));
        }
        let name = match hint {
            BindHint::Code(code) => return Ok(BindType::Code(*code)),
            BindHint::Name(name) => name,
        };
        let normalized = Self::normalize(name);
        let resolved = match TypeVocabulary::lookup(&normalized) {
            Some(tag) => BindType::Tag(tag),
            None if CustomTypeDetector::detect(name).is_some() => BindType::Custom(name.clone()),
            None => return Err(BindError::UnknownBindType(normalized)),
        };
        trace!(
            target: LOGGING_TARGET,
            "resolved bind type hint {:?} to {}",
            name,
            resolved
        );
        Ok(resolved)
    }

    /// Uppercases a type name, maps any `DATE*` name to the date tag and adds
    /// the namespace prefix to abbreviated names.
    pub fn normalize(name: &str) -> String {
        let upper = name.to_uppercase();
        if upper.starts_with("DATE") {
            return TypeTag::Date.canonical_name().to_string();
        }
        if upper.starts_with(TYPE_NAMESPACE) {
            upper
        } else {
            format!("{}{}", TYPE_NAMESPACE, upper)
        }
    }
}
