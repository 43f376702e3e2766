use std::fmt;

use serde_json::Value;

use super::TypeError;

/// A single raw value supplied by the caller for binding.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    /// SQL NULL, sampled as an empty string
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
}

macro_rules! impl_bind_value {
    ($ty:ty, $variant:tt) => {
        impl From<$ty> for BindValue {
            fn from(value: $ty) -> Self {
                BindValue::$variant(value.into())
            }
        }

        impl From<Option<$ty>> for BindValue {
            fn from(value: Option<$ty>) -> Self {
                match value {
                    Some(v) => v.into(),
                    None => BindValue::Null,
                }
            }
        }
    };
}

impl_bind_value!(bool, Boolean);
impl_bind_value!(i32, Int);
impl_bind_value!(i64, Int);
impl_bind_value!(f64, Float);
impl_bind_value!(String, String);
impl_bind_value!(&str, String);

/// The textual form of a value is what the shape classifier samples.
impl fmt::Display for BindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindValue::Null => Ok(()),
            BindValue::Boolean(b) => write!(f, "{}", if *b { "1" } else { "0" }),
            BindValue::Int(i) => write!(f, "{}", i),
            BindValue::Float(v) => write!(f, "{}", v),
            BindValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl TryFrom<&Value> for BindValue {
    type Error = TypeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(BindValue::Null),
            Value::Bool(b) => Ok((*b).into()),
            Value::Number(n) => {
                if let Some(int) = n.as_i64() {
                    Ok(int.into())
                } else if let Some(float) = n.as_f64() {
                    Ok(float.into())
                } else {
                    Err(TypeError::UnsupportedValue(n.to_string()))
                }
            }
            Value::String(s) => Ok(s.as_str().into()),
            other => Err(TypeError::UnsupportedValue(other.to_string())),
        }
    }
}

/// The value side of a parameter: one scalar or an array for bulk binding.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Scalar(BindValue),
    Array(Vec<BindValue>),
}

impl ParamValue {
    pub fn is_array(&self) -> bool {
        matches!(self, ParamValue::Array(_))
    }

    /// Textual samples for classification, one per element.
    pub fn samples(&self) -> Vec<String> {
        match self {
            ParamValue::Scalar(v) => vec![v.to_string()],
            ParamValue::Array(values) => values.iter().map(ToString::to_string).collect(),
        }
    }

    /// Replaces the elements at the given positions with string forms.
    pub fn with_rewrites(self, rewrites: &[(usize, String)]) -> ParamValue {
        if rewrites.is_empty() {
            return self;
        }
        match self {
            ParamValue::Scalar(v) => match rewrites.iter().find(|(idx, _)| *idx == 0) {
                Some((_, canonical)) => ParamValue::Scalar(canonical.as_str().into()),
                None => ParamValue::Scalar(v),
            },
            ParamValue::Array(mut values) => {
                for (idx, canonical) in rewrites {
                    if let Some(slot) = values.get_mut(*idx) {
                        *slot = canonical.as_str().into();
                    }
                }
                ParamValue::Array(values)
            }
        }
    }
}

impl<T: Into<BindValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<&Value> for ParamValue {
    type Error = TypeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(elements) => Ok(ParamValue::Array(
                elements
                    .iter()
                    .map(BindValue::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Value::Object(_) => Err(TypeError::UnsupportedValue(value.to_string())),
            scalar => Ok(ParamValue::Scalar(BindValue::try_from(scalar)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn samples_use_textual_form() {
        let value = ParamValue::Array(vec![
            BindValue::Int(7),
            BindValue::Float(1.5),
            BindValue::Null,
            BindValue::Boolean(true),
            "abc".into(),
        ]);
        assert_eq!(value.samples(), vec!["7", "1.5", "", "1", "abc"]);
    }

    #[test]
    fn from_json() {
        let value = ParamValue::try_from(&json!([1, 2.5, null, "x"])).unwrap();
        assert_eq!(
            value,
            ParamValue::Array(vec![
                BindValue::Int(1),
                BindValue::Float(2.5),
                BindValue::Null,
                BindValue::String("x".to_string()),
            ])
        );
        let value = ParamValue::try_from(&json!("2024-01-01")).unwrap();
        assert_eq!(value, ParamValue::Scalar("2024-01-01".into()));
    }

    #[test]
    fn nested_values_are_rejected() {
        assert!(matches!(
            ParamValue::try_from(&json!({"a": 1})),
            Err(TypeError::UnsupportedValue(_))
        ));
        assert!(matches!(
            ParamValue::try_from(&json!([[1]])),
            Err(TypeError::UnsupportedValue(_))
        ));
    }

    #[test]
    fn rewrites_replace_positions() {
        let value: ParamValue = vec!["1 000.50", "2.5"].into();
        let value = value.with_rewrites(&[(0, "1+000.50".to_string())]);
        assert_eq!(value, ParamValue::from(vec!["1+000.50", "2.5"]));
    }
}
