use std::fmt;

use derive_new::new;

/// A `schema.type` reference to a user-defined object or collection type.
#[derive(new, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomTypeRef {
    pub schema: String,
    pub type_name: String,
}

impl fmt::Display for CustomTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.type_name)
    }
}

pub struct CustomTypeDetector;

impl CustomTypeDetector {
    /// Splits a qualified type hint at its first `.`.
    ///
    /// Both the schema and the type part must be non-empty.
    pub fn detect(declared_type: &str) -> Option<CustomTypeRef> {
        match declared_type.split_once('.') {
            Some((schema, type_name)) if !schema.is_empty() && !type_name.is_empty() => {
                Some(CustomTypeRef::new(schema.to_string(), type_name.to_string()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("HR.ADDRESS_T", Some(("HR", "ADDRESS_T")))]
    #[test_case("hr.phone_list", Some(("hr", "phone_list")))]
    #[test_case("A.B.C", Some(("A", "B.C")) ; "splits at the first separator")]
    #[test_case("VARCHAR2", None)]
    #[test_case(".ADDRESS_T", None ; "empty schema")]
    #[test_case("HR.", None ; "empty type name")]
    #[test_case("", None)]
    fn detect(declared: &str, expected: Option<(&str, &str)>) {
        let expected = expected.map(|(s, t)| CustomTypeRef::new(s.to_string(), t.to_string()));
        assert_eq!(CustomTypeDetector::detect(declared), expected);
    }

    #[test]
    fn display() {
        let custom = CustomTypeRef::new("HR".to_string(), "ADDRESS_T".to_string());
        assert_eq!(custom.to_string(), "HR.ADDRESS_T");
    }
}
