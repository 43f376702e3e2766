use std::collections::HashMap;

use super::{TypeError, TypeTag};

/// Tags the driver can bind as arrays.
const ARRAY_ALLOWED: &[TypeTag] = &[
    TypeTag::Integer,
    TypeTag::Float,
    TypeTag::Numeric,
    TypeTag::Varchar,
    TypeTag::Date,
];

/// Tags the driver can bind as scalar OUT parameters.
const OUTVAR_ALLOWED: &[TypeTag] = &[TypeTag::FixedChar, TypeTag::Varchar, TypeTag::Numeric];

lazy_static! {
    static ref ALLOWED_BY_NAME: HashMap<&'static str, TypeTag> = ARRAY_ALLOWED
        .iter()
        .chain(OUTVAR_ALLOWED.iter())
        .map(|tag| (tag.canonical_name(), *tag))
        .collect();
}

/// The closed catalogue of tags a parameter may be bound with.
pub struct TypeVocabulary;

impl TypeVocabulary {
    pub fn is_array_allowed(tag: TypeTag) -> bool {
        ARRAY_ALLOWED.contains(&tag)
    }

    pub fn is_outvar_allowed(tag: TypeTag) -> bool {
        OUTVAR_ALLOWED.contains(&tag)
    }

    /// Looks up a fully-qualified canonical name in either subset.
    pub fn lookup(canonical_name: &str) -> Option<TypeTag> {
        ALLOWED_BY_NAME.get(canonical_name).copied()
    }

    pub fn check_array(tag: TypeTag) -> Result<TypeTag, TypeError> {
        if Self::is_array_allowed(tag) {
            Ok(tag)
        } else {
            Err(TypeError::NotArrayBindable(tag))
        }
    }

    pub fn check_outvar(tag: TypeTag) -> Result<TypeTag, TypeError> {
        if Self::is_outvar_allowed(tag) {
            Ok(tag)
        } else {
            Err(TypeError::NotOutvarBindable(tag))
        }
    }

    /// The only tag observed to bind reliably for OUT parameters.
    ///
    /// This is a quirk of the OCI8 driver rather than a property of the data;
    /// a driver with better output binding may not need it.
    pub fn out_var_tag() -> TypeTag {
        TypeTag::FixedChar
    }

    pub fn result_set_tag() -> TypeTag {
        TypeTag::ResultSet
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("SQLT_INT", Some(TypeTag::Integer))]
    #[test_case("SQLT_FLT", Some(TypeTag::Float))]
    #[test_case("SQLT_NUM", Some(TypeTag::Numeric))]
    #[test_case("SQLT_CHR", Some(TypeTag::Varchar))]
    #[test_case("SQLT_ODT", Some(TypeTag::Date))]
    #[test_case("SQLT_AFC", Some(TypeTag::FixedChar))]
    #[test_case("SQLT_RSET", None ; "result set is reserved for cursors")]
    #[test_case("SQLT_LVC", None)]
    #[test_case("sqlt_int", None ; "lookup is case sensitive")]
    fn lookup(name: &str, expected: Option<TypeTag>) {
        assert_eq!(TypeVocabulary::lookup(name), expected);
    }

    #[test]
    fn subsets_are_enforced_independently() {
        assert_eq!(TypeVocabulary::check_array(TypeTag::Date), Ok(TypeTag::Date));
        assert_eq!(
            TypeVocabulary::check_array(TypeTag::FixedChar),
            Err(TypeError::NotArrayBindable(TypeTag::FixedChar))
        );
        assert_eq!(
            TypeVocabulary::check_outvar(TypeTag::Date),
            Err(TypeError::NotOutvarBindable(TypeTag::Date))
        );
        assert_eq!(
            TypeVocabulary::check_outvar(TypeTag::Varchar),
            Ok(TypeTag::Varchar)
        );
    }

    #[test]
    fn out_var_tag_is_outvar_allowed() {
        assert!(TypeVocabulary::is_outvar_allowed(
            TypeVocabulary::out_var_tag()
        ));
        assert!(!TypeVocabulary::is_array_allowed(
            TypeVocabulary::result_set_tag()
        ));
    }
}
