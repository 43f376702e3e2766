use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Namespace prefix shared by every canonical type name, e.g. `SQLT_INT`.
pub const TYPE_NAMESPACE: &str = "SQLT_";

/// Bind type tags understood by the call interface.
///
/// The strum serializations are the canonical `SQLT_*` names, so
/// `TypeTag::from_str("SQLT_INT")` and `tag.to_string()` round through the
/// same vocabulary the driver documents.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum TypeTag {
    /// VARCHAR2, the generic string binding
    #[strum(serialize = "SQLT_CHR")]
    Varchar,
    /// Oracle NUMBER
    #[strum(serialize = "SQLT_NUM")]
    Numeric,
    #[strum(serialize = "SQLT_INT")]
    Integer,
    #[strum(serialize = "SQLT_FLT")]
    Float,
    /// ANSI fixed CHAR
    #[strum(serialize = "SQLT_AFC")]
    FixedChar,
    /// result set, a.k.a. REF CURSOR
    #[strum(serialize = "SQLT_RSET")]
    ResultSet,
    /// OCIDate, used for date arrays
    #[strum(serialize = "SQLT_ODT")]
    Date,
}

impl TypeTag {
    /// The numeric constant the call interface expects for this tag.
    pub fn code(&self) -> u16 {
        match self {
            TypeTag::Varchar => 1,
            TypeTag::Numeric => 2,
            TypeTag::Integer => 3,
            TypeTag::Float => 4,
            TypeTag::FixedChar => 96,
            TypeTag::ResultSet => 116,
            TypeTag::Date => 156,
        }
    }

    pub fn from_code(code: u16) -> Option<TypeTag> {
        TypeTag::iter().find(|tag| tag.code() == code)
    }

    pub fn canonical_name(&self) -> &'static str {
        self.into()
    }
}
