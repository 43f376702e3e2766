use super::TypeTag;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("{0} can not be used for array binding")]
    NotArrayBindable(TypeTag),
    #[error("{0} can not be used for output parameter binding")]
    NotOutvarBindable(TypeTag),
    #[error("unsupported bind value: {0}")]
    UnsupportedValue(String),
}
