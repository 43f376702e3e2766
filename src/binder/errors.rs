use crate::types::TypeError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("{0} is not a valid bind type")]
    UnknownBindType(String),
    #[error("OUT parameter {0} must be a compound (length, type, value) descriptor")]
    MalformedOutputParameter(String),
    #[error("invalid bind descriptor: {0}")]
    InvalidDescriptor(String),
    #[error("type error: {0}")]
    TypeError(
        #[from]
        #[source]
        TypeError,
    ),
}
