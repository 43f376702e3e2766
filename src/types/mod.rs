mod errors;
mod type_tag;
mod value;
mod vocabulary;

pub use errors::*;
pub use type_tag::*;
pub use value::*;
pub use vocabulary::*;
