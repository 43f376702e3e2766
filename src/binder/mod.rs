mod compound;
mod descriptor;
mod errors;
mod parameter_binder;

pub use compound::*;
pub use descriptor::*;
pub use errors::*;
pub use parameter_binder::*;
