#[macro_use]
extern crate lazy_static;

pub mod binder;
pub mod classifier;
pub mod config;
pub mod cursor;
pub mod resolver;
pub mod types;
pub mod util;

pub use self::binder::{BindError, ParameterBinder, ResolvedParameter};
pub use self::config::BindConfig;
pub use self::cursor::{CursorError, CursorLifecycle};
