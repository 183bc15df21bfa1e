mod application_impl;
pub mod data;
mod input_source;
mod runtime_config;

pub use application_impl::{Application, ApplicationError};
pub use input_source::{InputError, InputSource};
pub use runtime_config::{DEFAULT_MAX_DEPTH, RuntimeConfig};
