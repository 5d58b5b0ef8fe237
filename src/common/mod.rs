pub mod errors;
pub mod logging;
mod macros;

pub use errors::*;
