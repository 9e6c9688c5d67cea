pub mod builtin;
pub mod types;

pub use types::*;
