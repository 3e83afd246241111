//! Architecture-specific code.

pub mod feature;
