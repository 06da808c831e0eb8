//! CLI command implementations.

pub mod common;
pub mod info;
pub mod key_path;
pub mod process;
pub mod validate;
