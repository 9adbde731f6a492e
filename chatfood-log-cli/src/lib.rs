//! chatfood-log CLI library
//!
//! The binary in `main.rs` is a thin shell over these modules so that
//! argument parsing, configuration loading and rendering can be tested directly.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
