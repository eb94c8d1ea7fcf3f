//! Rendering of developer profiles
//!
//! Two generators are provided, each writing into any `core::fmt::Write`:
//! - **Console**: a human readable summary, optionally colored with ANSI escapes
//! - **JSON**: the flat camelCase profile object, plus the error objects produced when a
//!   profile cannot be built

mod console;
mod json;

pub use console::generate as generate_console;
pub use json::{generate as generate_json, generate_error as generate_json_error};
