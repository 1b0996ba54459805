//! Command implementations for the cronwise CLI.

pub mod expand;
pub mod json_output;
