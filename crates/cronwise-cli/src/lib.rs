//! Cronwise CLI library.
//!
//! This crate provides the command implementations behind the `cronwise`
//! binary, kept in a library so they can be unit tested directly.

pub mod commands;
