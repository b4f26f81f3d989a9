//! # Library Crate Root
//!
//! This file (`lib.rs`) serves as the root of the library crate.
//! It exposes the build pipeline (`core`) and the shared error, config and
//! logging plumbing (`utils`) so they can be used from benches and tests.

pub mod core;
pub mod utils;

pub use crate::core::build::build_library;
pub use crate::core::splice::splice;
