//! Foundation module - shared utilities
//!
//! Currently only hosts logging setup; kept as a module so future
//! cross-cutting utilities have an obvious home.

pub mod logging;
