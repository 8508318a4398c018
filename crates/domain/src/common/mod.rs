//! Shared helpers used across the domain crate.

pub mod lenient;
