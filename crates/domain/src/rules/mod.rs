//! The rules engine - pure derivations over a character snapshot.
//!
//! Every calculator is a deterministic function of the snapshot it is handed:
//! no I/O, no shared state, no failure modes. An absent character degrades to
//! the documented defaults rather than erroring, so the presentation layer can
//! call these before any record exists.

mod constants;
mod derived;
mod engine;

pub use constants::Ruleset;
pub use derived::{
    AttributeSummary, ContainerInfo, DerivedSheet, EncumbranceInfo, EncumbranceStatus, LevelInfo,
};
