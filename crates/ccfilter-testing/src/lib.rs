//! Testing infrastructure for ccfilter integration tests.
//!
//! - `FilterWorld`: isolated environment that pipes input through the binary
//! - `fixtures`: stream line builders and the sample sessions under `samples/`
//! - `assertions`: checks over rendered transcripts and diagnostics

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, FilterWorld};
