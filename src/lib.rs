//! Memory Match (workspace facade crate).
//!
//! Re-exports the workspace crates under `memory_match::{core,input,term,types}`
//! so the binary, integration tests and benchmarks share one import path.

pub use memory_match_core as core;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;
