//! File materialization for assetgen
//!
//! - `outcome`: the per-name result of a generation run
//! - `materializer`: copies templates to their destinations without overwriting

pub mod materializer;
pub mod outcome;

pub use materializer::Materializer;
pub use outcome::{GenerationOutcome, SkipReason};
