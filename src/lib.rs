//! Signup Wizard — dynamic multi-step registration engine.
//!
//! A question sequence that is recomputed from the answers collected so
//! far: the seller block appears only for sellers, and the specialization
//! options follow the chosen industry. The library owns the catalog,
//! sequencer, answer store, validator, and submitter; the binary walks the
//! wizard interactively against the platform API.

pub mod answers;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod sequence;
pub mod session;
pub mod submit;
pub mod validate;
