//! Core scoring engine for sequence-labeling evaluation
//!
//! This crate provides the machinery for scoring a tagger's predictions
//! against gold annotations:
//!
//! - **MatrixEngine**: confusion-matrix accumulation over a fixed label
//!   vocabulary, with agreeing/disagreeing record buckets
//! - **Metrics**: per-label precision, recall, F1 and overall accuracy,
//!   derived on demand
//! - **Loader**: tab-separated tagged-output file parsing
//! - **Configuration**: label vocabulary and dump-file paths
//! - **Error handling**: unified error types
//!

pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod metrics;

// Re-export main types for convenience
pub use config::EvalConfig;
pub use engine::MatrixEngine;
pub use error::{Error, Result};
pub use loader::load_file;
pub use metrics::{EvalMetrics, LabelMetrics, SummaryCounts};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
