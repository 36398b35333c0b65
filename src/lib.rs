//! curator-analytics: summary statistics for museum collection metadata.
//!
//! Turns a batch of raw, inconsistently-populated collection records into
//! the frequency tables and sequences a charting layer renders: timeline
//! years, medium/culture/classification/tag distributions, a coarse
//! Greek/Roman/Other bucket per record, and vessel detection.

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod myth;
pub mod normalize;
pub mod source;
pub mod year;

// Re-export the types most callers need
pub use aggregate::{aggregate, Statistics};
pub use classify::Category;
pub use error::SourceError;
pub use normalize::NormalizedRecord;
pub use source::{run_analysis, InMemorySource, RecordSource};
