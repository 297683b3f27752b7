//! Classification metrics over a labelled confusion matrix
//!
//! Provides:
//! - A string-labelled tally of (gold, predicted) counts
//! - Per-label precision, recall, F-measure
//! - Macro and micro averaging, Cohen's Kappa
//! - Normal-approximation confidence intervals
//! - Transpose / symmetric transforms and cumulative sums
//! - Plain, probabilistic and LaTeX tables, and a parser for the plain table

mod average;
mod confusion;
mod interval;
mod metrics;
mod options;
mod parse;
mod render;
mod report;
mod transform;


// Re-export all public types and functions
pub use average::Average;
pub use confusion::Tally;
pub use interval::{
    ConfidenceInterval, ConfidenceLevel, Z_90_ACCURACY, Z_90_MACRO_F, Z_95,
};
pub use metrics::{f_beta, LabelMetrics};
pub use options::{
    FormatOptions, DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES, MIN_DECIMAL_PLACES,
};
pub use render::CORNER;
pub use report::{confusion_matrix, EvaluationSummary};
