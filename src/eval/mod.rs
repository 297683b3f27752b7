//! Evaluation of classifier output against gold labels
//!
//! ## Architecture
//!
//! - `classification`: labelled confusion matrix, metrics, intervals, tables
//!
//! ## Example
//!
//! ```
//! use confusion_tally::eval::{ConfidenceLevel, Tally};
//!
//! let mut cm = Tally::new();
//! cm.record_count("neg", "neg", 25);
//! cm.record_count("neg", "pos", 7);
//! cm.record_count("pos", "neg", 4);
//! cm.record_count("pos", "pos", 15);
//!
//! let ci = cm.accuracy_interval(ConfidenceLevel::NinetyFive);
//! println!("Accuracy: {:.2}% ± {:.2}", ci.estimate * 100.0, ci.half_width * 100.0);
//! println!("{cm}");
//! ```

pub mod classification;

// Re-export main types
pub use classification::{
    confusion_matrix, f_beta, Average, ConfidenceInterval, ConfidenceLevel, EvaluationSummary,
    FormatOptions, LabelMetrics, Tally, CORNER,
};
