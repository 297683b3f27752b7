//! # confusion-tally
//!
//! Evaluation statistics for classifiers, computed from a tally of
//! (gold label, predicted label) counts.
//!
//! - Accuracy, per-label precision / recall / F-measure (any beta)
//! - Macro and micro F-measure, Cohen's Kappa
//! - 90% / 95% normal-approximation confidence intervals
//! - Transposed, symmetric (Cinková et al., 2012) and cumulative matrices
//! - Aligned text, row-normalized and LaTeX tables, plus a parser that reads
//!   the text table back
//!
//! ## Quick Start
//!
//! ```
//! use confusion_tally::Tally;
//!
//! let mut cm = Tally::new();
//! cm.record_count("neg", "neg", 25);
//! cm.record_count("neg", "neu", 5);
//! cm.record_count("neu", "neu", 32);
//! cm.record("neu", "neg");
//!
//! assert_eq!(cm.row_sum("neg"), 30);
//! assert!((cm.accuracy() - 57.0 / 63.0).abs() < 1e-12);
//!
//! let text = cm.render();
//! let back: Tally = text.parse()?;
//! assert_eq!(back, cm);
//! # Ok::<(), confusion_tally::TallyError>(())
//! ```
//!
//! ## Errors
//!
//! Only configuration and parsing fail; see [`TallyError`]. Statistics whose
//! denominator is zero return `0.0`, except on an empty tally where accuracy
//! (and everything derived from it) is `NaN`.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` for parsing and empty-tally
//! statistics, `trace` for transforms) and installs no subscriber.

pub mod error;
pub mod eval;

pub use error::{Result, TallyError};
pub use eval::classification::{
    confusion_matrix, Average, ConfidenceInterval, ConfidenceLevel, EvaluationSummary,
    FormatOptions, LabelMetrics, Tally,
};
