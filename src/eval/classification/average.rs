//! Averaging strategies for multi-class metrics

use serde::{Deserialize, Serialize};

/// Averaging strategy for multi-class metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Average {
    /// Calculate metrics for each gold label, return unweighted mean
    Macro,
    /// Calculate metrics globally by pooling TP and row/column sums over gold labels
    Micro,
}
