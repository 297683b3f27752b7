//! Normal-approximation confidence intervals for accuracy and macro F-measure
//!
//! half-width = z * sqrt(stat * (1 - stat) / total)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::confusion::Tally;

/// z for a two-sided 95% interval
pub const Z_95: f64 = 1.96;
/// z for a two-sided 90% interval on accuracy
pub const Z_90_ACCURACY: f64 = 1.645;
/// z for a two-sided 90% interval on macro F-measure
pub const Z_90_MACRO_F: f64 = 1.66;

/// Confidence level of an interval
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// 90%
    Ninety,
    /// 95%
    NinetyFive,
}

impl ConfidenceLevel {
    /// z-value used for accuracy intervals
    pub fn accuracy_z(self) -> f64 {
        match self {
            Self::Ninety => Z_90_ACCURACY,
            Self::NinetyFive => Z_95,
        }
    }

    /// z-value used for macro F-measure intervals
    pub fn macro_f_z(self) -> f64 {
        match self {
            Self::Ninety => Z_90_MACRO_F,
            Self::NinetyFive => Z_95,
        }
    }
}

/// Point estimate with a symmetric half-width
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// The statistic itself
    pub estimate: f64,
    /// Half of the interval width
    pub half_width: f64,
}

impl ConfidenceInterval {
    /// Interval around `estimate` over `n` instances at z-value `z`
    pub fn normal(estimate: f64, n: i64, z: f64) -> Self {
        let half_width = z * (estimate * (1.0 - estimate) / n as f64).sqrt();
        Self { estimate, half_width }
    }

    /// Lower bound
    pub fn low(&self) -> f64 {
        self.estimate - self.half_width
    }

    /// Upper bound
    pub fn high(&self) -> f64 {
        self.estimate + self.half_width
    }

    /// Whether `value` lies within the bounds (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        (self.low()..=self.high()).contains(&value)
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(4);
        write!(
            f,
            "{:.prec$} [{:.prec$}, {:.prec$}]",
            self.estimate,
            self.low(),
            self.high()
        )
    }
}

impl Tally {
    /// Confidence interval on accuracy (NaN bounds for an empty tally)
    pub fn accuracy_interval(&self, level: ConfidenceLevel) -> ConfidenceInterval {
        ConfidenceInterval::normal(self.accuracy(), self.total(), level.accuracy_z())
    }

    /// Confidence interval on macro F1 (NaN bounds for an empty tally)
    pub fn macro_f_interval(&self, level: ConfidenceLevel) -> ConfidenceInterval {
        ConfidenceInterval::normal(self.macro_f_measure(), self.total(), level.macro_f_z())
    }
}
