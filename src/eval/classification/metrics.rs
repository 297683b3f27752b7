//! Per-label and aggregated classification metrics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::average::Average;
use super::confusion::Tally;

/// Precision, recall and F1 for one gold label
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelMetrics {
    /// Gold label
    pub label: String,
    /// TP / column sum
    pub precision: f64,
    /// TP / row sum
    pub recall: f64,
    /// Harmonic mean of precision and recall
    pub f_measure: f64,
    /// Number of gold instances
    pub support: i64,
}

/// `num / den`, or 0 when the denominator is not positive
fn ratio(num: i64, den: i64) -> f64 {
    if den > 0 {
        num as f64 / den as f64
    } else {
        0.0
    }
}

/// F-beta from precision and recall; 0 when both are 0
pub fn f_beta(precision: f64, recall: f64, beta: f64) -> f64 {
    if precision + recall > 0.0 {
        let b2 = beta * beta;
        (1.0 + b2) * (precision * recall) / (b2 * precision + recall)
    } else {
        0.0
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        0.0
    } else {
        values.sum::<f64>() / n as f64
    }
}

impl Tally {
    /// Fraction of instances on the diagonal
    ///
    /// Returns NaN for an empty tally; guard with [`Tally::is_empty`] first.
    pub fn accuracy(&self) -> f64 {
        if self.is_empty() {
            debug!("accuracy requested on an empty tally");
        }
        self.correct() as f64 / self.total() as f64
    }

    /// TP / column sum for `label`; 0 when nothing was predicted as `label`
    pub fn precision(&self, label: &str) -> f64 {
        ratio(self.true_positives(label), self.col_sum(label))
    }

    /// TP / row sum for `label`; 0 when `label` has no gold instances
    pub fn recall(&self, label: &str) -> f64 {
        ratio(self.true_positives(label), self.row_sum(label))
    }

    /// F1 for `label`
    pub fn f_measure(&self, label: &str) -> f64 {
        self.f_measure_beta(label, 1.0)
    }

    /// F-beta for `label`; beta > 1 favours recall, beta < 1 favours precision
    pub fn f_measure_beta(&self, label: &str, beta: f64) -> f64 {
        f_beta(self.precision(label), self.recall(label), beta)
    }

    /// Precision for every gold label
    pub fn precision_by_label(&self) -> BTreeMap<String, f64> {
        self.gold_labels().iter().map(|l| (l.clone(), self.precision(l))).collect()
    }

    /// Recall for every gold label
    pub fn recall_by_label(&self) -> BTreeMap<String, f64> {
        self.gold_labels().iter().map(|l| (l.clone(), self.recall(l))).collect()
    }

    /// F1 for every gold label
    pub fn f_measure_by_label(&self) -> BTreeMap<String, f64> {
        self.f_measure_beta_by_label(1.0)
    }

    /// F-beta for every gold label
    pub fn f_measure_beta_by_label(&self, beta: f64) -> BTreeMap<String, f64> {
        self.gold_labels().iter().map(|l| (l.clone(), self.f_measure_beta(l, beta))).collect()
    }

    /// Precision, recall, F1 and support for every gold label
    pub fn label_metrics(&self) -> Vec<LabelMetrics> {
        self.gold_labels()
            .iter()
            .map(|label| {
                let precision = self.precision(label);
                let recall = self.recall(label);
                LabelMetrics {
                    label: label.clone(),
                    precision,
                    recall,
                    f_measure: f_beta(precision, recall, 1.0),
                    support: self.support(label),
                }
            })
            .collect()
    }

    /// Unweighted mean of per-label F1 over gold labels
    pub fn macro_f_measure(&self) -> f64 {
        self.macro_f_measure_beta(1.0)
    }

    /// Unweighted mean of per-label F-beta over gold labels
    pub fn macro_f_measure_beta(&self, beta: f64) -> f64 {
        mean(self.gold_labels().iter().map(|l| self.f_measure_beta(l, beta)))
    }

    /// Unweighted mean of per-label precision over gold labels
    pub fn average_precision(&self) -> f64 {
        mean(self.gold_labels().iter().map(|l| self.precision(l)))
    }

    /// Unweighted mean of per-label recall over gold labels
    pub fn average_recall(&self) -> f64 {
        mean(self.gold_labels().iter().map(|l| self.recall(l)))
    }

    /// Pooled (TP, TP+FP, TP+FN) over gold labels
    fn pooled_counts(&self) -> (i64, i64, i64) {
        self.gold_labels().iter().fold((0, 0, 0), |(tp, col, row), label| {
            (tp + self.true_positives(label), col + self.col_sum(label), row + self.row_sum(label))
        })
    }

    /// F1 from precision and recall pooled over all gold labels
    ///
    /// Equals accuracy whenever every predicted label is also a gold label.
    pub fn micro_f_measure(&self) -> f64 {
        self.f_measure_avg(Average::Micro)
    }

    /// Averaged precision
    pub fn precision_avg(&self, average: Average) -> f64 {
        match average {
            Average::Macro => self.average_precision(),
            Average::Micro => {
                let (tp, col, _) = self.pooled_counts();
                ratio(tp, col)
            }
        }
    }

    /// Averaged recall
    pub fn recall_avg(&self, average: Average) -> f64 {
        match average {
            Average::Macro => self.average_recall(),
            Average::Micro => {
                let (tp, _, row) = self.pooled_counts();
                ratio(tp, row)
            }
        }
    }

    /// Averaged F1
    pub fn f_measure_avg(&self, average: Average) -> f64 {
        match average {
            Average::Macro => self.macro_f_measure(),
            Average::Micro => {
                f_beta(self.precision_avg(Average::Micro), self.recall_avg(Average::Micro), 1.0)
            }
        }
    }

    /// Cohen's Kappa: agreement corrected for chance under the label marginals
    ///
    /// NaN for an empty tally; 0 when chance agreement is already perfect.
    pub fn cohens_kappa(&self) -> f64 {
        let p = self.accuracy();
        let total = self.total() as f64;

        let pe = self
            .gold_labels()
            .iter()
            .map(|label| (self.row_sum(label) as f64 * self.col_sum(label) as f64) / total)
            .sum::<f64>()
            / total;

        if 1.0 - pe == 0.0 {
            0.0
        } else {
            (p - pe) / (1.0 - pe)
        }
    }
}
