//! Human-readable and structured reports

use serde::{Deserialize, Serialize};

use super::average::Average;
use super::confusion::Tally;
use super::interval::{ConfidenceInterval, ConfidenceLevel};

/// Compute a tally from parallel slices of gold and predicted labels
///
/// # Panics
/// Panics if the slices differ in length.
///
/// # Example
/// ```
/// use confusion_tally::confusion_matrix;
///
/// let gold = ["a", "b", "a"];
/// let pred = ["a", "a", "a"];
/// let cm = confusion_matrix(&gold, &pred);
///
/// assert_eq!(cm.cell("a", "a"), 2);
/// assert_eq!(cm.cell("b", "a"), 1);
/// ```
pub fn confusion_matrix<S: AsRef<str>>(gold: &[S], predicted: &[S]) -> Tally {
    assert_eq!(gold.len(), predicted.len(), "Gold and predicted labels must have same length");
    Tally::from_pairs(gold.iter().zip(predicted))
}

/// Headline statistics of a tally in one serializable record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    /// Number of instances
    pub total: i64,
    /// Accuracy
    pub accuracy: f64,
    /// 95% interval on accuracy
    pub accuracy_ci95: ConfidenceInterval,
    /// Macro F1
    pub macro_f_measure: f64,
    /// 95% interval on macro F1
    pub macro_f_ci95: ConfidenceInterval,
    /// Micro F1
    pub micro_f_measure: f64,
    /// Cohen's Kappa
    pub cohens_kappa: f64,
}

impl Tally {
    /// Headline statistics; fields are NaN where the tally is empty
    pub fn evaluate(&self) -> EvaluationSummary {
        let accuracy_ci95 = self.accuracy_interval(ConfidenceLevel::NinetyFive);
        let macro_f_ci95 = self.macro_f_interval(ConfidenceLevel::NinetyFive);
        EvaluationSummary {
            total: self.total(),
            accuracy: accuracy_ci95.estimate,
            accuracy_ci95,
            macro_f_measure: macro_f_ci95.estimate,
            macro_f_ci95,
            micro_f_measure: self.micro_f_measure(),
            cohens_kappa: self.cohens_kappa(),
        }
    }

    /// One-line summary: macro F, its 95% half-width and micro F
    pub fn summary(&self) -> String {
        let o = &self.options;
        format!(
            "Macro F-measure: {}, (CI at .95: {}), micro F-measure (acc): {}",
            o.fixed(self.macro_f_measure()),
            o.fixed(self.macro_f_interval(ConfidenceLevel::NinetyFive).half_width),
            o.fixed(self.micro_f_measure())
        )
    }

    /// `P/R/Fm: ` followed by `label=p/r/f ` for every gold label
    pub fn label_report(&self) -> String {
        let o = &self.options;
        let mut out = String::from("P/R/Fm: ");
        for m in self.label_metrics() {
            out.push_str(&format!(
                "{}={}/{}/{} ",
                m.label,
                o.fixed(m.precision),
                o.fixed(m.recall),
                o.fixed(m.f_measure)
            ));
        }
        out
    }

    /// Gold vs. predicted label distribution, absolute and in percent
    pub fn class_distribution(&self) -> String {
        let total = self.total() as f64;
        let mut out = String::from("Gold data distribution\t\tPredicted data distribution\n");
        for label in self.gold_labels() {
            let row = self.row_sum(label);
            let col = self.col_sum(label);
            out.push_str(&format!(
                "{label}\t{row}\t{:.1}%\t{col}\t{:.1}%\n",
                row as f64 / total * 100.0,
                col as f64 / total * 100.0
            ));
        }
        out.push_str(&format!("Sum\t{}", self.total()));
        out
    }

    /// sklearn-style per-label report with macro and micro averages
    pub fn classification_report(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!(
            "{:>12} {:>10} {:>10} {:>10} {:>10}\n",
            "", "precision", "recall", "f1-score", "support"
        ));
        report.push_str(&"-".repeat(54));
        report.push('\n');

        for m in self.label_metrics() {
            report.push_str(&format!(
                "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
                m.label, m.precision, m.recall, m.f_measure, m.support
            ));
        }

        report.push_str(&"-".repeat(54));
        report.push('\n');

        for (name, average) in [("macro avg", Average::Macro), ("micro avg", Average::Micro)] {
            report.push_str(&format!(
                "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
                name,
                self.precision_avg(average),
                self.recall_avg(average),
                self.f_measure_avg(average),
                self.total()
            ));
        }

        report.push_str(&format!("\nAccuracy: {:.4}\n", self.accuracy()));
        report.push_str(&format!("Cohen's Kappa: {:.4}\n", self.cohens_kappa()));

        report
    }
}
