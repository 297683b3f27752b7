//! Labelled confusion matrix (tally of gold vs. predicted labels)

use std::collections::{BTreeMap, BTreeSet};

use super::options::FormatOptions;
use crate::error::Result;

/// Confusion matrix keyed by string labels
///
/// `cells[gold][predicted]` is the number of instances with gold label `gold`
/// that were predicted as `predicted`. Labels iterate in sorted order, so
/// every query and rendering is deterministic.
///
/// A cell recorded with a zero count is *present*: it keeps its labels in the
/// label sets and is carried through transforms. Counts are stored signed so
/// that [`Tally::negative_unit_matrix`] can be represented; everything built
/// through [`Tally::record_count`] stays non-negative.
#[derive(Clone, Debug, Default)]
pub struct Tally {
    /// The matrix data: cells[gold][predicted] = count
    pub(crate) cells: BTreeMap<String, BTreeMap<String, i64>>,
    /// Sum of all counts
    total: i64,
    /// Sum of diagonal counts
    correct: i64,
    /// Every label seen on the gold side
    gold_labels: BTreeSet<String>,
    /// Every label seen on the predicted side
    predicted_labels: BTreeSet<String>,
    /// Predicted labels in recording order, run-length encoded
    series: Vec<(String, u64)>,
    /// Formatting used by renderers and reports
    pub(crate) options: FormatOptions,
}

impl Tally {
    /// Create an empty tally with default formatting
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tally with the given formatting
    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Create from (gold, predicted) pairs, one instance each
    pub fn from_pairs<I, G, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (G, P)>,
        G: AsRef<str>,
        P: AsRef<str>,
    {
        let mut tally = Self::new();
        tally.extend(pairs);
        tally
    }

    /// Record one instance of `gold` predicted as `predicted`
    pub fn record(&mut self, gold: &str, predicted: &str) {
        self.record_count(gold, predicted, 1);
    }

    /// Record `count` instances of `gold` predicted as `predicted`
    ///
    /// A zero count still registers both labels and makes the cell present.
    pub fn record_count(&mut self, gold: &str, predicted: &str, count: u32) {
        self.accumulate(gold, predicted, i64::from(count));
    }

    /// Add a signed delta to a cell; used by transforms and the parser
    pub(crate) fn accumulate(&mut self, gold: &str, predicted: &str, delta: i64) {
        self.gold_labels.insert(gold.to_owned());
        self.predicted_labels.insert(predicted.to_owned());

        if delta > 0 {
            self.push_series(predicted, delta.unsigned_abs());
        }

        *self
            .cells
            .entry(gold.to_owned())
            .or_default()
            .entry(predicted.to_owned())
            .or_insert(0) += delta;

        self.total += delta;
        if gold == predicted {
            self.correct += delta;
        }
    }

    fn push_series(&mut self, predicted: &str, times: u64) {
        match self.series.last_mut() {
            Some((label, run)) if label == predicted => *run += times,
            _ => self.series.push((predicted.to_owned(), times)),
        }
    }

    /// Get the count at [gold][predicted]; 0 when the cell is absent
    pub fn cell(&self, gold: &str, predicted: &str) -> i64 {
        self.cells.get(gold).and_then(|row| row.get(predicted)).copied().unwrap_or(0)
    }

    /// Whether the cell was ever recorded (possibly with a zero count)
    pub fn contains(&self, gold: &str, predicted: &str) -> bool {
        self.cells.get(gold).is_some_and(|row| row.contains_key(predicted))
    }

    /// Iterate over present cells as (gold, predicted, count), sorted by gold then predicted
    pub fn iter_cells(&self) -> impl Iterator<Item = (&str, &str, i64)> + '_ {
        self.cells.iter().flat_map(|(gold, row)| {
            row.iter().map(move |(predicted, &count)| (gold.as_str(), predicted.as_str(), count))
        })
    }

    fn nonzero_cells(&self) -> impl Iterator<Item = (&str, &str, i64)> + '_ {
        self.iter_cells().filter(|&(_, _, count)| count != 0)
    }

    /// Sorted set of gold labels
    pub fn gold_labels(&self) -> &BTreeSet<String> {
        &self.gold_labels
    }

    /// Sorted set of predicted labels
    pub fn predicted_labels(&self) -> &BTreeSet<String> {
        &self.predicted_labels
    }

    /// Column order used by renderers: gold labels, then predicted-only labels
    pub fn column_labels(&self) -> Vec<&str> {
        self.gold_labels
            .iter()
            .chain(self.predicted_labels.difference(&self.gold_labels))
            .map(String::as_str)
            .collect()
    }

    /// Predicted labels in the order they were recorded, one per instance
    pub fn predicted_series(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.iter().flat_map(|(label, run)| {
            std::iter::repeat(label.as_str()).take(usize::try_from(*run).unwrap_or(usize::MAX))
        })
    }

    /// Total number of recorded instances
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Number of instances on the diagonal
    pub fn correct(&self) -> i64 {
        self.correct
    }

    /// Whether nothing has been counted yet
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Sum of row `label`; 0 for a label never recorded as gold
    pub fn row_sum(&self, label: &str) -> i64 {
        self.cells.get(label).map_or(0, |row| row.values().sum::<i64>())
    }

    /// Sum of column `label` across all gold rows; 0 when never predicted
    pub fn col_sum(&self, label: &str) -> i64 {
        self.cells.values().filter_map(|row| row.get(label)).sum()
    }

    /// True positives for a label
    pub fn true_positives(&self, label: &str) -> i64 {
        self.cell(label, label)
    }

    /// False positives for a label (predicted as label but wasn't)
    pub fn false_positives(&self, label: &str) -> i64 {
        self.col_sum(label) - self.true_positives(label)
    }

    /// False negatives for a label (was label but predicted differently)
    pub fn false_negatives(&self, label: &str) -> i64 {
        self.row_sum(label) - self.true_positives(label)
    }

    /// Support (total gold instances) for a label
    pub fn support(&self, label: &str) -> i64 {
        self.row_sum(label)
    }

    /// Formatting used by renderers and reports
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Replace the formatting options after validating them
    pub fn set_options(&mut self, options: FormatOptions) -> Result<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Set the number of decimal places used for fractional output (1..=100)
    pub fn set_decimal_places(&mut self, places: usize) -> Result<()> {
        self.options = self.options.with_decimal_places(places)?;
        Ok(())
    }

    /// Set the decimal separator used by the probabilistic table
    pub fn set_decimal_separator(&mut self, separator: char) {
        self.options = self.options.with_decimal_separator(separator);
    }
}

/// Two tallies are equal when every cell reads the same count.
///
/// Absent and zero-valued cells compare equal, so a parsed table (which is
/// zero-filled) equals the tally it was rendered from.
impl PartialEq for Tally {
    fn eq(&self, other: &Self) -> bool {
        self.nonzero_cells().eq(other.nonzero_cells())
    }
}

impl Eq for Tally {}

impl<G: AsRef<str>, P: AsRef<str>> Extend<(G, P)> for Tally {
    fn extend<I: IntoIterator<Item = (G, P)>>(&mut self, iter: I) {
        for (gold, predicted) in iter {
            self.record(gold.as_ref(), predicted.as_ref());
        }
    }
}

impl<G: AsRef<str>, P: AsRef<str>> FromIterator<(G, P)> for Tally {
    fn from_iter<I: IntoIterator<Item = (G, P)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
