//! Matrix transforms producing new tallies

use tracing::trace;

use super::confusion::Tally;

impl Tally {
    /// Cell-wise sum of any number of tallies
    ///
    /// The result takes its formatting from the first input. Inputs are left
    /// untouched.
    pub fn cumulative<'a, I>(tallies: I) -> Tally
    where
        I: IntoIterator<Item = &'a Tally>,
    {
        let mut tallies = tallies.into_iter().peekable();
        let mut result =
            tallies.peek().map_or_else(Tally::new, |first| Tally::with_options(first.options));

        let mut inputs = 0usize;
        for tally in tallies {
            for (gold, predicted, count) in tally.iter_cells() {
                result.accumulate(gold, predicted, count);
            }
            inputs += 1;
        }

        trace!(inputs, total = result.total(), "cumulative tally");
        result
    }

    /// Gold and predicted swapped for every present cell
    pub fn transpose(&self) -> Tally {
        let mut result = Tally::with_options(self.options);
        for (gold, predicted, count) in self.iter_cells() {
            result.accumulate(predicted, gold, count);
        }
        result
    }

    /// Diagonal cells negated, off-diagonal present cells kept as zeros
    ///
    /// Written `-I∘C`; the zeros keep the label cross product of the source.
    pub fn negative_unit_matrix(&self) -> Tally {
        let mut result = Tally::with_options(self.options);
        for (gold, predicted, count) in self.iter_cells() {
            let value = if gold == predicted { -count } else { 0 };
            result.accumulate(gold, predicted, value);
        }
        result
    }

    /// `C + Cᵗ - I∘C`: agreement matrix that ignores which side was gold
    ///
    /// See Cinková, Holub and Kríž (2012), "Managing Uncertainty in Semantic
    /// Tagging", EACL.
    pub fn symmetric(&self) -> Tally {
        trace!(labels = self.gold_labels().len(), "symmetrizing tally");
        Tally::cumulative([self, &self.transpose(), &self.negative_unit_matrix()])
    }
}
