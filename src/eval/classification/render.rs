//! Text renderings of a tally: aligned table, row-normalized table, LaTeX rows

use std::fmt;

use super::confusion::Tally;

/// Top-left cell of every rendered table
pub const CORNER: &str = "↓gold\\pred→";

impl Tally {
    /// Header row followed by one row per gold label; `value` fills each cell
    fn grid(&self, value: impl Fn(&str, &str) -> String) -> Vec<Vec<String>> {
        let columns = self.column_labels();

        let mut header = Vec::with_capacity(columns.len() + 1);
        header.push(CORNER.to_owned());
        header.extend(columns.iter().map(|&c| c.to_owned()));

        let mut table = Vec::with_capacity(self.gold_labels().len() + 1);
        table.push(header);

        for gold in self.gold_labels() {
            let mut row = Vec::with_capacity(columns.len() + 1);
            row.push(gold.clone());
            row.extend(columns.iter().map(|predicted| value(gold, predicted)));
            table.push(row);
        }

        table
    }

    /// Rows of the plain count table, header first
    pub fn table(&self) -> Vec<Vec<String>> {
        self.grid(|gold, predicted| self.cell(gold, predicted).to_string())
    }

    /// Rows of the row-normalized table, header first
    ///
    /// Each cell is divided by its row sum; a zero-sum row renders as zeros.
    pub fn probabilistic_table(&self) -> Vec<Vec<String>> {
        self.grid(|gold, predicted| {
            let row_sum = self.row_sum(gold);
            let value = if row_sum == 0 {
                0.0
            } else {
                self.cell(gold, predicted) as f64 / row_sum as f64
            };
            self.options.localized(value)
        })
    }

    /// Fixed-width table of counts
    ///
    /// Every value is right-justified in a column one character wider than the
    /// longest entry in the whole table.
    pub fn render(&self) -> String {
        align(&self.table())
    }

    /// Fixed-width table where every row sums to one
    pub fn render_probabilistic(&self) -> String {
        align(&self.probabilistic_table())
    }

    /// Count table as LaTeX `tabular` rows
    pub fn render_latex(&self) -> String {
        let table = self.table();
        let mut out = String::new();

        for (i, row) in table.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                if (i == 0 || j == 0) && !value.is_empty() {
                    out.push_str("\\textbf{");
                    out.push_str(value);
                    out.push_str("} ");
                } else {
                    out.push_str(value);
                    out.push(' ');
                }

                if j + 1 < row.len() {
                    out.push_str("& ");
                }
            }
            out.push_str("\\\\\n");
        }

        out
    }
}

fn align(table: &[Vec<String>]) -> String {
    let width = table.iter().flatten().map(|v| v.chars().count()).max().unwrap_or(0) + 1;

    let mut out = String::new();
    for row in table {
        for value in row {
            out.push_str(&format!("{value:>width$}"));
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
