//! Reading a rendered count table back into a tally

use std::str::FromStr;

use tracing::debug;

use super::confusion::Tally;
use super::render::CORNER;
use crate::error::{Result, TallyError};

impl Tally {
    /// Parse a whitespace-delimited table as produced by [`Tally::render`]
    ///
    /// The first line lists the column (predicted) labels; a leading corner
    /// marker is skipped. Every following line is a gold label followed by
    /// 32-bit integer counts, matched to header labels by position. Trailing blank
    /// lines are ignored.
    ///
    /// # Errors
    ///
    /// [`TallyError::Format`] on an empty header, a blank row,
    /// a non-integer or out-of-range cell, or a row with more cells than
    /// header labels.
    pub fn parse(text: &str) -> Result<Tally> {
        parse_table(text).inspect_err(|e| debug!(error = %e, "tally table rejected"))
    }
}

fn parse_table(text: &str) -> Result<Tally> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let Some((header, rows)) = lines.split_first() else {
        return Err(TallyError::format(1, "missing header"));
    };

    let mut labels: Vec<&str> = header.split_whitespace().collect();
    if labels.is_empty() {
        return Err(TallyError::format(1, "header has no labels"));
    }
    // a rendered empty tally is just the corner marker
    if labels[0] == CORNER {
        labels.remove(0);
    }

    let mut tally = Tally::new();

    for (idx, line) in rows.iter().enumerate() {
        let line_no = idx + 2;
        let mut tokens = line.split_whitespace();

        let gold = tokens.next().ok_or_else(|| TallyError::format(line_no, "empty row"))?;

        for (col, token) in tokens.enumerate() {
            let predicted = labels.get(col).ok_or_else(|| {
                TallyError::format(
                    line_no,
                    format!("row '{gold}' has more cells than the {} header labels", labels.len()),
                )
            })?;
            // cells hold 32-bit counts, so row and column sums cannot overflow
            let count =
                token.parse::<i32>().map_err(|e| TallyError::invalid_cell(line_no, token, e))?;

            tally.accumulate(gold, predicted, i64::from(count));
        }
    }

    debug!(rows = rows.len(), columns = labels.len(), total = tally.total(), "parsed tally table");
    Ok(tally)
}

impl FromStr for Tally {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        Tally::parse(s)
    }
}
