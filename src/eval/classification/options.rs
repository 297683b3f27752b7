//! Formatting options carried by each tally

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, TallyError};

/// Smallest accepted number of decimal places.
pub const MIN_DECIMAL_PLACES: usize = 1;
/// Largest accepted number of decimal places.
pub const MAX_DECIMAL_PLACES: usize = 100;
/// Decimal places used when none are configured.
pub const DEFAULT_DECIMAL_PLACES: usize = 3;

/// How fractional values are printed by renderers and reports.
///
/// Options live on the tally instance; there is no process-wide formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Digits after the decimal separator (1..=100)
    pub decimal_places: usize,
    /// Separator used by the probabilistic table
    pub decimal_separator: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            decimal_separator: '.',
        }
    }
}

impl FormatOptions {
    /// Default options: three decimal places, `.` separator
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of decimal places, rejecting values outside 1..=100
    pub fn with_decimal_places(mut self, places: usize) -> Result<Self> {
        check_decimal_places(places)?;
        trace!(places, "decimal places set");
        self.decimal_places = places;
        Ok(self)
    }

    /// Set the decimal separator (e.g. `,` for continental notation)
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Re-check invariants, e.g. after deserializing from a host config file
    pub fn validate(&self) -> Result<()> {
        check_decimal_places(self.decimal_places)
    }

    /// Format `value` with the configured precision and `.` separator
    pub(crate) fn fixed(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.decimal_places)
    }

    /// Format `value` with the configured precision and separator
    pub(crate) fn localized(&self, value: f64) -> String {
        let text = self.fixed(value);
        if self.decimal_separator == '.' {
            text
        } else {
            text.replacen('.', &self.decimal_separator.to_string(), 1)
        }
    }
}

fn check_decimal_places(places: usize) -> Result<()> {
    if (MIN_DECIMAL_PLACES..=MAX_DECIMAL_PLACES).contains(&places) {
        Ok(())
    } else {
        Err(TallyError::InvalidDecimalPlaces { value: places })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = FormatOptions::new();
        assert_eq!(opts.decimal_places, 3);
        assert_eq!(opts.decimal_separator, '.');
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_decimal_places_bounds() {
        assert!(FormatOptions::new().with_decimal_places(1).is_ok());
        assert!(FormatOptions::new().with_decimal_places(100).is_ok());
        assert!(matches!(
            FormatOptions::new().with_decimal_places(0),
            Err(TallyError::InvalidDecimalPlaces { value: 0 })
        ));
        assert!(matches!(
            FormatOptions::new().with_decimal_places(101),
            Err(TallyError::InvalidDecimalPlaces { value: 101 })
        ));
    }

    #[test]
    fn test_fixed_rounds_exact_ties_to_even() {
        let opts = FormatOptions::default();
        // 1/16 and 3/16 are exact binary fractions
        assert_eq!(opts.fixed(0.0625), "0.062");
        assert_eq!(opts.fixed(0.1875), "0.188");
        assert_eq!(opts.fixed(0.0626), "0.063");
    }

    #[test]
    fn test_localized_separator() {
        let opts = FormatOptions::new().with_decimal_separator(',');
        assert_eq!(opts.localized(0.5), "0,500");
        assert_eq!(opts.fixed(0.5), "0.500");
    }

    #[test]
    fn test_serde_roundtrip_and_partial_config() {
        let opts = FormatOptions::new().with_decimal_places(5).unwrap();
        let json = serde_json::to_string(&opts).unwrap();
        let back: FormatOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, back);

        let partial: FormatOptions = serde_json::from_str(r#"{"decimal_places": 2}"#).unwrap();
        assert_eq!(partial.decimal_places, 2);
        assert_eq!(partial.decimal_separator, '.');
    }

    #[test]
    fn test_validate_catches_deserialized_out_of_range() {
        let opts: FormatOptions = serde_json::from_str(r#"{"decimal_places": 0}"#).unwrap();
        assert!(opts.validate().is_err());
    }
}
