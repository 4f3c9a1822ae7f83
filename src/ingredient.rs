//! # Ingredient Data Model
//!
//! This module defines the structured ingredient record produced by the
//! parser and the canonical display formatting for ingredient counts.
//!
//! ## Core Concepts
//!
//! - **Ingredient**: a food item with an optional numeric count and a
//!   canonical (possibly empty) unit string
//! - **Count formatting**: whole counts render as integers, common fractions
//!   render as mixed-number text ("1 1/2"), everything else as a decimal
//!
//! ## Usage
//!
//! ```rust
//! use souschef::ingredient::{format_count, Ingredient};
//!
//! let flour = Ingredient::new(Some(1.5), "cup", "flour");
//! assert_eq!(flour.to_string(), "1 1/2 cup flour");
//! assert_eq!(format_count(Some(0.75)), "3/4");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest denominator considered when rendering a count as a fraction.
const MAX_DENOMINATOR: u32 = 10;

/// A structured ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Parsed quantity; `None` when the line carried no usable number.
    pub count: Option<f64>,

    /// Canonical unit string; empty when no unit was recognized.
    pub unit: String,

    /// Freeform ingredient name.
    pub name: String,
}

impl Ingredient {
    /// Create an ingredient record.
    pub fn new(count: Option<f64>, unit: &str, name: &str) -> Self {
        Self {
            count,
            unit: unit.to_string(),
            name: name.to_string(),
        }
    }
}

/// Render a count in its canonical display form.
///
/// `None` renders as the empty string. Whole values render as integers.
/// Fractional values render as `whole num/den` text when a denominator of
/// at most 10 reproduces the value within a 2-decimal tolerance ("1 1/2",
/// "3/4"); otherwise the value rounded to 2 decimals is shown as-is.
pub fn format_count(count: Option<f64>) -> String {
    let Some(value) = count else {
        return String::new();
    };
    let rounded = (value * 100.0).round() / 100.0;
    if rounded < 0.0 {
        return format!("{rounded}");
    }

    let whole = rounded.trunc() as i64;
    let fraction = rounded - rounded.trunc();
    if fraction.abs() < 1e-9 {
        return whole.to_string();
    }

    for denominator in 2..=MAX_DENOMINATOR {
        let numerator = (fraction * f64::from(denominator)).round();
        if numerator < 1.0 || numerator >= f64::from(denominator) {
            continue;
        }
        if (fraction - numerator / f64::from(denominator)).abs() < 0.005 {
            let numerator = numerator as i64;
            return if whole > 0 {
                format!("{whole} {numerator}/{denominator}")
            } else {
                format!("{numerator}/{denominator}")
            };
        }
    }

    format!("{rounded}")
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = format_count(self.count);
        if !count.is_empty() {
            write!(f, "{count} ")?;
        }
        if !self.unit.is_empty() {
            write!(f, "{} ", self.unit)?;
        }
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_none_is_empty() {
        assert_eq!(format_count(None), "");
    }

    #[test]
    fn test_format_count_whole_numbers() {
        assert_eq!(format_count(Some(2.0)), "2");
        assert_eq!(format_count(Some(4.0)), "4");
        assert_eq!(format_count(Some(0.0)), "0");
    }

    #[test]
    fn test_format_count_common_fractions() {
        assert_eq!(format_count(Some(0.5)), "1/2");
        assert_eq!(format_count(Some(0.75)), "3/4");
        assert_eq!(format_count(Some(1.5)), "1 1/2");
        assert_eq!(format_count(Some(2.25)), "2 1/4");
    }

    #[test]
    fn test_format_count_thirds_survive_float_noise() {
        assert_eq!(format_count(Some(1.0 / 3.0)), "1/3");
        assert_eq!(format_count(Some(8.0 / 3.0)), "2 2/3");
    }

    #[test]
    fn test_format_count_falls_back_to_decimal() {
        assert_eq!(format_count(Some(0.72)), "0.72");
        assert_eq!(format_count(Some(1.23)), "1.23");
    }

    #[test]
    fn test_format_count_rounds_to_two_decimals() {
        assert_eq!(format_count(Some(0.333)), "1/3");
        assert_eq!(format_count(Some(2.001)), "2");
    }

    #[test]
    fn test_display_full_record() {
        let ingredient = Ingredient::new(Some(1.5), "cup", "flour");
        assert_eq!(ingredient.to_string(), "1 1/2 cup flour");
    }

    #[test]
    fn test_display_without_unit() {
        let ingredient = Ingredient::new(Some(4.0), "", "eggs");
        assert_eq!(ingredient.to_string(), "4 eggs");
    }

    #[test]
    fn test_display_name_only() {
        let ingredient = Ingredient::new(None, "", "salt to taste");
        assert_eq!(ingredient.to_string(), "salt to taste");
    }
}
