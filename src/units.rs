//! # Unit Normalization Module
//!
//! This module holds the fixed table of measurement-unit aliases and the
//! quantity-token folding used by the ingredient parser. Alias spellings
//! ("tablespoons", "Tbs", "tbsps") are rewritten to one canonical short form
//! ("tbsp") so that downstream matching and display work on a single spelling.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Alias spelling -> canonical unit string. Canonical forms map to themselves
/// so a normalization pass also lowercases units that were already canonical.
const UNIT_ALIASES: &[(&str, &str)] = &[
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("tbsps", "tbsp"),
    ("tbsp", "tbsp"),
    ("tbs", "tbsp"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("tsps", "tsp"),
    ("tsp", "tsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("oz", "oz"),
    ("cups", "cup"),
    ("cup", "cup"),
    ("pounds", "pound"),
    ("pound", "pound"),
    ("lbs", "pound"),
    ("lb", "pound"),
    ("grams", "g"),
    ("gram", "g"),
    ("g", "g"),
    ("kilograms", "kg"),
    ("kilogram", "kg"),
    ("kgs", "kg"),
    ("kg", "kg"),
    ("milliliters", "ml"),
    ("millilitres", "ml"),
    ("ml", "ml"),
    ("liters", "l"),
    ("litres", "l"),
    ("l", "l"),
    ("pinches", "pinch"),
    ("pinch", "pinch"),
    ("slices", "slice"),
    ("slice", "slice"),
];

lazy_static! {
    /// One alternation over every alias, longest spelling first so that
    /// "tablespoons" wins over "tablespoon". Case-insensitive, whole words.
    static ref ALIAS_REGEX: Regex = {
        let mut aliases: Vec<&str> = UNIT_ALIASES.iter().map(|(alias, _)| *alias).collect();
        aliases.sort_by_key(|alias| std::cmp::Reverse(alias.len()));
        Regex::new(&format!(r"(?i)\b(?:{})\b", aliases.join("|")))
            .expect("unit alias pattern should be valid")
    };

    static ref ALIAS_LOOKUP: HashMap<&'static str, &'static str> =
        UNIT_ALIASES.iter().copied().collect();

    static ref CANONICAL_UNITS: HashSet<&'static str> =
        UNIT_ALIASES.iter().map(|(_, canonical)| *canonical).collect();

    /// A single whitespace-delimited token that reads as a quantity:
    /// a decimal number, an `a/b` fraction, a fraction glyph, or a whole
    /// number fused to a fraction glyph ("1½").
    static ref QUANTITY_TOKEN: Regex =
        Regex::new(r"^(?:\d+(?:\.\d+)?|\d+/\d+|\d*[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])$")
            .expect("quantity token pattern should be valid");
}

/// Rewrite every unit alias in `line` to its canonical form.
///
/// The rest of the line is left untouched, so ingredient names keep their
/// original casing.
pub fn normalize_units(line: &str) -> String {
    ALIAS_REGEX
        .replace_all(line, |caps: &regex::Captures<'_>| {
            let alias = caps[0].to_lowercase();
            match ALIAS_LOOKUP.get(alias.as_str()) {
                Some(canonical) => (*canonical).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Whether `token` is a canonical unit string.
///
/// Lines are expected to have passed through [`normalize_units`] first, but
/// the check is case-insensitive anyway.
pub fn is_unit(token: &str) -> bool {
    CANONICAL_UNITS.contains(token.to_lowercase().as_str())
}

/// Whether `token` looks like a quantity (it may still fail to fold, e.g.
/// a fraction with a zero denominator).
pub fn is_quantity_token(token: &str) -> bool {
    QUANTITY_TOKEN.is_match(token)
}

/// Fold one quantity token into a number.
///
/// Returns `None` for tokens that look numeric but cannot be folded, such
/// as "1/0".
pub fn parse_quantity_token(token: &str) -> Option<f64> {
    if !QUANTITY_TOKEN.is_match(token) {
        return None;
    }

    if let Some(last) = token.chars().next_back() {
        if let Some(fraction) = fraction_glyph_value(last) {
            let whole_part = &token[..token.len() - last.len_utf8()];
            let whole = if whole_part.is_empty() {
                0.0
            } else {
                whole_part.parse::<f64>().ok()?
            };
            return Some(whole + fraction);
        }
    }

    if let Some((numerator, denominator)) = token.split_once('/') {
        let numerator: f64 = numerator.parse().ok()?;
        let denominator: f64 = denominator.parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }

    token.parse().ok()
}

/// Numeric value of a unicode vulgar-fraction glyph.
fn fraction_glyph_value(glyph: char) -> Option<f64> {
    match glyph {
        '½' => Some(1.0 / 2.0),
        '⅓' => Some(1.0 / 3.0),
        '⅔' => Some(2.0 / 3.0),
        '¼' => Some(1.0 / 4.0),
        '¾' => Some(3.0 / 4.0),
        '⅕' => Some(1.0 / 5.0),
        '⅖' => Some(2.0 / 5.0),
        '⅗' => Some(3.0 / 5.0),
        '⅘' => Some(4.0 / 5.0),
        '⅙' => Some(1.0 / 6.0),
        '⅚' => Some(5.0 / 6.0),
        '⅛' => Some(1.0 / 8.0),
        '⅜' => Some(3.0 / 8.0),
        '⅝' => Some(5.0 / 8.0),
        '⅞' => Some(7.0 / 8.0),
        _ => None,
    }
}
