//! # Ingredient Parser
//!
//! This module turns raw ingredient lines into structured [`Ingredient`]
//! records. It is a pure function of its input: no IO, no failure mode, one
//! record per line.
//!
//! ## Algorithm
//!
//! 1. Rewrite unit aliases to canonical forms ([`crate::units`])
//! 2. Tokenize on whitespace
//! 3. Fold the leading run of quantity tokens (decimals, `a/b` fractions,
//!    fraction glyphs, mixed numbers like "1 1/2") into a single count by
//!    summing the parts
//! 4. If the token after the quantity is a known unit, it becomes the unit
//!    and the rest is the name; otherwise the count stands alone
//! 5. Lines with no usable quantity keep their whole text as the name with
//!    a `None` count
//!
//! A quantity that looks numeric but cannot be folded ("1/0") degrades the
//! line to a `None` count rather than failing the parse.
//!
//! ## Usage
//!
//! ```rust
//! use souschef::ingredient_parser::parse_ingredient_line;
//!
//! let ingredient = parse_ingredient_line("1 1/2 cups flour");
//! assert_eq!(ingredient.count, Some(1.5));
//! assert_eq!(ingredient.unit, "cup");
//! assert_eq!(ingredient.name, "flour");
//! ```

use crate::ingredient::Ingredient;
use crate::units;

/// Parse a batch of raw ingredient lines, one record per line, in order.
pub fn parse_ingredient_lines(lines: &[String]) -> Vec<Ingredient> {
    lines.iter().map(|line| parse_ingredient_line(line)).collect()
}

/// Parse a single raw ingredient line.
pub fn parse_ingredient_line(line: &str) -> Ingredient {
    let normalized = units::normalize_units(line.trim());
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let quantity_len = tokens
        .iter()
        .take_while(|token| units::is_quantity_token(token))
        .count();
    if quantity_len == 0 {
        return Ingredient::new(None, "", &tokens.join(" "));
    }

    let mut count = 0.0;
    for token in &tokens[..quantity_len] {
        match units::parse_quantity_token(token) {
            Some(value) => count += value,
            // malformed quantity ("1/0"): keep the line, drop the count
            None => return Ingredient::new(None, "", &tokens.join(" ")),
        }
    }

    match tokens.get(quantity_len) {
        Some(token) if units::is_unit(token) => Ingredient::new(
            Some(count),
            token,
            &tokens[quantity_len + 1..].join(" "),
        ),
        _ => Ingredient::new(Some(count), "", &tokens[quantity_len..].join(" ")),
    }
}
