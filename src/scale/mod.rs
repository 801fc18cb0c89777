mod numeral;

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::model::{ParsedAmount, StoredIngredient};

/// Unit vocabularies, most specific first.
static UNIT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Spoon sizes
        Regex::new(r"(?i)^([\d½¼¾,./]+)\s*(tatlı\s*kaşığı|yemek\s*kaşığı|çay\s*kaşığı|kahve\s*kaşığı)$")
            .unwrap(),
        // Cup sizes
        Regex::new(r"(?i)^([\d½¼¾,./]+)\s*(su\s*bardağı|çay\s*bardağı|bardak)$").unwrap(),
        // Metric and count units
        Regex::new(
            r"(?i)^([\d½¼¾,./]+)\s*(g|gr|kg|ml|lt|litre|cl|adet|paket|demet|dilim|tutam|diş|dal|yaprak|avuç|porsiyon|parça|baş|tane)$",
        )
        .unwrap(),
        // Bare number, no unit
        Regex::new(r"^([\d½¼¾,./]+)$").unwrap(),
    ]
});

/// "yarım"/"çeyrek" with an optional countable unit; matches as a prefix.
static HALF_QUARTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(yarım|çeyrek)\s+(paket|bardak|limon|demet|baş|porsiyon)?").unwrap()
});

/// Splits an amount string into a numeric value and a unit.
///
/// "250 g" → value 250, unit "g"; "2 yemek kaşığı" → value 2, unit
/// "yemek kaşığı". Returns `None` for empty input and for strings with no
/// recognizable positive quantity.
pub fn parse_amount(amount: &str) -> Option<ParsedAmount> {
    let original = amount.trim();
    if original.is_empty() {
        return None;
    }

    if let Some(caps) = HALF_QUARTER.captures(original) {
        let word = caps[1].to_lowercase();
        let value = if word == "yarım" || word == "yarim" {
            0.5
        } else {
            0.25
        };
        let unit = caps
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        return Some(ParsedAmount {
            value,
            unit,
            original: original.to_string(),
        });
    }

    for pattern in UNIT_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(original) {
            let value = numeral::parse_fraction(&caps[1]);
            let unit = caps
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            // Zero means the numeral did not resolve; keep trying
            if value > 0.0 {
                return Some(ParsedAmount {
                    value,
                    unit,
                    original: original.to_string(),
                });
            }
        }
    }

    None
}

/// Scales an amount string by the given factor, re-rendering the quantity
/// while keeping the unit.
///
/// A factor of exactly 1 returns the input verbatim, preserving its original
/// formatting. Amounts that cannot be parsed are also returned unchanged;
/// this function never fabricates a quantity.
pub fn scale_amount(original_amount: &str, scale_factor: f64) -> String {
    if original_amount.is_empty() || scale_factor == 1.0 {
        return original_amount.to_string();
    }

    let Some(parsed) = parse_amount(original_amount) else {
        debug!("could not parse amount {original_amount:?}, leaving it unscaled");
        return original_amount.to_string();
    };

    let scaled = parsed.value * scale_factor;
    let formatted = numeral::format_number(scaled);

    if parsed.unit.is_empty() {
        formatted
    } else {
        format!("{} {}", formatted, parsed.unit)
    }
}

/// Ratio of the desired serving count to the recipe's original serving count.
/// A non-positive original count yields 1 so callers never divide by zero.
pub fn get_scale_factor(current_servings: f64, original_servings: f64) -> f64 {
    if original_servings <= 0.0 {
        return 1.0;
    }
    current_servings / original_servings
}

/// Rescales stored ingredient amounts for a new serving count.
///
/// Presentation-time only: callers display the result and keep persisting the
/// original amounts.
pub fn scale_ingredients(
    ingredients: &[StoredIngredient],
    current_servings: f64,
    original_servings: f64,
) -> Vec<StoredIngredient> {
    let factor = get_scale_factor(current_servings, original_servings);
    ingredients
        .iter()
        .map(|ingredient| StoredIngredient {
            name: ingredient.name.clone(),
            amount: scale_amount(&ingredient.amount, factor),
            unit: ingredient.unit.clone(),
        })
        .collect()
}
