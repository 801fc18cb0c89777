/// Vulgar fraction glyphs and their numeric values, in match priority order.
pub(crate) const FRACTION_GLYPHS: [(char, f64); 5] = [
    ('½', 0.5),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅓', 0.333),
    ('⅔', 0.666),
];

/// Turkish fraction words, matched by lowercase prefix. Prefix matching
/// over-matches longer words sharing the prefix ("yarımşar" reads as
/// "yarım"); kept to stay compatible with how stored amounts were written.
const FRACTION_WORDS: [(&str, f64); 4] = [
    ("yarım", 0.5),
    ("yarim", 0.5),
    ("çeyrek", 0.25),
    ("ceyrek", 0.25),
];

/// Resolves a localized numeral into a number.
///
/// Handles vulgar fraction glyphs with an optional integer prefix
/// ("1½" → 1.5), Turkish fraction words, "a/b" slash fractions and plain
/// numbers with either "." or "," as the decimal separator. Returns 0.0 when
/// nothing parses; callers treat 0 as "no valid quantity".
pub(crate) fn parse_fraction(input: &str) -> f64 {
    let lower = input.trim().to_lowercase();

    for (glyph, value) in FRACTION_GLYPHS {
        if lower.contains(glyph) {
            let number_part = lower.replace(glyph, "");
            let number_part = number_part.trim();
            if !number_part.is_empty() {
                if let Ok(number) = number_part.replace(',', ".").parse::<f64>() {
                    return number + value;
                }
            }
            return value;
        }
    }

    for (word, value) in FRACTION_WORDS {
        if lower.starts_with(word) {
            return value;
        }
    }

    if lower.contains('/') {
        let parts: Vec<&str> = lower.split('/').collect();
        if parts.len() == 2 {
            let numerator = parts[0].replace(',', ".").parse::<f64>();
            let denominator = parts[1].replace(',', ".").parse::<f64>();
            if let (Ok(numerator), Ok(denominator)) = (numerator, denominator) {
                if denominator != 0.0 {
                    return numerator / denominator;
                }
            }
        }
    }

    lower.replace(',', ".").parse().unwrap_or(0.0)
}

/// Formats a scaled value, preferring common fraction glyphs: 0.5 → "½",
/// 1.5 → "1½", 2.33 → "2⅓". Values within 0.05 of a known fraction use its
/// glyph; anything else renders with two decimals, trailing zeros stripped.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }

    let int_part = value.floor() as i64;
    let dec_part = value - value.floor();

    for (glyph, fraction) in FRACTION_GLYPHS {
        if (dec_part - fraction).abs() < 0.05 {
            return if int_part > 0 {
                format!("{int_part}{glyph}")
            } else {
                glyph.to_string()
            };
        }
    }

    let formatted = format!("{value:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
