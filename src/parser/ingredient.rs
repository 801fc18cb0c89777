use std::sync::LazyLock;

use regex::Regex;

use crate::model::Ingredient;

/// One recognizer in the ordered first-match-wins pattern list.
enum AmountPattern {
    /// "yarım"/"çeyrek" plus a countable unit; the amount spans both words
    HalfQuarter(Regex),
    /// A leading numeral (digits, vulgar fractions, "," "." "/"), optionally
    /// followed by a unit word, captured together as the amount
    Leading(Regex),
}

static AMOUNT_PATTERNS: LazyLock<Vec<AmountPattern>> = LazyLock::new(|| {
    vec![
        // Half/quarter word with a countable unit
        AmountPattern::HalfQuarter(
            Regex::new(r"(?i)^(yarım|çeyrek)\s+(paket|bardak|limon|demet|baş)\s+(.+)$").unwrap(),
        ),
        // Spoon sizes
        AmountPattern::Leading(
            Regex::new(r"(?i)^([\d½¼¾,./]+\s*(?:tatlı|yemek|çay|kahve)\s*kaşığı)\s+(.+)$").unwrap(),
        ),
        // Cup sizes
        AmountPattern::Leading(
            Regex::new(r"(?i)^([\d½¼¾,./]+\s*(?:su|çay)?\s*bardağı?)\s+(.+)$").unwrap(),
        ),
        // Metric and count units
        AmountPattern::Leading(
            Regex::new(
                r"(?i)^([\d½¼¾,./]+\s*(?:g|gr|kg|ml|lt|litre|cl|adet|paket|demet|dilim|tutam|diş|dal|yaprak|avuç))\s+(.+)$",
            )
            .unwrap(),
        ),
        // Bare number and a name ("2 yumurta")
        AmountPattern::Leading(Regex::new(r"^([\d½¼¾,./]+)\s+(.+)$").unwrap()),
    ]
});

/// Splits a single ingredient line into an amount and a name.
///
/// Recognizes the common Turkish measurement vocabulary: "125 g",
/// "1 tatlı kaşığı", "yarım paket", "2 adet", "1 su bardağı" and so on.
/// A line matching no pattern becomes a name-only ingredient, never an error.
pub fn parse_ingredient_line(line: &str, index: usize) -> Ingredient {
    let trimmed = line.trim();

    for pattern in AMOUNT_PATTERNS.iter() {
        match pattern {
            AmountPattern::HalfQuarter(re) => {
                if let Some(caps) = re.captures(trimmed) {
                    return Ingredient {
                        index,
                        amount: format!("{} {}", &caps[1], &caps[2]),
                        name: caps[3].trim().to_string(),
                    };
                }
            }
            AmountPattern::Leading(re) => {
                if let Some(caps) = re.captures(trimmed) {
                    return Ingredient {
                        index,
                        amount: caps[1].trim().to_string(),
                        name: caps[2].trim().to_string(),
                    };
                }
            }
        }
    }

    // Nothing matched: the whole line is the name
    Ingredient {
        index,
        amount: String::new(),
        name: trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spoon_unit() {
        let ing = parse_ingredient_line("1 yemek kaşığı salça", 1);
        assert_eq!(ing.amount, "1 yemek kaşığı");
        assert_eq!(ing.name, "salça");
    }

    #[test]
    fn test_cup_unit() {
        let ing = parse_ingredient_line("1 su bardağı kırmızı mercimek", 1);
        assert_eq!(ing.amount, "1 su bardağı");
        assert_eq!(ing.name, "kırmızı mercimek");
    }

    #[test]
    fn test_half_word_with_countable_unit() {
        let ing = parse_ingredient_line("yarım demet maydanoz", 3);
        assert_eq!(ing.index, 3);
        assert_eq!(ing.amount, "yarım demet");
        assert_eq!(ing.name, "maydanoz");
    }

    #[test]
    fn test_metric_unit() {
        let ing = parse_ingredient_line("125 g tereyağı", 1);
        assert_eq!(ing.amount, "125 g");
        assert_eq!(ing.name, "tereyağı");
    }

    #[test]
    fn test_bare_number() {
        let ing = parse_ingredient_line("2 yumurta", 1);
        assert_eq!(ing.amount, "2");
        assert_eq!(ing.name, "yumurta");
    }

    #[test]
    fn test_vulgar_fraction_in_amount() {
        let ing = parse_ingredient_line("1½ çay kaşığı tuz", 1);
        assert_eq!(ing.amount, "1½ çay kaşığı");
        assert_eq!(ing.name, "tuz");
    }

    #[test]
    fn test_no_pattern_keeps_whole_line_as_name() {
        let ing = parse_ingredient_line("Tuz", 4);
        assert_eq!(ing.amount, "");
        assert_eq!(ing.name, "Tuz");
    }

    #[test]
    fn test_case_insensitive_unit() {
        let ing = parse_ingredient_line("2 Adet soğan", 1);
        assert_eq!(ing.amount, "2 Adet");
        assert_eq!(ing.name, "soğan");
    }
}
