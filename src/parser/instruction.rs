use std::sync::LazyLock;

use regex::Regex;

use crate::model::Instruction;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Parses a single preparation step, stripping an optional leading numeral
/// ("1. ", "2. ", "10. "). The stripped numeral is discarded; the step's
/// index is its ordinal position among the surviving instruction lines.
pub fn parse_instruction_line(line: &str, index: usize) -> Instruction {
    let trimmed = line.trim();
    let text = LEADING_NUMBER.replace(trimmed, "");

    Instruction {
        index,
        text: text.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_numeral() {
        let inst = parse_instruction_line("1. Mercimekleri yıkayın.", 1);
        assert_eq!(inst.text, "Mercimekleri yıkayın.");
    }

    #[test]
    fn test_multi_digit_numeral() {
        let inst = parse_instruction_line("10. Servis edin.", 10);
        assert_eq!(inst.text, "Servis edin.");
    }

    #[test]
    fn test_numeral_does_not_set_index() {
        let inst = parse_instruction_line("7. Fırına verin.", 2);
        assert_eq!(inst.index, 2);
        assert_eq!(inst.text, "Fırına verin.");
    }

    #[test]
    fn test_unnumbered_line_kept_as_is() {
        let inst = parse_instruction_line("Soğanı doğrayın ve kavurun.", 1);
        assert_eq!(inst.text, "Soğanı doğrayın ve kavurun.");
    }
}
