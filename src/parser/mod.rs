mod ingredient;
mod instruction;

pub use ingredient::parse_ingredient_line;
pub use instruction::parse_instruction_line;

use crate::error::ParseError;
use crate::model::ParsedRecipe;

/// Section header prefix for the ingredients list ("Malzemeler:")
const INGREDIENTS_MARKER: &str = "malzemeler";
/// Section header prefix for the preparation steps ("Yapılış:")
const INSTRUCTIONS_MARKER: &str = "yapılış";

fn starts_with_marker(line: &str, marker: &str) -> bool {
    line.to_lowercase().starts_with(marker)
}

/// Parses free recipe text into a structured recipe.
///
/// Expected format: title on the first line, the ingredient list after a line
/// starting with "Malzemeler:", numbered steps after a line starting with
/// "Yapılış:". Blank lines are ignored everywhere. Both section markers are
/// required; a text with only one of them is rejected wholesale.
pub fn parse(text: &str) -> Result<ParsedRecipe, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyText);
    }

    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let ingredients_at = lines
        .iter()
        .position(|line| starts_with_marker(line, INGREDIENTS_MARKER))
        .ok_or(ParseError::MissingIngredientsMarker)?;
    let instructions_at = lines
        .iter()
        .position(|line| starts_with_marker(line, INSTRUCTIONS_MARKER))
        .ok_or(ParseError::MissingInstructionsMarker)?;

    // Only the very first line counts as the title; further preamble lines
    // before the ingredients marker are dropped.
    let title = if ingredients_at > 0 {
        lines[0].to_string()
    } else {
        String::new()
    };

    // Empty when the instructions marker appears before the ingredients
    // marker in the text.
    let ingredient_lines = if instructions_at > ingredients_at {
        &lines[ingredients_at + 1..instructions_at]
    } else {
        &lines[0..0]
    };
    let ingredients = ingredient_lines
        .iter()
        .filter(|line| !starts_with_marker(line, INGREDIENTS_MARKER))
        .enumerate()
        .map(|(idx, line)| parse_ingredient_line(line, idx + 1))
        .collect();

    let instructions = lines[instructions_at + 1..]
        .iter()
        .filter(|line| !starts_with_marker(line, INSTRUCTIONS_MARKER))
        .enumerate()
        .map(|(idx, line)| parse_instruction_line(line, idx + 1))
        .collect();

    Ok(ParsedRecipe {
        title,
        ingredients,
        instructions,
    })
}
