//! Parses free-text Turkish recipes into structured data and scales
//! ingredient amounts for different serving counts.
//!
//! Expected text format: title on the first line, ingredients after a
//! "Malzemeler:" line, numbered steps after a "Yapılış:" line. Blank lines
//! are ignored. Scaling operates on the stored amount strings and is a
//! presentation-time operation; the parsed amounts are never persisted in
//! scaled form.

pub mod error;
pub mod model;
pub mod parser;
pub mod scale;

use log::debug;

pub use crate::error::ParseError;
pub use crate::model::{
    Ingredient, Instruction, ParsedAmount, ParsedRecipe, StoredIngredient, StoredInstruction,
    StoredRecipe,
};
pub use crate::scale::{get_scale_factor, parse_amount, scale_amount, scale_ingredients};

/// Parses pasted recipe text into a structured recipe.
///
/// Returns `None` when the text is empty or either of the "Malzemeler:" /
/// "Yapılış:" section markers is missing; both are required. Use
/// [`parser::parse`] directly to learn which requirement failed.
pub fn parse_recipe_text(text: &str) -> Option<ParsedRecipe> {
    match parser::parse(text) {
        Ok(recipe) => Some(recipe),
        Err(err) => {
            debug!("recipe text rejected: {err}");
            None
        }
    }
}
