use serde::{Deserialize, Serialize};

/// A single ingredient line, split into an amount and a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// 1-based position within the ingredients section
    pub index: usize,
    /// Amount with its unit, e.g. "1 su bardağı"; empty when no unit pattern matched
    pub amount: String,
    pub name: String,
}

/// A single preparation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// 1-based position among the surviving instruction lines, independent of
    /// any numbering present in the source text
    pub index: usize,
    pub text: String,
}

/// A recipe parsed out of free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    /// First line of the text, empty when the text opens with the
    /// ingredients marker
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
}

/// An amount string resolved into a numeric value and a unit.
///
/// Transient: produced and consumed within a single scaling call, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAmount {
    pub value: f64,
    /// Unit word(s), e.g. "su bardağı"; empty for bare numbers
    pub unit: String,
    /// The trimmed input, kept verbatim
    pub original: String,
}

/// Ingredient in the shape the persistence layer stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredIngredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

/// Preparation step in the shape the persistence layer stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredInstruction {
    pub step: usize,
    pub text: String,
}

/// Recipe in the shape the persistence layer stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecipe {
    pub title: String,
    pub ingredients: Vec<StoredIngredient>,
    pub instructions: Vec<StoredInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

impl From<ParsedRecipe> for StoredRecipe {
    fn from(recipe: ParsedRecipe) -> Self {
        StoredRecipe {
            title: recipe.title,
            ingredients: recipe
                .ingredients
                .into_iter()
                .map(|ing| StoredIngredient {
                    name: ing.name,
                    amount: ing.amount,
                    // The parser keeps the unit inside the amount string; the
                    // store's separate unit column stays empty.
                    unit: String::new(),
                })
                .collect(),
            instructions: recipe
                .instructions
                .into_iter()
                .map(|inst| StoredInstruction {
                    step: inst.index,
                    text: inst.text,
                })
                .collect(),
            servings: None,
        }
    }
}
