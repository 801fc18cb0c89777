use thiserror::Error;

/// Errors that can occur while parsing free-text recipes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input text was empty or whitespace-only
    #[error("Recipe text is empty")]
    EmptyText,

    /// No line starts with the ingredients section marker ("Malzemeler:")
    #[error("No \"Malzemeler:\" section found in the recipe text")]
    MissingIngredientsMarker,

    /// No line starts with the instructions section marker ("Yapılış:")
    #[error("No \"Yapılış:\" section found in the recipe text")]
    MissingInstructionsMarker,
}
