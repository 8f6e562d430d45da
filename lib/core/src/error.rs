use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("At least {min} ingredients must be selected, got {actual}")]
    TooFewIngredients { min: usize, actual: usize },

    #[error("At most {max} ingredients can be selected, got {actual}")]
    TooManyIngredients { max: usize, actual: usize },

    #[error("Ingredient selected more than once: {0}")]
    DuplicateSelection(String),

    #[error("Ingredient table has no usable rows")]
    EmptyTable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
