use thiserror::Error;

#[derive(Error, Debug)]
pub enum CssRefError {
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    #[error("Duplicate property id: {0}")]
    DuplicateProperty(String),

    #[error("Duplicate property path: {0}")]
    DuplicatePath(String),

    #[error("Property {property} references unknown category {category}")]
    UnknownCategory { property: String, category: String },

    #[error("Invalid filter value: {0}")]
    InvalidFilter(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CssRefError>;
