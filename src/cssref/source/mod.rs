//! # Catalog Sources
//!
//! Where the categories and properties come from. The [`CatalogSource`] trait keeps
//! the rest of the library independent of that choice.
//!
//! ## Implementations
//!
//! - [`builtin::BuiltinSource`]: the catalog compiled into the binary.
//! - [`json::JsonFileSource`]: a catalog read from a JSON document on disk.
//! - [`memory::InMemorySource`]: a catalog held in memory, for tests and embedding.
//!
//! ## File Format
//!
//! A catalog document is a [`CatalogData`] serialized as JSON:
//!
//! ```text
//! {
//!   "categories": [ { "id": "color", "name": "...", "order": 1, ... } ],
//!   "properties": [ { "id": "color", "category": "color", "difficulty": "beginner", ... } ]
//! }
//! ```
//!
//! Sources only produce raw data. Validation (unique ids and paths, known
//! categories) happens when the data is turned into a
//! [`CssReference`](crate::reference::CssReference).

use crate::error::Result;
use crate::model::{Category, CssProperty};
use serde::{Deserialize, Serialize};

pub mod builtin;
pub mod json;
pub mod memory;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub properties: Vec<CssProperty>,
}

pub trait CatalogSource {
    fn load(&self) -> Result<CatalogData>;

    /// Short human-readable label, used in logs.
    fn describe(&self) -> String;
}
