//! # Category Registry
//!
//! The ordered taxonomy that properties are grouped under. The registry is built
//! once from a list of [`Category`] values and never changes afterwards.
//!
//! Categories are kept sorted ascending by `order`. The sort is stable, so two
//! categories sharing an `order` keep the order in which they were declared.

use crate::error::{CssRefError, Result};
use crate::model::Category;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    by_id: HashMap<String, usize>,
}

impl CategoryRegistry {
    /// Builds a registry, rejecting duplicate ids.
    pub fn new(mut categories: Vec<Category>) -> Result<Self> {
        categories.sort_by_key(|c| c.order);

        let mut by_id = HashMap::with_capacity(categories.len());
        for (pos, category) in categories.iter().enumerate() {
            if by_id.insert(category.id.clone(), pos).is_some() {
                return Err(CssRefError::DuplicateCategory(category.id.clone()));
            }
        }

        Ok(Self { categories, by_id })
    }

    /// All categories, sorted by `order`.
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.by_id.get(id).map(|&pos| &self.categories[pos])
    }

    /// Categories whose own `properties` list is non-empty.
    ///
    /// This looks only at the list stored on the category, not at which
    /// properties actually reference it. See [`crate::reference::CssReference::check`]
    /// for detecting when the two disagree.
    pub fn with_properties(&self) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| !c.properties.is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
