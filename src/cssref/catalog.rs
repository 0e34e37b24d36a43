//! # Property Catalog
//!
//! The read-only list of [`CssProperty`] records. Catalog order is the order the
//! records were supplied in, and every derived view (by category, by difficulty,
//! related, search) preserves it.
//!
//! Construction enforces that both `id` and `path` are unique. Whether each
//! property's `category` exists is a cross-component concern checked by
//! [`crate::reference::CssReference`].

use crate::error::{CssRefError, Result};
use crate::model::{CssProperty, Difficulty};
use crate::search::matches_query;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct PropertyCatalog {
    properties: Vec<CssProperty>,
    by_id: HashMap<String, usize>,
}

impl PropertyCatalog {
    pub fn new(properties: Vec<CssProperty>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(properties.len());
        let mut paths = HashSet::with_capacity(properties.len());

        for (pos, property) in properties.iter().enumerate() {
            if by_id.insert(property.id.clone(), pos).is_some() {
                return Err(CssRefError::DuplicateProperty(property.id.clone()));
            }
            if !paths.insert(property.path.as_str()) {
                return Err(CssRefError::DuplicatePath(property.path.clone()));
            }
        }

        Ok(Self { properties, by_id })
    }

    pub fn all(&self) -> &[CssProperty] {
        &self.properties
    }

    pub fn get(&self, id: &str) -> Option<&CssProperty> {
        self.by_id.get(id).map(|&pos| &self.properties[pos])
    }

    pub fn by_category(&self, category_id: &str) -> Vec<&CssProperty> {
        self.properties
            .iter()
            .filter(|p| p.category == category_id)
            .collect()
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&CssProperty> {
        self.properties
            .iter()
            .filter(|p| p.difficulty == difficulty)
            .collect()
    }

    /// Properties listed in `id`'s `related_properties`, in catalog order.
    ///
    /// Unknown ids, on either side, are skipped rather than reported.
    pub fn related(&self, id: &str) -> Vec<&CssProperty> {
        let Some(source) = self.get(id) else {
            return Vec::new();
        };

        self.properties
            .iter()
            .filter(|p| source.related_properties.contains(&p.id))
            .collect()
    }

    /// Free-text search without any structured filters.
    pub fn search(&self, query: &str) -> Vec<&CssProperty> {
        let query = query.to_lowercase();
        self.properties
            .iter()
            .filter(|p| matches_query(p, &query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PropertyCatalog {
        PropertyCatalog::new(vec![
            CssProperty::new("color", "Color", "Text color", "color")
                .with_related(&["border-color", "background"]),
            CssProperty::new("background", "Background", "Fill behind the box", "color")
                .with_related(&["color"]),
            CssProperty::new("font-size", "Font-size", "Size of glyphs", "text")
                .with_difficulty(Difficulty::Intermediate)
                .with_tags(&["typography"]),
            CssProperty::new("margin", "Margin", "Outer spacing", "position")
                .with_related(&["width", "padding", "font-size"]),
            CssProperty::new("padding", "Padding", "Inner spacing", "position"),
        ])
        .unwrap()
    }

    fn ids(props: &[&CssProperty]) -> Vec<String> {
        props.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn all_preserves_input_order() {
        let catalog = sample();
        let order: Vec<&str> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["color", "background", "font-size", "margin", "padding"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = PropertyCatalog::new(vec![
            CssProperty::new("color", "A", "", "color"),
            CssProperty::new("color", "B", "", "color").with_path("/color-2"),
        ])
        .unwrap_err();
        assert!(matches!(err, CssRefError::DuplicateProperty(id) if id == "color"));
    }

    #[test]
    fn rejects_duplicate_paths() {
        let err = PropertyCatalog::new(vec![
            CssProperty::new("color", "A", "", "color"),
            CssProperty::new("colour", "B", "", "color").with_path("/color"),
        ])
        .unwrap_err();
        assert!(matches!(err, CssRefError::DuplicatePath(path) if path == "/color"));
    }

    #[test]
    fn get_missing_is_none() {
        let catalog = sample();
        assert_eq!(catalog.get("margin").unwrap().title, "Margin");
        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn by_category_keeps_catalog_order() {
        let catalog = sample();
        assert_eq!(ids(&catalog.by_category("position")), vec!["margin", "padding"]);
        assert!(catalog.by_category("layout").is_empty());
    }

    #[test]
    fn by_difficulty() {
        let catalog = sample();
        assert_eq!(
            ids(&catalog.by_difficulty(Difficulty::Intermediate)),
            vec!["font-size"]
        );
        assert!(catalog.by_difficulty(Difficulty::Advanced).is_empty());
    }

    #[test]
    fn related_uses_catalog_order_and_skips_unknown() {
        let catalog = sample();
        // Listed as width, padding, font-size; width does not exist.
        assert_eq!(ids(&catalog.related("margin")), vec!["font-size", "padding"]);
        assert_eq!(ids(&catalog.related("color")), vec!["background"]);
        assert!(catalog.related("padding").is_empty());
    }

    #[test]
    fn related_of_unknown_is_empty() {
        assert!(sample().related("does-not-exist").is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = sample();
        assert_eq!(ids(&catalog.search("SPACING")), vec!["margin", "padding"]);
        assert_eq!(ids(&catalog.search("Typo")), vec!["font-size"]);
        assert_eq!(catalog.search("").len(), 5);
    }
}
