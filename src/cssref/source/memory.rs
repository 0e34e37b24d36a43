use super::{CatalogData, CatalogSource};
use crate::error::Result;
use crate::model::{Category, CssProperty};

/// Serves a catalog that already lives in memory. Does NOT touch the filesystem.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    data: CatalogData,
}

impl InMemorySource {
    pub fn new(data: CatalogData) -> Self {
        Self { data }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.data.categories.push(category);
        self
    }

    pub fn with_property(mut self, property: CssProperty) -> Self {
        self.data.properties.push(property);
        self
    }
}

impl CatalogSource for InMemorySource {
    fn load(&self) -> Result<CatalogData> {
        Ok(self.data.clone())
    }

    fn describe(&self) -> String {
        format!(
            "in-memory catalog ({} categories, {} properties)",
            self.data.categories.len(),
            self.data.properties.len()
        )
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn category(id: &str, order: i32, properties: &[&str]) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_string(),
            icon: "*".to_string(),
            description: format!("{} properties", id),
            properties: properties.iter().map(|p| p.to_string()).collect(),
            order,
            color: "#333333".to_string(),
        }
    }

    /// Two categories, three properties, registry lists in sync with the catalog.
    pub fn small_source() -> InMemorySource {
        InMemorySource::default()
            .with_category(category("text", 2, &["font-size", "text-align"]))
            .with_category(category("color", 1, &["color"]))
            .with_property(
                CssProperty::new("color", "Color", "Text color", "color")
                    .with_example("Named", "color: red;", "")
                    .with_related(&["font-size"]),
            )
            .with_property(
                CssProperty::new("font-size", "Font-size", "Size of text", "text")
                    .with_task("Make text bigger", "font-size: 24px;"),
            )
            .with_property(CssProperty::new(
                "text-align",
                "Text-align",
                "Horizontal alignment",
                "text",
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn load_returns_a_copy() {
        let source = small_source();
        let first = source.load().unwrap();
        let second = source.load().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.categories.len(), 2);
        assert_eq!(first.properties.len(), 3);
    }

    #[test]
    fn describe_counts_entries() {
        assert_eq!(
            small_source().describe(),
            "in-memory catalog (2 categories, 3 properties)"
        );
    }
}
