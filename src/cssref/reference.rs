//! # Reference
//!
//! [`CssReference`] bundles the [`CategoryRegistry`] with the [`PropertyCatalog`]
//! and answers the questions that need both: which category a property belongs
//! to, whether the two lists agree, and so on.
//!
//! It is an ordinary value. Build one at startup from a [`CatalogSource`] and pass
//! it by reference to whatever needs it; tests build their own from synthetic data.

use crate::catalog::PropertyCatalog;
use crate::error::{CssRefError, Result};
use crate::model::{Category, CssProperty};
use crate::registry::CategoryRegistry;
use crate::search::PropertySearch;
use crate::source::{CatalogData, CatalogSource};

#[derive(Debug, Clone, Default)]
pub struct CssReference {
    registry: CategoryRegistry,
    catalog: PropertyCatalog,
}

impl CssReference {
    /// Joins a registry and a catalog, rejecting properties whose category is unknown.
    pub fn new(registry: CategoryRegistry, catalog: PropertyCatalog) -> Result<Self> {
        if let Some(orphan) = catalog
            .all()
            .iter()
            .find(|p| registry.get(&p.category).is_none())
        {
            return Err(CssRefError::UnknownCategory {
                property: orphan.id.clone(),
                category: orphan.category.clone(),
            });
        }
        Ok(Self { registry, catalog })
    }

    pub fn from_data(data: CatalogData) -> Result<Self> {
        let registry = CategoryRegistry::new(data.categories)?;
        let catalog = PropertyCatalog::new(data.properties)?;
        Self::new(registry, catalog)
    }

    pub fn load<S: CatalogSource>(source: &S) -> Result<Self> {
        let reference = Self::from_data(source.load()?)?;
        tracing::debug!(
            source = %source.describe(),
            categories = reference.registry.len(),
            properties = reference.catalog.len(),
            "catalog loaded"
        );
        Ok(reference)
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &PropertyCatalog {
        &self.catalog
    }

    pub fn properties(&self) -> &[CssProperty] {
        self.catalog.all()
    }

    pub fn categories(&self) -> &[Category] {
        self.registry.all()
    }

    pub fn property(&self, id: &str) -> Option<&CssProperty> {
        self.catalog.get(id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.registry.get(id)
    }

    pub fn category_of(&self, property: &CssProperty) -> Option<&Category> {
        self.registry.get(&property.category)
    }

    pub fn related(&self, id: &str) -> Vec<&CssProperty> {
        self.catalog.related(id)
    }

    pub fn search(&self, query: &str) -> Vec<&CssProperty> {
        self.catalog.search(query)
    }

    /// A fresh search session over this catalog.
    pub fn session(&self) -> PropertySearch<'_> {
        PropertySearch::new(self.catalog.all())
    }

    /// Looks for places where the data disagrees with itself.
    ///
    /// None of these are errors: the library keeps working with inconsistent
    /// data, it just might show surprising results.
    pub fn check(&self) -> CheckReport {
        let mut report = CheckReport::default();

        for category in self.registry.all() {
            let members: Vec<&str> = self
                .catalog
                .by_category(&category.id)
                .into_iter()
                .map(|p| p.id.as_str())
                .collect();

            let missing: Vec<String> = members
                .iter()
                .filter(|id| !category.properties.iter().any(|listed| listed == *id))
                .map(|id| id.to_string())
                .collect();
            let extra: Vec<String> = category
                .properties
                .iter()
                .filter(|listed| !members.contains(&listed.as_str()))
                .cloned()
                .collect();

            if !missing.is_empty() || !extra.is_empty() {
                report.drifted_categories.push(CategoryDrift {
                    category: category.id.clone(),
                    missing,
                    extra,
                });
            }
        }

        for property in self.catalog.all() {
            for related in &property.related_properties {
                if self.catalog.get(related).is_none() {
                    report
                        .dangling_related
                        .push((property.id.clone(), related.clone()));
                }
            }
            if property.task.as_ref().is_some_and(|t| !t.is_complete()) {
                report.incomplete_tasks.push(property.id.clone());
            }
        }

        report
    }
}

/// A category whose informational property list disagrees with the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDrift {
    pub category: String,
    /// Properties that reference the category but are not in its list.
    pub missing: Vec<String>,
    /// Ids in the list that no property of this category has.
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub drifted_categories: Vec<CategoryDrift>,
    /// (property id, related id that does not resolve)
    pub dangling_related: Vec<(String, String)>,
    pub incomplete_tasks: Vec<String>,
}

impl CheckReport {
    /// True when nothing that changes what users see was found.
    ///
    /// Dangling related ids are expected (they point at properties not written
    /// yet) and do not count.
    pub fn is_consistent(&self) -> bool {
        self.drifted_categories.is_empty() && self.incomplete_tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use crate::source::memory::fixtures::{category, small_source};
    use crate::source::memory::InMemorySource;

    fn reference() -> CssReference {
        CssReference::load(&small_source()).unwrap()
    }

    #[test]
    fn loads_and_sorts() {
        let reference = reference();
        let cats: Vec<&str> = reference.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(cats, vec!["color", "text"]);
        assert_eq!(reference.properties().len(), 3);
    }

    #[test]
    fn rejects_unknown_category() {
        let source = small_source().with_property(CssProperty::new("gap", "Gap", "", "layout"));
        let err = CssReference::load(&source).unwrap_err();
        assert!(matches!(
            err,
            CssRefError::UnknownCategory { property, category }
                if property == "gap" && category == "layout"
        ));
    }

    #[test]
    fn propagates_duplicate_errors() {
        let source = small_source().with_category(category("color", 9, &[]));
        assert!(matches!(
            CssReference::load(&source),
            Err(CssRefError::DuplicateCategory(_))
        ));

        let source = small_source()
            .with_property(CssProperty::new("color", "Again", "", "color").with_path("/x"));
        assert!(matches!(
            CssReference::load(&source),
            Err(CssRefError::DuplicateProperty(_))
        ));
    }

    #[test]
    fn category_of_property() {
        let reference = reference();
        let prop = reference.property("font-size").unwrap();
        assert_eq!(reference.category_of(prop).unwrap().id, "text");
        assert!(reference.property("nope").is_none());
        assert!(reference.category("nope").is_none());
    }

    #[test]
    fn related_and_missing() {
        let reference = reference();
        let related: Vec<&str> = reference
            .related("color")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(related, vec!["font-size"]);
        assert!(reference.related("does-not-exist").is_empty());
    }

    #[test]
    fn session_starts_unfiltered() {
        let reference = reference();
        let session = reference.session();
        assert_eq!(session.results().len(), 3);
        assert_eq!(session.query(), "");
    }

    #[test]
    fn check_passes_for_consistent_data() {
        let report = reference().check();
        assert!(report.is_consistent());
        assert!(report.dangling_related.is_empty());
    }

    #[test]
    fn check_reports_drift_dangling_and_incomplete() {
        let mut loose = CssProperty::new("letter-spacing", "Letter-spacing", "", "text")
            .with_related(&["word-spacing"]);
        loose.task = Some(Task {
            description: "Spread the letters".into(),
            solution: String::new(),
        });

        let source = InMemorySource::default()
            .with_category(category("color", 1, &["color", "opacity"]))
            .with_category(category("text", 2, &[]))
            .with_property(CssProperty::new("color", "Color", "", "color"))
            .with_property(loose);
        let report = CssReference::load(&source).unwrap().check();

        assert_eq!(
            report.drifted_categories,
            vec![
                CategoryDrift {
                    category: "color".into(),
                    missing: vec![],
                    extra: vec!["opacity".into()],
                },
                CategoryDrift {
                    category: "text".into(),
                    missing: vec!["letter-spacing".into()],
                    extra: vec![],
                },
            ]
        );
        assert_eq!(
            report.dangling_related,
            vec![("letter-spacing".to_string(), "word-spacing".to_string())]
        );
        assert_eq!(report.incomplete_tasks, vec!["letter-spacing".to_string()]);
        assert!(!report.is_consistent());
    }
}
