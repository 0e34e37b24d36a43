//! # Search and Filtering
//!
//! Search is a plain conjunction of independent predicates, not a ranked search.
//! A property is part of the result when it passes all of:
//!
//! 1. **Query**: the query is empty, or its lowercase form is a substring of the
//!    lowercased `name`, `description`, `title` or any of the `tags`.
//! 2. **Category**: the filter is [`CategoryFilter::All`] or names the property's category.
//! 3. **Difficulty**: the filter is [`DifficultyFilter::All`] or equals the property's difficulty.
//! 4. **Examples**: `has_examples` is off, or the property has at least one example.
//! 5. **Task**: `has_task` is off, or the property carries a complete task.
//!
//! Results always come back in catalog order.
//!
//! [`compute_results`] and [`compute_stats`] are pure functions. [`PropertySearch`]
//! is the stateful session a UI drives: it owns the current query and filters and
//! recomputes on every read, so what it returns always reflects the latest input.

use crate::error::Result;
use crate::model::{CssProperty, Difficulty};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Filter value meaning "do not filter on this field".
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Keep only this category id. An id that no property uses is accepted and
    /// simply matches nothing.
    Only(String),
}

impl CategoryFilter {
    fn accepts(&self, property: &CssProperty) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => property.category == *id,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(if s == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL),
            CategoryFilter::Only(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    fn accepts(&self, property: &CssProperty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(d) => property.difficulty == *d,
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = crate::error::CssRefError;

    fn from_str(s: &str) -> Result<Self> {
        if s == ALL {
            Ok(DifficultyFilter::All)
        } else {
            s.parse().map(DifficultyFilter::Only)
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyFilter::All => f.write_str(ALL),
            DifficultyFilter::Only(d) => write!(f, "{}", d),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilters {
    pub category: CategoryFilter,
    pub difficulty: DifficultyFilter,
    pub has_examples: bool,
    pub has_task: bool,
}

impl SearchFilters {
    /// True when at least one field differs from its default.
    pub fn is_active(&self) -> bool {
        *self != SearchFilters::default()
    }

    /// Replaces exactly one field.
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Category(category) => self.category = category,
            FilterUpdate::Difficulty(difficulty) => self.difficulty = difficulty,
            FilterUpdate::HasExamples(on) => self.has_examples = on,
            FilterUpdate::HasTask(on) => self.has_task = on,
        }
    }

    /// Predicates 2 through 5.
    pub fn accepts(&self, property: &CssProperty) -> bool {
        self.category.accepts(property)
            && self.difficulty.accepts(property)
            && (!self.has_examples || property.has_examples())
            && (!self.has_task || property.has_task())
    }
}

/// A change to a single filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Category(CategoryFilter),
    Difficulty(DifficultyFilter),
    HasExamples(bool),
    HasTask(bool),
}

/// Predicate 1. `query_lower` must already be lowercased.
pub fn matches_query(property: &CssProperty, query_lower: &str) -> bool {
    query_lower.is_empty()
        || property.name.to_lowercase().contains(query_lower)
        || property.description.to_lowercase().contains(query_lower)
        || property.title.to_lowercase().contains(query_lower)
        || property
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query_lower))
}

pub fn compute_results<'a>(
    properties: &'a [CssProperty],
    query: &str,
    filters: &SearchFilters,
) -> Vec<&'a CssProperty> {
    let query_lower = query.to_lowercase();
    properties
        .iter()
        .filter(|p| matches_query(p, &query_lower) && filters.accepts(p))
        .collect()
}

/// Counters shown next to a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub total: usize,
    pub found: usize,
    /// Distinct categories used across the whole catalog, not just the results.
    pub categories: usize,
    /// Distinct difficulty levels used across the whole catalog.
    pub difficulties: usize,
    pub has_query: bool,
    pub has_filters: bool,
}

pub fn compute_stats(
    properties: &[CssProperty],
    results: &[&CssProperty],
    query: &str,
    filters: &SearchFilters,
) -> SearchStats {
    let categories: HashSet<&str> = properties.iter().map(|p| p.category.as_str()).collect();
    let difficulties: HashSet<Difficulty> = properties.iter().map(|p| p.difficulty).collect();

    SearchStats {
        total: properties.len(),
        found: results.len(),
        categories: categories.len(),
        difficulties: difficulties.len(),
        has_query: !query.is_empty(),
        has_filters: filters.is_active(),
    }
}

/// One user's search context over a borrowed catalog.
#[derive(Debug, Clone)]
pub struct PropertySearch<'a> {
    properties: &'a [CssProperty],
    query: String,
    filters: SearchFilters,
}

impl<'a> PropertySearch<'a> {
    pub fn new(properties: &'a [CssProperty]) -> Self {
        Self {
            properties,
            query: String::new(),
            filters: SearchFilters::default(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn update_filter(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
    }

    pub fn clear_filters(&mut self) {
        self.filters = SearchFilters::default();
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    pub fn reset_all(&mut self) {
        self.clear_search();
        self.clear_filters();
    }

    pub fn results(&self) -> Vec<&'a CssProperty> {
        let results = compute_results(self.properties, &self.query, &self.filters);
        tracing::trace!(
            query = %self.query,
            category = %self.filters.category,
            difficulty = %self.filters.difficulty,
            found = results.len(),
            "search recomputed"
        );
        results
    }

    pub fn stats(&self) -> SearchStats {
        let results = self.results();
        compute_stats(self.properties, &results, &self.query, &self.filters)
    }
}
