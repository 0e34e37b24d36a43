use crate::error::CssRefError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How hard a property is to learn. Ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CssRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CssRefError::InvalidFilter(format!("unknown difficulty: {}", s)))
    }
}

/// A taxonomy entry. Properties point at categories through their `category` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    /// Property ids nominally in this category. Informational only: the
    /// property's own `category` field is what the catalog trusts.
    #[serde(default)]
    pub properties: Vec<String>,
    pub order: i32,
    pub color: String,
}

/// Per-engine support levels. Values are "full", "partial", "none" or a free-form
/// version string; nothing in the library branches on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserSupport {
    pub chrome: String,
    pub firefox: String,
    pub safari: String,
    pub edge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ie: Option<String>,
}

impl BrowserSupport {
    pub const FULL: &'static str = "full";

    /// Full support everywhere, including IE.
    pub fn full() -> Self {
        Self {
            chrome: Self::FULL.to_string(),
            firefox: Self::FULL.to_string(),
            safari: Self::FULL.to_string(),
            edge: Self::FULL.to_string(),
            ie: Some(Self::FULL.to_string()),
        }
    }
}

impl Default for BrowserSupport {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyExample {
    pub title: String,
    pub code: String,
    pub description: String,
}

/// A practice exercise: what to do, and a declaration that does it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub solution: String,
}

impl Task {
    pub fn is_complete(&self) -> bool {
        !self.description.is_empty() && !self.solution.is_empty()
    }
}

/// One documented CSS property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssProperty {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    /// Route of the detail page. Unique across the catalog.
    pub path: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub browser_support: BrowserSupport,
    #[serde(default)]
    pub examples: Vec<PropertyExample>,
    #[serde(default)]
    pub related_properties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

impl CssProperty {
    /// Creates a beginner-level property whose name is its id and whose path is `/{id}`.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            path: format!("/{}", id),
            id,
            title: title.into(),
            description: description.into(),
            category: category.into(),
            tags: Vec::new(),
            difficulty: Difficulty::Beginner,
            browser_support: BrowserSupport::full(),
            examples: Vec::new(),
            related_properties: Vec::new(),
            task: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_example(mut self, title: &str, code: &str, description: &str) -> Self {
        self.examples.push(PropertyExample {
            title: title.to_string(),
            code: code.to_string(),
            description: description.to_string(),
        });
        self
    }

    pub fn with_related(mut self, ids: &[&str]) -> Self {
        self.related_properties = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_task(mut self, description: &str, solution: &str) -> Self {
        self.task = Some(Task {
            description: description.to_string(),
            solution: solution.to_string(),
        });
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn has_examples(&self) -> bool {
        !self.examples.is_empty()
    }

    pub fn has_task(&self) -> bool {
        self.task.as_ref().is_some_and(Task::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_lowercase_names() {
        assert_eq!("beginner".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert_eq!("advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("Beginner".parse::<Difficulty>().is_err());
        assert!("all".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_is_ordinal() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
    }

    #[test]
    fn new_property_derives_name_and_path() {
        let prop = CssProperty::new("font-size", "Font-size", "Size of text", "text");
        assert_eq!(prop.name, "font-size");
        assert_eq!(prop.path, "/font-size");
        assert_eq!(prop.difficulty, Difficulty::Beginner);
        assert!(!prop.has_examples());
        assert!(!prop.has_task());
    }

    #[test]
    fn task_with_empty_half_does_not_count() {
        let prop = CssProperty::new("width", "Width", "", "position").with_task("Make it wide", "");
        assert!(!prop.has_task());

        let prop = prop.with_task("Make it wide", "width: 200px;");
        assert!(prop.has_task());
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let prop = CssProperty::new("color", "Color", "Text color", "color")
            .with_related(&["background"])
            .with_task("Make it green", "color: green;");
        let json = serde_json::to_value(&prop).unwrap();

        assert_eq!(json["relatedProperties"][0], "background");
        assert_eq!(json["browserSupport"]["ie"], "full");
        assert_eq!(json["difficulty"], "beginner");
        assert_eq!(json["task"]["solution"], "color: green;");
    }

    #[test]
    fn json_defaults_optional_collections() {
        let json = r#"{
            "id": "gap",
            "name": "gap",
            "title": "Gap",
            "description": "Space between grid tracks",
            "path": "/gap",
            "category": "layout",
            "difficulty": "intermediate"
        }"#;
        let prop: CssProperty = serde_json::from_str(json).unwrap();

        assert!(prop.tags.is_empty());
        assert!(prop.examples.is_empty());
        assert!(prop.task.is_none());
        assert_eq!(prop.browser_support, BrowserSupport::full());
    }
}
