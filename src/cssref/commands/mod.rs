use crate::config::CssRefConfig;
use crate::model::{Category, CssProperty};
use crate::search::SearchStats;

pub mod categories;
pub mod check;
pub mod config;
pub mod export;
pub mod list;
pub mod related;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_properties: Vec<CssProperty>,
    pub categories: Vec<Category>,
    pub stats: Option<SearchStats>,
    pub export: Option<String>,
    pub config: Option<CssRefConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_properties<'a, I>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = &'a CssProperty>,
    {
        self.listed_properties = properties.into_iter().cloned().collect();
        self
    }

    pub fn with_categories<'a, I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = &'a Category>,
    {
        self.categories = categories.into_iter().cloned().collect();
        self
    }

    pub fn with_stats(mut self, stats: SearchStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_export(mut self, export: String) -> Self {
        self.export = Some(export);
        self
    }

    pub fn with_config(mut self, config: CssRefConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
