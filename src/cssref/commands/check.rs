use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::reference::CssReference;

pub fn run(reference: &CssReference) -> Result<CmdResult> {
    let report = reference.check();
    let mut result = CmdResult::default();

    if report.is_consistent() {
        result.add_message(CmdMessage::success(format!(
            "Catalog is consistent: {} properties in {} categories.",
            reference.properties().len(),
            reference.categories().len()
        )));
    } else {
        result.add_message(CmdMessage::warning("Inconsistencies found:"));
    }

    for drift in &report.drifted_categories {
        if !drift.missing.is_empty() {
            result.add_message(CmdMessage::warning(format!(
                "  - Category {} does not list: {}",
                drift.category,
                drift.missing.join(", ")
            )));
        }
        if !drift.extra.is_empty() {
            result.add_message(CmdMessage::warning(format!(
                "  - Category {} lists properties it does not contain: {}",
                drift.category,
                drift.extra.join(", ")
            )));
        }
    }

    for id in &report.incomplete_tasks {
        result.add_message(CmdMessage::warning(format!(
            "  - {} has a task with an empty description or solution",
            id
        )));
    }

    if !report.dangling_related.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} related reference(s) point at properties not in the catalog:",
            report.dangling_related.len()
        )));
        for (from, to) in &report.dangling_related {
            result.add_message(CmdMessage::info(format!("  - {} -> {}", from, to)));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::CssProperty;
    use crate::source::memory::fixtures::{category, small_source};
    use crate::source::memory::InMemorySource;

    #[test]
    fn consistent_catalog_reports_success() {
        let reference = CssReference::load(&small_source()).unwrap();
        let result = run(&reference).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn drift_is_a_warning() {
        let source = InMemorySource::default()
            .with_category(category("text", 1, &[]))
            .with_property(CssProperty::new("font-size", "Font-size", "", "text"));
        let reference = CssReference::load(&source).unwrap();
        let result = run(&reference).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[1].content.contains("font-size"));
    }

    #[test]
    fn dangling_related_is_informational() {
        let source = InMemorySource::default()
            .with_category(category("text", 1, &["font-size"]))
            .with_property(
                CssProperty::new("font-size", "Font-size", "", "text")
                    .with_related(&["line-height"]),
            );
        let reference = CssReference::load(&source).unwrap();
        let result = run(&reference).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Info && m.content.contains("line-height")));
    }
}
