use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::reference::CssReference;
use crate::search::FilterUpdate;

pub fn run(reference: &CssReference, query: &str, updates: &[FilterUpdate]) -> Result<CmdResult> {
    let mut search = reference.session();
    search.set_query(query);
    for update in updates {
        search.update_filter(update.clone());
    }

    let results = search.results();
    let stats = search.stats();

    let mut result = CmdResult::default()
        .with_listed_properties(results)
        .with_categories(reference.categories())
        .with_stats(stats);

    if stats.found == 0 && (stats.has_query || stats.has_filters) {
        result.add_message(CmdMessage::info(
            "No properties match. Try a shorter query or fewer filters.",
        ));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{CategoryFilter, DifficultyFilter};
    use crate::source::memory::fixtures::small_source;

    fn ids(result: &CmdResult) -> Vec<&str> {
        result
            .listed_properties
            .iter()
            .map(|p| p.id.as_str())
            .collect()
    }

    #[test]
    fn lists_everything_by_default() {
        let reference = CssReference::load(&small_source()).unwrap();
        let result = run(&reference, "", &[]).unwrap();

        assert_eq!(ids(&result), vec!["color", "font-size", "text-align"]);
        assert_eq!(result.categories.len(), 2);
        let stats = result.stats.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.found, 3);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn applies_query_and_filters() {
        let reference = CssReference::load(&small_source()).unwrap();
        let result = run(
            &reference,
            "text",
            &[
                FilterUpdate::Category(CategoryFilter::Only("text".into())),
                FilterUpdate::HasTask(true),
            ],
        )
        .unwrap();

        assert_eq!(ids(&result), vec!["font-size"]);
        let stats = result.stats.unwrap();
        assert!(stats.has_query);
        assert!(stats.has_filters);
    }

    #[test]
    fn later_updates_override_earlier_ones() {
        let reference = CssReference::load(&small_source()).unwrap();
        let result = run(
            &reference,
            "",
            &[
                FilterUpdate::Category(CategoryFilter::Only("color".into())),
                FilterUpdate::Category(CategoryFilter::All),
                FilterUpdate::Difficulty(DifficultyFilter::All),
            ],
        )
        .unwrap();

        assert_eq!(result.listed_properties.len(), 3);
        assert!(!result.stats.unwrap().has_filters);
    }

    #[test]
    fn empty_result_carries_hint() {
        let reference = CssReference::load(&small_source()).unwrap();
        let result = run(&reference, "zzz-no-match", &[]).unwrap();

        assert!(result.listed_properties.is_empty());
        assert_eq!(result.stats.unwrap().found, 0);
        assert_eq!(result.messages.len(), 1);
    }
}
