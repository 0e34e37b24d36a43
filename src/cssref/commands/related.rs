use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::reference::CssReference;

pub fn run(reference: &CssReference, id: &str) -> Result<CmdResult> {
    let related = reference.related(id);
    let mut result = CmdResult::default()
        .with_listed_properties(related)
        .with_categories(reference.categories());

    if reference.property(id).is_none() {
        result.add_message(CmdMessage::info(format!("No property with id {}", id)));
    } else if result.listed_properties.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} has no related properties in this catalog",
            id
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::small_source;

    #[test]
    fn lists_related() {
        let reference = CssReference::load(&small_source()).unwrap();
        let result = run(&reference, "color").unwrap();

        assert_eq!(result.listed_properties.len(), 1);
        assert_eq!(result.listed_properties[0].id, "font-size");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unknown_id_yields_empty_list() {
        let reference = CssReference::load(&small_source()).unwrap();
        let result = run(&reference, "does-not-exist").unwrap();

        assert!(result.listed_properties.is_empty());
        assert!(!result.has_errors());
        assert_eq!(result.messages.len(), 1);
    }
}
