use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::reference::CssReference;

/// Look up one property together with its category.
pub fn run(reference: &CssReference, id: &str) -> Result<CmdResult> {
    let Some(property) = reference.property(id) else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::error(format!("No property with id {}", id)));
        return Ok(result);
    };

    Ok(CmdResult::default()
        .with_listed_properties([property])
        .with_categories(reference.category_of(property)))
}
