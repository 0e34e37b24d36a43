use crate::commands::CmdResult;
use crate::error::Result;
use crate::reference::CssReference;

/// All categories, or only those whose own property list is non-empty.
pub fn run(reference: &CssReference, only_with_properties: bool) -> Result<CmdResult> {
    let result = if only_with_properties {
        CmdResult::default().with_categories(reference.registry().with_properties())
    } else {
        CmdResult::default().with_categories(reference.categories())
    };
    Ok(result.with_listed_properties(reference.properties()))
}
