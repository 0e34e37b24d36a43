use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CssRefError, Result};
use crate::reference::CssReference;
use crate::source::CatalogData;

/// Serialize the catalog, or the given properties of it, as a catalog document.
///
/// All categories are always included so the output loads on its own.
pub fn run(reference: &CssReference, ids: &[String]) -> Result<CmdResult> {
    let data = select(reference, ids);
    let mut result = CmdResult::default();

    for id in ids {
        if reference.property(id).is_none() {
            result.add_message(CmdMessage::warning(format!("Skipping unknown property {}", id)));
        }
    }

    let json = serde_json::to_string_pretty(&data).map_err(CssRefError::Serialization)?;
    Ok(result.with_export(json))
}

fn select(reference: &CssReference, ids: &[String]) -> CatalogData {
    let properties = reference
        .properties()
        .iter()
        .filter(|p| ids.is_empty() || ids.contains(&p.id))
        .cloned()
        .collect();

    CatalogData {
        categories: reference.categories().to_vec(),
        properties,
    }
}
