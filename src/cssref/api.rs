//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for clients: it owns the loaded [`CssReference`] and the config
//! directory, and dispatches each call to the matching `commands::*::run`.
//!
//! It does no formatting and no I/O of its own besides what commands need (the
//! `config` command reads and writes the config file). Results come back as
//! [`CmdResult`] values for the client to render.

use crate::commands;
use crate::error::Result;
use crate::reference::CssReference;
use crate::search::FilterUpdate;
use crate::source::CatalogSource;
use std::path::{Path, PathBuf};

/// The main API facade for cssref operations.
pub struct CssRefApi {
    reference: CssReference,
    config_dir: PathBuf,
}

impl CssRefApi {
    pub fn new(reference: CssReference, config_dir: PathBuf) -> Self {
        Self {
            reference,
            config_dir,
        }
    }

    pub fn from_source<S: CatalogSource>(source: &S, config_dir: PathBuf) -> Result<Self> {
        Ok(Self::new(CssReference::load(source)?, config_dir))
    }

    pub fn list(&self, query: &str, filters: &[FilterUpdate]) -> Result<CmdResult> {
        commands::list::run(&self.reference, query, filters)
    }

    pub fn show(&self, id: &str) -> Result<CmdResult> {
        commands::show::run(&self.reference, id)
    }

    pub fn related(&self, id: &str) -> Result<CmdResult> {
        commands::related::run(&self.reference, id)
    }

    pub fn categories(&self, only_with_properties: bool) -> Result<CmdResult> {
        commands::categories::run(&self.reference, only_with_properties)
    }

    pub fn check(&self) -> Result<CmdResult> {
        commands::check::run(&self.reference)
    }

    pub fn export<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        let ids: Vec<String> = ids.iter().map(|id| id.as_ref().to_string()).collect();
        commands::export::run(&self.reference, &ids)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn reference(&self) -> &CssReference {
        &self.reference
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
