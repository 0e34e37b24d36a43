//! # cssref Architecture
//!
//! cssref is a **UI-agnostic CSS property reference library**. It holds a catalog of
//! documented CSS properties grouped into categories, and a search engine that
//! filters that catalog. The bundled command-line tool is one client of it; a
//! web page or editor plugin would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Layer (commands/*.rs)         │
//! │  - Facade dispatching to one function per command           │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (reference.rs, registry.rs, catalog.rs, search.rs)    │
//! │  - Immutable registry + catalog, pure search functions      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sources (source/)                                          │
//! │  - CatalogSource trait: built-in, JSON file, in-memory      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Searching
//!
//! A search is a free-text query plus four filters (category, difficulty, "has
//! examples", "has task"). A property is shown when it passes every one of them;
//! there is no ranking, results keep catalog order. See [`search`] for the exact
//! rules and [`search::PropertySearch`] for the stateful session a UI drives.
//!
//! ## Data Is a Value
//!
//! The registry and catalog are built once, validated, and then only read. They
//! are never global: build a [`reference::CssReference`] from any
//! [`source::CatalogSource`] and pass it around. Tests do exactly that with small
//! synthetic catalogs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One function per user-facing operation
//! - [`reference`]: Registry + catalog bundle and the consistency check
//! - [`registry`]: Category taxonomy
//! - [`catalog`]: Property records and lookups
//! - [`search`]: Query/filter engine and derived statistics
//! - [`source`]: Where catalog data comes from
//! - [`model`]: Core data types
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod reference;
pub mod registry;
pub mod search;
pub mod source;
