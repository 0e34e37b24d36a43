use clap::{Args, Parser, Subcommand};
use cssref::error::Result;
use cssref::search::{CategoryFilter, DifficultyFilter, FilterUpdate};
use std::path::PathBuf;

pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "cssref", version = VERSION)]
#[command(about = "Searchable CSS property reference", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read properties from this catalog file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only properties in this category ("all" disables the filter)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only properties of this difficulty: beginner, intermediate, advanced or all
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Only properties that come with examples
    #[arg(long)]
    pub has_examples: bool,

    /// Only properties that come with a practice task
    #[arg(long)]
    pub has_task: bool,
}

impl FilterArgs {
    pub fn updates(&self) -> Result<Vec<FilterUpdate>> {
        let mut updates = Vec::new();
        if let Some(category) = &self.category {
            let filter = category
                .parse::<CategoryFilter>()
                .unwrap_or_else(|never| match never {});
            updates.push(FilterUpdate::Category(filter));
        }
        if let Some(difficulty) = &self.difficulty {
            updates.push(FilterUpdate::Difficulty(
                difficulty.parse::<DifficultyFilter>()?,
            ));
        }
        if self.has_examples {
            updates.push(FilterUpdate::HasExamples(true));
        }
        if self.has_task {
            updates.push(FilterUpdate::HasTask(true));
        }
        Ok(updates)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List properties, optionally narrowed by a query and filters
    #[command(alias = "ls")]
    List {
        /// Text to look for in names, titles, descriptions and tags
        query: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Search properties (same as `list <term>`)
    Search {
        term: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show everything known about one property
    #[command(alias = "s")]
    Show {
        /// Property id, e.g. font-size
        id: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the properties related to one property
    Related {
        /// Property id, e.g. margin
        id: String,
    },

    /// List categories
    #[command(alias = "cats")]
    Categories {
        /// Hide categories that have no properties listed
        #[arg(long)]
        non_empty: bool,
    },

    /// Check the catalog for inconsistencies
    Check,

    /// Print the catalog (or some properties of it) as JSON
    Export {
        /// Property ids to export (all when omitted)
        ids: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (catalog-path, line-width, show-icons)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
