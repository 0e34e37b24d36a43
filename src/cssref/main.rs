use clap::Parser;
use cssref::api::{CmdResult, ConfigAction, CssRefApi};
use cssref::config::CssRefConfig;
use cssref::error::{CssRefError, Result};
use cssref::reference::CssReference;
use cssref::source::builtin::BuiltinSource;
use cssref::source::json::JsonFileSource;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands, FilterArgs};
use print::ListStyle;

const HOME_ENV: &str = "CSSREF_HOME";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

struct AppContext {
    api: CssRefApi,
    config: CssRefConfig,
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let needs_catalog = !matches!(cli.command, Some(Commands::Config { .. }));
    let ctx = init_context(&cli, needs_catalog)?;

    match cli.command {
        Some(Commands::List { query, filters }) => {
            handle_list(&ctx, query.as_deref().unwrap_or(""), &filters)
        }
        Some(Commands::Search { term, filters }) => handle_list(&ctx, &term, &filters),
        Some(Commands::Show { id, json }) => handle_show(&ctx, &id, json),
        Some(Commands::Related { id }) => handle_related(&ctx, &id),
        Some(Commands::Categories { non_empty }) => handle_categories(&ctx, non_empty),
        Some(Commands::Check) => handle_check(&ctx),
        Some(Commands::Export { ids }) => handle_export(&ctx, &ids),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, "", &FilterArgs::default()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "cssref", "cssref")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CssRefError::Config("Could not determine config dir".to_string()))
}

/// `config` runs without a catalog so a broken `catalog-path` can still be fixed.
fn init_context(cli: &Cli, needs_catalog: bool) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = CssRefConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        CssRefConfig::default()
    });

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog_path.clone());
    let reference = match catalog_path {
        _ if !needs_catalog => CssReference::default(),
        Some(path) => CssReference::load(&JsonFileSource::new(path))?,
        None => CssReference::load(&BuiltinSource)?,
    };

    Ok(AppContext {
        api: CssRefApi::new(reference, config_dir),
        config,
    })
}

fn exit_code(result: &CmdResult) -> ExitCode {
    if result.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn handle_list(ctx: &AppContext, query: &str, filters: &FilterArgs) -> Result<ExitCode> {
    let updates = filters.updates()?;
    let result = ctx.api.list(query, &updates)?;

    print::print_properties(
        &result.listed_properties,
        &result.categories,
        &ListStyle::from(&ctx.config),
    );
    if let Some(stats) = &result.stats {
        print::print_stats(stats);
    }
    print::print_messages(&result.messages);
    Ok(exit_code(&result))
}

fn handle_show(ctx: &AppContext, id: &str, json: bool) -> Result<ExitCode> {
    let result = ctx.api.show(id)?;

    if let Some(property) = result.listed_properties.first() {
        if json {
            let out = serde_json::to_string_pretty(property).map_err(CssRefError::Serialization)?;
            println!("{}", out);
        } else {
            print::print_property(property, result.categories.first());
        }
    }
    print::print_messages(&result.messages);
    Ok(exit_code(&result))
}

fn handle_related(ctx: &AppContext, id: &str) -> Result<ExitCode> {
    let result = ctx.api.related(id)?;
    if !result.listed_properties.is_empty() {
        print::print_properties(
            &result.listed_properties,
            &result.categories,
            &ListStyle::from(&ctx.config),
        );
    }
    print::print_messages(&result.messages);
    Ok(exit_code(&result))
}

fn handle_categories(ctx: &AppContext, non_empty: bool) -> Result<ExitCode> {
    let result = ctx.api.categories(non_empty)?;
    print::print_categories(&result.categories, &result.listed_properties);
    print::print_messages(&result.messages);
    Ok(exit_code(&result))
}

fn handle_check(ctx: &AppContext) -> Result<ExitCode> {
    let result = ctx.api.check()?;
    print::print_messages(&result.messages);
    Ok(exit_code(&result))
}

fn handle_export(ctx: &AppContext, ids: &[String]) -> Result<ExitCode> {
    let result = ctx.api.export(ids)?;
    // Warnings go to stderr so stdout stays valid JSON.
    for message in &result.messages {
        eprintln!("{}", message.content);
    }
    if let Some(json) = &result.export {
        println!("{}", json);
    }
    Ok(exit_code(&result))
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<ExitCode> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print::print_config(config);
        }
    }
    print::print_messages(&result.messages);
    Ok(exit_code(&result))
}
