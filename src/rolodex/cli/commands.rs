//! Dispatch and per-command handlers.
//!
//! Handlers build a [`ViewQuery`] from flags plus config defaults, call the
//! API, and print what comes back. They hold no table logic of their own.

use super::browse::run_session;
use super::logging::init_tracing;
use super::render::{
    eprint_messages, print_messages, render_contacts, render_table, render_tags,
};
use super::setup::{print_grouped_help, print_subcommand_help, Cli, Commands, ViewArgs};
use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::{ConfigAction, ExportFormat, PageSize, RolodexApi, SortKey, ViewQuery};
use rolodex::commands;
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::store::fs::FileStore;
use rolodex::store::memory::InMemoryStore;
use rolodex::store::ContactSource;
use rolodex::view::ContactsView;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the config directory (used by tests and portable setups).
const HOME_ENV: &str = "ROLODEX_HOME";

struct AppContext {
    config_dir: PathBuf,
    config: RolodexConfig,
    data_file: Option<PathBuf>,
    use_color: bool,
}

impl AppContext {
    /// Opens the contact source. Deferred so `config` works even when the
    /// configured data file is unreadable.
    fn api(&self) -> Result<RolodexApi<Box<dyn ContactSource>>> {
        let source: Box<dyn ContactSource> = match &self.data_file {
            Some(path) => Box::new(FileStore::open(path)?),
            None => Box::new(InMemoryStore::sample()),
        };
        Ok(RolodexApi::new(source, self.config_dir.clone()))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    init_tracing(cli.verbose)?;
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { view }) => handle_list(&ctx, &view),
        Some(Commands::Browse { sort, per_page }) => handle_browse(&ctx, sort, per_page),
        Some(Commands::Show { ids }) => handle_show(&ctx, &ids),
        Some(Commands::Export {
            view,
            format,
            output,
        }) => handle_export(&ctx, &view, format, output.as_deref()),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, &ViewArgs::default_page()),
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RolodexError::Config("Could not determine config dir".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = RolodexConfig::load(&config_dir)?;
    debug!(dir = %config_dir.display(), ?config, "loaded config");

    let data_file = cli.data.clone().or_else(|| config.data_file.clone());
    let use_color = !cli.no_color && console::colors_enabled();
    Ok(AppContext {
        config_dir,
        config,
        data_file,
        use_color,
    })
}

impl ViewArgs {
    fn default_page() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    fn to_query(&self, config: &RolodexConfig) -> ViewQuery {
        ViewQuery {
            search: self.search.clone(),
            sort_by: self.sort.unwrap_or(config.sort_by),
            page_size: self.per_page.unwrap_or(config.per_page),
            page: self.page,
            selected: self.select.clone(),
            select_all: self.select_all,
        }
    }
}

fn handle_list(ctx: &AppContext, view: &ViewArgs) -> Result<()> {
    let result = ctx.api()?.list(&view.to_query(&ctx.config))?;
    if let Some(snapshot) = &result.snapshot {
        print!("{}", render_table(snapshot, ctx.use_color));
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_browse(
    ctx: &AppContext,
    sort: Option<SortKey>,
    per_page: Option<PageSize>,
) -> Result<()> {
    let view = ContactsView::new(
        per_page.unwrap_or(ctx.config.per_page),
        sort.unwrap_or(ctx.config.sort_by),
    );
    let api = ctx.api()?;
    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = std::io::stdout();
    run_session(
        &api,
        view,
        stdin.lock(),
        &mut stdout,
        ctx.use_color,
        prompt,
    )?;
    Ok(())
}

fn handle_show(ctx: &AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api()?.show(ids)?;
    print!("{}", render_contacts(&result.contacts, ctx.use_color));
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    view: &ViewArgs,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let result = ctx.api()?.export(&view.to_query(&ctx.config), format)?;
    let exported = result.exported.as_deref().unwrap_or_default();

    match output {
        Some(path) => {
            std::fs::write(path, exported)?;
            print_messages(&result.messages, ctx.use_color);
        }
        None => {
            print!("{}", exported);
            eprint_messages(&result.messages, ctx.use_color);
        }
    }
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api()?.tags()?;
    print!("{}", render_tags(&result.tags, ctx.use_color));
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&ctx.config_dir, action)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_defaults() {
        let mut config = RolodexConfig::default();
        config.set("per-page", "20").unwrap();
        config.set("sort", "email").unwrap();

        let args = ViewArgs {
            sort: Some(SortKey::Name),
            ..ViewArgs::default_page()
        };
        let query = args.to_query(&config);
        assert_eq!(query.sort_by, SortKey::Name);
        assert_eq!(query.page_size.get(), 20);
        assert_eq!(query.page, 1);
    }
}
