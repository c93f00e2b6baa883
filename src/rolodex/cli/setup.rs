use clap::{Args, CommandFactory, Parser, Subcommand};
use colored::Colorize;
use rolodex::api::{ExportFormat, PageSize, SortKey};
use std::path::PathBuf;
use std::str::FromStr;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "rolodex",
    bin_name = "rolodex",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Searchable, paginated contact table", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file with contacts (defaults to the built-in sample)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Table,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Table => "Table Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "browse" | "show" => Some(CommandGroup::Table),
            "export" | "tags" => Some(CommandGroup::Data),
            "config" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Table, CommandGroup::Data, CommandGroup::Misc]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("rolodex {version}\n"));
    output.push_str("Searchable, paginated contact table\n");
    output.push('\n');
    output.push_str("Usage: rolodex [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading().bold()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {} {}\n", format!("{name:<12}").cyan(), about));
            }
        }
    }

    output.push('\n');
    output.push_str(&format!("{}\n", "Options:".bold()));
    output.push_str("      --data <FILE>  JSON file with contacts\n");
    output.push_str("      --no-color     Disable colored output\n");
    output.push_str("  -v, --verbose      Verbose output\n");
    output.push_str("  -h, --help         Print help\n");
    output.push_str("  -V, --version      Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::List { .. }) => "list",
        Some(Commands::Browse { .. }) => "browse",
        Some(Commands::Show { .. }) => "show",
        Some(Commands::Export { .. }) => "export",
        Some(Commands::Tags) => "tags",
        Some(Commands::Config { .. }) => "config",
        None => {
            print_grouped_help();
            return;
        }
    };
    print_help_for_command(name);
}

/// Table state shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Search term (name, email, phone, tag or label)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort by: none, dateCreated, name, email
    #[arg(long, value_parser = SortKey::from_str)]
    pub sort: Option<SortKey>,

    /// Rows per page: 5, 10, 20 or 50
    #[arg(long, value_parser = PageSize::from_str)]
    pub per_page: Option<PageSize>,

    /// Page number (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Contact ids to select (comma separated)
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub select: Vec<String>,

    /// Select every contact matching the search
    #[arg(long)]
    pub select_all: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a page of the contact table
    #[command(alias = "ls", display_order = 1)]
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Browse the table interactively (commands read from stdin)
    #[command(alias = "b", display_order = 2)]
    Browse {
        /// Sort by: none, dateCreated, name, email
        #[arg(long, value_parser = SortKey::from_str)]
        sort: Option<SortKey>,

        /// Rows per page: 5, 10, 20 or 50
        #[arg(long, value_parser = PageSize::from_str)]
        per_page: Option<PageSize>,
    },

    /// Show full details for one or more contacts
    #[command(alias = "v", display_order = 3)]
    Show {
        /// Contact ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Export selected contacts (or all matching ones)
    #[command(display_order = 10)]
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Output format: csv or json
        #[arg(short, long, default_value = "csv", value_parser = ExportFormat::from_str)]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List tags and their badge styles
    #[command(display_order = 11)]
    Tags,

    /// Get or set configuration (per-page, sort, data)
    #[command(display_order = 20)]
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
