//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tuneup",
    bin_name = "tuneup",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f527} Service intake classification and price estimation",
    long_about = "Tuneup classifies free-text customer messages onto catalog \
                  services and resolves estimated prices for quoting.",
    after_help = "EXAMPLES:\n\
        \x20 tuneup classify \"my car needs an oil change and new brake pads\"\n\
        \x20 tuneup classify --quote \"squealing brakes\"\n\
        \x20 tuneup quote oil-change\n\
        \x20 tuneup list --category brakes\n\
        \x20 tuneup completions bash > /usr/share/bash-completion/completions/tuneup",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a free-text customer message onto a catalog service.
    #[command(
        visible_alias = "c",
        about = "Classify a customer message",
        after_help = "EXAMPLES:\n\
            \x20 tuneup classify \"time for an oil change\"\n\
            \x20 tuneup classify --quote \"grinding noise when braking\"\n\
            \x20 tuneup classify --output-format json \"dead battery\""
    )]
    Classify(ClassifyArgs),

    /// Resolve an estimated price for a service id or loose phrase.
    #[command(
        visible_alias = "q",
        about = "Quote an estimated price",
        after_help = "EXAMPLES:\n\
            \x20 tuneup quote oil-change\n\
            \x20 tuneup quote \"Front Brake\"\n\
            \x20 tuneup quote \"something custom\"   # always resolves, never fails"
    )]
    Quote(QuoteArgs),

    /// List the service catalog.
    #[command(
        visible_alias = "ls",
        about = "List catalog services",
        after_help = "EXAMPLES:\n\
            \x20 tuneup list\n\
            \x20 tuneup list --category electrical\n\
            \x20 tuneup list --format csv"
    )]
    List(ListArgs),

    /// Initialise a Tuneup configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 tuneup init           # default location\n\
            \x20 tuneup init --force   # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tuneup completions bash > ~/.local/share/bash-completion/completions/tuneup\n\
            \x20 tuneup completions zsh  > ~/.zfunc/_tuneup\n\
            \x20 tuneup completions fish > ~/.config/fish/completions/tuneup.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Tuneup configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tuneup config get tables.file\n\
            \x20 tuneup config set output.format plain\n\
            \x20 tuneup config list"
    )]
    Config(ConfigCommands),
}

// ── classify ──────────────────────────────────────────────────────────────────

/// Arguments for `tuneup classify`.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Free-text customer message.  Empty or off-topic messages are valid
    /// and report "no match" rather than failing.
    #[arg(value_name = "MESSAGE", help = "Customer message to classify")]
    pub message: String,

    /// Also resolve a price estimate for the classification result
    /// (the full intake pipeline, as the booking flow runs it).
    #[arg(long = "quote", help = "Chain into price resolution")]
    pub quote: bool,
}

// ── quote ─────────────────────────────────────────────────────────────────────

/// Arguments for `tuneup quote`.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Service id or loose phrase.  Resolution always succeeds: catalog
    /// match, fallback family price, or the fixed default.
    #[arg(value_name = "SERVICE", help = "Service id or phrase to quote")]
    pub service: String,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `tuneup list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by category label.
    #[arg(long = "category", value_name = "LABEL", help = "Filter by category")]
    pub category: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `tuneup init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tuneup completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tuneup config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `tables.file`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn verify_cli_structure() {
        // clap's internal consistency check — catches conflicts, missing values, etc.
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_classify_command() {
        let cli = Cli::parse_from(["tuneup", "classify", "my brakes squeal"]);
        match cli.command {
            Commands::Classify(args) => {
                assert_eq!(args.message, "my brakes squeal");
                assert!(!args.quote);
            }
            _ => panic!("expected Classify command"),
        }
    }

    #[test]
    fn parse_classify_with_quote_flag() {
        let cli = Cli::parse_from(["tuneup", "classify", "--quote", "oil change"]);
        match cli.command {
            Commands::Classify(args) => assert!(args.quote),
            _ => panic!("expected Classify command"),
        }
    }

    #[test]
    fn parse_quote_command() {
        let cli = Cli::parse_from(["tuneup", "quote", "oil-change"]);
        match cli.command {
            Commands::Quote(args) => assert_eq!(args.service, "oil-change"),
            _ => panic!("expected Quote command"),
        }
    }

    #[test]
    fn parse_list_with_category() {
        let cli = Cli::parse_from(["tuneup", "list", "--category", "brakes"]);
        match cli.command {
            Commands::List(args) => assert_eq!(args.category.as_deref(), Some("brakes")),
            _ => panic!("expected List command"),
        }
    }

    #[test]
    fn classify_alias() {
        let cli = Cli::parse_from(["tuneup", "c", "oil change"]);
        assert!(matches!(cli.command, Commands::Classify(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["tuneup", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
