// ABOUTME: CLI argument parsing and command routing for caprae
//
// Provides command-line interface for:
// - Launching the TUI at a path (tui, default)
// - Printing the path table (routes)
// - Filtering the marketplace lists without a terminal UI (list)

pub mod list;
pub mod routes;

use clap::{Parser, Subcommand, ValueEnum};

/// Caprae Capital - business marketplace in the terminal
#[derive(Parser)]
#[command(name = "caprae")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui(TuiArgs),

    /// Print every navigable path
    Routes,

    /// Filter one of the marketplace lists and print the result
    List(ListArgs),
}

#[derive(clap::Args, Default)]
pub struct TuiArgs {
    /// Path to open first, e.g. /dashboard (defaults to the configured start path)
    #[arg(long)]
    pub path: Option<String>,
}

/// Lists that can be filtered from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    Dashboard,
    Matches,
    Messages,
    Tasks,
    Documents,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Which list to filter
    #[arg(value_enum)]
    pub page: ListTarget,

    /// Case-insensitive search term
    #[arg(long, default_value = "")]
    pub search: String,

    /// Category label, e.g. "Ready to Buy" (defaults to All)
    #[arg(long)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::parse_from(["caprae"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_list_arguments() {
        let cli = Cli::parse_from([
            "caprae",
            "list",
            "dashboard",
            "--search",
            "sarah",
            "--category",
            "Research Phase",
            "--format",
            "json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.page, ListTarget::Dashboard);
                assert_eq!(args.search, "sarah");
                assert_eq!(args.category.as_deref(), Some("Research Phase"));
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_tui_path() {
        let cli = Cli::parse_from(["caprae", "tui", "--path", "/onboarding/buyer"]);
        match cli.command {
            Some(Commands::Tui(args)) => assert_eq!(args.path.as_deref(), Some("/onboarding/buyer")),
            _ => panic!("expected tui command"),
        }
    }
}
