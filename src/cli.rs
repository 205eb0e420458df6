use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "pr-fetcher")]
#[command(about = "Fetch merged pull requests from GitHub repositories", version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "EXAMPLES:
    pr-fetcher -r owner/repo1,owner/repo2          PRs merged in the last week
    pr-fetcher -r owner/repo -b develop -w 4       Last four weeks on develop
    pr-fetcher -r owner/repo --since 2024-01-10    Since a date (UTC midnight)
    pr-fetcher -r owner/repo --format json         Machine-readable report")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub fetch: FetchArgs,

    /// Output format (text, table, json)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Show debug logging and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Args, Clone, Debug, Default)]
pub struct FetchArgs {
    /// GitHub repositories, comma-separated (e.g. owner/repo1,owner/repo2)
    #[arg(long, short, value_delimiter = ',')]
    pub repos: Vec<String>,

    /// Base branch to check PRs against (default: config default_branch, then main)
    #[arg(long, short)]
    pub branch: Option<String>,

    /// Path to config file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Date since when to fetch PRs (YYYY-MM-DD)
    #[arg(long, short)]
    pub since: Option<String>,

    /// Number of weeks ago to fetch PRs from (overrides --since)
    #[arg(long, short)]
    pub weeks: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    pr-fetcher init")]
    Init,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    pr-fetcher completions bash > ~/.bash_completion.d/pr-fetcher
    pr-fetcher completions zsh > ~/.zfunc/_pr-fetcher")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fetch_flags() {
        let cli = Cli::try_parse_from([
            "pr-fetcher",
            "-r",
            "org/a,org/b",
            "-b",
            "develop",
            "--since",
            "2024-01-10",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.fetch.repos, vec!["org/a", "org/b"]);
        assert_eq!(cli.fetch.branch.as_deref(), Some("develop"));
        assert_eq!(cli.fetch.since.as_deref(), Some("2024-01-10"));
        assert_eq!(cli.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_json_alias() {
        let cli = Cli::try_parse_from(["pr-fetcher", "-r", "org/a", "--json"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_subcommand() {
        let cli = Cli::try_parse_from(["pr-fetcher", "completions", "bash"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }
}
