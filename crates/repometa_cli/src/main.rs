//! Repometa CLI - repository metadata reports from the command line.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "repometa")]
#[command(version)]
#[command(about = "Retrieve GitHub repository metadata")]
#[command(
    long_about = "Repometa retrieves repository metadata (releases, tags, license, last \
activity, language breakdown, topics) from the GitHub API and renders it as a \
plain report or as JSON."
)]
#[command(after_long_help = r#"EXAMPLES
    Full metadata report:
        $ repometa report https://github.com/rust-lang/rust

    Machine-readable output:
        $ repometa report https://github.com/rust-lang/rust --json

    Only the dominant languages or the topics:
        $ repometa languages https://github.com/rust-lang/rust
        $ repometa topics https://github.com/rust-lang/rust

CONFIGURATION
    Repometa reads configuration from:
      1. Environment variables (REPOMETA_* prefix)
      2. ~/.config/repometa/config.toml (or $XDG_CONFIG_HOME/repometa/config.toml)

ENVIRONMENT VARIABLES
    REPOMETA_GITHUB_TOKEN    GitHub personal access token (optional; without it
                             requests run unauthenticated and hit GitHub's
                             stricter anonymous rate limits)
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full metadata report for one repository
    Report {
        /// Repository URL (https://github.com/<owner>/<name>)
        url: String,
        /// Emit JSON instead of a human-readable report
        #[arg(long)]
        json: bool,
    },
    /// Dominant languages of one repository
    Languages {
        /// Repository URL (https://github.com/<owner>/<name>)
        url: String,
    },
    /// Topic labels of one repository
    Topics {
        /// Repository URL (https://github.com/<owner>/<name>)
        url: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = config::load();

    let result = match cli.command {
        Commands::Report { url, json } => commands::handle_report(&url, json, &config).await,
        Commands::Languages { url } => commands::handle_languages(&url, &config).await,
        Commands::Topics { url } => commands::handle_topics(&url, &config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn report_subcommand_parses_url_and_json_flag() {
        let cli = Cli::parse_from(["repometa", "report", "https://github.com/a/b", "--json"]);
        match cli.command {
            Commands::Report { url, json } => {
                assert_eq!(url, "https://github.com/a/b");
                assert!(json);
            }
            _ => panic!("expected report subcommand"),
        }
    }
}
