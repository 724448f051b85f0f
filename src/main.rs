use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use version_checker::config::{CheckerConfig, log_path};
use version_checker::{GitHubReleases, ReleaseSource, Version, check_upgrade, logging};

#[derive(Parser)]
#[command(name = "version-checker")]
#[command(version, about = "Check GitHub releases for a newer version")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to a JSON config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the GitHub API (e.g. for GitHub Enterprise)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write JSON logs to a file (defaults to the data directory)
    #[arg(long, global = true, value_name = "PATH", num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the latest release tag of a repository
    Latest { owner: String, repo: String },
    /// Check whether a release newer than CURRENT exists
    Check {
        owner: String,
        repo: String,
        /// Running version, e.g. 1.2.3 or v1.2.3
        current: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .clone()
        .map(|path| path.unwrap_or_else(log_path));
    let _guard =
        logging::init(cli.verbose, log_file.as_deref()).context("Failed to set up logging")?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = CheckerConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(secs) = cli.timeout {
        config.timeout_ms = secs.saturating_mul(1000);
    }
    info!("Using GitHub API at {}", config.base_url);

    let releases = GitHubReleases::from_config(config);

    match cli.command {
        Command::Latest { owner, repo } => {
            let latest = releases
                .latest_version(&owner, &repo)
                .await
                .with_context(|| format!("Failed to fetch latest release of {}/{}", owner, repo))?;

            if cli.json {
                let output = serde_json::json!({
                    "owner": owner,
                    "repo": repo,
                    "latest": latest.tagged(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", latest.tagged());
            }
        }
        Command::Check {
            owner,
            repo,
            current,
        } => {
            let current = Version::parse_plain(&current)
                .with_context(|| format!("Invalid current version {:?}", current))?
                .with_repository(&owner, &repo);

            let check = check_upgrade(&releases, &current)
                .await
                .with_context(|| format!("Failed to check {}/{} for upgrades", owner, repo))?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&check.report(&current))?);
            } else if check.is_newer {
                println!(
                    "Upgrade available: {} -> {}",
                    current.tagged(),
                    check.latest.tagged()
                );
            } else {
                println!(
                    "Up to date: {} (latest release {})",
                    current.tagged(),
                    check.latest.tagged()
                );
            }
        }
    }

    Ok(())
}
