//! ctfile CLI - List ctfile shares and resolve download links.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ctfile::config::{DEFAULT_API_BASE, DEFAULT_ORIGIN, DEFAULT_TIMEOUT_SECS};
use ctfile::{parse_share_link, ClientConfig, CtfileClient, Entry};

/// CLI tool for browsing ctfile shares.
#[derive(Parser)]
#[command(name = "ctfile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Value of the `pubcookie` cookie from a logged-in browser session.
    #[arg(long, env = "CTFILE_PUBCOOKIE", hide_env_values = true)]
    pub_cookie: Option<String>,

    /// API base URL.
    #[arg(long, env = "CTFILE_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Origin header sent with every request.
    #[arg(long, env = "CTFILE_ORIGIN", default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Request timeout in seconds.
    #[arg(long, env = "CTFILE_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entries of a share.
    List {
        /// Share link or ID.
        share: String,

        /// Folder ID inside the share (overrides the link's folder_id).
        #[arg(long, short = 'f')]
        folder: Option<String>,
    },

    /// Print direct download links for files in a share.
    Links {
        /// Share link or ID.
        share: String,

        /// Folder ID inside the share (overrides the link's folder_id).
        #[arg(long, short = 'f')]
        folder: Option<String>,

        /// Only resolve the file with this name or ID.
        #[arg(long)]
        file: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ctfile=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::default()
        .with_api_base(cli.api_base)
        .with_origin(cli.origin)
        .with_timeout(Duration::from_secs(cli.timeout));

    let mut client = CtfileClient::new(config).context("Failed to create client")?;
    if let Some(cookie) = &cli.pub_cookie {
        client
            .set_pub_cookie(cookie)
            .context("Failed to set pubcookie")?;
    }

    match cli.command {
        Commands::List { share, folder } => {
            let share_ref = parse_share_link(&share)
                .with_context(|| format!("Invalid share link or ID: {}", share))?;
            let folder_id = folder.unwrap_or(share_ref.folder_id);

            let share = client
                .get_share_info(&share_ref.share_id, &folder_id)
                .await
                .with_context(|| format!("Failed to list share: {}", share_ref.share_id))?;

            if share.entries.is_empty() {
                println!("No entries found.");
            } else {
                println!("KIND\tID\tSIZE\tDATE\tNAME");
                for entry in &share.entries {
                    println!("{}", entry);
                }
                info!(
                    "{} folders, {} files",
                    share.folders().count(),
                    share.files().count()
                );
            }
        }

        Commands::Links {
            share,
            folder,
            file,
        } => {
            if !client.is_authenticated() {
                anyhow::bail!("Resolving download links needs --pub-cookie or CTFILE_PUBCOOKIE");
            }

            let share_ref = parse_share_link(&share)
                .with_context(|| format!("Invalid share link or ID: {}", share))?;
            let folder_id = folder.unwrap_or(share_ref.folder_id);

            let share = client
                .get_share_info(&share_ref.share_id, &folder_id)
                .await
                .with_context(|| format!("Failed to list share: {}", share_ref.share_id))?;

            let targets: Vec<&Entry> = share
                .files()
                .filter(|entry| matches_filter(entry, file.as_deref()))
                .collect();

            if targets.is_empty() {
                anyhow::bail!("No matching files in share {}", share_ref.share_id);
            }

            for entry in targets {
                match client.get_download_variants(entry).await {
                    Ok(variants) if variants.is_empty() => {
                        warn!("No download tiers offered for {}", entry.name);
                    }
                    Ok(variants) => {
                        let mut variants: Vec<_> = variants.into_iter().collect();
                        variants.sort();
                        println!("{}", entry.name);
                        for (tier, url) in variants {
                            println!("  {}\t{}", tier, url);
                        }
                    }
                    Err(e) => {
                        eprintln!("{}: {}", entry.name, e);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Match a file by exact name or ID; no filter matches everything.
fn matches_filter(entry: &Entry, filter: Option<&str>) -> bool {
    match filter {
        Some(wanted) => entry.name == wanted || entry.id == wanted,
        None => true,
    }
}
