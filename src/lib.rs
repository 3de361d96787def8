//! ctfile - A client for the ctfile file-hosting web API.
//!
//! This library provides functionality to:
//! - Fetch a share and decode its folder listing into files and folders
//! - Resolve the direct download URLs offered for a file, per delivery tier
//!
//! # Example
//!
//! ```no_run
//! use ctfile::{ClientConfig, CtfileClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut client = CtfileClient::new(ClientConfig::default())?;
//!     client.set_pub_cookie("your-pubcookie")?;
//!
//!     let share = client.get_share_info("share-id", "").await?;
//!     for file in share.files() {
//!         for (tier, url) in client.get_download_variants(file).await? {
//!             println!("{}\t{}\t{}", file.name, tier, url);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod listing;
pub mod markup;
pub mod models;
pub mod session;
pub mod url_parser;
pub mod variants;

// Re-exports for convenience
pub use client::CtfileClient;
pub use config::ClientConfig;
pub use error::{CtfileError, Result};
pub use models::{DownloadVariants, Entry, EntryKind, Share};
pub use session::Session;
pub use url_parser::{parse_share_link, ShareRef};
