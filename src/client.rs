//! ctfile web API client: share listing and download tier resolution.

use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{CtfileError, Result};
use crate::listing::decode_listing;
use crate::models::{DownloadVariants, Entry, Share, ShareEnvelope};
use crate::session::Session;
use crate::variants::decode_variants;

/// Share metadata endpoint.
const GETDIR_PATH: &str = "/getdir.php";

/// Per-file download endpoint.
const GETFILE_PATH: &str = "/getfile.php";

/// UTF-8 byte-order mark the JSON endpoints sometimes prepend.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Client for the ctfile web API.
///
/// Every call issues its own requests; nothing is cached between calls.
pub struct CtfileClient {
    config: ClientConfig,
    session: Session,
    http: Client,
}

impl CtfileClient {
    /// Create a client with an anonymous session.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_session(config, Session::anonymous())
    }

    /// Create a client that sends requests through `session`'s cookie jar.
    pub fn with_session(config: ClientConfig, session: Session) -> Result<Self> {
        let http = build_http_client(&config, &session)?;
        Ok(Self {
            config,
            session,
            http,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Log in by handing over an existing `pubcookie` value.
    pub fn set_pub_cookie(&mut self, value: &str) -> Result<()> {
        self.session.set_pub_cookie(&self.config.api_base, value)
    }

    /// Drop all cookies and return to an anonymous session.
    pub fn logout(&mut self) -> Result<()> {
        let session = Session::anonymous();
        self.http = build_http_client(&self.config, &session)?;
        self.session = session;
        Ok(())
    }

    /// Fetch a share and its full listing.
    ///
    /// # Arguments
    /// * `share_id` - The share identifier from the share link
    /// * `folder_id` - Folder inside the share; empty for the share root
    pub async fn get_share_info(&self, share_id: &str, folder_id: &str) -> Result<Share> {
        let mut share = self.fetch_share(share_id, folder_id).await?;
        self.populate_entries(&mut share).await?;
        Ok(share)
    }

    /// Fetch share metadata only. The returned share has no entries yet.
    pub async fn fetch_share(&self, share_id: &str, folder_id: &str) -> Result<Share> {
        let url = self.config.endpoint(GETDIR_PATH);
        debug!("Fetching share {} (folder {:?})", share_id, folder_id);

        let body = self
            .get_ok(&url, &[("d", share_id), ("folder_id", folder_id)])
            .await?;
        let envelope: ShareEnvelope = serde_json::from_slice(strip_bom(&body))?;

        Ok(Share {
            share_id: share_id.to_string(),
            folder_id: folder_id.to_string(),
            listing_url: envelope.url,
            folder_name: envelope.folder_name,
            entries: Vec::new(),
        })
    }

    /// Fetch the share's listing resource and append its entries in order.
    pub async fn populate_entries(&self, share: &mut Share) -> Result<()> {
        let url = self.config.endpoint(&share.listing_url);
        let body = self.get_ok(&url, &[]).await?;

        let entries = decode_listing(strip_bom(&body))?;
        info!("Share {} listed {} entries", share.share_id, entries.len());
        share.entries.extend(entries);
        Ok(())
    }

    /// Resolve the direct download URLs offered for a file, keyed by tier label.
    ///
    /// Fails without any request when `entry` is a folder or the session has
    /// no pubcookie. An empty map means the provider offered no tiers.
    pub async fn get_download_variants(&self, entry: &Entry) -> Result<DownloadVariants> {
        if !entry.is_file() {
            return Err(CtfileError::NotAFile(entry.name.clone()));
        }
        if !self.session.is_authenticated() {
            return Err(CtfileError::NotAuthenticated);
        }

        let url = self.config.endpoint(GETFILE_PATH);
        let body = self.get_ok(&url, &[("f", entry.id.as_str())]).await?;

        let variants = decode_variants(strip_bom(&body))?;
        debug!("File {} has {} download tiers", entry.id, variants.len());
        Ok(variants)
    }

    /// GET `url` with the Origin header and return the body of a 200 response.
    async fn get_ok(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>> {
        debug!("GET {}", url);

        let mut request = self.http.get(url).header("Origin", &self.config.origin);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(CtfileError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

fn build_http_client(config: &ClientConfig, session: &Session) -> Result<Client> {
    let client = Client::builder()
        .cookie_provider(session.jar())
        .timeout(config.timeout)
        .build()?;
    Ok(client)
}

fn strip_bom(body: &[u8]) -> &[u8] {
    body.strip_prefix(UTF8_BOM).unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom(b"\xEF\xBB\xBF{}"), b"{}");
        assert_eq!(strip_bom(b"{}"), b"{}");
        assert_eq!(strip_bom(b""), b"");
    }

    #[test]
    fn test_logout_resets_session() {
        let mut client = CtfileClient::new(ClientConfig::default()).unwrap();
        assert!(!client.is_authenticated());

        client.set_pub_cookie("cookie").unwrap();
        assert!(client.is_authenticated());

        client.logout().unwrap();
        assert!(!client.is_authenticated());
    }
}
