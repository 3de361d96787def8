//! Cookie session for the ctfile API.
//!
//! The API recognises a logged-in user by the `pubcookie` cookie on the API
//! host. A [`Session`] owns the cookie jar used by one client, so separate
//! clients never share login state.

use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::Url;

use crate::error::{CtfileError, Result};

/// Name of the session cookie issued by the provider.
pub const PUB_COOKIE_NAME: &str = "pubcookie";

/// Cookie jar plus the authenticated flag derived from it.
pub struct Session {
    jar: Arc<Jar>,
    authenticated: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl Session {
    /// A session with an empty cookie jar.
    pub fn anonymous() -> Self {
        Self {
            jar: Arc::new(Jar::default()),
            authenticated: false,
        }
    }

    /// Store `pubcookie` for the API host and mark the session authenticated.
    ///
    /// The value is not validated; a stale cookie only shows up as an empty
    /// or failed download response later.
    pub fn set_pub_cookie(&mut self, api_base: &str, value: &str) -> Result<()> {
        let url = Url::parse(api_base)
            .map_err(|e| CtfileError::InvalidConfig(format!("{}: {}", api_base, e)))?;

        self.jar
            .add_cookie_str(&format!("{}={}; Path=/", PUB_COOKIE_NAME, value), &url);
        self.authenticated = true;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub(crate) fn jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.authenticated)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::cookie::CookieStore;

    #[test]
    fn test_anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_set_pub_cookie_scoped_to_api_host() {
        let mut session = Session::anonymous();
        session
            .set_pub_cookie("https://webapi.400gb.com", "secret")
            .unwrap();
        assert!(session.is_authenticated());

        let api = Url::parse("https://webapi.400gb.com/getfile.php").unwrap();
        let header = session.jar().cookies(&api).unwrap();
        assert_eq!(header.to_str().unwrap(), "pubcookie=secret");

        let other = Url::parse("https://example.com/").unwrap();
        assert!(session.jar().cookies(&other).is_none());
    }

    #[test]
    fn test_set_pub_cookie_invalid_base() {
        let mut session = Session::anonymous();
        let result = session.set_pub_cookie("not a url", "secret");
        assert!(matches!(result, Err(CtfileError::InvalidConfig(_))));
        assert!(!session.is_authenticated());
    }
}
