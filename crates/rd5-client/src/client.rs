//! RD5 HTTP client implementation

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use rd5_core::{parse_snapshot, ParameterId, Snapshot};
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::auth::{self, LoginFailure};
use crate::config::DeviceConfig;
use crate::error::{Rd5ClientError, Result};

/// Default request timeout; the device answers fast or not at all
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Login endpoint (issues session tokens)
const LOGIN_PATH: &str = "/config/login.cgi";
/// Parameter dump endpoint
const SNAPSHOT_PATH: &str = "/config/xml.xml";
/// Alarm dump endpoint
const ALARMS_PATH: &str = "/config/alarms.xml";
/// Parameter write endpoint
const WRITE_PATH: &str = "/config/xml.cgi";

/// Client for the RD5 web control protocol
///
/// Owns the HTTP transport and the current session token. Every
/// operation is a single GET with a bounded timeout; there is no retry
/// loop and no background refresh. The token lives behind a
/// reader/writer lock, so clones of the client share one session:
/// concurrent logins serialize on the write lock while reads use
/// whatever token is current when they start.
#[derive(Debug, Clone)]
pub struct Rd5Client {
    http: Client,
    base_url: Url,
    session: Arc<RwLock<Option<String>>>,
}

impl Rd5Client {
    /// Create a new client for a device
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the device (e.g., "http://192.168.68.106")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a new client with a custom request timeout
    pub fn with_config(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = Url::parse(base_url)?;

        Ok(Self {
            http,
            base_url,
            session: Arc::new(RwLock::new(None)),
        })
    }

    /// Create a client from a loaded [`DeviceConfig`]
    pub fn from_config(config: &DeviceConfig) -> Result<Self> {
        Self::with_config(&config.base_url(), Duration::from_secs(config.timeout_secs))
    }

    /// Get the device base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // =========================================================================
    // Session State
    // =========================================================================

    /// Whether a session token is currently held
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    /// The current session token, if any
    pub fn session_token(&self) -> Option<String> {
        self.session.read().clone()
    }

    /// Adopt a previously issued token without logging in again. The
    /// device keeps sessions alive until it restarts, so a stored token
    /// usually outlives the process that obtained it.
    pub fn restore_session(&self, token: impl Into<String>) {
        *self.session.write() = Some(token.into());
    }

    /// Drop the current session token. Subsequent fetches run
    /// unauthenticated until the next [`login`](Self::login).
    pub fn logout(&self) {
        *self.session.write() = None;
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Authenticate with the device password.
    ///
    /// Sends the MD5 `magic` digest with a fresh nonce and stores the
    /// numeric session token the device returns. Any failure, transport
    /// included, leaves the client unauthenticated; no partial session
    /// state survives a bad handshake.
    #[instrument(skip(self, password))]
    pub async fn login(&self, password: &str) -> Result<String> {
        let magic = rd5_conv::login_magic(password);

        let mut url = self.base_url.join(LOGIN_PATH)?;
        url.query_pairs_mut()
            .append_pair("magic", &magic)
            .append_pair("rnd", &auth::nonce());

        let body = match self.get_text(url).await {
            Ok(body) => body,
            Err(e) => {
                *self.session.write() = None;
                return Err(Rd5ClientError::AuthenticationFailed(format!(
                    "login request failed: {}",
                    e
                )));
            }
        };

        match auth::parse_login_response(&body) {
            Ok(token) => {
                debug!("session established");
                *self.session.write() = Some(token.clone());
                Ok(token)
            }
            Err(failure) => {
                *self.session.write() = None;
                let reason = match failure {
                    LoginFailure::Denied => "device denied the supplied password",
                    LoginFailure::Malformed => "invalid login response from device",
                };
                Err(Rd5ClientError::AuthenticationFailed(reason.to_string()))
            }
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Fetch the raw parameter dump.
    ///
    /// Unauthenticated clients omit the `auth` pair; the device then
    /// answers with its restricted unauthenticated view, which is still
    /// a valid document.
    #[instrument(skip(self))]
    pub async fn fetch_snapshot(&self) -> Result<String> {
        self.fetch_document(SNAPSHOT_PATH).await
    }

    /// Fetch and parse the parameter dump into a [`Snapshot`]
    pub async fn snapshot(&self) -> Result<Snapshot> {
        let body = self.fetch_snapshot().await?;
        Ok(parse_snapshot(&body)?)
    }

    /// Fetch the raw alarm dump; same contract as [`fetch_snapshot`](Self::fetch_snapshot)
    #[instrument(skip(self))]
    pub async fn fetch_alarms(&self) -> Result<String> {
        self.fetch_document(ALARMS_PATH).await
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Write a single parameter value
    pub async fn set_one(&self, id: &str, value: &str) -> Result<()> {
        self.set_many(&[(id, value)]).await
    }

    /// Write several parameter values in one request.
    ///
    /// Each identifier is validated and classified first; a read-only
    /// sensor identifier fails the whole batch before anything reaches
    /// the wire. Values are sent as-is; composite values must already
    /// be encoded (see `rd5-conv`). Success means only that the device
    /// accepted the request; there is no read-back.
    #[instrument(skip(self, assignments))]
    pub async fn set_many(&self, assignments: &[(&str, &str)]) -> Result<()> {
        let mut ids = Vec::with_capacity(assignments.len());
        for (id, _) in assignments {
            let id = ParameterId::parse(id)?;
            if !id.is_writable() {
                return Err(Rd5ClientError::ReadOnlyParameter(id.to_string()));
            }
            ids.push(id);
        }

        let token = self.session_token();
        let mut url = self.base_url.join(WRITE_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(token) = token.as_deref() {
                pairs.append_pair("auth", token);
            }
            for (id, (_, value)) in ids.iter().zip(assignments) {
                pairs.append_pair(id.as_str(), value);
            }
        }

        debug!(count = assignments.len(), "writing parameters");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Rd5ClientError::DeviceRejected {
                status: status.as_u16(),
            })
        }
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// GET a document endpoint with the `auth`/`rnd` query convention
    async fn fetch_document(&self, path: &str) -> Result<String> {
        let token = self.session_token();

        let mut url = self.base_url.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(token) = token.as_deref() {
                pairs.append_pair("auth", token);
            }
            pairs.append_pair("rnd", &auth::nonce());
        }

        debug!(path, authenticated = token.is_some(), "fetching document");
        self.get_text(url).await
    }

    async fn get_text(&self, url: Url) -> Result<String> {
        let response = self.http.get(url).send().await?;
        Ok(response.text().await?)
    }
}
