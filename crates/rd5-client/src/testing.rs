//! Test utilities for rd5-client
//!
//! Provides a mock device implementing the wire protocol's handshake
//! rules, and a test server that pairs it with a ready client.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use tokio::net::TcpListener;

use crate::{Rd5Client, Result};

const DEFAULT_SNAPSHOT: &str = concat!(
    r#"<RD5WEB><RD5>"#,
    r#"<INTEGER_R><O I="I10215" V="201"/><O I="I10211" V="36"/></INTEGER_R>"#,
    r#"</RD5></RD5WEB>"#
);

const DEFAULT_UNAUTHENTICATED_SNAPSHOT: &str =
    r#"<RD5WEB><RD5><INTEGER_R><O I="I00000" V="1"/></INTEGER_R></RD5></RD5WEB>"#;

const DEFAULT_ALARMS: &str = r#"<RD5WEB><ALARMS><ALARM>No alarms</ALARM></ALARMS></RD5WEB>"#;

/// One observed login attempt
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub magic: String,
    pub rnd: String,
}

/// Everything the mock device observed on the wire
#[derive(Debug, Default)]
pub struct DeviceLog {
    /// Login attempts in order
    pub logins: Vec<LoginRequest>,
    /// `auth` value of each snapshot fetch (None when omitted)
    pub snapshot_auth: Vec<Option<String>>,
    /// Query pairs of each accepted write, `auth` excluded, in order
    pub writes: Vec<Vec<(String, String)>>,
}

/// In-memory stand-in for a device, faithful to the handshake rules:
/// the login endpoint verifies the MD5 `magic` digest and issues a
/// fixed token, reads serve different documents depending on `auth`,
/// and writes require the issued token.
pub struct MockDevice {
    password: String,
    token: String,
    snapshot_xml: String,
    unauthenticated_xml: String,
    alarms_xml: String,
    login_body_override: Option<String>,
    write_status: StatusCode,
    log: Arc<Mutex<DeviceLog>>,
}

impl MockDevice {
    /// Create a device accepting `password` and issuing `token`
    pub fn new(password: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            token: token.into(),
            snapshot_xml: DEFAULT_SNAPSHOT.to_string(),
            unauthenticated_xml: DEFAULT_UNAUTHENTICATED_SNAPSHOT.to_string(),
            alarms_xml: DEFAULT_ALARMS.to_string(),
            login_body_override: None,
            write_status: StatusCode::OK,
            log: Arc::new(Mutex::new(DeviceLog::default())),
        }
    }

    /// Replace the authenticated parameter dump
    pub fn with_snapshot(mut self, xml: impl Into<String>) -> Self {
        self.snapshot_xml = xml.into();
        self
    }

    /// Replace the restricted dump served to unauthenticated fetches
    pub fn with_unauthenticated_snapshot(mut self, xml: impl Into<String>) -> Self {
        self.unauthenticated_xml = xml.into();
        self
    }

    /// Replace the alarm dump
    pub fn with_alarms(mut self, xml: impl Into<String>) -> Self {
        self.alarms_xml = xml.into();
        self
    }

    /// Serve a fixed login response body regardless of credentials,
    /// for malformed-handshake tests
    pub fn with_login_body(mut self, body: impl Into<String>) -> Self {
        self.login_body_override = Some(body.into());
        self
    }

    /// Answer authenticated writes with this status
    pub fn with_write_status(mut self, status: u16) -> Self {
        self.write_status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self
    }

    /// Handle on the request log, valid after the device is started
    pub fn log_handle(&self) -> Arc<Mutex<DeviceLog>> {
        self.log.clone()
    }

    /// Build the axum router serving the device endpoints
    pub fn router(self) -> Router {
        let state = Arc::new(self);
        Router::new()
            .route("/config/login.cgi", get(login))
            .route("/config/xml.xml", get(snapshot))
            .route("/config/alarms.xml", get(alarms))
            .route("/config/xml.cgi", get(write))
            .with_state(state)
    }
}

async fn login(
    State(device): State<Arc<MockDevice>>,
    Query(query): Query<HashMap<String, String>>,
) -> String {
    let magic = query.get("magic").cloned().unwrap_or_default();
    let rnd = query.get("rnd").cloned().unwrap_or_default();
    device.log.lock().logins.push(LoginRequest {
        magic: magic.clone(),
        rnd,
    });

    if let Some(body) = &device.login_body_override {
        return body.clone();
    }

    let reply = if magic == rd5_conv::login_magic(&device.password) {
        &device.token
    } else {
        "denied"
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><root lng="0">{}</root>"#,
        reply
    )
}

async fn snapshot(
    State(device): State<Arc<MockDevice>>,
    Query(query): Query<HashMap<String, String>>,
) -> String {
    let auth = query.get("auth").cloned();
    device.log.lock().snapshot_auth.push(auth.clone());

    if auth.as_deref() == Some(device.token.as_str()) {
        device.snapshot_xml.clone()
    } else {
        device.unauthenticated_xml.clone()
    }
}

async fn alarms(State(device): State<Arc<MockDevice>>) -> String {
    device.alarms_xml.clone()
}

async fn write(
    State(device): State<Arc<MockDevice>>,
    Query(query): Query<Vec<(String, String)>>,
) -> StatusCode {
    let auth = query
        .iter()
        .find(|(k, _)| k == "auth")
        .map(|(_, v)| v.as_str());
    if auth != Some(device.token.as_str()) {
        return StatusCode::FORBIDDEN;
    }

    let pairs: Vec<(String, String)> = query.into_iter().filter(|(k, _)| k != "auth").collect();
    device.log.lock().writes.push(pairs);
    device.write_status
}

/// A test server that automatically shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Rd5Client,
    pub log: Arc<Mutex<DeviceLog>>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Bind the mock device on an ephemeral port and pair it with a
    /// client pointed at it
    pub async fn start(device: MockDevice) -> Result<Self> {
        let log = device.log_handle();
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let router = device.router();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        // Give the server a moment to start
        tokio::time::sleep(Duration::from_millis(10)).await;

        let client = Rd5Client::with_config(&format!("http://{}", addr), Duration::from_secs(5))?;

        Ok(Self {
            addr,
            client,
            log,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Base URL of the mock device
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shutdown the server gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
