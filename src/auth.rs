//! Credential-file loading and HTTP client construction.
//!
//! The credential file is the JSON written by Yahoo's OAuth tooling; only the
//! bearer-token material is read, everything else is ignored. Token
//! acquisition and refresh live outside this tool.

use std::fs;
use std::path::Path;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;

use crate::error::{FlbError, Result};

const USER_AGENT: &str = "yahoo-flb/0.1";

/// Bearer-token material from the credential JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Read and decode the credential file.
pub fn load_credentials(path: &Path) -> Result<Credentials> {
    let raw = fs::read_to_string(path)?;
    let creds: Credentials = serde_json::from_str(&raw).map_err(|e| FlbError::Auth {
        message: format!("{}: {}", path.display(), e),
    })?;
    if creds.access_token.is_empty() {
        return Err(FlbError::Auth {
            message: format!("{}: empty access_token", path.display()),
        });
    }
    Ok(creds)
}

/// Build a client that sends the bearer token on every request.
///
/// Used for the Yahoo fantasy endpoints only; the public stat feeds get
/// [`public_client`] so the token never leaves Yahoo.
pub fn authorized_client(creds: &Credentials) -> Result<Client> {
    let scheme = creds.token_type.as_deref().unwrap_or("Bearer");
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut auth = HeaderValue::from_str(&format!("{} {}", scheme, creds.access_token))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Plain client for the public projection and schedule feeds.
pub fn public_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;
    Ok(client)
}
