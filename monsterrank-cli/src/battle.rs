//! HTTP client for the battle service.
//!
//! `GET {endpoint}/battle/{first}+{second}` answers with a JSON body holding
//! at least `winner` and `loser`.
use monsterrank_core::{Outcome, OutcomeResolver, ResolveError};
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://ob6la3c120.execute-api.ap-northeast-1.amazonaws.com/Prod";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the battle endpoint.
#[derive(Debug, Clone)]
pub struct BattleConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct BattleResponse {
    winner: String,
    loser: String,
}

/// Build the request URL for one battle. Names are percent-encoded as needed.
pub fn battle_url(base: &Url, first: &str, second: &str) -> Result<Url, String> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("Endpoint {base} cannot take a path"))?
        .pop_if_empty()
        .push("battle")
        .push(&format!("{first}+{second}"));
    Ok(url)
}

/// Decode a successful response body.
pub fn decode_battle(body: &str) -> Result<Outcome, ResolveError> {
    let data: BattleResponse = serde_json::from_str(body)
        .map_err(|e| ResolveError::Malformed(format!("{e} in body {}", truncate(body, 200))))?;
    Ok(Outcome::new(data.winner, data.loser))
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Resolver that asks the battle service over HTTP, one request at a time.
pub struct HttpResolver {
    client: Client,
    base: Url,
    timeout: Duration,
}

impl HttpResolver {
    pub fn new(config: &BattleConfig) -> Result<Self, String> {
        let base = Url::parse(&config.endpoint)
            .map_err(|e| format!("Invalid endpoint \"{}\": {e}", config.endpoint))?;
        if base.cannot_be_a_base() {
            return Err(format!("Invalid endpoint \"{}\": not a base URL", config.endpoint));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

        Ok(HttpResolver {
            client,
            base,
            timeout: config.timeout,
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> ResolveError {
        if e.is_timeout() {
            ResolveError::Timeout {
                after_secs: self.timeout.as_secs(),
            }
        } else {
            ResolveError::Transport(e.to_string())
        }
    }
}

impl OutcomeResolver for HttpResolver {
    async fn resolve(&self, first: &str, second: &str) -> Result<Outcome, ResolveError> {
        let url = battle_url(&self.base, first, second).map_err(ResolveError::Transport)?;
        tracing::debug!(%url, "requesting battle");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(ResolveError::Status {
                status: status.as_u16(),
                body: truncate(&body, 200).to_string(),
            });
        }

        decode_battle(&body)
    }
}
