use crate::config::LookupConfig;
use anyhow::{Context, Result};
use std::time::Duration;

/// Outcome of asking the external authority about a word. NotRecognized and
/// Unreachable are both treated as "unknown" by the classifier; lookup
/// degradation asks the human instead of crashing the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupResult {
    Recognized,
    NotRecognized,
    Unreachable,
}

pub trait RemoteLookup {
    fn lookup(&self, word: &str) -> LookupResult;
}

const MAX_ATTEMPTS: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Queries an inflections endpoint for the configured language. Credentials
/// come from configuration; nothing is compiled in.
pub struct HttpLookup {
    client: reqwest::blocking::Client,
    base_url: String,
    language: String,
    app_id: String,
    app_key: String,
}

impl HttpLookup {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            app_id: config.app_id.clone().unwrap_or_default(),
            app_key: config.app_key.clone().unwrap_or_default(),
        })
    }
}

impl RemoteLookup for HttpLookup {
    fn lookup(&self, word: &str) -> LookupResult {
        let url = format!("{}/inflections/{}/{}", self.base_url, self.language, word);

        // Bounded retry on transport failure only; a reachable server's
        // answer is final on the first attempt.
        for _ in 0..MAX_ATTEMPTS {
            match self
                .client
                .get(&url)
                .header("app_id", self.app_id.as_str())
                .header("app_key", self.app_key.as_str())
                .send()
            {
                Ok(response) if response.status().is_success() => {
                    return LookupResult::Recognized
                }
                Ok(_) => return LookupResult::NotRecognized,
                Err(_) => {}
            }
        }
        LookupResult::Unreachable
    }
}

/// Stands in when no credentials are configured: every word outside the
/// dictionaries goes straight to the human.
pub struct DisabledLookup;

impl RemoteLookup for DisabledLookup {
    fn lookup(&self, _word: &str) -> LookupResult {
        LookupResult::NotRecognized
    }
}
