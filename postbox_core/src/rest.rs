//! Minimal client for the Upstash REST protocol.
//!
//! Every command is a `POST` to the database URL with the command words as a
//! JSON array body, e.g. `["RPUSH", "queue", "payload"]`, authenticated by a
//! bearer token. The store answers `{"result": ...}` or `{"error": "..."}`.

use crate::{PostboxError, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Reply {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    url: String,
    token: String,
}

impl RestClient {
    pub fn new(url: &str, token: &str) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub async fn ping(&self) -> Result<String> {
        match self.command(&["PING"]).await? {
            Value::String(reply) => Ok(reply),
            other => Err(unexpected("PING", &other)),
        }
    }

    /// Append to the tail of the list, returning the list length after the push
    pub async fn rpush(&self, key: &str, value: &str) -> Result<usize> {
        match self.command(&["RPUSH", key, value]).await? {
            Value::Number(n) => n
                .as_u64()
                .map(|n| n as usize)
                .ok_or_else(|| unexpected("RPUSH", &Value::Number(n))),
            other => Err(unexpected("RPUSH", &other)),
        }
    }

    /// Remove and return the head of the list, `None` if the list is empty or missing
    pub async fn lpop(&self, key: &str) -> Result<Option<String>> {
        match self.command(&["LPOP", key]).await? {
            Value::Null => Ok(None),
            Value::String(entry) => Ok(Some(entry)),
            other => Err(unexpected("LPOP", &other)),
        }
    }

    async fn command(&self, args: &[&str]) -> Result<Value> {
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(args)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let reply = serde_json::from_str::<Reply>(&body);
        if let Ok(Reply {
            error: Some(error), ..
        }) = &reply
        {
            return Err(PostboxError::Store(error.clone()));
        }
        if !status.is_success() {
            return Err(PostboxError::Store(format!(
                "{} answered with HTTP {}",
                args[0], status
            )));
        }
        Ok(reply?.result)
    }
}

fn unexpected(command: &str, value: &Value) -> PostboxError {
    PostboxError::UnexpectedReply(format!("{} returned {}", command, value))
}
