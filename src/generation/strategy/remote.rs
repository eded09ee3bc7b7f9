use async_trait::async_trait;
use log::info;
use reqwest::Client as HttpClient;
use serde::{ Deserialize, Serialize };
use std::time::Duration;

use super::GenerationStrategy;
use crate::error::StrategyError;
use crate::models::greeting::GreetingRequest;

pub const REMOTE_PLACEHOLDER: &str = "Не удалось сгенерировать текст. Попробуйте снова.";

#[derive(Serialize)]
struct RemoteRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct RemoteResponse {
    #[serde(default)]
    text: Option<String>,
}

pub struct RemoteStrategy {
    http: HttpClient,
    url: String,
}

impl RemoteStrategy {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, StrategyError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StrategyError::Transport(e.to_string()))?;
        Ok(Self { http, url: url.into() })
    }
}

#[async_trait]
impl GenerationStrategy for RemoteStrategy {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn attempt(
        &self,
        prompt: &str,
        _request: &GreetingRequest
    ) -> Result<String, StrategyError> {
        info!("RemoteStrategy::attempt() → url={}", self.url);
        let resp = self.http
            .post(&self.url)
            .json(&RemoteRequest { prompt })
            .send().await
            .map_err(|e| StrategyError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StrategyError::Status { status: status.as_u16() });
        }

        let body = resp
            .json::<RemoteResponse>().await
            .map_err(|e| StrategyError::Decode(e.to_string()))?;

        Ok(
            body.text
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| REMOTE_PLACEHOLDER.to_string())
        )
    }
}
