use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::GenerationStrategy;
use crate::error::StrategyError;
use crate::llm::chat::ChatClient;
use crate::models::greeting::GreetingRequest;

pub const DIRECT_PLACEHOLDER: &str = "Не удалось получить ответ от модели. Попробуйте снова.";

pub struct DirectStrategy {
    client: Arc<dyn ChatClient>,
}

impl DirectStrategy {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GenerationStrategy for DirectStrategy {
    fn name(&self) -> &'static str {
        "direct"
    }

    async fn attempt(
        &self,
        prompt: &str,
        _request: &GreetingRequest
    ) -> Result<String, StrategyError> {
        info!("DirectStrategy::attempt() → model={}", self.client.get_model());
        let resp = self.client
            .complete(prompt).await
            .map_err(|e| StrategyError::Provider(e.to_string()))?;

        if resp.response.trim().is_empty() {
            Ok(DIRECT_PLACEHOLDER.to_string())
        } else {
            Ok(resp.response)
        }
    }
}
