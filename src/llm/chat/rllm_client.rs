use async_trait::async_trait;
use std::error::Error as StdError;
use log::info;

use super::{ ChatClient, CompletionResponse };
use crate::llm::{ LlmConfig, LlmType };
use rllm::chat::{ ChatMessage, ChatRole, MessageType };
use rllm::builder::LLMBuilder;
use rllm::LLMProvider;

pub struct RllmChatClient {
    llm: Box<dyn LLMProvider + Send + Sync>,
    llm_type: LlmType,
    model: String,
    base_url: Option<String>,
}

impl RllmChatClient {
    pub fn new(
        llm_type: LlmType,
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>
    ) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let chat_model = model.unwrap_or_else(|| llm_type.default_model().to_string());

        let mut builder = LLMBuilder::new()
            .backend(llm_type.backend())
            .model(&chat_model)
            .stream(false);

        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        if let Some(url) = &base_url {
            builder = builder.base_url(url);
        }

        let llm_provider = builder.build()?;

        Ok(Self {
            llm: llm_provider,
            llm_type,
            model: chat_model,
            base_url,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        if config.llm_type.requires_api_key() && config.api_key.is_none() {
            return Err(format!("API key is required for the {} provider", config.llm_type).into());
        }

        Self::new(
            config.llm_type,
            config.api_key.clone(),
            config.completion_model.clone(),
            config.base_url.clone()
        )
    }
}

#[async_trait]
impl ChatClient for RllmChatClient {
    async fn complete(
        &self,
        prompt: &str
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>> {
        let messages = vec![ChatMessage {
            role: ChatRole::User,
            content: prompt.to_string(),
            message_type: MessageType::Text,
        }];
        info!(
            "RllmChatClient::complete() → provider={} model={} base_url={:?}",
            self.llm_type,
            self.model,
            self.base_url
        );
        let resp = self.llm.chat(&messages).await?;
        let text = resp
            .text()
            .map(|s| s.to_string())
            .unwrap_or_default();
        Ok(CompletionResponse { response: text })
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_rejected_for_hosted_providers() {
        let config = LlmConfig::default();
        let err = RllmChatClient::from_config(&config).err().unwrap();
        assert!(err.to_string().contains("gemini"));
    }
}
