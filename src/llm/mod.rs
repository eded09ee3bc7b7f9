pub mod chat;
use rllm::builder::LLMBackend;
use serde::{ Deserialize, Serialize };
use std::str::FromStr;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmType {
    #[default]
    Gemini,
    OpenAI,
    Anthropic,
    Ollama,
    DeepSeek,
    XAI,
    Groq,
}

impl LlmType {
    pub fn backend(&self) -> LLMBackend {
        match self {
            LlmType::Gemini => LLMBackend::Google,
            LlmType::OpenAI => LLMBackend::OpenAI,
            LlmType::Anthropic => LLMBackend::Anthropic,
            LlmType::Ollama => LLMBackend::Ollama,
            LlmType::DeepSeek => LLMBackend::DeepSeek,
            LlmType::XAI => LLMBackend::XAI,
            LlmType::Groq => LLMBackend::Groq,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            LlmType::Gemini => "gemini-2.5-flash",
            LlmType::OpenAI => "gpt-4o-mini",
            LlmType::Anthropic => "claude-3-5-haiku-latest",
            LlmType::Ollama => "llama3.2",
            LlmType::DeepSeek => "deepseek-chat",
            LlmType::XAI => "grok-2-latest",
            LlmType::Groq => "llama-3.1-8b-instant",
        }
    }

    /// Local providers run without a credential.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, LlmType::Ollama)
    }
}

impl fmt::Display for LlmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LlmType::Gemini => "gemini",
            LlmType::OpenAI => "openai",
            LlmType::Anthropic => "anthropic",
            LlmType::Ollama => "ollama",
            LlmType::DeepSeek => "deepseek",
            LlmType::XAI => "xai",
            LlmType::Groq => "groq",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseLlmTypeError {
    message: String,
}

impl fmt::Display for ParseLlmTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseLlmTypeError {}
impl FromStr for LlmType {
    type Err = ParseLlmTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Ok(LlmType::Gemini),
            "openai" => Ok(LlmType::OpenAI),
            "anthropic" => Ok(LlmType::Anthropic),
            "ollama" => Ok(LlmType::Ollama),
            "deepseek" => Ok(LlmType::DeepSeek),
            "xai" => Ok(LlmType::XAI),
            "groq" => Ok(LlmType::Groq),
            _ =>
                Err(ParseLlmTypeError {
                    message: format!("Invalid LLM type: '{}'", s),
                }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    pub llm_type: LlmType,
    pub api_key: Option<String>,
    pub completion_model: Option<String>,
    pub base_url: Option<String>,
}

impl LlmConfig {
    /// Whether enough is set to build a client at all.
    pub fn is_configured(&self) -> bool {
        !self.llm_type.requires_api_key() || self.api_key.is_some()
    }
}
