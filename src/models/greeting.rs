use serde::{ Deserialize, Serialize };
use std::fmt;
use std::str::FromStr;

use crate::error::GreetingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Funny,
    Touching,
    Formal,
    Poetic,
    Romantic,
    Motivational,
    Sarcastic,
    Epic,
    Short,
    Wise,
}

impl Tone {
    pub const ALL: [Tone; 10] = [
        Tone::Funny,
        Tone::Touching,
        Tone::Formal,
        Tone::Poetic,
        Tone::Romantic,
        Tone::Motivational,
        Tone::Sarcastic,
        Tone::Epic,
        Tone::Short,
        Tone::Wise,
    ];

    /// Label shown to the user and written into the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Funny => "Смешной",
            Tone::Touching => "Трогательный",
            Tone::Formal => "Официальный",
            Tone::Poetic => "Поэтичный",
            Tone::Romantic => "Романтичный",
            Tone::Motivational => "Мотивационный",
            Tone::Sarcastic => "Саркастичный",
            Tone::Epic => "Эпичный",
            Tone::Short => "Короткий",
            Tone::Wise => "Мудрый",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Tone::Funny => "funny",
            Tone::Touching => "touching",
            Tone::Formal => "formal",
            Tone::Poetic => "poetic",
            Tone::Romantic => "romantic",
            Tone::Motivational => "motivational",
            Tone::Sarcastic => "sarcastic",
            Tone::Epic => "epic",
            Tone::Short => "short",
            Tone::Wise => "wise",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseToneError {
    message: String,
}

impl fmt::Display for ParseToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseToneError {}

impl FromStr for Tone {
    type Err = ParseToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Tone::ALL
            .iter()
            .copied()
            .find(|tone| tone.key() == wanted || tone.label().to_lowercase() == wanted)
            .ok_or_else(|| ParseToneError {
                message: format!("Invalid tone: '{}'", s),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GreetingRequest {
    pub name: String,
    pub occasion: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl GreetingRequest {
    pub fn new(name: impl Into<String>, occasion: impl Into<String>, tone: Tone) -> Self {
        Self {
            name: name.into(),
            occasion: occasion.into(),
            tone,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Details with blank input collapsed to `None`.
    pub fn details(&self) -> Option<&str> {
        self.details
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    pub fn validate(&self) -> Result<(), GreetingError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.occasion.trim().is_empty() {
            missing.push("occasion");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(GreetingError::Validation { missing })
        }
    }
}
