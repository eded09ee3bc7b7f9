use chrono::Local;
use serde::{ Deserialize, Serialize };
use uuid::Uuid;

use super::greeting::GreetingRequest;

/// One recorded generation. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub text: String,
    pub timestamp: String,
    pub name: String,
    pub occasion: String,
}

impl HistoryItem {
    pub fn new(request: &GreetingRequest, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            name: request.name.clone(),
            occasion: request.occasion.clone(),
        }
    }
}
