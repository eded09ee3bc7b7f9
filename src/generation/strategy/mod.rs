pub mod direct;
pub mod remote;
pub mod synthetic;

use async_trait::async_trait;

use crate::error::StrategyError;
use crate::models::greeting::GreetingRequest;

pub use direct::DirectStrategy;
pub use remote::RemoteStrategy;
pub use synthetic::SyntheticStrategy;

/// One way of turning a prompt into greeting text.
#[async_trait]
pub trait GenerationStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(
        &self,
        prompt: &str,
        request: &GreetingRequest
    ) -> Result<String, StrategyError>;
}
