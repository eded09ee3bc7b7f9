use log::{ info, warn };

use super::prompt::build_prompt;
use super::strategy::{ DirectStrategy, GenerationStrategy, RemoteStrategy, SyntheticStrategy };
use crate::config::GeneratorConfig;
use crate::error::{ GreetingError, StrategyFailure };
use crate::llm::chat::new_client as new_chat_client;
use crate::models::greeting::GreetingRequest;

/// Ordered fallback over generation strategies. The first success wins.
pub struct GreetingPipeline {
    strategies: Vec<Box<dyn GenerationStrategy>>,
    missing: Vec<String>,
}

impl GreetingPipeline {
    pub fn new(strategies: Vec<Box<dyn GenerationStrategy>>) -> Self {
        Self { strategies, missing: Vec::new() }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut strategies: Vec<Box<dyn GenerationStrategy>> = Vec::new();
        let mut missing = Vec::new();

        match &config.remote_url {
            Some(url) =>
                match RemoteStrategy::new(url.clone(), config.remote_timeout) {
                    Ok(remote) => strategies.push(Box::new(remote)),
                    Err(e) => warn!("Remote strategy unavailable: {}", e),
                }
            None => {
                info!("Remote strategy skipped: GREETING_API_URL is not set");
                missing.push("GREETING_API_URL".to_string());
            }
        }

        if config.provider.is_configured() {
            match new_chat_client(&config.provider) {
                Ok(client) => {
                    info!(
                        "Direct strategy configured: provider={} model={}",
                        config.provider.llm_type,
                        client.get_model()
                    );
                    strategies.push(Box::new(DirectStrategy::new(client)));
                }
                Err(e) => warn!("Direct strategy unavailable: {}", e),
            }
        } else {
            info!("Direct strategy skipped: no provider credential");
            missing.push("GEMINI_API_KEY or API_KEY".to_string());
        }

        if config.synthetic_enabled {
            strategies.push(Box::new(SyntheticStrategy::new(config.synthetic_delay)));
        } else {
            info!("Synthetic fallback disabled");
            missing.push("synthetic fallback (disabled)".to_string());
        }

        Self { strategies, missing }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies
            .iter()
            .map(|s| s.name())
            .collect()
    }

    pub async fn generate(&self, request: &GreetingRequest) -> Result<String, GreetingError> {
        if self.strategies.is_empty() {
            let missing = if self.missing.is_empty() {
                vec!["generation strategy".to_string()]
            } else {
                self.missing.clone()
            };
            return Err(GreetingError::Configuration { missing });
        }

        let prompt = build_prompt(request);
        let mut failures = Vec::new();

        for strategy in &self.strategies {
            info!("Trying {} strategy", strategy.name());
            match strategy.attempt(&prompt, request).await {
                Ok(text) => {
                    info!("Greeting produced by {} strategy", strategy.name());
                    return Ok(text);
                }
                Err(error) => {
                    warn!("{} strategy failed: {}", strategy.name(), error);
                    failures.push(StrategyFailure { strategy: strategy.name(), error });
                }
            }
        }

        Err(GreetingError::Exhausted { failures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StrategyError;
    use crate::models::greeting::Tone;
    use async_trait::async_trait;
    use std::sync::atomic::{ AtomicUsize, Ordering };
    use std::sync::Arc;
    use std::time::Duration;

    struct Scripted {
        name: &'static str,
        outcome: Option<String>,
        calls: Arc<AtomicUsize>,
    }

    impl Scripted {
        fn boxed(
            name: &'static str,
            outcome: Option<&str>,
            calls: &Arc<AtomicUsize>
        ) -> Box<dyn GenerationStrategy> {
            Box::new(Self {
                name,
                outcome: outcome.map(str::to_string),
                calls: Arc::clone(calls),
            })
        }
    }

    #[async_trait]
    impl GenerationStrategy for Scripted {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn attempt(
            &self,
            _prompt: &str,
            _request: &GreetingRequest
        ) -> Result<String, StrategyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone().ok_or_else(|| StrategyError::Provider(format!("{} down", self.name)))
        }
    }

    fn request() -> GreetingRequest {
        GreetingRequest::new("Ivan", "Birthday", Tone::Funny)
    }

    #[tokio::test]
    async fn stops_at_first_success() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let pipeline = GreetingPipeline::new(
            vec![Scripted::boxed("remote", Some("X"), &first), Scripted::boxed("direct", Some("Y"), &second)]
        );

        assert_eq!(pipeline.generate(&request()).await.unwrap(), "X");
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn falls_through_failures_in_order() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = GreetingPipeline::new(
            vec![Scripted::boxed("remote", None, &calls), Scripted::boxed("direct", Some("Y"), &calls)]
        );

        assert_eq!(pipeline.generate(&request()).await.unwrap(), "Y");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn exhausted_lists_every_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = GreetingPipeline::new(
            vec![Scripted::boxed("remote", None, &calls), Scripted::boxed("direct", None, &calls)]
        );

        match pipeline.generate(&request()).await {
            Err(GreetingError::Exhausted { failures }) => {
                let names: Vec<_> = failures.iter().map(|f| f.strategy).collect();
                assert_eq!(names, vec!["remote", "direct"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn default_config_uses_synthetic_only() {
        let config = GeneratorConfig {
            synthetic_delay: Duration::ZERO,
            ..Default::default()
        };
        let pipeline = GreetingPipeline::from_config(&config);
        assert_eq!(pipeline.strategy_names(), vec!["synthetic"]);

        let text = pipeline.generate(&request()).await.unwrap();
        assert!(text.contains("Ivan"));
        assert!(text.contains("Birthday"));
    }

    #[tokio::test]
    async fn nothing_configured_is_a_configuration_error() {
        let config = GeneratorConfig {
            synthetic_enabled: false,
            ..Default::default()
        };
        let pipeline = GreetingPipeline::from_config(&config);

        match pipeline.generate(&request()).await {
            Err(GreetingError::Configuration { missing }) => {
                assert_eq!(missing.len(), 3);
                assert!(missing[0].contains("GREETING_API_URL"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
