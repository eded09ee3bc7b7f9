use log::{ error, info };
use std::sync::Mutex;

use crate::config::GeneratorConfig;
use crate::error::GreetingError;
use crate::generation::GreetingPipeline;
use crate::history::{ initialize_history_store, HistoryStats, HistoryStore };
use crate::models::greeting::GreetingRequest;
use crate::models::history::HistoryItem;

/// Wires pipeline successes into the history store.
pub struct GreetingService {
    pipeline: GreetingPipeline,
    history: Mutex<HistoryStore>,
    in_flight: tokio::sync::Mutex<()>,
}

impl GreetingService {
    pub fn new(pipeline: GreetingPipeline, history: HistoryStore) -> Self {
        Self {
            pipeline,
            history: Mutex::new(history),
            in_flight: tokio::sync::Mutex::new(()),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(GreetingPipeline::from_config(config), initialize_history_store(config))
    }

    pub async fn generate(&self, request: &GreetingRequest) -> Result<HistoryItem, GreetingError> {
        request.validate()?;
        let _guard = self.in_flight.try_lock().map_err(|_| GreetingError::Busy)?;

        let text = self.pipeline.generate(request).await?;
        let item = HistoryItem::new(request, text);

        self.with_history(|history| history.append(item.clone())).map_err(|e| {
            error!("Failed to record greeting {}: {}", item.id, e);
            GreetingError::from(e)
        })?;
        info!("Recorded greeting {} for {} ({})", item.id, item.name, item.occasion);
        Ok(item)
    }

    pub fn history(&self) -> Vec<HistoryItem> {
        self.with_history(|history| history.list().to_vec())
    }

    pub fn find(&self, id: &str) -> Option<HistoryItem> {
        self.with_history(|history| history.find(id).cloned())
    }

    pub fn stats(&self) -> HistoryStats {
        self.with_history(|history| HistoryStats::from_items(history.list()))
    }

    /// Returns `false` without touching anything unless `confirmed`.
    pub fn clear(&self, confirmed: bool) -> Result<bool, GreetingError> {
        if !confirmed {
            info!("History clear cancelled");
            return Ok(false);
        }
        self.with_history(|history| history.clear())?;
        info!("History cleared");
        Ok(true)
    }

    fn with_history<T>(&self, f: impl FnOnce(&mut HistoryStore) -> T) -> T {
        let mut guard = self.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StrategyError;
    use crate::generation::strategy::SyntheticStrategy;
    use crate::generation::GenerationStrategy;
    use crate::history::MemorySlot;
    use crate::models::greeting::Tone;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Notify;

    fn synthetic_service(slot: MemorySlot) -> GreetingService {
        let pipeline = GreetingPipeline::new(vec![Box::new(SyntheticStrategy::new(Duration::ZERO))]);
        GreetingService::new(pipeline, HistoryStore::load(Box::new(slot)))
    }

    /// Blocks until released, so a second call can observe the gate.
    struct Gated(Arc<Notify>);

    #[async_trait]
    impl GenerationStrategy for Gated {
        fn name(&self) -> &'static str {
            "gated"
        }

        async fn attempt(
            &self,
            _prompt: &str,
            _request: &GreetingRequest
        ) -> Result<String, StrategyError> {
            self.0.notified().await;
            Ok("done".to_string())
        }
    }

    #[tokio::test]
    async fn invalid_request_attempts_nothing() {
        let service = synthetic_service(MemorySlot::new());
        let request = GreetingRequest::new("", "Birthday", Tone::Funny);
        assert!(matches!(service.generate(&request).await, Err(GreetingError::Validation { .. })));
        assert!(service.history().is_empty());
    }

    #[tokio::test]
    async fn example_scenario_records_and_counts() {
        let service = synthetic_service(MemorySlot::new());
        let request = GreetingRequest::new("Ivan", "Birthday", Tone::Funny);

        let item = service.generate(&request).await.unwrap();
        assert!(item.text.contains("Ivan"));
        assert!(item.text.contains("Birthday"));

        let stats = service.stats();
        assert_eq!(stats.total_count, 1);
        assert_eq!(stats.most_frequent_occasion.as_deref(), Some("Birthday"));
        assert_eq!(service.find(&item.id), Some(item));
    }

    #[tokio::test]
    async fn clear_requires_confirmation() {
        let slot = MemorySlot::new();
        let service = synthetic_service(slot.clone());
        service.generate(&GreetingRequest::new("Ivan", "Birthday", Tone::Funny)).await.unwrap();

        assert!(!service.clear(false).unwrap());
        assert_eq!(service.history().len(), 1);

        assert!(service.clear(true).unwrap());
        assert!(service.history().is_empty());
        assert!(HistoryStore::load(Box::new(slot)).is_empty());
    }

    #[tokio::test]
    async fn second_generation_while_busy_is_rejected() {
        let release = Arc::new(Notify::new());
        let pipeline = GreetingPipeline::new(vec![Box::new(Gated(Arc::clone(&release)))]);
        let service = Arc::new(
            GreetingService::new(pipeline, HistoryStore::load(Box::new(MemorySlot::new())))
        );
        let request = GreetingRequest::new("Ivan", "Birthday", Tone::Funny);

        let first = {
            let service = Arc::clone(&service);
            let request = request.clone();
            tokio::spawn(async move { service.generate(&request).await })
        };
        while service.in_flight.try_lock().is_ok() {
            tokio::task::yield_now().await;
        }

        assert!(matches!(service.generate(&request).await, Err(GreetingError::Busy)));

        release.notify_one();
        let item = first.await.unwrap().unwrap();
        assert_eq!(item.text, "done");
        assert_eq!(service.history().len(), 1);
    }
}
