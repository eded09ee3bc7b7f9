use async_trait::async_trait;
use log::info;
use rand::seq::SliceRandom;
use std::time::Duration;

use super::GenerationStrategy;
use crate::error::StrategyError;
use crate::models::greeting::GreetingRequest;

const OPENERS: &[&str] = &["Дорогой", "Уважаемый", "Милый", "Замечательный"];
const WISHES: &[&str] = &[
    "Пусть каждый день приносит радость и вдохновение!",
    "Желаю здоровья, удачи и исполнения всех желаний!",
    "Пусть мечты сбываются, а рядом всегда будут близкие люди!",
    "Желаю ярких впечатлений и новых вершин!",
];
const EMOJI: &[&str] = &["🎉", "🎂", "✨", "🎁", "🥳", "🌟", "💐"];

/// Builds a greeting locally. Always succeeds.
pub struct SyntheticStrategy {
    delay: Duration,
}

impl SyntheticStrategy {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn compose(request: &GreetingRequest) -> String {
        let mut rng = rand::thread_rng();
        let opener = OPENERS.choose(&mut rng).copied().unwrap_or("Дорогой");
        let wish = WISHES.choose(&mut rng).copied().unwrap_or(WISHES[0]);
        let emoji = EMOJI.choose(&mut rng).copied().unwrap_or("🎉");

        let mut text = format!(
            "{} {}! {}\nПоздравляю с событием «{}»!\n",
            opener,
            request.name,
            emoji,
            request.occasion
        );
        if let Some(details) = request.details() {
            text.push_str(&format!("Особенно хочется отметить: {}.\n", details));
        }
        text.push_str(&format!("{} {}\n(Стиль: {})", wish, emoji, request.tone.label()));
        text
    }
}

#[async_trait]
impl GenerationStrategy for SyntheticStrategy {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn attempt(
        &self,
        _prompt: &str,
        request: &GreetingRequest
    ) -> Result<String, StrategyError> {
        info!("SyntheticStrategy::attempt() → delay={:?}", self.delay);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Self::compose(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::greeting::Tone;

    #[test]
    fn embeds_name_occasion_and_tone() {
        let request = GreetingRequest::new("Ivan", "Birthday", Tone::Wise)
            .with_details("loves chess");
        for _ in 0..20 {
            let text = SyntheticStrategy::compose(&request);
            assert!(text.contains("Ivan"));
            assert!(text.contains("«Birthday»"));
            assert!(text.contains("loves chess"));
            assert!(text.contains("Мудрый"));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_configured_delay() {
        let strategy = SyntheticStrategy::new(Duration::from_millis(1500));
        let request = GreetingRequest::new("Ivan", "Birthday", Tone::Funny);
        let started = tokio::time::Instant::now();
        let text = strategy.attempt("ignored", &request).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert!(text.contains("Ivan"));
    }
}
