use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Args;
use crate::llm::LlmConfig;

pub const DEFAULT_HISTORY_KEY: &str = "cloudwish_history";

/// Everything the pipeline and the store need, resolved once at startup.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub remote_url: Option<String>,
    pub remote_timeout: Duration,
    pub provider: LlmConfig,
    pub synthetic_enabled: bool,
    pub synthetic_delay: Duration,
    pub data_dir: PathBuf,
    pub history_key: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            remote_url: None,
            remote_timeout: Duration::from_secs(30),
            provider: LlmConfig::default(),
            synthetic_enabled: true,
            synthetic_delay: Duration::from_millis(1500),
            data_dir: PathBuf::from(".cloudwish"),
            history_key: DEFAULT_HISTORY_KEY.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_args(args: &Args) -> Result<Self, String> {
        let llm_type = args.provider
            .parse()
            .map_err(|e| format!("Invalid provider: {}", e))?;

        Ok(Self {
            remote_url: non_empty(args.remote_url.as_deref()),
            remote_timeout: Duration::from_secs(args.remote_timeout_secs),
            provider: LlmConfig {
                llm_type,
                api_key: first_non_empty(&[args.api_key.as_deref(), args.alt_api_key.as_deref()]),
                completion_model: non_empty(args.model.as_deref()),
                base_url: non_empty(args.chat_base_url.as_deref()),
            },
            synthetic_enabled: !args.disable_synthetic,
            synthetic_delay: Duration::from_millis(args.synthetic_delay_ms),
            data_dir: PathBuf::from(&args.data_dir),
            history_key: args.history_key.clone(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn first_non_empty(candidates: &[Option<&str>]) -> Option<String> {
    candidates.iter().find_map(|c| non_empty(*c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["cloudwish"];
        argv.extend_from_slice(extra);
        argv.push("stats");
        Args::parse_from(argv)
    }

    #[test]
    fn first_non_empty_credential_wins() {
        assert_eq!(first_non_empty(&[Some(""), Some("alt")]), Some("alt".to_string()));
        assert_eq!(first_non_empty(&[Some("main"), Some("alt")]), Some("main".to_string()));
        assert_eq!(first_non_empty(&[None, Some("  ")]), None);
    }

    #[test]
    fn builds_config_from_flags() {
        let args = parse(&[
            "--remote-url",
            "http://localhost:9000/generate",
            "--api-key",
            "",
            "--alt-api-key",
            "secret",
            "--disable-synthetic",
            "--synthetic-delay-ms",
            "0",
        ]);
        let config = GeneratorConfig::from_args(&args).unwrap();
        assert_eq!(config.remote_url.as_deref(), Some("http://localhost:9000/generate"));
        assert_eq!(config.provider.api_key.as_deref(), Some("secret"));
        assert!(!config.synthetic_enabled);
        assert_eq!(config.synthetic_delay, Duration::ZERO);
    }

    #[test]
    fn rejects_unknown_provider() {
        let args = parse(&["--provider", "palm"]);
        assert!(GeneratorConfig::from_args(&args).is_err());
    }
}
