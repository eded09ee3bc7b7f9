use clap::{ Parser, Subcommand };

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Remote Endpoint Args ---
    /// URL of the remote greeting endpoint (POST {"prompt"} -> {"text"}). Skipped when unset.
    #[arg(long, env = "GREETING_API_URL")]
    pub remote_url: Option<String>,

    /// Timeout in seconds for the single remote request.
    #[arg(long, env = "REMOTE_TIMEOUT_SECS", default_value = "30")]
    pub remote_timeout_secs: u64,

    // --- Direct Provider Args ---
    /// Type of LLM provider for direct generation (gemini, openai, anthropic, ollama, deepseek, xai, groq)
    #[arg(long, env = "CHAT_LLM_TYPE", default_value = "gemini")]
    pub provider: String,

    /// API key for the direct provider.
    #[arg(long, env = "GEMINI_API_KEY")]
    pub api_key: Option<String>,

    /// Alternate variable for the same credential, used when GEMINI_API_KEY is empty.
    #[arg(long, env = "API_KEY", hide = true)]
    pub alt_api_key: Option<String>,

    /// Model name for the direct provider (e.g., gemini-2.5-flash)
    #[arg(long, env = "CHAT_MODEL")] // No default, rely on provider defaults if None
    pub model: Option<String>,

    /// Base URL override for the direct provider API.
    #[arg(long, env = "CHAT_BASE_URL")]
    pub chat_base_url: Option<String>,

    // --- Synthetic Fallback Args ---
    /// Fail instead of fabricating a greeting when no backend answers.
    #[arg(long, env = "DISABLE_SYNTHETIC_FALLBACK", default_value = "false")]
    pub disable_synthetic: bool,

    /// Artificial delay before the synthetic greeting is returned.
    #[arg(long, env = "SYNTHETIC_DELAY_MS", default_value = "1500")]
    pub synthetic_delay_ms: u64,

    // --- History Store Args ---
    /// Directory holding the persisted history slot.
    #[arg(long, env = "DATA_DIR", default_value = ".cloudwish")]
    pub data_dir: String,

    /// Storage key of the history slot.
    #[arg(long, env = "HISTORY_KEY", default_value = "cloudwish_history")]
    pub history_key: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a greeting and record it in history
    Generate {
        /// Who the greeting is for
        #[arg(long)]
        name: String,

        /// What is being celebrated
        #[arg(long)]
        occasion: String,

        /// Style of the greeting (see `tones`)
        #[arg(long, default_value = "funny")]
        tone: String,

        /// Optional free-text details
        #[arg(long)]
        details: Option<String>,
    },
    /// List past greetings, newest first
    History,
    /// Print the full text of one past greeting
    Show {
        id: String,
    },
    /// Show aggregate statistics over the history
    Stats,
    /// Delete the whole history
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// List available tones
    Tones,
}
