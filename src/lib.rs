pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod history;
pub mod llm;
pub mod models;

use app::GreetingService;
use cli::{ Args, Command };
use config::GeneratorConfig;
use log::info;
use models::greeting::{ GreetingRequest, Tone };
use std::error::Error;
use std::io::{ self, BufRead, Write };

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = GeneratorConfig::from_args(&args)?;

    info!("--- Core Configuration ---");
    info!("Remote Endpoint: {}", config.remote_url.as_deref().unwrap_or("not configured"));
    info!("Direct Provider: {}", config.provider.llm_type);
    info!("Provider Credential: {}", if config.provider.api_key.is_some() { "set" } else { "not set" });
    info!("Provider Model: {}", config.provider.completion_model.as_deref().unwrap_or("provider default"));
    info!("Synthetic Fallback: {}", config.synthetic_enabled);
    info!("History Dir: {}", config.data_dir.display());
    info!("History Key: {}", config.history_key);
    info!("-------------------------");

    let service = GreetingService::from_config(&config);

    match args.command {
        Command::Generate { name, occasion, tone, details } => {
            let tone: Tone = tone.parse()?;
            let mut request = GreetingRequest::new(name, occasion, tone);
            if let Some(details) = details {
                request = request.with_details(details);
            }
            let item = service.generate(&request).await?;
            println!("{}", item.text);
            println!("\n[{}] {}", item.id, item.timestamp);
        }
        Command::History => {
            let items = service.history();
            if items.is_empty() {
                println!("История пуста. Сгенерируйте первое поздравление!");
            }
            for item in items {
                let preview = item.text.lines().next().unwrap_or_default();
                println!("{}  {}  {} • {}  {}", item.timestamp, item.id, item.name, item.occasion, preview);
            }
        }
        Command::Show { id } => {
            match service.find(&id) {
                Some(item) => println!("{}", item.text),
                None => {
                    return Err(format!("No greeting with id '{}' in history", id).into());
                }
            }
        }
        Command::Stats => {
            println!("{}", service.stats());
        }
        Command::Clear { yes } => {
            let confirmed = yes || confirm("Очистить всю историю? [y/N] ")?;
            if service.clear(confirmed)? {
                println!("История очищена.");
            } else {
                println!("Отменено.");
            }
        }
        Command::Tones => {
            for tone in Tone::ALL {
                println!("{:<14} {}", tone.key(), tone.label());
            }
        }
    }

    Ok(())
}

fn confirm(question: &str) -> io::Result<bool> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да"))
}
