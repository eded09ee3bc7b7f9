pub mod pipeline;
pub mod prompt;
pub mod strategy;

pub use pipeline::GreetingPipeline;
pub use prompt::build_prompt;
pub use strategy::GenerationStrategy;
