use crate::domain::ports::ProviderConfig;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "display-studio")]
#[command(about = "Generate an e-commerce product display section with a completion provider")]
pub struct CliConfig {
    /// Path to the TOML brief describing the desired display section
    #[arg(long)]
    pub brief: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// OpenAI-compatible chat completions endpoint
    #[arg(long, default_value = "http://localhost:11434/v1/chat/completions")]
    pub endpoint: String,

    #[arg(long, default_value = "llama3.1")]
    pub model: String,

    /// Bearer token for the completion endpoint; falls back to the
    /// DISPLAY_STUDIO_API_KEY environment variable
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value = "120")]
    pub timeout_seconds: u64,

    /// Run the intent prompt through refinement first and log the suggestion
    #[arg(long)]
    pub refine: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process resource usage around the run")]
    pub monitor: bool,
}

impl ProviderConfig for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn timeout_seconds(&self) -> Option<u64> {
        Some(self.timeout_seconds)
    }
}
