use anyhow::Context;
use clap::Parser;
use display_studio::utils::{logger, monitor::SystemMonitor};
use display_studio::{
    BriefFile, CliConfig, DisplayGenerator, HttpCompletionProvider, LocalStorage, PromptRefiner,
    SessionContext, StudioEngine,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting display-studio CLI");
    if config.verbose {
        tracing::debug!(
            "CLI config: brief={}, endpoint={}, model={}, output={}",
            config.brief,
            config.endpoint,
            config.model,
            config.output_path
        );
    }

    if config.api_key.is_none() {
        config.api_key = std::env::var("DISPLAY_STUDIO_API_KEY").ok();
    }

    let brief = BriefFile::from_file(&config.brief)
        .with_context(|| format!("failed to load brief from {}", config.brief))?
        .into_brief();

    let monitor = SystemMonitor::new(config.monitor);
    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let provider = HttpCompletionProvider::from_config(&config);

    // Advisory only: the suggestion is shown, never substituted into the brief.
    if config.refine {
        let refiner = PromptRefiner::new(provider.clone());
        match refiner.refine(&brief.intent_text).await {
            Ok(suggestion) => {
                tracing::info!("💡 Suggested prompt refinement:");
                println!("💡 Suggested prompt refinement:\n{}\n", suggestion);
            }
            Err(e) => {
                tracing::warn!("⚠️ Prompt refinement unavailable: {}", e);
            }
        }
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let engine = StudioEngine::new(DisplayGenerator::new(provider), storage);

    // The CLI invocation is the active session.
    let session = SessionContext::signed_in();

    match engine.run(&brief, &session).await {
        Ok(output) => {
            monitor.log_summary("Generation run");
            tracing::info!("✅ Display section generated successfully!");
            tracing::info!("📁 Preview written to: {}/{}", config.output_path, output.preview_path);
            println!("✅ Display section generated successfully!");
            println!("📁 Preview: {}/{}", config.output_path, output.preview_path);
            println!("🔗 Share string for render-preview:\n{}", output.share_query);
        }
        Err(e) => {
            tracing::error!(
                "❌ Generation run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                display_studio::utils::error::ErrorSeverity::Low => 2,
                display_studio::utils::error::ErrorSeverity::Medium => 2,
                display_studio::utils::error::ErrorSeverity::High => 1,
                display_studio::utils::error::ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
