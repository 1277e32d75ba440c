use anyhow::Context;
use clap::Parser;
use display_studio::core::composer::compose_preview;
use display_studio::core::transfer::from_query;
use display_studio::utils::logger;
use display_studio::{LocalStorage, Storage};

/// Receiving side of the navigation handoff: decode a share string produced by
/// the main binary and write the composed preview document.
#[derive(Debug, Parser)]
#[command(name = "render-preview")]
#[command(about = "Render a transfer-encoded generation result into a preview document")]
struct RenderArgs {
    /// The percent-encoded share string (html, css, font, primaryColor,
    /// optional javascript)
    #[arg(long, conflicts_with = "query_file")]
    query: Option<String>,

    /// Read the share string from a file instead
    #[arg(long)]
    query_file: Option<String>,

    #[arg(long, default_value = "./output")]
    output_path: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = RenderArgs::parse();
    logger::init_cli_logger(args.verbose);

    let query = match (&args.query, &args.query_file) {
        (Some(query), _) => query.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read share string from {}", path))?
            .trim()
            .to_string(),
        (None, None) => anyhow::bail!("either --query or --query-file is required"),
    };

    let params = match from_query(&query) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    let document = compose_preview(
        &params.html,
        &params.css,
        params.javascript.as_deref(),
        &params.font,
        &params.primary_color,
    );

    let storage = LocalStorage::new(args.output_path.clone());
    storage.write_file("preview.html", document.as_bytes()).await?;

    tracing::info!("✅ Preview rendered");
    println!("✅ Preview: {}/preview.html", args.output_path);
    Ok(())
}
