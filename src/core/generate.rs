use crate::core::parse::{json_payload, non_empty_str};
use crate::core::prompt::render_display_instruction;
use crate::domain::model::{DisplayBrief, GeneratedArtifact};
use crate::domain::ports::CompletionProvider;
use crate::utils::error::{Result, StudioError};

/// The display-generation contract: one validated brief in, one complete
/// artifact out. Single shot, no retry; the caller owns any retry policy.
pub struct DisplayGenerator<P: CompletionProvider> {
    provider: P,
}

impl<P: CompletionProvider> DisplayGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Assumes the brief already passed validation. The only checks performed
    /// here are on the provider's output shape.
    pub async fn generate(&self, brief: &DisplayBrief) -> Result<GeneratedArtifact> {
        let instruction = render_display_instruction(brief);
        tracing::debug!(
            "📡 Requesting display generation ({} carousel images, {} products)",
            brief.carousel_images.len(),
            brief.products.len()
        );

        let completion = self
            .provider
            .complete(&instruction)
            .await
            .map_err(|e| StudioError::GenerationFailure {
                message: format!("completion provider call failed: {}", e),
            })?;

        let artifact = parse_artifact(&completion)?;
        tracing::debug!(
            "📡 Generation response parsed ({} bytes html, {} bytes css, behavior: {})",
            artifact.html.len(),
            artifact.css.len(),
            artifact.has_behavior()
        );
        Ok(artifact)
    }
}

/// Parse a completion into the three-field artifact shape. A missing or empty
/// `html` or `css` field counts as unparsable; an empty `javascript` field
/// normalizes to no behavior.
pub fn parse_artifact(completion: &str) -> Result<GeneratedArtifact> {
    let payload = json_payload(completion).ok_or_else(|| StudioError::GenerationFailure {
        message: "provider output is not a JSON object".to_string(),
    })?;

    let html = non_empty_str(&payload, "html").ok_or_else(|| StudioError::GenerationFailure {
        message: "provider output is missing the required 'html' field".to_string(),
    })?;
    let css = non_empty_str(&payload, "css").ok_or_else(|| StudioError::GenerationFailure {
        message: "provider output is missing the required 'css' field".to_string(),
    })?;
    let javascript = non_empty_str(&payload, "javascript").map(str::to_string);

    Ok(GeneratedArtifact {
        html: html.to_string(),
        css: css.to_string(),
        javascript,
    })
}
