use crate::core::parse::{json_payload, non_empty_str, strip_markdown_code_fence};
use crate::core::prompt::render_refine_instruction;
use crate::domain::ports::CompletionProvider;
use crate::utils::error::{Result, StudioError};

/// The prompt-refinement contract: one free-text prompt in, one improved
/// prompt out. Independent of display generation, and advisory only; nothing
/// here ever substitutes the suggestion back into a brief.
pub struct PromptRefiner<P: CompletionProvider> {
    provider: P,
}

impl<P: CompletionProvider> PromptRefiner<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn refine(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(StudioError::RefinementFailure {
                message: "prompt must not be empty".to_string(),
            });
        }

        let instruction = render_refine_instruction(prompt);
        tracing::debug!("📡 Requesting prompt refinement ({} chars)", prompt.len());

        let completion = self
            .provider
            .complete(&instruction)
            .await
            .map_err(|e| StudioError::RefinementFailure {
                message: format!("completion provider call failed: {}", e),
            })?;

        parse_refinement(&completion)
    }
}

/// Prefer the structured `refinedPrompt` field; fall back to the bare
/// completion text when the provider answered in prose.
fn parse_refinement(completion: &str) -> Result<String> {
    if let Some(payload) = json_payload(completion) {
        if let Some(refined) = non_empty_str(&payload, "refinedPrompt") {
            return Ok(refined.to_string());
        }
        return Err(StudioError::RefinementFailure {
            message: "provider output is missing the 'refinedPrompt' field".to_string(),
        });
    }

    let bare = strip_markdown_code_fence(completion)
        .unwrap_or_else(|| completion.to_string());
    let bare = bare.trim();
    if bare.is_empty() {
        return Err(StudioError::RefinementFailure {
            message: "provider returned an empty refinement".to_string(),
        });
    }

    Ok(bare.to_string())
}
