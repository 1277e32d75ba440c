use crate::core::composer::compose_preview;
use crate::core::generate::DisplayGenerator;
use crate::core::transfer::{to_query, PreviewParams};
use crate::domain::model::{DisplayBrief, GeneratedArtifact, SessionContext};
use crate::domain::ports::{CompletionProvider, Storage};
use crate::utils::error::{Result, StudioError};
use crate::utils::validation::validate_brief;

pub const MARKUP_FILE: &str = "section.html";
pub const STYLES_FILE: &str = "section.css";
pub const BEHAVIOR_FILE: &str = "section.js";
pub const PREVIEW_FILE: &str = "preview.html";
pub const METADATA_FILE: &str = "run.json";

/// Everything a run leaves behind: the parsed artifact, the composed preview
/// document, and the query string for handing the result to another screen.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub artifact: GeneratedArtifact,
    pub preview_path: String,
    pub share_query: String,
}

/// Orchestrates one generation run: session gate, validation, the provider
/// call, composition, and storage writes. Holds no state between runs; each
/// invocation is an isolated request/response pair.
pub struct StudioEngine<P: CompletionProvider, S: Storage> {
    generator: DisplayGenerator<P>,
    storage: S,
}

impl<P: CompletionProvider, S: Storage> StudioEngine<P, S> {
    pub fn new(generator: DisplayGenerator<P>, storage: S) -> Self {
        Self { generator, storage }
    }

    pub async fn run(&self, brief: &DisplayBrief, session: &SessionContext) -> Result<RunOutput> {
        if !session.is_present() {
            tracing::warn!("🔒 Generation requested without an active session");
            return Err(StudioError::AuthRequired);
        }

        tracing::info!("🧾 Validating brief");
        validate_brief(brief)?;

        tracing::info!(
            "🎨 Generating display section ({} carousel images, {} products)",
            brief.carousel_images.len(),
            brief.products.len()
        );
        let artifact = self.generator.generate(brief).await?;

        tracing::info!("🖼️ Composing preview document");
        let preview = compose_preview(
            &artifact.html,
            &artifact.css,
            artifact.javascript.as_deref(),
            &brief.font,
            &brief.primary_color,
        );

        tracing::info!("💾 Writing artifacts");
        self.storage
            .write_file(MARKUP_FILE, artifact.html.as_bytes())
            .await?;
        self.storage
            .write_file(STYLES_FILE, artifact.css.as_bytes())
            .await?;
        if let Some(javascript) = &artifact.javascript {
            self.storage
                .write_file(BEHAVIOR_FILE, javascript.as_bytes())
                .await?;
        }
        self.storage
            .write_file(PREVIEW_FILE, preview.as_bytes())
            .await?;

        let metadata = serde_json::json!({
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "carousel_images": brief.carousel_images.len(),
            "products": brief.products.len(),
            "has_behavior": artifact.has_behavior(),
        });
        self.storage
            .write_file(METADATA_FILE, serde_json::to_string_pretty(&metadata)?.as_bytes())
            .await?;

        let share_query = to_query(&PreviewParams::from_artifact(
            &artifact,
            &brief.font,
            &brief.primary_color,
        ));

        tracing::info!("✅ Run complete");
        Ok(RunOutput {
            artifact,
            preview_path: PREVIEW_FILE.to_string(),
            share_query,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transfer::from_query;
    use crate::domain::model::ProductRecord;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct CountingProvider {
        response: String,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CompletionProvider for CountingProvider {
        async fn complete(&self, _instruction: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_text(&self, path: &str) -> Option<String> {
            let files = self.files.lock().await;
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn mug_brief() -> DisplayBrief {
        DisplayBrief {
            carousel_images: vec!["http://x/a.png".to_string()],
            products: vec![ProductRecord {
                title: "Mug".to_string(),
                price: "9.99".to_string(),
                description: "A nice mug for coffee".to_string(),
                image: "http://x/b.png".to_string(),
            }],
            primary_color: "#112233".to_string(),
            secondary_color: "#445566".to_string(),
            font: "Arial".to_string(),
            intent_text: "Clean minimal layout with grid".to_string(),
        }
    }

    fn engine_with(
        response: &str,
    ) -> (
        StudioEngine<CountingProvider, MockStorage>,
        Arc<AtomicUsize>,
        MockStorage,
    ) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = CountingProvider {
            response: response.to_string(),
            calls: calls.clone(),
        };
        let storage = MockStorage::new();
        let engine = StudioEngine::new(DisplayGenerator::new(provider), storage.clone());
        (engine, calls, storage)
    }

    const MUG_RESPONSE: &str = r#"{"html": "<section><h2>Mug</h2><p>9.99</p></section>", "css": "section { display: grid; }", "javascript": "initCarousel();"}"#;

    #[tokio::test]
    async fn writes_artifacts_preview_and_metadata() {
        let (engine, _, storage) = engine_with(MUG_RESPONSE);

        let output = engine
            .run(&mug_brief(), &SessionContext::signed_in())
            .await
            .unwrap();

        assert!(output.artifact.html.contains("Mug"));
        assert_eq!(output.preview_path, PREVIEW_FILE);

        let preview = storage.get_text(PREVIEW_FILE).await.unwrap();
        assert!(preview.contains("font-family: Arial"));
        assert!(preview.contains("color: #112233"));
        assert!(preview.contains("Mug"));
        assert!(preview.contains("initCarousel();"));

        assert!(storage.get_text(MARKUP_FILE).await.is_some());
        assert!(storage.get_text(STYLES_FILE).await.is_some());
        assert!(storage.get_text(BEHAVIOR_FILE).await.is_some());

        let metadata = storage.get_text(METADATA_FILE).await.unwrap();
        assert!(metadata.contains("\"has_behavior\": true"));
    }

    #[tokio::test]
    async fn share_query_round_trips_the_artifact() {
        let (engine, _, _) = engine_with(MUG_RESPONSE);

        let output = engine
            .run(&mug_brief(), &SessionContext::signed_in())
            .await
            .unwrap();

        let params = from_query(&output.share_query).unwrap();
        assert_eq!(params.html, output.artifact.html);
        assert_eq!(params.css, output.artifact.css);
        assert_eq!(params.font, "Arial");
        assert_eq!(params.primary_color, "#112233");
        assert_eq!(params.javascript, output.artifact.javascript);
    }

    #[tokio::test]
    async fn skips_behavior_file_when_none_was_generated() {
        let (engine, _, storage) =
            engine_with(r#"{"html": "<div></div>", "css": "div {}"}"#);

        engine
            .run(&mug_brief(), &SessionContext::signed_in())
            .await
            .unwrap();

        assert!(storage.get_text(BEHAVIOR_FILE).await.is_none());
        let preview = storage.get_text(PREVIEW_FILE).await.unwrap();
        assert!(preview.contains("<script>"));
    }

    #[tokio::test]
    async fn anonymous_session_never_reaches_the_provider() {
        let (engine, calls, _) = engine_with(MUG_RESPONSE);

        let err = engine
            .run(&mug_brief(), &SessionContext::anonymous())
            .await
            .unwrap_err();

        assert!(matches!(err, StudioError::AuthRequired));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_brief_never_reaches_the_provider() {
        let (engine, calls, _) = engine_with(MUG_RESPONSE);
        let mut brief = mug_brief();
        brief.primary_color = "red".to_string();

        let err = engine
            .run(&brief, &SessionContext::signed_in())
            .await
            .unwrap_err();

        match err {
            StudioError::ValidationFailed { issues } => {
                assert_eq!(issues[0].field, "primary_color");
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
