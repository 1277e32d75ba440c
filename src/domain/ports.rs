use crate::utils::error::Result;
use async_trait::async_trait;

/// The generative completion backend. One instruction in, one completion out,
/// fallible, no latency bound. Both contracts run against this trait so tests
/// can inject a deterministic stand-in.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, instruction: &str) -> Result<String>;
}

/// Where generated artifacts and the composed preview end up.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Settings the HTTP completion adapter is built from.
pub trait ProviderConfig: Send + Sync {
    fn endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> Option<u64>;
}
