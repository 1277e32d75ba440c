pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::HttpCompletionProvider;
pub use crate::adapters::storage::LocalStorage;
pub use crate::config::BriefFile;
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::core::engine::{RunOutput, StudioEngine};
pub use crate::core::generate::DisplayGenerator;
pub use crate::core::refine::PromptRefiner;
pub use crate::domain::model::{DisplayBrief, GeneratedArtifact, ProductRecord, SessionContext};
pub use crate::domain::ports::{CompletionProvider, ProviderConfig, Storage};
pub use crate::utils::error::{Result, StudioError};
