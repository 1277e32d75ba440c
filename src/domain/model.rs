use serde::{Deserialize, Serialize};

/// One product slot in the display section. Built once from user input and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

/// The full generation request. Carousel image and product order is meaningful
/// and preserved through every boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBrief {
    pub carousel_images: Vec<String>,
    pub products: Vec<ProductRecord>,
    pub primary_color: String,
    pub secondary_color: String,
    pub font: String,
    pub intent_text: String,
}

/// The three-part generation result. `javascript` is `None` when the provider
/// produced no interactive behavior; an empty string never survives parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub html: String,
    pub css: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript: Option<String>,
}

impl GeneratedArtifact {
    pub fn has_behavior(&self) -> bool {
        self.javascript.is_some()
    }
}

/// Explicit authentication signal, handed into the engine by the caller
/// instead of being read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    signed_in: bool,
}

impl SessionContext {
    pub fn signed_in() -> Self {
        Self { signed_in: true }
    }

    pub fn anonymous() -> Self {
        Self { signed_in: false }
    }

    pub fn is_present(&self) -> bool {
        self.signed_in
    }
}
