use crate::domain::model::{DisplayBrief, ProductRecord};
use crate::utils::error::{Result, StudioError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shape of a display brief. Table order in the file is the display
/// order of carousel images and products.
///
/// ```toml
/// [brand]
/// primary_color = "#112233"
/// secondary_color = "#445566"
/// font = "Arial"
///
/// [[carousel]]
/// url = "http://x/a.png"
///
/// [[products]]
/// title = "Mug"
/// price = "9.99"
/// description = "A nice mug for coffee"
/// image = "http://x/b.png"
///
/// [intent]
/// text = "Clean minimal layout with grid"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefFile {
    pub brand: BrandSection,
    #[serde(default)]
    pub carousel: Vec<CarouselEntry>,
    #[serde(default)]
    pub products: Vec<ProductEntry>,
    pub intent: IntentSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandSection {
    pub primary_color: String,
    pub secondary_color: String,
    pub font: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselEntry {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentSection {
    pub text: String,
}

impl BriefFile {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&contents).map_err(|e| StudioError::ConfigError {
            message: format!("invalid brief file {}: {}", path.as_ref().display(), e),
        })
    }

    /// Freeze the file contents into the immutable request value. Past this
    /// point nothing edits the brief.
    pub fn into_brief(self) -> DisplayBrief {
        DisplayBrief {
            carousel_images: self.carousel.into_iter().map(|entry| entry.url).collect(),
            products: self
                .products
                .into_iter()
                .map(|entry| ProductRecord {
                    title: entry.title,
                    price: entry.price,
                    description: entry.description,
                    image: entry.image,
                })
                .collect(),
            primary_color: self.brand.primary_color,
            secondary_color: self.brand.secondary_color,
            font: self.brand.font,
            intent_text: self.intent.text,
        }
    }
}
