use crate::domain::model::GeneratedArtifact;
use crate::utils::error::{Result, StudioError};
use url::form_urlencoded;

const DEFAULT_FONT: &str = "Arial";
const DEFAULT_PRIMARY_COLOR: &str = "#000000";

/// The handoff payload when a generation result crosses a navigation boundary
/// instead of being consumed in-process. Each field travels as one
/// percent-encoded query parameter and decodes back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewParams {
    pub html: String,
    pub css: String,
    pub font: String,
    pub primary_color: String,
    pub javascript: Option<String>,
}

impl PreviewParams {
    pub fn from_artifact(artifact: &GeneratedArtifact, font: &str, primary_color: &str) -> Self {
        Self {
            html: artifact.html.clone(),
            css: artifact.css.clone(),
            font: font.to_string(),
            primary_color: primary_color.to_string(),
            javascript: artifact.javascript.clone(),
        }
    }
}

/// Encode every field as a query parameter. `javascript` is emitted only when
/// behavior is present, so its absence stays meaningful on the other side.
pub fn to_query(params: &PreviewParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer
        .append_pair("html", &params.html)
        .append_pair("css", &params.css)
        .append_pair("font", &params.font)
        .append_pair("primaryColor", &params.primary_color);
    if let Some(javascript) = &params.javascript {
        serializer.append_pair("javascript", javascript);
    }
    serializer.finish()
}

/// Decode a query string back into preview parameters. `html` and `css` are
/// required; `font` and `primaryColor` fall back to the display defaults; a
/// missing or empty `javascript` parameter decodes to the no-behavior state.
pub fn from_query(query: &str) -> Result<PreviewParams> {
    let mut html = None;
    let mut css = None;
    let mut font = None;
    let mut primary_color = None;
    let mut javascript = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "html" => html = Some(value.into_owned()),
            "css" => css = Some(value.into_owned()),
            "font" => font = Some(value.into_owned()),
            "primaryColor" => primary_color = Some(value.into_owned()),
            "javascript" => javascript = Some(value.into_owned()),
            _ => {}
        }
    }

    Ok(PreviewParams {
        html: html.ok_or_else(|| StudioError::TransferError {
            field: "html".to_string(),
        })?,
        css: css.ok_or_else(|| StudioError::TransferError {
            field: "css".to_string(),
        })?,
        font: font.unwrap_or_else(|| DEFAULT_FONT.to_string()),
        primary_color: primary_color.unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
        javascript: javascript.filter(|s| !s.is_empty()),
    })
}
