use crate::domain::model::DisplayBrief;
use crate::utils::error::{FieldIssue, Result, StudioError};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

const MIN_TITLE_LEN: usize = 2;
const MIN_DESCRIPTION_LEN: usize = 10;
const MIN_INTENT_LEN: usize = 10;

fn hex_color_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#([0-9A-Fa-f]{3}){1,2}$").expect("hex color pattern"))
}

fn price_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("price pattern"))
}

/// Validate a brief before anything leaves the process. Returns
/// `ValidationFailed` carrying every violation found in one pass, so callers
/// can show them all together.
pub fn validate_brief(brief: &DisplayBrief) -> Result<()> {
    let issues = collect_brief_issues(brief);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(StudioError::ValidationFailed { issues })
    }
}

/// The collecting pass behind [`validate_brief`]. Field-local only; never
/// stops at the first violation.
pub fn collect_brief_issues(brief: &DisplayBrief) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    for (index, image) in brief.carousel_images.iter().enumerate() {
        check_url(&mut issues, format!("carousel[{}].url", index), image);
    }

    for (index, product) in brief.products.iter().enumerate() {
        check_min_length(
            &mut issues,
            format!("products[{}].title", index),
            &product.title,
            MIN_TITLE_LEN,
        );
        check_pattern(
            &mut issues,
            format!("products[{}].price", index),
            &product.price,
            price_pattern(),
            "must be a decimal amount like 9.99",
        );
        check_min_length(
            &mut issues,
            format!("products[{}].description", index),
            &product.description,
            MIN_DESCRIPTION_LEN,
        );
        check_url(&mut issues, format!("products[{}].image", index), &product.image);
    }

    check_pattern(
        &mut issues,
        "primary_color".to_string(),
        &brief.primary_color,
        hex_color_pattern(),
        "must be a hex color like #112233",
    );
    check_pattern(
        &mut issues,
        "secondary_color".to_string(),
        &brief.secondary_color,
        hex_color_pattern(),
        "must be a hex color like #112233",
    );

    if brief.font.trim().is_empty() {
        issues.push(FieldIssue {
            field: "font".to_string(),
            reason: "font name must not be empty".to_string(),
        });
    }

    check_min_length(
        &mut issues,
        "intent_text".to_string(),
        &brief.intent_text,
        MIN_INTENT_LEN,
    );

    issues
}

fn check_url(issues: &mut Vec<FieldIssue>, field: String, value: &str) {
    if value.is_empty() {
        issues.push(FieldIssue {
            field,
            reason: "URL must not be empty".to_string(),
        });
        return;
    }

    match Url::parse(value) {
        Ok(url) => match url.scheme() {
            "http" | "https" => {}
            scheme => issues.push(FieldIssue {
                field,
                reason: format!("unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => issues.push(FieldIssue {
            field,
            reason: format!("invalid URL: {}", e),
        }),
    }
}

fn check_min_length(issues: &mut Vec<FieldIssue>, field: String, value: &str, min: usize) {
    if value.trim().chars().count() < min {
        issues.push(FieldIssue {
            field,
            reason: format!("must be at least {} characters", min),
        });
    }
}

fn check_pattern(
    issues: &mut Vec<FieldIssue>,
    field: String,
    value: &str,
    pattern: &Regex,
    reason: &str,
) {
    if !pattern.is_match(value) {
        issues.push(FieldIssue {
            field,
            reason: reason.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProductRecord;

    fn valid_brief() -> DisplayBrief {
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

    #[test]
    fn accepts_a_well_formed_brief() {
        assert!(validate_brief(&valid_brief()).is_ok());
    }

    #[test]
    fn accepts_three_digit_hex_colors_and_whole_prices() {
        let mut brief = valid_brief();
        brief.primary_color = "#abc".to_string();
        brief.products[0].price = "30".to_string();
        assert!(validate_brief(&brief).is_ok());
    }

    #[test]
    fn rejects_named_colors() {
        let mut brief = valid_brief();
        brief.primary_color = "red".to_string();

        let issues = collect_brief_issues(&brief);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "primary_color");
    }

    #[test]
    fn issue_carries_the_sequence_index() {
        let mut brief = valid_brief();
        brief.products.push(ProductRecord {
            title: "Teapot".to_string(),
            price: "not-a-price".to_string(),
            description: "A porcelain teapot with lid".to_string(),
            image: "http://x/c.png".to_string(),
        });

        let issues = collect_brief_issues(&brief);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "products[1].price");
    }

    #[test]
    fn collects_every_violation_in_one_pass() {
        let brief = DisplayBrief {
            carousel_images: vec!["not a url".to_string()],
            products: vec![ProductRecord {
                title: "M".to_string(),
                price: "9.999".to_string(),
                description: "short".to_string(),
                image: "ftp://x/b.png".to_string(),
            }],
            primary_color: "red".to_string(),
            secondary_color: "#44556".to_string(),
            font: "  ".to_string(),
            intent_text: "tiny".to_string(),
        };

        let issues = collect_brief_issues(&brief);
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"carousel[0].url"));
        assert!(fields.contains(&"products[0].title"));
        assert!(fields.contains(&"products[0].price"));
        assert!(fields.contains(&"products[0].description"));
        assert!(fields.contains(&"products[0].image"));
        assert!(fields.contains(&"primary_color"));
        assert!(fields.contains(&"secondary_color"));
        assert!(fields.contains(&"font"));
        assert!(fields.contains(&"intent_text"));
        assert_eq!(issues.len(), 9);
    }

    #[test]
    fn empty_product_list_is_allowed() {
        let mut brief = valid_brief();
        brief.products.clear();
        assert!(validate_brief(&brief).is_ok());
    }
}
