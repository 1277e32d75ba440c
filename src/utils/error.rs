use std::fmt;
use thiserror::Error;

/// A single field-local validation violation. `field` carries the sequence
/// position of the offending value, e.g. `products[2].price`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub reason: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Completion provider error: {message}")]
    ProviderError { message: String },

    #[error("Brief validation failed: {}", format_issues(.issues))]
    ValidationFailed { issues: Vec<FieldIssue> },

    #[error("Display generation failed: {message}")]
    GenerationFailure { message: String },

    #[error("Prompt refinement failed: {message}")]
    RefinementFailure { message: String },

    #[error("No active session")]
    AuthRequired,

    #[error("Transfer parameter missing: {field}")]
    TransferError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Provider,
    Auth,
    Config,
    System,
}

impl StudioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StudioError::ValidationFailed { .. } | StudioError::TransferError { .. } => {
                ErrorCategory::Validation
            }
            StudioError::ApiError(_)
            | StudioError::ProviderError { .. }
            | StudioError::GenerationFailure { .. }
            | StudioError::RefinementFailure { .. } => ErrorCategory::Provider,
            StudioError::AuthRequired => ErrorCategory::Auth,
            StudioError::ConfigError { .. } => ErrorCategory::Config,
            StudioError::IoError(_) | StudioError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StudioError::ValidationFailed { .. } | StudioError::TransferError { .. } => {
                ErrorSeverity::Low
            }
            StudioError::GenerationFailure { .. }
            | StudioError::RefinementFailure { .. }
            | StudioError::ApiError(_)
            | StudioError::ProviderError { .. } => ErrorSeverity::Medium,
            StudioError::AuthRequired | StudioError::ConfigError { .. } => ErrorSeverity::High,
            StudioError::IoError(_) | StudioError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StudioError::ValidationFailed { .. } => {
                "Fix the listed fields in the brief and submit again".to_string()
            }
            StudioError::TransferError { field } => {
                format!("Regenerate the share string; the '{}' parameter is required", field)
            }
            StudioError::GenerationFailure { .. } | StudioError::RefinementFailure { .. } => {
                "The provider call can be retried as-is; results are not cached".to_string()
            }
            StudioError::ApiError(_) | StudioError::ProviderError { .. } => {
                "Check that the completion endpoint is reachable and the model name is valid"
                    .to_string()
            }
            StudioError::AuthRequired => "Sign in before generating".to_string(),
            StudioError::ConfigError { .. } => {
                "Review the CLI flags and the brief file".to_string()
            }
            StudioError::IoError(_) => "Check the output directory permissions".to_string(),
            StudioError::SerializationError(_) => {
                "Inspect the offending payload in the debug log".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StudioError::ValidationFailed { issues } => {
                let mut lines = vec!["The brief has invalid fields:".to_string()];
                for issue in issues {
                    lines.push(format!("  - {}", issue));
                }
                lines.join("\n")
            }
            StudioError::AuthRequired => {
                "You need an active session to generate a display section".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_issue() {
        let err = StudioError::ValidationFailed {
            issues: vec![
                FieldIssue {
                    field: "primary_color".to_string(),
                    reason: "must be a hex color".to_string(),
                },
                FieldIssue {
                    field: "products[1].price".to_string(),
                    reason: "must be a decimal amount".to_string(),
                },
            ],
        };

        let message = err.to_string();
        assert!(message.contains("primary_color: must be a hex color"));
        assert!(message.contains("products[1].price: must be a decimal amount"));
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn generation_failure_is_a_provider_error() {
        let err = StudioError::GenerationFailure {
            message: "completion endpoint returned status 503".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Provider);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("503"));
    }
}
