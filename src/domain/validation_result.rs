use serde::{Deserialize, Serialize};

pub const UNPARSED_MESSAGE: &str = "Unable to parse verification response";
pub const UNKNOWN_FORM_TYPE: &str = "Unknown";

/// Verdict on whether an uploaded document is a Form 1040.
///
/// Always well-formed: the default value marks a reply that could not be
/// parsed, and upstream failures are folded into the same shape through
/// [`ValidationResult::service_error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub form_type: String,
    pub confidence: i32,
    pub explanation: String,
    pub issues: String,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            is_valid: false,
            form_type: UNKNOWN_FORM_TYPE.to_string(),
            confidence: 0,
            explanation: UNPARSED_MESSAGE.to_string(),
            issues: UNPARSED_MESSAGE.to_string(),
        }
    }
}

impl ValidationResult {
    pub fn service_error(error: impl std::fmt::Display) -> Self {
        Self {
            explanation: format!("Error during verification: {}", error),
            issues: "Unable to verify document due to service error".to_string(),
            ..Self::default()
        }
    }
}
