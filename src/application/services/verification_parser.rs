use crate::domain::ValidationResult;

const VALID_PREFIX: &str = "VALID:";
const FORM_TYPE_PREFIX: &str = "FORM_TYPE:";
const CONFIDENCE_PREFIX: &str = "CONFIDENCE:";
const EXPLANATION_PREFIX: &str = "EXPLANATION:";
const ISSUES_PREFIX: &str = "ISSUES:";

/// Parses a `KEY: value` verification reply into a [`ValidationResult`].
///
/// Lines are trimmed and matched against case-sensitive prefixes in any
/// order; unrecognised lines are skipped and a repeated key keeps its last
/// value. Fields never mentioned keep the unparsed defaults, so the result
/// is always well-formed.
pub fn parse_verification_reply(reply: &str) -> ValidationResult {
    let mut result = ValidationResult::default();

    for line in reply.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix(VALID_PREFIX) {
            result.is_valid = rest.to_lowercase().contains("yes");
        } else if let Some(rest) = line.strip_prefix(FORM_TYPE_PREFIX) {
            result.form_type = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(CONFIDENCE_PREFIX) {
            result.confidence = rest.trim().parse().unwrap_or(0);
        } else if let Some(rest) = line.strip_prefix(EXPLANATION_PREFIX) {
            result.explanation = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(ISSUES_PREFIX) {
            result.issues = rest.trim().to_string();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_prefix_with_leading_whitespace_when_parsing_then_line_is_recognised() {
        let result = parse_verification_reply("   FORM_TYPE: W-2");

        assert_eq!(result.form_type, "W-2");
    }

    #[test]
    fn given_crlf_line_endings_when_parsing_then_values_have_no_carriage_return() {
        let result = parse_verification_reply("ISSUES: none\r\nCONFIDENCE: 7\r\n");

        assert_eq!(result.issues, "none");
        assert_eq!(result.confidence, 7);
    }

    #[test]
    fn given_lowercase_key_when_parsing_then_line_is_ignored() {
        let result = parse_verification_reply("valid: yes");

        assert!(!result.is_valid);
        assert_eq!(result, ValidationResult::default());
    }
}
