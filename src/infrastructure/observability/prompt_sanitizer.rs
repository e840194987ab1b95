const MAX_VISIBLE_CHARS: usize = 100;

const SECRET_MARKERS: [(&str, &str); 6] = [
    ("Bearer ", "Bearer [REDACTED]"),
    ("sk-", "sk-[REDACTED]"),
    ("api_key=", "api_key=[REDACTED]"),
    ("password=", "password=[REDACTED]"),
    ("secret=", "secret=[REDACTED]"),
    ("token=", "token=[REDACTED]"),
];

/// Shortens prompt or reply text for logging and masks credential-looking values.
pub fn sanitize_prompt(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_secrets(&visible)
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();
    for (marker, replacement) in SECRET_MARKERS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(marker) {
            let start = search_from + found;
            let value_start = start + marker.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(start..end, replacement);
            search_from = start + replacement.len();
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_blank_text_when_sanitizing_then_returns_empty_marker() {
        assert_eq!(sanitize_prompt("  \n "), "[EMPTY]");
    }

    #[test]
    fn given_long_multibyte_text_when_sanitizing_then_truncates_without_panicking() {
        let text = "ü".repeat(150);

        let sanitized = sanitize_prompt(&text);

        assert!(sanitized.starts_with(&"ü".repeat(100)));
        assert!(sanitized.ends_with("(150 chars total)"));
    }

    #[test]
    fn given_repeated_bearer_tokens_when_sanitizing_then_all_are_redacted() {
        let sanitized = sanitize_prompt("Bearer abc and Bearer def");

        assert_eq!(sanitized, "Bearer [REDACTED] and Bearer [REDACTED]");
    }

    #[test]
    fn given_openai_key_when_sanitizing_then_key_is_redacted() {
        let sanitized = sanitize_prompt("key is sk-live123 ok");

        assert_eq!(sanitized, "key is sk-[REDACTED] ok");
    }
}
