//! Utilities shared by the Vassa navigation shell crates: session
//! persistence, path expansion and secret redaction for logs.

use once_cell::sync::Lazy;
use regex::Regex;

pub mod path_processing;
pub mod session_store;

pub use path_processing::expand_tilde;
pub use session_store::{SESSION_PATH_ENV, SessionStore, SessionStoreError};

static REDACTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(bearer )([\w\-\.=:/+]+)",
        r"(?i)(authorization: )([\w\-\.=:/+]+)",
        r#"(?i)("token"\s*:\s*")([^"]+)"#,
        r"(?i)([A-Z0-9_]*?(KEY|TOKEN|SECRET|PASSWORD)=)([^\s]+)",
    ]
    .into_iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Redacts values that look like secrets in a string.
pub fn redact_sensitive(input: &str) -> String {
    let mut redacted = input.to_string();
    for re in REDACTION_PATTERNS.iter() {
        redacted = re
            .replace_all(&redacted, |caps: &regex::Captures| {
                let prefix = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                format!("{}<redacted>", prefix)
            })
            .to_string();
    }
    redacted
}

#[cfg(test)]
mod tests {
    use super::redact_sensitive;

    #[test]
    fn bearer_tokens_are_redacted() {
        let out = redact_sensitive("Authorization: Bearer abc.def");
        assert!(out.starts_with("Authorization: "));
        assert!(!out.contains("abc.def"));
        assert_eq!(redact_sensitive("sent bearer abc123"), "sent bearer <redacted>");
    }

    #[test]
    fn json_tokens_are_redacted() {
        let out = redact_sensitive(r#"{"token": "s3cr3t", "user": "asha"}"#);
        assert!(!out.contains("s3cr3t"));
        assert!(out.contains("asha"));
    }

    #[test]
    fn env_style_secrets_are_redacted() {
        assert_eq!(redact_sensitive("VASSA_API_KEY=xyz"), "VASSA_API_KEY=<redacted>");
    }
}
