//! CLI command implementations

pub mod add;
pub mod backup;
pub mod list;
pub mod remove;
pub mod status;
pub mod use_cmd;

use crate::model::SettingKey;

/// Render a value for terminal output; secrets are truncated to a
/// short prefix so credentials never appear in full.
pub(crate) fn display_value(key: &SettingKey, value: &str) -> String {
    if key.is_secret() && value.chars().count() > 10 {
        format!("{}...", value.chars().take(10).collect::<String>())
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_values_are_truncated() {
        let token = SettingKey::new("ANTHROPIC_AUTH_TOKEN", true);
        assert_eq!(
            display_value(&token, "sk-1234567890abcdef"),
            "sk-1234567..."
        );
        assert_eq!(display_value(&token, "short"), "short");
    }

    #[test]
    fn test_plain_values_pass_through() {
        let url = SettingKey::new("ANTHROPIC_BASE_URL", true);
        assert_eq!(
            display_value(&url, "https://api.example.com/v1/messages"),
            "https://api.example.com/v1/messages"
        );
    }
}
