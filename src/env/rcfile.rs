//! Startup-file surgery
//!
//! The managed block is a trailing marker line plus one export line
//! per recognized key with a value. Rewriting runs an explicit
//! parse -> filter -> append -> serialize pipeline over the file's
//! lines: every previously managed line is dropped, everything else is
//! kept verbatim and in order, and a fresh block is appended. Repeated
//! applies are therefore idempotent.

use crate::model::{Profile, SettingKey};

/// Marker line delimiting the managed block.
pub const MARKER: &str = "# modelenv - active model profile";

/// Rebuild file content so it ends with the managed block for
/// `profile`. Export lines follow the key declaration order.
pub fn rewrite(content: &str, keys: &[SettingKey], profile: &Profile) -> String {
    let mut out = String::with_capacity(content.len() + 256);

    for line in content.lines().filter(|line| !is_managed_line(line, keys)) {
        out.push_str(line);
        out.push('\n');
    }

    out.push_str(MARKER);
    out.push('\n');
    for key in keys {
        if let Some(value) = profile.value(&key.key) {
            out.push_str(&export_line(&key.key, value));
            out.push('\n');
        }
    }
    out
}

/// A line belongs to the managed block when it is the marker or an
/// export statement for a recognized key. Indented exports are user
/// code and are left alone.
fn is_managed_line(line: &str, keys: &[SettingKey]) -> bool {
    if line.trim_end() == MARKER {
        return true;
    }
    let Some(rest) = line.strip_prefix("export ") else {
        return false;
    };
    keys.iter()
        .any(|k| rest.strip_prefix(k.key.as_str()).is_some_and(|r| r.starts_with('=')))
}

fn export_line(key: &str, value: &str) -> String {
    format!("export {}=\"{}\"", key, escape_value(value))
}

/// Escape characters the shell would interpret inside double quotes.
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_setting_keys;

    fn profile(values: &[(&str, &str)]) -> Profile {
        let mut p = Profile::new("work");
        for (k, v) in values {
            p.values.insert(k.to_string(), v.to_string());
        }
        p
    }

    fn work_profile() -> Profile {
        profile(&[
            ("ANTHROPIC_BASE_URL", "https://x"),
            ("ANTHROPIC_AUTH_TOKEN", "abc123"),
            ("ANTHROPIC_MODEL", "m1"),
        ])
    }

    #[test]
    fn test_empty_content_gets_marker_and_exports() {
        let keys = default_setting_keys();
        let result = rewrite("", &keys, &work_profile());

        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(
            lines,
            vec![
                MARKER,
                "export ANTHROPIC_BASE_URL=\"https://x\"",
                "export ANTHROPIC_AUTH_TOKEN=\"abc123\"",
                "export ANTHROPIC_MODEL=\"m1\"",
            ]
        );
        assert!(result.ends_with('\n'));
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let keys = default_setting_keys();
        let p = work_profile();

        let once = rewrite("alias ll='ls -la'\n", &keys, &p);
        let twice = rewrite(&once, &keys, &p);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_user_lines_preserved_in_order() {
        let keys = default_setting_keys();
        let content = "# my rc\nalias ll='ls -la'\nexport EDITOR=nvim\nif true; then\n  export ANTHROPIC_MODEL=indented\nfi\n";

        let result = rewrite(content, &keys, &work_profile());

        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(
            &lines[..6],
            &[
                "# my rc",
                "alias ll='ls -la'",
                "export EDITOR=nvim",
                "if true; then",
                "  export ANTHROPIC_MODEL=indented",
                "fi",
            ]
        );
        assert_eq!(lines[6], MARKER);
    }

    #[test]
    fn test_switching_profiles_leaves_no_stale_exports() {
        let keys = default_setting_keys();
        let with_model = rewrite("", &keys, &work_profile());

        let minimal = profile(&[
            ("ANTHROPIC_BASE_URL", "https://y"),
            ("ANTHROPIC_AUTH_TOKEN", "def456"),
        ]);
        let result = rewrite(&with_model, &keys, &minimal);

        assert!(!result.contains("ANTHROPIC_MODEL"));
        assert!(!result.contains("abc123"));
        assert!(result.contains("export ANTHROPIC_BASE_URL=\"https://y\""));
        assert_eq!(result.matches(MARKER).count(), 1);
    }

    #[test]
    fn test_exports_follow_key_declaration_order() {
        let keys = default_setting_keys();
        let result = rewrite("", &keys, &work_profile());

        let base = result.find("ANTHROPIC_BASE_URL").unwrap();
        let token = result.find("ANTHROPIC_AUTH_TOKEN").unwrap();
        let model = result.find("ANTHROPIC_MODEL").unwrap();
        assert!(base < token && token < model);
    }

    #[test]
    fn test_values_are_escaped() {
        let keys = vec![SettingKey::new("ANTHROPIC_BASE_URL", true)];
        let p = profile(&[("ANTHROPIC_BASE_URL", r#"https://x/"$path`y\z"#)]);

        let result = rewrite("", &keys, &p);
        assert!(result.contains(r#"export ANTHROPIC_BASE_URL="https://x/\"\$path\`y\\z""#));
    }

    #[test]
    fn test_unset_keys_are_omitted_from_block() {
        let keys = default_setting_keys();
        let p = profile(&[
            ("ANTHROPIC_BASE_URL", "https://x"),
            ("ANTHROPIC_AUTH_TOKEN", "abc"),
            ("ANTHROPIC_MODEL", "   "),
        ]);

        let result = rewrite("", &keys, &p);
        assert_eq!(result.lines().count(), 3);
        assert!(!result.contains("ANTHROPIC_MODEL"));
    }
}
