//! User configuration model loaded from `config.toml`.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::AppError;

/// User configuration. Every field is optional in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FacadConfig {
    /// Column cap for directories without a specific entry.
    #[serde(default)]
    pub max_columns: Option<usize>,
    /// Annotate entries with git status and the header with the branch.
    #[serde(default = "default_git")]
    pub git: bool,
    /// Column caps keyed by absolute directory path.
    #[serde(default)]
    pub columns: BTreeMap<String, usize>,
    #[serde(default)]
    pub emoji: EmojiOverrides,
}

/// Emoji table extensions supplied by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmojiOverrides {
    /// Extension (without dot) to emoji; keys are matched case-insensitively.
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
    /// Exact file name to emoji.
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

impl Default for FacadConfig {
    fn default() -> Self {
        Self {
            max_columns: None,
            git: default_git(),
            columns: BTreeMap::new(),
            emoji: EmojiOverrides::default(),
        }
    }
}

fn default_git() -> bool {
    true
}

/// Parse and validate configuration content.
pub fn parse_config(content: &str) -> Result<FacadConfig, AppError> {
    let config: FacadConfig = toml::from_str(content)?;

    if config.max_columns == Some(0) {
        return Err(AppError::config_error("max_columns must be at least 1"));
    }
    if let Some((path, _)) = config.columns.iter().find(|(_, columns)| **columns == 0) {
        return Err(AppError::config_error(format!("columns for '{}' must be at least 1", path)));
    }
    let blank = config
        .emoji
        .extensions
        .iter()
        .chain(config.emoji.files.iter())
        .find(|(_, emoji)| emoji.trim().is_empty());
    if let Some((key, _)) = blank {
        return Err(AppError::config_error(format!("emoji for '{}' must not be empty", key)));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_yields_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.git);
        assert_eq!(config.max_columns, None);
        assert!(config.columns.is_empty());
    }

    #[test]
    fn parses_all_sections() {
        let config = parse_config(
            r#"
max_columns = 3
git = false

[columns]
"/srv" = 2

[emoji.extensions]
rs = "🦞"

[emoji.files]
Justfile = "🤖"
"#,
        )
        .unwrap();

        assert_eq!(config.max_columns, Some(3));
        assert!(!config.git);
        assert_eq!(config.columns.get("/srv"), Some(&2));
        assert_eq!(config.emoji.extensions.get("rs").map(String::as_str), Some("🦞"));
        assert_eq!(config.emoji.files.get("Justfile").map(String::as_str), Some("🤖"));
    }

    #[test]
    fn rejects_zero_columns() {
        let err = parse_config("max_columns = 0").unwrap_err();
        assert!(err.to_string().contains("max_columns"));

        let err = parse_config("[columns]\n\"/tmp\" = 0\n").unwrap_err();
        assert!(err.to_string().contains("/tmp"));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_types() {
        assert!(matches!(parse_config("colums = 3"), Err(AppError::ConfigParse(_))));
        assert!(matches!(parse_config("git = \"yes\""), Err(AppError::ConfigParse(_))));
    }

    #[test]
    fn rejects_blank_emoji() {
        let err = parse_config("[emoji.files]\nREADME = \" \"\n").unwrap_err();
        assert!(err.to_string().contains("README"));
    }
}
