use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Check capitalized words instead of treating them as proper nouns.
    #[serde(default)]
    pub strict: bool,

    /// Exit nonzero when unresolved words remain at the end of a session.
    #[serde(default)]
    pub exit_error: bool,

    /// Editor command used for the interactive fix path.
    #[serde(default = "default_editor")]
    pub editor: String,

    #[serde(default)]
    pub lookup: LookupConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Language code passed to the inflections endpoint.
    #[serde(default = "default_language")]
    pub language: String,

    pub app_id: Option<String>,
    pub app_key: Option<String>,
}

fn default_editor() -> String {
    "vim".to_string()
}

fn default_base_url() -> String {
    "https://od-api.oxforddictionaries.com/api/v1".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
            app_id: None,
            app_key: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            exit_error: false,
            editor: default_editor(),
            lookup: LookupConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI flags > environment > local
    /// config > global config > defaults.
    pub fn load(strict: bool, exit_error: bool) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(".htmlspell.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        config.apply_env();

        if strict {
            config.strict = true;
        }
        if exit_error {
            config.exit_error = true;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        self.strict = self.strict || other.strict;
        self.exit_error = self.exit_error || other.exit_error;
        if other.editor != default_editor() {
            self.editor = other.editor;
        }
        if other.lookup.base_url != default_base_url() {
            self.lookup.base_url = other.lookup.base_url;
        }
        if other.lookup.language != default_language() {
            self.lookup.language = other.lookup.language;
        }
        if other.lookup.app_id.is_some() {
            self.lookup.app_id = other.lookup.app_id;
        }
        if other.lookup.app_key.is_some() {
            self.lookup.app_key = other.lookup.app_key;
        }
        self
    }

    /// Environment overrides. Credentials are never compiled in; they arrive
    /// here or through a config file.
    fn apply_env(&mut self) {
        if let Ok(url) = env::var("HTMLSPELL_LOOKUP_URL") {
            self.lookup.base_url = url;
        }
        if let Ok(language) = env::var("HTMLSPELL_LANGUAGE") {
            self.lookup.language = language;
        }
        if let Ok(app_id) = env::var("HTMLSPELL_APP_ID") {
            self.lookup.app_id = Some(app_id);
        }
        if let Ok(app_key) = env::var("HTMLSPELL_APP_KEY") {
            self.lookup.app_key = Some(app_key);
        }
        if let Ok(editor) = env::var("HTMLSPELL_EDITOR") {
            self.editor = editor;
        } else if let Ok(editor) = env::var("EDITOR") {
            self.editor = editor;
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.lookup.app_id.is_some() && self.lookup.app_key.is_some()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "htmlspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.strict);
        assert!(!config.exit_error);
        assert_eq!(config.editor, "vim");
        assert_eq!(config.lookup.language, "en");
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            strict: true,
            lookup: LookupConfig {
                app_id: Some("id".to_string()),
                app_key: Some("key".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert!(merged.strict);
        assert!(merged.has_credentials());
        assert_eq!(merged.lookup.base_url, default_base_url());
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            strict = true

            [lookup]
            language = "en-gb"
            app_id = "abc"
            "#,
        )
        .unwrap();
        assert!(config.strict);
        assert_eq!(config.lookup.language, "en-gb");
        assert_eq!(config.lookup.app_id.as_deref(), Some("abc"));
        assert!(!config.has_credentials());
    }
}
