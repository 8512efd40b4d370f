use anyhow::Context;
use serde::Deserialize;
use std::{
    borrow::Cow,
    collections::HashMap,
    path::Path,
};
use url::Url;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    /// The api key
    #[serde(default)]
    key: Option<String>,

    /// The url api paths are joined onto
    #[serde(default)]
    base_url: Option<String>,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    /// Load a config from a path
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        std::fs::read(path)
            .with_context(|| format!("Failed to read config from '{}'", path.display()))
            .and_then(|b| Self::load_from_bytes(&b))
    }

    /// Load a config from bytes
    pub fn load_from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes).context("config is not utf8")?;
        toml::from_str(text).context("Failed to parse config")
    }

    /// Get the api key.
    ///
    /// The flag wins over the config, which wins over the env var.
    pub fn resolve_key(&self, flag: Option<String>, env: Option<String>) -> Option<String> {
        let non_empty = |key: &String| !key.is_empty();

        flag.filter(non_empty)
            .or_else(|| self.key.clone().filter(non_empty))
            .or_else(|| env.filter(non_empty))
    }

    /// Get the parsed base url, if one was set.
    pub fn base_url(&self) -> anyhow::Result<Option<Url>> {
        self.base_url
            .as_deref()
            .map(|base_url| Url::parse(base_url).context("invalid base url"))
            .transpose()
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if self.key.as_deref() == Some("") {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::EmptyKey,
            });
        }

        if let Some(base_url) = self.base_url.as_deref() {
            match Url::parse(base_url) {
                Ok(url) if !url.cannot_be_a_base() => {
                    if !url.path().ends_with('/') {
                        errors.push(ValidationMessage {
                            severity: Severity::Warn,
                            error: ValidationError::Generic(
                                format!(
                                    "base url \"{url}\" does not end with '/', its last path segment will be replaced"
                                )
                                .into(),
                            ),
                        });
                    }
                }
                _ => errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::InvalidBaseUrl,
                }),
            }
        }

        for key in self.extra.keys() {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownField(key.clone()),
            });
        }

        errors
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug)]
pub enum ValidationError {
    EmptyKey,
    InvalidBaseUrl,
    UnknownField(String),
    Generic(Cow<'static, str>),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyKey => write!(f, "Empty Api Key"),
            ValidationError::InvalidBaseUrl => write!(f, "Invalid Base Url"),
            ValidationError::UnknownField(field) => write!(f, "Unknown Field \"{field}\""),
            ValidationError::Generic(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn load() {
        let config = Config::load_from_bytes(
            br#"
key = "e1513542-f4c7-483d-bf1b-3b29d4e59903"
base_url = "http://localhost:8080/"
"#,
        )
        .expect("failed to load config");

        assert!(config.validate().is_empty());
        assert_eq!(
            config
                .base_url()
                .expect("invalid base url")
                .map(|url| url.to_string()),
            Some("http://localhost:8080/".to_string())
        );
    }

    #[test]
    fn empty() {
        let config = Config::load_from_bytes(b"").expect("failed to load config");
        assert!(config.validate().is_empty());
        assert!(config.base_url().expect("invalid base url").is_none());
    }

    #[test]
    fn validate() {
        let config = Config::load_from_bytes(
            br#"
key = ""
base_url = "not a url"
token = "abc"
"#,
        )
        .expect("failed to load config");

        let messages = config.validate();
        let severities: Vec<_> = messages.iter().map(|e| e.severity()).collect();
        assert_eq!(
            severities,
            [Severity::Warn, Severity::Error, Severity::Warn]
        );
        assert!(matches!(
            messages[2].error(),
            ValidationError::UnknownField(field) if field == "token"
        ));
    }

    #[test]
    fn key_precedence() {
        let config = Config {
            key: Some("config".into()),
            ..Config::default()
        };

        assert_eq!(
            config
                .resolve_key(Some("flag".into()), Some("env".into()))
                .as_deref(),
            Some("flag")
        );
        assert_eq!(
            config.resolve_key(None, Some("env".into())).as_deref(),
            Some("config")
        );

        let config = Config::default();
        assert_eq!(
            config.resolve_key(None, Some("env".into())).as_deref(),
            Some("env")
        );
        assert_eq!(config.resolve_key(None, None), None);
    }

    #[test]
    fn empty_keys_fall_through() {
        let config = Config::load_from_bytes(br#"key = """#).expect("failed to load config");

        assert_eq!(
            config.resolve_key(None, Some("env".into())).as_deref(),
            Some("env")
        );
        assert_eq!(
            config
                .resolve_key(Some(String::new()), Some("env".into()))
                .as_deref(),
            Some("env")
        );
        assert_eq!(config.resolve_key(None, Some(String::new())), None);
    }
}
