//! Configuration file support for the landing renderer.
//!
//! Loads optional `landing.toml` from the working directory:
//!
//! ```toml
//! [footer]
//! github_url = "https://github.com/example/project"
//! docs_url = "/docs"
//! ```

use onboard_landing::content::FooterLinks;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "landing.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("`{key}` in {} must not be empty", .path.display())]
    EmptyUrl { path: PathBuf, key: &'static str },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub footer: FooterConfig,
}

/// Footer link targets. Unset keys keep the `#` placeholder.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub github_url: Option<String>,
    pub docs_url: Option<String>,
}

impl SiteConfig {
    /// Load `--config PATH` if given, otherwise [`DEFAULT_CONFIG_FILE`].
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate(path)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let entries = [
            ("footer.github_url", &self.footer.github_url),
            ("footer.docs_url", &self.footer.docs_url),
        ];
        for (key, value) in entries {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ConfigError::EmptyUrl {
                    path: path.to_path_buf(),
                    key,
                });
            }
        }
        Ok(())
    }

    /// Footer targets with command-line overrides applied on top.
    pub fn footer_links(&self, github: Option<String>, docs: Option<String>) -> FooterLinks {
        let defaults = FooterLinks::default();
        FooterLinks {
            github: github
                .or_else(|| self.footer.github_url.clone())
                .unwrap_or(defaults.github),
            documentation: docs
                .or_else(|| self.footer.docs_url.clone())
                .unwrap_or(defaults.documentation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");

        let config = SiteConfig::load_from_path(&path).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.footer_links(None, None), FooterLinks::default());
    }

    #[test]
    fn partial_footer_keeps_placeholder() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[footer]
github_url = "https://github.com/example/project"
"#,
        );

        let links = SiteConfig::load_from_path(&path)
            .unwrap()
            .footer_links(None, None);
        assert_eq!(links.github, "https://github.com/example/project");
        assert_eq!(links.documentation, "#");
    }

    #[test]
    fn flags_override_config() {
        let config = SiteConfig {
            footer: FooterConfig {
                github_url: Some("https://github.com/from/config".into()),
                docs_url: Some("/docs".into()),
            },
        };

        let links = config.footer_links(Some("https://github.com/from/flag".into()), None);
        assert_eq!(links.github, "https://github.com/from/flag");
        assert_eq!(links.documentation, "/docs");
    }

    #[test]
    fn rejects_empty_url() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[footer]\ndocs_url = \"  \"\n");

        let err = SiteConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptyUrl {
                key: "footer.docs_url",
                ..
            }
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[footer\n");

        let err = SiteConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = SiteConfig::resolve(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
