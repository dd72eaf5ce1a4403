//! Publisher configuration management
//!
//! Persistent JSON settings, stored under the platform config directory.
//!
//! `hive_uri`, `hadoop_conf_dir` and `kerberos` belong to the process that
//! executes the generated DDL against the warehouse. This crate only loads
//! and saves them so that one config file serves both; nothing here connects.

use crate::publisher::{IDENTIFIER_MAX_LEN, RestrictedKeywords};
use anyhow::{Context as _, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Kerberos KDC and realm for the warehouse connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KerberosConfig {
    pub kdc: String,
    pub realm: String,
}

/// Publisher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    /// JDBC-style URI of the warehouse server, read by the DDL executor
    pub hive_uri: String,
    /// Directory holding `core-site.xml` and `hdfs-site.xml`, read by the DDL executor
    pub hadoop_conf_dir: PathBuf,
    /// Kerberos settings the DDL executor authenticates with
    pub kerberos: KerberosConfig,
    /// Maximum length of generated table and column names
    pub identifier_max_len: usize,
    /// Replaces the built-in keyword list when set
    pub restricted_keywords: Option<Vec<String>>,
    /// Directory for rolling log files; console only when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            hive_uri: String::new(),
            hadoop_conf_dir: PathBuf::new(),
            kerberos: KerberosConfig::default(),
            identifier_max_len: IDENTIFIER_MAX_LEN,
            restricted_keywords: None,
            log_dir: None,
        }
    }
}

impl PublisherConfig {
    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to get config directory")?;
        Ok(config_dir.join("dataset-publisher").join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read publisher config from {}", path.display()))?;

        let config: Self =
            serde_json::from_str(&contents).context("Failed to parse publisher config JSON")?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize publisher config")?;

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write publisher config to {}", path.display()))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.identifier_max_len > 0,
            "identifier_max_len must be greater than zero"
        );
        Ok(())
    }

    /// Keyword set in effect: the configured override or the built-in list.
    pub fn keywords(&self) -> RestrictedKeywords {
        match &self.restricted_keywords {
            Some(words) => RestrictedKeywords::new(words),
            None => RestrictedKeywords::hive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = PublisherConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, PublisherConfig::default());
        assert_eq!(config.identifier_max_len, IDENTIFIER_MAX_LEN);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = PublisherConfig {
            hive_uri: "jdbc:hive2://hive:10000/".to_owned(),
            kerberos: KerberosConfig {
                kdc: "kdc.example.com".to_owned(),
                realm: "EXAMPLE.COM".to_owned(),
            },
            identifier_max_len: 64,
            restricted_keywords: Some(vec!["Location".to_owned()]),
            ..PublisherConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded = PublisherConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"hive_uri": "jdbc:hive2://h:10000/"}"#).unwrap();

        let config = PublisherConfig::load_from(&path).unwrap();
        assert_eq!(config.hive_uri, "jdbc:hive2://h:10000/");
        assert_eq!(config.identifier_max_len, IDENTIFIER_MAX_LEN);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_zero_max_len_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"identifier_max_len": 0}"#).unwrap();

        let err = PublisherConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("identifier_max_len"));
    }

    #[test]
    fn test_keywords_override() {
        let config = PublisherConfig {
            restricted_keywords: Some(vec!["Foo".to_owned()]),
            ..PublisherConfig::default()
        };
        let keywords = config.keywords();
        assert_eq!(keywords.len(), 1);
        assert!(keywords.contains("foo"));

        assert_eq!(
            PublisherConfig::default().keywords(),
            RestrictedKeywords::hive()
        );
    }
}
