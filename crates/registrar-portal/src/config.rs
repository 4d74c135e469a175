//! Portal configuration loaded from environment variables.
//!
//! Every setting has a default so the portal starts with no configuration
//! at all.

use std::path::PathBuf;

use registrar_shared::constants::{DEFAULT_STORAGE_QUOTA, MAX_UPLOAD_SIZE, STORAGE_NAMESPACE};
use registrar_store::StoreOptions;

#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Explicit database file.
    /// Env: `REGISTRAR_DB_PATH`
    /// Default: `None` (platform data directory).
    pub db_path: Option<PathBuf>,

    /// Prefix for every slot key.
    /// Env: `REGISTRAR_NAMESPACE`
    /// Default: `sms_`
    pub namespace: String,

    /// Total bytes the record slots may hold.
    /// Env: `REGISTRAR_STORAGE_QUOTA`
    /// Default: 5 MiB
    pub storage_quota: usize,

    /// Whether an empty store is filled with the demo institute.
    /// Env: `REGISTRAR_SEED_DEMO` (true/false)
    /// Default: `true`
    pub seed_demo: bool,

    /// Largest file the uploader will inline.
    /// Env: `REGISTRAR_MAX_UPLOAD`
    /// Default: 5 MiB
    pub max_upload: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            namespace: STORAGE_NAMESPACE.to_string(),
            storage_quota: DEFAULT_STORAGE_QUOTA,
            seed_demo: true,
            max_upload: MAX_UPLOAD_SIZE,
        }
    }
}

impl PortalConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("REGISTRAR_DB_PATH") {
            if !path.is_empty() {
                config.db_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(ns) = std::env::var("REGISTRAR_NAMESPACE") {
            if ns.is_empty() {
                tracing::warn!("Empty REGISTRAR_NAMESPACE, using default");
            } else {
                config.namespace = ns;
            }
        }

        if let Ok(val) = std::env::var("REGISTRAR_STORAGE_QUOTA") {
            match parse_bytes(&val) {
                Some(n) => config.storage_quota = n,
                None => {
                    tracing::warn!(value = %val, "Invalid REGISTRAR_STORAGE_QUOTA, using default")
                }
            }
        }

        if let Ok(val) = std::env::var("REGISTRAR_SEED_DEMO") {
            config.seed_demo = parse_flag(&val);
        }

        if let Ok(val) = std::env::var("REGISTRAR_MAX_UPLOAD") {
            match parse_bytes(&val) {
                Some(n) => config.max_upload = n,
                None => tracing::warn!(value = %val, "Invalid REGISTRAR_MAX_UPLOAD, using default"),
            }
        }

        config
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            namespace: self.namespace.clone(),
            quota_bytes: self.storage_quota,
        }
    }
}

/// A positive byte count.
fn parse_bytes(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value != "false" && value != "0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert!(config.db_path.is_none());
        assert_eq!(config.namespace, "sms_");
        assert_eq!(config.storage_quota, 5 * 1024 * 1024);
        assert!(config.seed_demo);
    }

    #[test]
    fn test_store_options_follow_config() {
        let config = PortalConfig {
            namespace: "ntz_".into(),
            storage_quota: 1024,
            ..PortalConfig::default()
        };
        let options = config.store_options();
        assert_eq!(options.namespace, "ntz_");
        assert_eq!(options.quota_bytes, 1024);
    }

    #[test]
    fn test_parse_bytes() {
        assert_eq!(parse_bytes("1048576"), Some(1_048_576));
        assert_eq!(parse_bytes(" 42 "), Some(42));
        assert_eq!(parse_bytes("0"), None);
        assert_eq!(parse_bytes("-5"), None);
        assert_eq!(parse_bytes("lots"), None);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
    }
}
