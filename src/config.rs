use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

/// Backend connection settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Absolute URL prefix every request path is appended to
    pub backend_url: String,
    /// Request timeout in seconds; unset leaves the transport default in place
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load settings from file and environment variables
///
/// Settings are loaded with the following priority (highest to lowest):
/// 1. Environment variables with SAMBA__ prefix
/// 2. samba.toml file in current directory
///
/// Environment variable format: SAMBA__BACKEND_URL
pub fn load_config() -> Result<Settings, ConfigError> {
    // Optional config file (can be missing)
    load_config_from(File::with_name("samba").required(false))
}

fn load_config_from<S>(file: S) -> Result<Settings, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("SAMBA")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    // Every load reads SAMBA__* from the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_KEYS: [&str; 2] = ["SAMBA__BACKEND_URL", "SAMBA__TIMEOUT_SECS"];

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn saved_env() -> Vec<(&'static str, Option<String>)> {
        ENV_KEYS.iter().map(|k| (*k, env::var(k).ok())).collect()
    }

    fn restore_env(saved: Vec<(&'static str, Option<String>)>) {
        for (key, value) in saved {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_load_from_toml() {
        let _guard = env_lock();
        let toml = r#"
            backend_url = "https://api.example.com"
            timeout_secs = 10
        "#;

        let settings = load_config_from(File::from_str(toml, FileFormat::Toml)).unwrap();

        assert_eq!(settings.backend_url, "https://api.example.com");
        assert_eq!(settings.timeout_secs, Some(10));
    }

    #[test]
    fn test_timeout_defaults_to_none() {
        let _guard = env_lock();
        let toml = r#"backend_url = "http://localhost:8080""#;

        let settings = load_config_from(File::from_str(toml, FileFormat::Toml)).unwrap();

        assert_eq!(settings.backend_url, "http://localhost:8080");
        assert!(settings.timeout_secs.is_none());
    }

    #[test]
    fn test_missing_backend_url_is_error() {
        let _guard = env_lock();
        let toml = "timeout_secs = 3";

        let result = load_config_from(File::from_str(toml, FileFormat::Toml));

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_without_env_is_error() {
        let _guard = env_lock();
        let saved = saved_env();
        for key in ENV_KEYS {
            env::remove_var(key);
        }

        let result = load_config_from(File::with_name("no-such-dir/samba").required(false));

        restore_env(saved);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = env_lock();
        let saved = saved_env();
        env::set_var("SAMBA__BACKEND_URL", "http://env-backend");
        env::set_var("SAMBA__TIMEOUT_SECS", "2");
        let toml = r#"
            backend_url = "http://file-backend"
            timeout_secs = 30
        "#;

        let result = load_config_from(File::from_str(toml, FileFormat::Toml));

        restore_env(saved);
        let settings = result.unwrap();
        assert_eq!(settings.backend_url, "http://env-backend");
        assert_eq!(settings.timeout_secs, Some(2));
    }

    #[test]
    fn test_env_alone_is_enough() {
        let _guard = env_lock();
        let saved = saved_env();
        env::remove_var("SAMBA__TIMEOUT_SECS");
        env::set_var("SAMBA__BACKEND_URL", "http://env-only");

        let result = load_config_from(File::with_name("no-such-dir/samba").required(false));

        restore_env(saved);
        let settings = result.unwrap();
        assert_eq!(settings.backend_url, "http://env-only");
        assert!(settings.timeout_secs.is_none());
    }
}
