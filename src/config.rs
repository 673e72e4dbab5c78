use serde::Deserialize;
use crate::domain::file::DEFAULT_UPLOAD_DIR;

/// Runtime settings for the storefront.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Channel capacity of each record actor.
    #[serde(default = "default_buffer_size")]
    pub actor_buffer_size: usize,
    /// Directory product files are stored under.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Fallback log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_buffer_size() -> usize { 32 }
fn default_upload_dir() -> String { DEFAULT_UPLOAD_DIR.to_string() }
fn default_log_level() -> String { "info".to_string() }

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            actor_buffer_size: default_buffer_size(),
            upload_dir: default_upload_dir(),
            log_level: default_log_level(),
        }
    }
}

impl StorefrontConfig {
    /// Loads `config/storefront.*` if present, then `STOREFRONT__*` environment
    /// variables, e.g. `STOREFRONT__ACTOR_BUFFER_SIZE=64`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_sources("config/storefront", "STOREFRONT")
    }

    pub fn from_sources(file: &str, env_prefix: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        if loaded.actor_buffer_size == 0 {
            return Err(config::ConfigError::Message("actor_buffer_size must be greater than zero".into()));
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_configured() {
        let loaded = StorefrontConfig::from_sources("config/does-not-exist", "STOREFRONT_TEST_UNSET").unwrap();
        assert_eq!(loaded, StorefrontConfig::default());
        assert_eq!(loaded.upload_dir, "uploads");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("storefront-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("storefront.toml");
        std::fs::write(&path, "actor_buffer_size = 8\nupload_dir = \"media\"\n").unwrap();

        let base = dir.join("storefront");
        let loaded = StorefrontConfig::from_sources(base.to_str().unwrap(), "STOREFRONT_TEST_FILE").unwrap();
        assert_eq!(loaded.actor_buffer_size, 8);
        assert_eq!(loaded.upload_dir, "media");
        assert_eq!(loaded.log_level, "info");

        std::fs::write(&path, "actor_buffer_size = 0\n").unwrap();
        assert!(StorefrontConfig::from_sources(base.to_str().unwrap(), "STOREFRONT_TEST_FILE").is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = std::env::temp_dir().join(format!("storefront-config-env-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("storefront.toml"), "actor_buffer_size = 8\nupload_dir = \"media\"\n").unwrap();
        let base = dir.join("storefront");

        // prefix is unique to this test so parallel tests never see it
        let key = "STOREFRONT_ENVTEST__ACTOR_BUFFER_SIZE";
        std::env::set_var(key, "64");
        let loaded = StorefrontConfig::from_sources(base.to_str().unwrap(), "STOREFRONT_ENVTEST");
        std::env::remove_var(key);

        let loaded = loaded.unwrap();
        assert_eq!(loaded.actor_buffer_size, 64);
        assert_eq!(loaded.upload_dir, "media");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
