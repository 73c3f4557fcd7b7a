//! Config file loading with environment overrides.
//!
//! Reads a single json5 config file and layers credential overrides from the
//! process environment on top, so deployments can keep api keys out of
//! checked-in config.

use crate::{ConfigError, WayfareConfig};
use log::{debug, info};
use std::env;
use std::fs;
use std::path::Path;

/// Default config filename looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "wayfare.json5";

/// Environment override for the generation api key.
const ENV_GENERATION_API_KEY: &str = "WAYFARE_GENERATION_API_KEY";
/// Environment override for the geocoding api key.
const ENV_GEOCODING_API_KEY: &str = "WAYFARE_GEOCODING_API_KEY";

/// Load config from an explicit path, or fall back to defaults when no path
/// is given and the default file does not exist.
pub fn load(path: Option<&Path>) -> Result<WayfareConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_from_path(path)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                load_from_path(default)?
            } else {
                debug!("no config file found, using defaults");
                WayfareConfig::default()
            }
        }
    };
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Read and parse a json5 config file.
pub fn load_from_path(path: &Path) -> Result<WayfareConfig, ConfigError> {
    let raw = fs::read_to_string(path)?;
    let config: WayfareConfig = json5::from_str(&raw)?;
    info!("loaded config (path={})", path.display());
    Ok(config)
}

/// Layer credential overrides from the environment onto a config.
pub fn apply_env_overrides(config: &mut WayfareConfig) {
    if let Ok(key) = env::var(ENV_GENERATION_API_KEY)
        && !key.is_empty()
    {
        debug!("applying generation api key from environment");
        config.generation.api_key = Some(key);
    }
    if let Ok(key) = env::var(ENV_GEOCODING_API_KEY)
        && !key.is_empty()
    {
        debug!("applying geocoding api key from environment");
        config.geocoding.api_key = Some(key);
    }
}

#[cfg(test)]
mod tests {
    use super::load_from_path;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_json5_file_with_defaults_for_missing_sections() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("wayfare.json5");
        fs::write(
            &path,
            r#"{
                // deployment-local overrides
                generation: { api_key: "test-key", timeout_secs: 5 },
                suggestions: { batch_size: 4 },
            }"#,
        )
        .expect("write config");

        let config = load_from_path(&path).expect("load");
        assert_eq!(config.generation.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.generation.timeout_secs, 5);
        assert_eq!(config.suggestions.batch_size, 4);
        assert_eq!(config.geocoding.api_key, None);
        assert!(
            config
                .geocoding
                .endpoint
                .starts_with("https://maps.googleapis.com")
        );
    }

    #[test]
    fn rejects_malformed_config() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("wayfare.json5");
        fs::write(&path, "{ generation: [ }").expect("write config");
        assert!(load_from_path(&path).is_err());
    }
}
