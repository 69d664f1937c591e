use crate::error::{Ds3Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the config directory (mostly useful for tests and scripting).
pub const HOME_ENV_VAR: &str = "DS3CLI_HOME";

/// Configuration for ds3cli, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ds3Config {
    /// Emit diagnostics on stderr
    #[serde(default)]
    pub verbose: bool,

    /// Proceed even when BlackPearl reports tape failures
    #[serde(default)]
    pub force: bool,
}

impl Ds3Config {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content)
            .map_err(|e| Ds3Error::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Current value of a setting, by its config file key.
    pub fn get(&self, key: &str) -> Option<bool> {
        match key {
            "verbose" => Some(self.verbose),
            "force" => Some(self.force),
            _ => None,
        }
    }

    /// Sets a setting from its textual value (`true` / `false`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let slot = match key {
            "verbose" => &mut self.verbose,
            "force" => &mut self.force,
            _ => return Err(Ds3Error::Config(format!("Unknown config key: {}", key))),
        };
        *slot = value.parse().map_err(|_| {
            Ds3Error::InvalidInput(format!("{} expects true or false, got '{}'", key, value))
        })?;
        Ok(())
    }

    /// Command-line switches can only turn settings on.
    pub fn merge_flags(mut self, verbose: bool, force: bool) -> Self {
        self.verbose |= verbose;
        self.force |= force;
        self
    }
}

/// Resolves the config directory: explicit path, then `$DS3CLI_HOME`, then the platform default.
pub fn config_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV_VAR) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "spectralogic", "ds3cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| Ds3Error::Config("Could not determine config dir".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Ds3Config::default();
        assert!(!config.verbose);
        assert!(!config.force);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Ds3Config::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, Ds3Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let config = Ds3Config {
            verbose: true,
            force: false,
        };
        config.save(&dir).unwrap();

        assert_eq!(Ds3Config::load(&dir).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"force": true}"#).unwrap();

        let config = Ds3Config::load(temp_dir.path()).unwrap();
        assert!(config.force);
        assert!(!config.verbose);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let err = Ds3Config::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Ds3Error::Config(_)));
    }

    #[test]
    fn test_flags_only_enable() {
        let config = Ds3Config {
            verbose: true,
            force: false,
        }
        .merge_flags(false, true);
        assert!(config.verbose);
        assert!(config.force);
    }

    #[test]
    fn test_get_and_set_known_keys() {
        let mut config = Ds3Config::default();
        config.set("force", "true").unwrap();
        assert_eq!(config.get("force"), Some(true));
        assert_eq!(config.get("verbose"), Some(false));
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_set_rejects_bad_key_and_value() {
        let mut config = Ds3Config::default();
        assert!(matches!(
            config.set("colour", "true").unwrap_err(),
            Ds3Error::Config(_)
        ));
        assert!(matches!(
            config.set("force", "yes").unwrap_err(),
            Ds3Error::InvalidInput(_)
        ));
        assert!(!config.force);
    }

    #[test]
    fn test_explicit_dir_wins() {
        let dir = config_dir(Some(Path::new("/tmp/ds3cli-explicit"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/ds3cli-explicit"));
    }
}
