use crate::error::{IsisVersionError, Result};
use crate::parser;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the complete configuration for isis-version.
///
/// Lets a user pin the ISIS installation root and override the version
/// filename without touching the process environment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Installation root; takes precedence over the ISISROOT environment entry
    #[serde(default)]
    pub isis_root: Option<PathBuf>,

    /// Relative filename of the version file under the installation root
    #[serde(default = "default_version_file")]
    pub version_file: String,
}

/// Returns the default version filename.
fn default_version_file() -> String {
    parser::VERSION_FILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            isis_root: None,
            version_file: default_version_file(),
        }
    }
}

impl Config {
    /// Merge this configuration into an environment mapping.
    ///
    /// A configured `isis_root` overwrites any ISISROOT entry already in the
    /// mapping, so a config file wins over the ambient environment.
    pub fn environment(&self, base: HashMap<String, String>) -> HashMap<String, String> {
        let mut environment = base;
        if let Some(root) = &self.isis_root {
            environment.insert(
                parser::ISIS_ROOT_KEY.to_string(),
                root.display().to_string(),
            );
        }
        environment
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `isisversion.toml` in current directory
/// 3. `~/.config/.isisversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./isisversion.toml").exists() {
        fs::read_to_string("./isisversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".isisversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| IsisVersionError::config(format!("invalid configuration file: {}", e)))?;
    Ok(config)
}
