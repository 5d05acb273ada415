use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, DEFAULT_MAX_REDIRECTS, DEFAULT_OUTPUT, DEFAULT_TIMEOUT};

const APP_NAME: &str = "seolens";

/// Configuration file structure that mirrors CLI arguments
/// All fields are optional to allow partial configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output format: text or json
    pub output: Option<String>,

    /// Save JSON report to file
    pub save: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// Maximum number of redirects to follow
    pub max_redirects: Option<usize>,

    /// Verbose output
    pub verbose: Option<bool>,
}

/// Configuration file format based on file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    const ALL: [ConfigFormat; 3] = [ConfigFormat::Json, ConfigFormat::Toml, ConfigFormat::Yaml];

    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                "toml" => Some(ConfigFormat::Toml),
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                _ => None,
            })
    }

    pub fn extensions(&self) -> &[&str] {
        match self {
            ConfigFormat::Json => &["json"],
            ConfigFormat::Toml => &["toml"],
            ConfigFormat::Yaml => &["yaml", "yml"],
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let format = ConfigFormat::from_path(path)
            .with_context(|| format!("Unsupported config file format: {}", path.display()))?;

        let config = match format {
            ConfigFormat::Json => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?,
            ConfigFormat::Toml => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?,
            ConfigFormat::Yaml => serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?,
        };

        Ok(config)
    }

    /// Get the default configuration file paths to check (in order of priority)
    /// Returns paths in order: current directory, user config directory
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        for format in &ConfigFormat::ALL {
            for ext in format.extensions() {
                paths.push(PathBuf::from(format!("{}.{}", APP_NAME, ext)));
            }
        }

        // Use XDG_CONFIG_HOME if set, otherwise fall back to ~/.config
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

        if let Some(config_home) = config_home {
            let app_config_dir = config_home.join(APP_NAME);
            for format in &ConfigFormat::ALL {
                for ext in format.extensions() {
                    paths.push(app_config_dir.join(format!("config.{}", ext)));
                }
            }
        }

        paths
    }

    /// Returns the first configuration file found, or None if no config exists
    pub fn from_default_paths() -> Result<Option<Self>> {
        for path in Self::default_paths() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading config file");
                return Ok(Some(Self::from_file(&path)?));
            }
        }
        Ok(None)
    }

    /// Loads the explicit `--config` file, or falls back to the default paths
    pub fn load(cli: &Cli) -> Result<Option<Self>> {
        match &cli.config {
            Some(path) => Self::from_file(Path::new(path)).map(Some),
            None => Self::from_default_paths(),
        }
    }

    /// Merge this configuration with CLI arguments
    /// CLI arguments take precedence over config file values
    pub fn merge_with_cli(&self, cli: &Cli) -> Cli {
        Cli {
            url: cli.url.clone(),
            output: if cli.output != DEFAULT_OUTPUT {
                cli.output.clone()
            } else {
                self.output.clone().unwrap_or_else(|| cli.output.clone())
            },
            save: cli.save.clone().or_else(|| self.save.clone()),
            timeout: if cli.timeout != DEFAULT_TIMEOUT {
                cli.timeout
            } else {
                self.timeout.unwrap_or(cli.timeout)
            },
            max_redirects: if cli.max_redirects != DEFAULT_MAX_REDIRECTS {
                cli.max_redirects
            } else {
                self.max_redirects.unwrap_or(cli.max_redirects)
            },
            verbose: cli.verbose || self.verbose.unwrap_or(false),
            config: cli.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::{NamedTempFile, tempdir};

    fn default_cli() -> Cli {
        Cli {
            url: "https://example.com".to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            save: None,
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            verbose: false,
            config: None,
        }
    }

    #[test]
    fn test_config_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.TOML")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.yml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("config.txt")), None);
    }

    #[test]
    fn test_load_toml_config() {
        let toml_content = r#"
output = "json"
timeout = 10
max_redirects = 2
verbose = true
        "#;

        let temp_file = NamedTempFile::new().unwrap();
        let temp_path = temp_file.path().with_extension("toml");
        fs::write(&temp_path, toml_content).unwrap();

        let config = Config::from_file(&temp_path).unwrap();
        assert_eq!(config.output, Some("json".to_string()));
        assert_eq!(config.timeout, Some(10));
        assert_eq!(config.max_redirects, Some(2));
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.save, None);

        fs::remove_file(temp_path).ok();
    }

    #[test]
    fn test_invalid_yaml_config() {
        let invalid_yaml = r#"
output: "json
    timeout: nope
        "#;

        let temp_file = NamedTempFile::new().unwrap();
        let temp_path = temp_file.path().with_extension("yaml");
        fs::write(&temp_path, invalid_yaml).unwrap();

        assert!(Config::from_file(&temp_path).is_err());

        fs::remove_file(temp_path).ok();
    }

    #[test]
    fn test_merge_fills_cli_defaults_from_config() {
        let config = Config {
            output: Some("json".to_string()),
            save: Some("report.json".to_string()),
            timeout: Some(12),
            max_redirects: Some(1),
            verbose: Some(true),
        };

        let merged = config.merge_with_cli(&default_cli());
        assert_eq!(merged.output, "json");
        assert_eq!(merged.save, Some("report.json".to_string()));
        assert_eq!(merged.timeout, 12);
        assert_eq!(merged.max_redirects, 1);
        assert!(merged.verbose);
    }

    #[test]
    fn test_merge_prefers_explicit_cli_values() {
        let config = Config {
            output: Some("json".to_string()),
            save: Some("from-config.json".to_string()),
            timeout: Some(12),
            max_redirects: Some(1),
            verbose: Some(false),
        };

        let cli = Cli {
            output: "text".to_string(),
            save: Some("from-cli.json".to_string()),
            timeout: 60,
            max_redirects: 8,
            verbose: true,
            ..default_cli()
        };

        let merged = config.merge_with_cli(&cli);
        // "text" is the default, so the config value still applies
        assert_eq!(merged.output, "json");
        assert_eq!(merged.save, Some("from-cli.json".to_string()));
        assert_eq!(merged.timeout, 60);
        assert_eq!(merged.max_redirects, 8);
        assert!(merged.verbose);
    }

    #[test]
    #[serial]
    fn test_default_paths_with_xdg_config_home() {
        unsafe {
            env::set_var("XDG_CONFIG_HOME", "/custom/config/path");
        }

        let paths = Config::default_paths();
        assert!(
            paths
                .iter()
                .any(|p| p.to_string_lossy().contains("/custom/config/path/seolens"))
        );
        assert_eq!(paths[0], PathBuf::from("seolens.json"));

        unsafe {
            env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    #[serial]
    fn test_from_default_paths_priority_order() {
        let temp_dir = tempdir().unwrap();
        let original_dir = env::current_dir().unwrap();
        env::set_current_dir(temp_dir.path()).unwrap();

        let temp_config_dir = tempdir().unwrap();
        let app_dir = temp_config_dir.path().join("seolens");
        fs::create_dir_all(&app_dir).unwrap();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", temp_config_dir.path());
        }

        fs::write(temp_dir.path().join("seolens.json"), r#"{"timeout": 5}"#).unwrap();
        fs::write(app_dir.join("config.json"), r#"{"timeout": 20}"#).unwrap();

        let config = Config::from_default_paths().unwrap().unwrap();
        assert_eq!(config.timeout, Some(5));

        env::set_current_dir(&original_dir).ok();
        unsafe {
            env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    #[serial]
    fn test_from_default_paths_returns_none_when_no_config_exists() {
        let temp_cwd = tempdir().unwrap();
        let original_dir = env::current_dir().unwrap();
        env::set_current_dir(temp_cwd.path()).unwrap();

        let temp_config_dir = tempdir().unwrap();
        unsafe {
            env::set_var("XDG_CONFIG_HOME", temp_config_dir.path());
        }

        let result = Config::from_default_paths().unwrap();
        assert!(result.is_none());

        env::set_current_dir(&original_dir).ok();
        unsafe {
            env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    fn test_load_uses_explicit_config_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "max_redirects: 3\n").unwrap();

        let cli = Cli {
            config: Some(path.to_string_lossy().to_string()),
            ..default_cli()
        };

        let config = Config::load(&cli).unwrap().unwrap();
        assert_eq!(config.max_redirects, Some(3));
    }
}
