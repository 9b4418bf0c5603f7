use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "netdisable.toml";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DisablerConfigFile {
    #[serde(default)]
    pub runtime: RuntimeConfigSection,
    #[serde(default)]
    pub logging: LoggingConfigSection,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfigSection {
    #[serde(default = "default_networksetup_path")]
    pub networksetup_path: String,
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for RuntimeConfigSection {
    fn default() -> Self {
        Self {
            networksetup_path: default_networksetup_path(),
            dry_run: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfigSection {
    #[serde(default = "default_file_enabled")]
    pub file_enabled: bool,
    #[serde(default = "default_log_directory")]
    pub directory: String,
    #[serde(default = "default_log_file_name")]
    pub file_name: String,
}

impl Default for LoggingConfigSection {
    fn default() -> Self {
        Self {
            file_enabled: default_file_enabled(),
            directory: default_log_directory(),
            file_name: default_log_file_name(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}")]
    ReadConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid netdisable.toml format")]
    ParseToml {
        #[source]
        source: toml::de::Error,
    },
}

/// Loads the config at `path`. When `required` is false a missing file yields
/// the built-in defaults; a file that exists but cannot be read is still an
/// error.
pub fn load_disabler_config_file(
    path: &str,
    required: bool,
) -> Result<DisablerConfigFile, ConfigError> {
    if !required && !Path::new(path).exists() {
        return Ok(DisablerConfigFile::default());
    }

    let config_text =
        std::fs::read_to_string(path).map_err(|source| ConfigError::ReadConfigFile {
            path: PathBuf::from(path),
            source,
        })?;
    parse_disabler_config_toml(&config_text)
}

pub fn parse_disabler_config_toml(config_text: &str) -> Result<DisablerConfigFile, ConfigError> {
    toml::from_str::<DisablerConfigFile>(config_text)
        .map_err(|source| ConfigError::ParseToml { source })
}

fn default_networksetup_path() -> String {
    "/usr/sbin/networksetup".to_owned()
}

const fn default_file_enabled() -> bool {
    false
}

fn default_log_directory() -> String {
    "log".to_owned()
}

fn default_log_file_name() -> String {
    "output.ans".to_owned()
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, load_disabler_config_file, parse_disabler_config_toml};

    #[test]
    fn parses_runtime_and_logging_sections() {
        let config = parse_disabler_config_toml(
            r#"
[runtime]
networksetup_path = "/opt/bin/networksetup"
dry_run = true

[logging]
file_enabled = true
directory = "/var/log/netdisable"
file_name = "run.log"
"#,
        );

        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.runtime.networksetup_path, "/opt/bin/networksetup");
            assert!(config.runtime.dry_run);
            assert!(config.logging.file_enabled);
            assert_eq!(config.logging.directory, "/var/log/netdisable");
            assert_eq!(config.logging.file_name, "run.log");
        }
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_disabler_config_toml("");
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.runtime.networksetup_path, "/usr/sbin/networksetup");
            assert!(!config.runtime.dry_run);
            assert!(!config.logging.file_enabled);
            assert_eq!(config.logging.directory, "log");
            assert_eq!(config.logging.file_name, "output.ans");
        }
    }

    #[test]
    fn rejects_mistyped_values() {
        let config = parse_disabler_config_toml(
            r#"
[runtime]
dry_run = "yes"
"#,
        );
        assert!(matches!(config, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn optional_missing_file_falls_back_to_defaults() {
        let config = load_disabler_config_file("/nonexistent/netdisable-test.toml", false);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.runtime.networksetup_path, "/usr/sbin/networksetup");
        }
    }

    #[test]
    fn required_missing_file_is_an_error() {
        let config = load_disabler_config_file("/nonexistent/netdisable-test.toml", true);
        assert!(matches!(config, Err(ConfigError::ReadConfigFile { .. })));
    }
}
