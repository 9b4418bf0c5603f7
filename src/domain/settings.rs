use std::{env, path::PathBuf};
use thiserror::Error;

use crate::domain::{
    config::{ConfigError, DEFAULT_CONFIG_PATH, DisablerConfigFile, load_disabler_config_file},
    value_objects::{NonEmptyText, RunMode},
};

const SUPPORTED_ARGUMENTS: &str = "--config <path>, --dry-run, --list";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NonEmptySettingsField {
    NetworksetupPath,
    LogDirectory,
    LogFileName,
}

impl NonEmptySettingsField {
    const fn as_str(self) -> &'static str {
        match self {
            Self::NetworksetupPath => "runtime.networksetup_path",
            Self::LogDirectory => "logging.directory",
            Self::LogFileName => "logging.file_name",
        }
    }
}

impl std::fmt::Display for NonEmptySettingsField {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Arguments(#[from] ArgumentsError),
    #[error(transparent)]
    Runtime(#[from] RuntimeSettingsError),
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ArgumentsError {
    #[error("use only one of --dry-run or --list")]
    ConflictingRunModes,
    #[error("missing value for {flag}")]
    MissingFlagValue { flag: &'static str },
    #[error(
        "unknown argument '{argument}' (supported: {supported})",
        supported = SUPPORTED_ARGUMENTS
    )]
    UnknownArgument { argument: String },
}

#[derive(Debug, Error)]
pub enum RuntimeSettingsError {
    #[error("{field} must not be empty")]
    EmptyField { field: NonEmptySettingsField },
}

#[derive(Clone, Debug)]
pub struct RuntimeSettings {
    pub config_path: String,
    pub config_required: bool,
    pub networksetup_path: NonEmptyText,
    pub run_mode: RunMode,
    pub log_file_path: Option<PathBuf>,
}

impl RuntimeSettings {
    pub fn from_args() -> Result<Self, SettingsError> {
        let args = env::args().skip(1).collect::<Vec<_>>();
        Self::from_cli_args(&args)
    }

    pub fn from_cli_args(args: &[String]) -> Result<Self, SettingsError> {
        let arguments = parse_arguments(args)?;

        let config_required = arguments.config_path.is_some();
        let config_path = arguments
            .config_path
            .as_deref()
            .unwrap_or(DEFAULT_CONFIG_PATH)
            .to_owned();
        let parsed_config = load_disabler_config_file(&config_path, config_required)?;
        Self::from_parsed_config(&arguments, config_path, config_required, &parsed_config)
    }

    fn from_parsed_config(
        arguments: &CliArguments,
        config_path: String,
        config_required: bool,
        parsed_config: &DisablerConfigFile,
    ) -> Result<Self, SettingsError> {
        let runtime = &parsed_config.runtime;
        let logging = &parsed_config.logging;

        let run_mode = match RunMode::from_flags(arguments.dry_run, arguments.list) {
            Some(RunMode::Apply) if runtime.dry_run => RunMode::DryRun,
            Some(mode) => mode,
            None => return Err(ArgumentsError::ConflictingRunModes.into()),
        };

        let networksetup_path = NonEmptyText::try_from(runtime.networksetup_path.clone())
            .map_err(|_source| RuntimeSettingsError::EmptyField {
                field: NonEmptySettingsField::NetworksetupPath,
            })?;

        let log_file_path = if logging.file_enabled {
            let directory = NonEmptyText::try_from(logging.directory.clone()).map_err(|_source| {
                RuntimeSettingsError::EmptyField {
                    field: NonEmptySettingsField::LogDirectory,
                }
            })?;
            let file_name = NonEmptyText::try_from(logging.file_name.clone()).map_err(|_source| {
                RuntimeSettingsError::EmptyField {
                    field: NonEmptySettingsField::LogFileName,
                }
            })?;
            Some(PathBuf::from(directory.as_str()).join(file_name.as_str()))
        } else {
            None
        };

        Ok(Self {
            config_path,
            config_required,
            networksetup_path,
            run_mode,
            log_file_path,
        })
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct CliArguments {
    config_path: Option<String>,
    dry_run: bool,
    list: bool,
}

// The token after `--config` is consumed as its value and never read as a flag.
fn parse_arguments(args: &[String]) -> Result<CliArguments, ArgumentsError> {
    let mut arguments = CliArguments::default();
    let mut remaining = args.iter();

    while let Some(argument) = remaining.next() {
        match argument.as_str() {
            "--dry-run" => arguments.dry_run = true,
            "--list" => arguments.list = true,
            "--config" => {
                let config_path = remaining
                    .next()
                    .filter(|value| !value.starts_with("--"))
                    .ok_or(ArgumentsError::MissingFlagValue { flag: "--config" })?;
                arguments.config_path = Some(config_path.clone());
            }
            _ => {
                return Err(ArgumentsError::UnknownArgument {
                    argument: argument.clone(),
                });
            }
        }
    }

    Ok(arguments)
}
