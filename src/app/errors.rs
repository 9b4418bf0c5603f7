use thiserror::Error;

use crate::{
    app::logging::LoggingError,
    domain::{services::DisableAction, settings::SettingsError},
    ports::network_config::NetworkConfigError,
};

pub const GENERIC_FAILURE_EXIT_CODE: i32 = 1;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Readiness(#[from] ReadinessError),
    #[error(transparent)]
    Disable(#[from] DisableError),
}

impl AppError {
    /// Exit status of the first failing networksetup call when there is one,
    /// otherwise the generic failure status.
    pub fn exit_code(&self) -> i32 {
        let subprocess_code = match self {
            Self::Disable(error) => error.exit_code(),
            Self::Settings(_) | Self::Logging(_) | Self::Readiness(_) => None,
        };

        subprocess_code
            .filter(|code| *code != 0)
            .unwrap_or(GENERIC_FAILURE_EXIT_CODE)
    }
}

#[derive(Debug, Error)]
pub enum ReadinessError {
    #[error("network configuration utility is not usable ({adapter})")]
    NetworkConfig {
        adapter: String,
        #[source]
        source: NetworkConfigError,
    },
}

#[derive(Debug, Error)]
pub enum DisableError {
    #[error("failed to list network services")]
    Listing {
        #[source]
        source: NetworkConfigError,
    },
    #[error("failed to {action}")]
    Action {
        action: DisableAction,
        #[source]
        source: NetworkConfigError,
    },
}

impl DisableError {
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Listing { source } | Self::Action { source, .. } => source.exit_code(),
        }
    }
}
