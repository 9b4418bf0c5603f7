use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{
    aggregates::ServiceListing,
    value_objects::{DeviceIdentifier, ServiceName},
};

#[derive(Debug, Error)]
pub enum NetworkConfigError {
    #[error("network configuration utility not found at {path}")]
    UtilityMissing { path: PathBuf },
    #[error("failed to execute `{command}`")]
    Execute {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` failed with exit code {code}")]
    Failed { command: String, code: i32 },
    #[error("`{command}` terminated without an exit code")]
    Terminated { command: String },
}

impl NetworkConfigError {
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Failed { code, .. } => Some(*code),
            Self::UtilityMissing { .. } | Self::Execute { .. } | Self::Terminated { .. } => None,
        }
    }
}

#[trait_variant::make(Send + Sync)]
pub trait NetworkConfigPort {
    fn describe(&self) -> String;
    fn validate_ready(&self) -> Result<(), NetworkConfigError>;
    async fn list_services(&self) -> Result<ServiceListing, NetworkConfigError>;
    async fn set_service_enabled(
        &self,
        service_name: &ServiceName,
        enabled: bool,
    ) -> Result<(), NetworkConfigError>;
    async fn set_wireless_power(
        &self,
        device: &DeviceIdentifier,
        powered: bool,
    ) -> Result<(), NetworkConfigError>;
}
