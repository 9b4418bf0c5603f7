pub mod listing;

use std::{
    path::{Path, PathBuf},
    process::Stdio,
};

use tokio::process::Command;

pub use listing::parse_service_listing;

use crate::{
    domain::{
        aggregates::ServiceListing,
        value_objects::{DeviceIdentifier, NonEmptyText, ServiceName},
    },
    ports::network_config::{NetworkConfigError, NetworkConfigPort},
};

pub const LIST_SERVICE_ORDER_ARG: &str = "-listnetworkserviceorder";
pub const SET_AIRPORT_POWER_ARG: &str = "-setairportpower";
pub const SET_SERVICE_ENABLED_ARG: &str = "-setnetworkserviceenabled";

#[derive(Clone, Debug)]
pub struct NetworkSetupAdapter {
    utility_path: NonEmptyText,
}

impl NetworkSetupAdapter {
    pub const fn new(utility_path: NonEmptyText) -> Self {
        Self { utility_path }
    }

    #[inline(always)]
    pub fn utility_path(&self) -> &str {
        self.utility_path.as_str()
    }

    // Stdout is captured and returned to the caller; stderr goes straight to
    // the terminal so the utility's own diagnostics stay visible.
    async fn run(&self, args: &[&str]) -> Result<Vec<u8>, NetworkConfigError> {
        let command = render_command(self.utility_path(), args);
        log::debug!("Running: {}", command);

        let output = Command::new(self.utility_path())
            .args(args)
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|source| NetworkConfigError::Execute {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(output.stdout);
        }

        match output.status.code() {
            Some(code) => Err(NetworkConfigError::Failed { command, code }),
            None => Err(NetworkConfigError::Terminated { command }),
        }
    }
}

impl NetworkConfigPort for NetworkSetupAdapter {
    fn describe(&self) -> String {
        format!("networksetup at {}", self.utility_path())
    }

    // Bare command names are resolved through PATH at spawn time, so only
    // explicit paths can be checked up front.
    fn validate_ready(&self) -> Result<(), NetworkConfigError> {
        let path = Path::new(self.utility_path());
        if self.utility_path().contains('/') && !path.is_file() {
            return Err(NetworkConfigError::UtilityMissing {
                path: PathBuf::from(path),
            });
        }

        Ok(())
    }

    async fn list_services(&self) -> Result<ServiceListing, NetworkConfigError> {
        let stdout = self.run(&[LIST_SERVICE_ORDER_ARG]).await?;
        Ok(parse_service_listing(&String::from_utf8_lossy(&stdout)))
    }

    async fn set_service_enabled(
        &self,
        service_name: &ServiceName,
        enabled: bool,
    ) -> Result<(), NetworkConfigError> {
        self.run(&[
            SET_SERVICE_ENABLED_ARG,
            service_name.as_str(),
            on_off(enabled),
        ])
        .await
        .map(|_stdout| ())
    }

    async fn set_wireless_power(
        &self,
        device: &DeviceIdentifier,
        powered: bool,
    ) -> Result<(), NetworkConfigError> {
        self.run(&[SET_AIRPORT_POWER_ARG, device.as_str(), on_off(powered)])
            .await
            .map(|_stdout| ())
    }
}

const fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn render_command(program: &str, args: &[&str]) -> String {
    let mut rendered = program.to_owned();
    for arg in args {
        rendered.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            rendered.push('\'');
            rendered.push_str(arg);
            rendered.push('\'');
        } else {
            rendered.push_str(arg);
        }
    }
    rendered
}
