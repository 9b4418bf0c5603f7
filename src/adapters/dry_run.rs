use crate::{
    domain::{
        aggregates::ServiceListing,
        value_objects::{DeviceIdentifier, ServiceName},
    },
    ports::network_config::{NetworkConfigError, NetworkConfigPort},
};

/// Reads through to the wrapped port but never mutates: every enable/disable
/// call is logged and reported as successful.
#[derive(Clone, Debug)]
pub struct DryRunNetworkConfig<P> {
    inner: P,
}

impl<P: NetworkConfigPort> DryRunNetworkConfig<P> {
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: NetworkConfigPort> NetworkConfigPort for DryRunNetworkConfig<P> {
    fn describe(&self) -> String {
        format!("dry run over {}", self.inner.describe())
    }

    fn validate_ready(&self) -> Result<(), NetworkConfigError> {
        self.inner.validate_ready()
    }

    async fn list_services(&self) -> Result<ServiceListing, NetworkConfigError> {
        self.inner.list_services().await
    }

    async fn set_service_enabled(
        &self,
        service_name: &ServiceName,
        enabled: bool,
    ) -> Result<(), NetworkConfigError> {
        log::info!(
            "Dry run: skipped setting network service '{}' enabled={}",
            service_name,
            enabled
        );
        Ok(())
    }

    async fn set_wireless_power(
        &self,
        device: &DeviceIdentifier,
        powered: bool,
    ) -> Result<(), NetworkConfigError> {
        log::info!(
            "Dry run: skipped setting wi-fi power on {} powered={}",
            device,
            powered
        );
        Ok(())
    }
}
