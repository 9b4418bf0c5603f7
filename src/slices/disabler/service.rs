use crate::{
    app::errors::DisableError,
    domain::{aggregates::ServiceListing, services::DisableAction},
    ports::network_config::{NetworkConfigError, NetworkConfigPort},
};

pub struct ServiceDisabler<P: NetworkConfigPort> {
    port: P,
}

impl<P: NetworkConfigPort> ServiceDisabler<P> {
    pub const fn new(port: P) -> Self {
        Self { port }
    }

    /// Turns off every listed service in listing order. The first failing
    /// command aborts the pass; later services are left untouched.
    pub async fn disable_all(&self) -> Result<(), DisableError> {
        let listing = self.fetch_listing().await?;
        log::info!("Found {} network services", listing.len());

        for action in listing.disable_plan() {
            log::info!("Disabling: {}", action);
            let applied = self.apply(&action).await;
            applied.map_err(|source| DisableError::Action { action, source })?;
        }

        log::info!("All network services disabled");
        Ok(())
    }

    pub async fn list_services(&self) -> Result<ServiceListing, DisableError> {
        let listing = self.fetch_listing().await?;

        if listing.is_empty() {
            log::info!("No network services found");
        }
        for line in listing.log_lines() {
            log::info!("{}", line);
        }

        Ok(listing)
    }

    async fn fetch_listing(&self) -> Result<ServiceListing, DisableError> {
        self.port
            .list_services()
            .await
            .map_err(|source| DisableError::Listing { source })
    }

    async fn apply(&self, action: &DisableAction) -> Result<(), NetworkConfigError> {
        match action {
            DisableAction::PowerOffWireless { device } => {
                self.port.set_wireless_power(device, false).await
            }
            DisableAction::DisableService { service_name } => {
                self.port.set_service_enabled(service_name, false).await
            }
        }
    }
}
