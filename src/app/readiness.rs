use crate::{app::errors::ReadinessError, ports::network_config::NetworkConfigPort};

pub fn validate_network_config_readiness<P: NetworkConfigPort>(
    network_config: &P,
) -> Result<(), ReadinessError> {
    network_config
        .validate_ready()
        .map_err(|source| ReadinessError::NetworkConfig {
            adapter: network_config.describe(),
            source,
        })
}
