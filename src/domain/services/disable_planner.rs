use std::fmt::{Display, Formatter};

use crate::domain::{
    entities::NetworkServiceEntry,
    value_objects::{DeviceIdentifier, ServiceName},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DisableAction {
    PowerOffWireless { device: DeviceIdentifier },
    DisableService { service_name: ServiceName },
}

impl Display for DisableAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PowerOffWireless { device } => write!(f, "power off wi-fi radio on {}", device),
            Self::DisableService { service_name } => {
                write!(f, "disable network service '{}'", service_name)
            }
        }
    }
}

pub struct DisablePlanner;

impl DisablePlanner {
    #[inline(always)]
    pub fn plan(entry: &NetworkServiceEntry) -> DisableAction {
        if entry.hardware_port().is_wifi() {
            DisableAction::PowerOffWireless {
                device: entry.device().clone(),
            }
        } else {
            DisableAction::DisableService {
                service_name: entry.service_name().clone(),
            }
        }
    }
}
