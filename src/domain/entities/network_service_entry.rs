use crate::domain::value_objects::{DeviceIdentifier, HardwarePort, ServiceName};

/// One `networksetup -listnetworkserviceorder` record. All three fields come
/// from the same record; there is no partially populated entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkServiceEntry {
    service_name: ServiceName,
    hardware_port: HardwarePort,
    device: DeviceIdentifier,
}

impl NetworkServiceEntry {
    #[inline(always)]
    pub const fn new(
        service_name: ServiceName,
        hardware_port: HardwarePort,
        device: DeviceIdentifier,
    ) -> Self {
        Self {
            service_name,
            hardware_port,
            device,
        }
    }

    pub fn from_parts(
        service_name: &str,
        hardware_port: &str,
        device: &str,
    ) -> Result<Self, &'static str> {
        Ok(Self::new(
            ServiceName::try_from(service_name)?,
            HardwarePort::try_from(hardware_port)?,
            DeviceIdentifier::try_from(device)?,
        ))
    }

    #[inline(always)]
    pub const fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    #[inline(always)]
    pub const fn hardware_port(&self) -> &HardwarePort {
        &self.hardware_port
    }

    #[inline(always)]
    pub const fn device(&self) -> &DeviceIdentifier {
        &self.device
    }
}
