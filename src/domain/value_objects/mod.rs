pub mod network_service;
pub mod runtime;

pub use network_service::{DeviceIdentifier, HardwarePort, ServiceName, WIFI_HARDWARE_PORT};
pub use runtime::{NonEmptyText, RunMode};
