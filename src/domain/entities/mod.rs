pub mod network_service_entry;

pub use network_service_entry::NetworkServiceEntry;
