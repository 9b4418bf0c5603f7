use crate::domain::{
    entities::NetworkServiceEntry,
    services::{DisableAction, DisablePlanner},
};

/// Services in the order the OS reported them (user-configured priority).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServiceListing {
    entries: Vec<NetworkServiceEntry>,
}

impl ServiceListing {
    pub const fn new(entries: Vec<NetworkServiceEntry>) -> Self {
        Self { entries }
    }

    #[inline(always)]
    pub fn entries(&self) -> &[NetworkServiceEntry] {
        &self.entries
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn disable_plan(&self) -> Vec<DisableAction> {
        self.entries
            .iter()
            .map(DisablePlanner::plan)
            .collect::<Vec<_>>()
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{} (port: {}, device: {}) -> {}",
                    entry.service_name(),
                    entry.hardware_port(),
                    entry.device(),
                    DisablePlanner::plan(entry)
                )
            })
            .collect::<Vec<_>>()
    }
}
