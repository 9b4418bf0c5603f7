use std::sync::{Arc, Mutex};

use netdisable::{
    adapters::{dry_run::DryRunNetworkConfig, networksetup::parse_service_listing},
    app::errors::{AppError, DisableError},
    domain::{
        aggregates::ServiceListing,
        value_objects::{DeviceIdentifier, ServiceName},
    },
    ports::network_config::{NetworkConfigError, NetworkConfigPort},
    slices::disabler::service::ServiceDisabler,
};

const MIXED_LISTING: &str = "An asterisk (*) denotes that a network service is disabled.
(1) Thunderbolt Ethernet Slot 1
(Hardware Port: Thunderbolt Ethernet Slot 1, Device: en5)

(2) Wi-Fi
(Hardware Port: Wi-Fi, Device: en0)

(*) Bluetooth PAN
(Hardware Port: Bluetooth PAN, Device: en8)

not a record
(3) Home Wireless
(Hardware Port: Wi-Fi, Device: en1)

(4) iPhone USB
(Hardware Port: iPhone USB, Device: en9)

";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    AirportPower { device: String, on: bool },
    ServiceEnabled { service: String, on: bool },
}

#[derive(Clone, Debug, Default)]
struct RecordingNetworkConfig {
    listing_output: String,
    failing_service: Option<String>,
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

impl RecordingNetworkConfig {
    fn with_listing(listing_output: &str) -> Self {
        Self {
            listing_output: listing_output.to_owned(),
            ..Self::default()
        }
    }

    fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .map(|invocations| invocations.clone())
            .unwrap_or_default()
    }

    fn push(&self, invocation: Invocation) {
        if let Ok(mut invocations) = self.invocations.lock() {
            invocations.push(invocation);
        }
    }
}

impl NetworkConfigPort for RecordingNetworkConfig {
    fn describe(&self) -> String {
        "recording".to_owned()
    }

    fn validate_ready(&self) -> Result<(), NetworkConfigError> {
        Ok(())
    }

    async fn list_services(&self) -> Result<ServiceListing, NetworkConfigError> {
        Ok(parse_service_listing(&self.listing_output))
    }

    async fn set_service_enabled(
        &self,
        service_name: &ServiceName,
        enabled: bool,
    ) -> Result<(), NetworkConfigError> {
        self.push(Invocation::ServiceEnabled {
            service: service_name.as_str().to_owned(),
            on: enabled,
        });

        if self.failing_service.as_deref() == Some(service_name.as_str()) {
            return Err(NetworkConfigError::Failed {
                command: format!("networksetup -setnetworkserviceenabled {} off", service_name),
                code: 4,
            });
        }
        Ok(())
    }

    async fn set_wireless_power(
        &self,
        device: &DeviceIdentifier,
        powered: bool,
    ) -> Result<(), NetworkConfigError> {
        self.push(Invocation::AirportPower {
            device: device.as_str().to_owned(),
            on: powered,
        });
        Ok(())
    }
}

fn airport_off(device: &str) -> Invocation {
    Invocation::AirportPower {
        device: device.to_owned(),
        on: false,
    }
}

fn service_off(service: &str) -> Invocation {
    Invocation::ServiceEnabled {
        service: service.to_owned(),
        on: false,
    }
}

#[tokio::test]
async fn e2e_disables_every_matched_service_in_listing_order() {
    let network_config = RecordingNetworkConfig::with_listing(MIXED_LISTING);
    let disabler = ServiceDisabler::new(network_config.clone());

    assert!(disabler.disable_all().await.is_ok());
    assert_eq!(
        network_config.invocations(),
        vec![
            service_off("Thunderbolt Ethernet Slot 1"),
            airport_off("en0"),
            airport_off("en1"),
            service_off("iPhone USB"),
        ]
    );
}

#[tokio::test]
async fn e2e_failure_aborts_remaining_services() {
    let mut network_config = RecordingNetworkConfig::with_listing(MIXED_LISTING);
    network_config.failing_service = Some("Thunderbolt Ethernet Slot 1".to_owned());
    let disabler = ServiceDisabler::new(network_config.clone());

    let result = disabler.disable_all().await;
    assert!(matches!(result, Err(DisableError::Action { .. })));
    if let Err(error) = result {
        assert_eq!(AppError::from(error).exit_code(), 4);
    }
    assert_eq!(
        network_config.invocations(),
        vec![service_off("Thunderbolt Ethernet Slot 1")]
    );
}

#[tokio::test]
async fn e2e_empty_listing_is_a_clean_no_op() {
    let network_config = RecordingNetworkConfig::with_listing("");
    let disabler = ServiceDisabler::new(network_config.clone());

    assert!(disabler.disable_all().await.is_ok());
    assert!(network_config.invocations().is_empty());
}

#[tokio::test]
async fn e2e_dry_run_lists_but_never_mutates() {
    let network_config = RecordingNetworkConfig::with_listing(MIXED_LISTING);
    let disabler = ServiceDisabler::new(DryRunNetworkConfig::new(network_config.clone()));

    assert!(disabler.disable_all().await.is_ok());
    assert!(network_config.invocations().is_empty());
}

#[tokio::test]
async fn e2e_list_mode_reports_planned_actions() {
    let network_config = RecordingNetworkConfig::with_listing(MIXED_LISTING);
    let disabler = ServiceDisabler::new(network_config.clone());

    let listing = disabler.list_services().await;
    assert!(listing.is_ok());
    if let Ok(listing) = listing {
        assert_eq!(listing.len(), 4);
        assert_eq!(
            listing.log_lines().get(2).map(String::as_str),
            Some("Home Wireless (port: Wi-Fi, device: en1) -> power off wi-fi radio on en1")
        );
    }
    assert!(network_config.invocations().is_empty());
}

#[cfg(unix)]
mod subprocess {
    use std::{fs, os::unix::fs::PermissionsExt, path::PathBuf};

    use netdisable::{
        adapters::networksetup::NetworkSetupAdapter,
        app::errors::{AppError, DisableError},
        domain::value_objects::NonEmptyText,
        ports::network_config::NetworkConfigPort,
        slices::disabler::service::ServiceDisabler,
    };

    struct FakeUtility {
        dir: PathBuf,
        script: PathBuf,
        calls: PathBuf,
    }

    impl FakeUtility {
        fn install() -> std::io::Result<Self> {
            let dir = std::env::temp_dir().join(format!("netdisable-e2e-{}", std::process::id()));
            fs::create_dir_all(&dir)?;
            let script = dir.join("networksetup");
            let calls = dir.join("calls.log");
            let _removed = fs::remove_file(&calls);

            let body = format!(
                r#"#!/bin/sh
echo "$*" >> '{calls}'
case "$1" in
  -listnetworkserviceorder)
    cat <<'LISTING'
An asterisk (*) denotes that a network service is disabled.
(1) Wi-Fi
(Hardware Port: Wi-Fi, Device: en0)

(2) USB 10/100/1000 LAN
(Hardware Port: USB 10/100/1000 LAN, Device: en7)

(3) Broken VPN
(Hardware Port: L2TP, Device: ppp0)

(4) Never Reached
(Hardware Port: Ethernet, Device: en1)

LISTING
    ;;
  -setnetworkserviceenabled)
    if [ "$2" = "Broken VPN" ]; then
      echo "** Error: cannot disable $2" >&2
      exit 7
    fi
    ;;
esac
exit 0
"#,
                calls = calls.display()
            );
            fs::write(&script, body)?;
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;

            Ok(Self { dir, script, calls })
        }

        fn calls(&self) -> Vec<String> {
            fs::read_to_string(&self.calls)
                .unwrap_or_default()
                .lines()
                .map(str::to_owned)
                .collect::<Vec<_>>()
        }
    }

    impl Drop for FakeUtility {
        fn drop(&mut self) {
            let _removed = fs::remove_dir_all(&self.dir);
        }
    }

    #[tokio::test]
    async fn e2e_networksetup_adapter_runs_commands_until_first_failure() {
        let utility = FakeUtility::install();
        assert!(utility.is_ok());
        let utility = if let Ok(utility) = utility {
            utility
        } else {
            return;
        };

        let utility_path = NonEmptyText::try_from(utility.script.display().to_string());
        assert!(utility_path.is_ok());
        let adapter = if let Ok(utility_path) = utility_path {
            NetworkSetupAdapter::new(utility_path)
        } else {
            return;
        };
        assert!(adapter.validate_ready().is_ok());

        let result = ServiceDisabler::new(adapter).disable_all().await;
        assert!(matches!(result, Err(DisableError::Action { .. })));
        if let Err(error) = result {
            assert_eq!(AppError::from(error).exit_code(), 7);
        }

        assert_eq!(
            utility.calls(),
            vec![
                "-listnetworkserviceorder".to_owned(),
                "-setairportpower en0 off".to_owned(),
                "-setnetworkserviceenabled USB 10/100/1000 LAN off".to_owned(),
                "-setnetworkserviceenabled Broken VPN off".to_owned(),
            ]
        );
    }
}
