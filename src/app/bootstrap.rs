use std::error::Error;

use log::LevelFilter;

use crate::{
    adapters::{dry_run::DryRunNetworkConfig, networksetup::NetworkSetupAdapter},
    app::{errors::AppError, logging::init_logging, readiness::validate_network_config_readiness},
    domain::{settings::RuntimeSettings, value_objects::RunMode},
    ports::network_config::NetworkConfigPort,
    slices::disabler::service::ServiceDisabler,
};

pub async fn run() {
    let outcome = run_inner().await;
    log::logger().flush();

    if let Err(error) = outcome {
        eprintln!("{}", render_error_chain(&error));
        std::process::exit(error.exit_code());
    }
}

async fn run_inner() -> Result<(), AppError> {
    let settings = RuntimeSettings::from_args()?;

    init_logging(resolve_level_filter(), settings.log_file_path.as_deref()).await?;

    log::info!("netdisable");

    let network_config = NetworkSetupAdapter::new(settings.networksetup_path.clone());

    log::info!(
        "Settings: \
\n\tCONFIG: {}{}\
\n\tRUN_MODE: {}\
\n\tNETWORKSETUP: {}\
\n\tLOG_FILE: {}",
        settings.config_path,
        if settings.config_required {
            ""
        } else {
            " (optional)"
        },
        settings.run_mode,
        network_config.describe(),
        settings
            .log_file_path
            .as_ref()
            .map_or_else(|| "(disabled)".to_owned(), |path| path.display().to_string()),
    );

    validate_network_config_readiness(&network_config)?;

    match settings.run_mode {
        RunMode::Apply => {
            ServiceDisabler::new(network_config).disable_all().await?;
        }
        RunMode::DryRun => {
            ServiceDisabler::new(DryRunNetworkConfig::new(network_config))
                .disable_all()
                .await?;
        }
        RunMode::List => {
            ServiceDisabler::new(network_config).list_services().await?;
        }
    }

    Ok(())
}

fn resolve_level_filter() -> LevelFilter {
    match std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info".to_owned())
        .to_lowercase()
        .as_str()
    {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

fn render_error_chain(error: &(dyn Error + 'static)) -> String {
    let mut rendered = format!("error: {}", error);
    for cause in std::iter::successors(error.source(), |&cause| cause.source()) {
        rendered.push_str("\n  caused by: ");
        rendered.push_str(&cause.to_string());
    }
    rendered
}
