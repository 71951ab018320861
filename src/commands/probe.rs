//! Poll the appliance and print the monitoring line

use std::path::Path;

use nas_probe::adapters::{DnsResolver, PassthroughResolver, SnmpConnector};
use nas_probe::config::{self, ConfigError, FileConfig, Overrides, Settings};
use nas_probe::core::ports::{HostResolver, TransportFailure};
use nas_probe::core::services::probe;
use nas_probe::output::{OutputMode, ProbeResult};

/// Run one probe and render its result
///
/// Every outcome, including a broken configuration, becomes a line on stdout.
pub fn probe(
    overrides: Overrides,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let result = match load_settings(overrides.clone(), config_path) {
        Ok(settings) => poll(&settings),
        Err(err) => {
            log::warn!("configuration rejected: {err}");
            let host = overrides.host.trim();
            let service = overrides
                .service
                .clone()
                .unwrap_or_else(|| config::default_service_name(host));
            ProbeResult::misconfigured(&service, host, &err)
        },
    };

    result.render(mode)?;
    Ok(())
}

fn load_settings(
    overrides: Overrides,
    config_path: Option<&Path>,
) -> Result<Settings, ConfigError> {
    let file = match config_path {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::load_default()?,
    };
    Settings::resolve(overrides, file)
}

fn poll(settings: &Settings) -> ProbeResult {
    let resolver: Box<dyn HostResolver> = match settings.dns {
        Some(server) => match DnsResolver::new(server, settings.endpoint.timeout) {
            Ok(resolver) => Box::new(resolver),
            Err(source) => {
                let failure = TransportFailure::Connect {
                    host: settings.endpoint.host.clone(),
                    source,
                };
                return ProbeResult::transport_failed(&settings.service, &failure);
            },
        },
        None => Box::new(PassthroughResolver),
    };

    match probe::run(&settings.endpoint, resolver.as_ref(), &SnmpConnector) {
        Ok(evaluation) => {
            ProbeResult::evaluated(&settings.service, &settings.endpoint.host, evaluation)
        },
        Err(failure) => {
            log::warn!("{failure}");
            ProbeResult::transport_failed(&settings.service, &failure)
        },
    }
}
