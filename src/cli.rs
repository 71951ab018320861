//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use nas_probe::config::Overrides;
use nas_probe::output::OutputMode;

/// nas-probe - Synology NAS health check over SNMP
#[derive(Parser, Debug)]
#[command(
    name = "nas-probe",
    version,
    about = "Synology NAS health check over SNMP",
    long_about = "Poll a Synology NAS over SNMPv2c and print one monitoring line.\n\n\
                  The line starts with a status code (0 OK, 2 CRIT, 3 UNKNOWN).\n\
                  The exit status is always 0; read the line, not the exit code."
)]
pub struct Cli {
    /// Host to poll (name or address)
    #[arg(long)]
    pub host: String,

    /// SNMP agent port [default: 161]
    #[arg(long)]
    pub port: Option<u16>,

    /// SNMPv2c community [default: public]
    #[arg(long)]
    pub community: Option<String>,

    /// Service name in the output line [default: SynologyNAS_<host>]
    #[arg(long)]
    pub service: Option<String>,

    /// Resolve the host through this name server (ip or ip:port)
    #[arg(long)]
    pub dns: Option<String>,

    /// Per-request timeout in seconds [default: 2]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Read defaults from this TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let overrides = Overrides {
        host: cli.host,
        port: cli.port,
        community: cli.community,
        timeout_secs: cli.timeout,
        dns: cli.dns,
        service: cli.service,
    };

    commands::probe(overrides, cli.config.as_deref(), output_mode)
}
