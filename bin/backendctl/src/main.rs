//! ---
//! backend_section: "cli"
//! backend_subsection: "binary"
//! backend_type: "source"
//! backend_scope: "code"
//! backend_description: "Control CLI reporting backend version information."
//! backend_version: "v0.1.0"
//! backend_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{Context, Result};
use backend_config::{BackendConfig, LoadedConfig};
use backend_logging::{self as logging, LogContext, SystemEventOutcome};
use backend_versioning::{extended_version, BuildInfo, VersionInfo};
use clap::{ArgAction, Parser, Subcommand};

mod describe;

const SERVICE: &str = "backendctl";
const CONFIG_CANDIDATES: &[&str] = &["configs/backend.toml", "/etc/backend/backend.toml"];

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "Backend version reporting utility",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print the version description and exit"
    )]
    version: bool,
    /// Configuration file; overrides BACKEND_CONFIG and the default locations.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Print the version description")]
    Describe(describe::DescribeArgs),
    #[command(about = "Print the version description with build metadata")]
    BuildInfo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = load_config(cli.config.as_ref())?;
    let _log_guard = logging::init_tracing(SERVICE, &loaded.config.logging)
        .context("failed to initialise logging")?;

    let version = loaded
        .config
        .version_info()
        .context("invalid version configuration")?;
    let ctx = LogContext::new()
        .with_service(SERVICE)
        .with_version(version.product_version());
    logging::backend_debug!(
        context = ctx.clone(),
        "configuration loaded from {}",
        loaded.origin()
    );
    logging::backend_debug!(context = ctx.clone(), "{}", BuildInfo::current().banner());

    let output = run(&cli, &version);
    match &output {
        Ok(_) => logging::log_system_event(
            Some(&ctx),
            "backendctl.command",
            "command completed",
            SystemEventOutcome::Success,
        ),
        Err(err) => logging::log_system_event(
            Some(&ctx),
            "backendctl.command",
            &format!("command failed: {err:#}"),
            SystemEventOutcome::Fault,
        ),
    }
    println!("{}", output?);
    Ok(())
}

fn run(cli: &Cli, version: &VersionInfo) -> Result<String> {
    if cli.version {
        return Ok(version.describe());
    }
    match &cli.command {
        None => Ok(version.describe()),
        Some(Commands::Describe(args)) => {
            describe::render(version, &BuildInfo::current(), args.format)
        }
        Some(Commands::BuildInfo) => Ok(extended_version(version, &BuildInfo::current())),
    }
}

fn load_config(explicit: Option<&PathBuf>) -> Result<LoadedConfig> {
    match explicit {
        Some(path) => {
            let config = BackendConfig::from_path(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            Ok(LoadedConfig {
                config,
                source: Some(path.clone()),
            })
        }
        None => BackendConfig::load_or_default(CONFIG_CANDIDATES)
            .context("failed to load configuration"),
    }
}
