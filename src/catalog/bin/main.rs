use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use tracing::error;
use lms::catalog::controller::Console;
use lms::catalog::factory::create_catalog_service;
use lms::core::domain::Configuration;
use lms::core::repository::RepositoryStore;
use lms::utils::logs::setup_tracing;

/// Interactive console for the library catalog.
#[derive(Parser, Debug)]
#[command(name = "lms", version)]
struct Args {
    /// Configuration file (.json, .toml, ...); LMS_* environment variables override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Book store file, overrides the config file and LMS_STORE_PATH
    #[arg(long)]
    store_path: Option<PathBuf>,

    /// Keep the catalog in memory only
    #[arg(long)]
    in_memory: bool,

    /// Log level (error, warn, info, debug, trace), overrides LMS_LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,
}

fn build_config(args: &Args) -> Result<Configuration, String> {
    let mut config = Configuration::load(args.config.as_deref())
        .map_err(|err| format!("cannot load config: {}", err))?;
    if let Some(path) = &args.store_path {
        config = config.with_store_path(path);
    }
    if args.in_memory {
        config = config.with_store(RepositoryStore::InMemory);
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.to_string();
    }
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match build_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    setup_tracing(config.log_level.as_str(), config.log_json);

    let catalog_svc = create_catalog_service(&config);
    let stdin = io::stdin();
    let mut console = Console::new(catalog_svc, stdin.lock(), io::stdout());
    if let Err(err) = console.run() {
        error!("console stopped: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
