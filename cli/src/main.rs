mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, deploy, status};
use efa_deploy_common::config::Config;
use efa_deploy_common::error::DeployError;
use terminal::{logging, print};
use tracing::{error, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    if let Some(err) = logging::init_logging(&cfg.log_file) {
        warn!(
            "Could not open log file {}: {err}; continuing without it",
            cfg.log_file.display()
        );
    }
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command.unwrap_or_default() {
        Commands::Deploy => {
            print::header("deploying efa onto tpvm", cfg.quiet);
            deploy::deploy(&cfg).await
        }
        Commands::Status => status::status(&cfg).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// A failed external script decides the exit status; anything else is 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<DeployError>()
        .map(DeployError::exit_code)
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .unwrap_or(1)
}
