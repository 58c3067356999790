pub mod deploy;
pub mod status;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use efa_deploy_common::config::{
    Config, Credentials, DEFAULT_CLI_PROGRAM, DEFAULT_DEPLOY_SCRIPT, DEFAULT_LOG_FILE,
    DEFAULT_PASSWORD, DEFAULT_USER, DEFAULT_VERIFY_SCRIPT, Scripts, SwitchCliSettings, WaitMode,
    WaitPolicy,
};

#[derive(Parser)]
#[command(name = "efa-deploy")]
#[command(about = "Deploys EFA onto the TPVM of a switch.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Username passed to the verification script
    #[arg(long, global = true, default_value = DEFAULT_USER)]
    pub user: String,

    /// Password passed to the verification script
    #[arg(long, global = true, default_value = DEFAULT_PASSWORD, hide_default_value = true)]
    pub password: String,

    /// File receiving the debug transcript of every switch command
    #[arg(long, global = true, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    #[arg(long, global = true, default_value = DEFAULT_DEPLOY_SCRIPT)]
    pub deploy_script: PathBuf,

    #[arg(long, global = true, default_value = DEFAULT_VERIFY_SCRIPT)]
    pub verify_script: PathBuf,

    /// Program used to run switch CLI commands
    #[arg(long, global = true, default_value = DEFAULT_CLI_PROGRAM)]
    pub cli_program: String,

    /// Argument placed before the command when running the CLI program (repeatable)
    #[arg(long = "cli-arg", global = true, allow_hyphen_values = true)]
    pub cli_args: Vec<String>,

    /// Poll TPVM status every SECS instead of sleeping through each wait
    #[arg(long, global = true, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval: Option<u64>,

    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce terminal output (-q, -qq)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Commands {
    /// Install, start and redeploy EFA on the TPVM (default)
    #[default]
    #[command(alias = "d")]
    Deploy,
    /// Show TPVM state and addresses without changing anything
    #[command(alias = "s")]
    Status,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let mode = match self.poll_interval {
            Some(secs) => WaitMode::Poll {
                interval: Duration::from_secs(secs),
            },
            None => WaitMode::Blind,
        };

        let switch_cli = if self.cli_args.is_empty() && self.cli_program == DEFAULT_CLI_PROGRAM {
            SwitchCliSettings::default()
        } else {
            SwitchCliSettings {
                program: self.cli_program.clone(),
                args: self.cli_args.clone(),
            }
        };

        Config {
            credentials: Credentials::new(self.user.trim(), self.password.trim()),
            scripts: Scripts {
                deploy: self.deploy_script.clone(),
                verify: self.verify_script.clone(),
            },
            waits: WaitPolicy::with_mode(mode),
            switch_cli,
            log_file: self.log_file.clone(),
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}
