use std::time::{Duration, Instant};

use colored::*;
use efa_deploy_common::config::Config;
use efa_deploy_common::success;
use efa_deploy_core::deployment::{DeploymentOutcome, DeploymentService};
use efa_deploy_core::system::{ProcessScriptRunner, SwitchCli};
use tracing::{Instrument, info_span, warn};

use crate::mprint;
use crate::terminal::{print, reporter::TerminalReporter};

pub async fn deploy(cfg: &Config) -> anyhow::Result<()> {
    let service = DeploymentService::new(
        Box::new(SwitchCli::new(&cfg.switch_cli)),
        Box::new(ProcessScriptRunner),
        Box::new(TerminalReporter::new(cfg.quiet)),
        cfg.waits.clone(),
        cfg.scripts.clone(),
    );

    let start_time: Instant = Instant::now();
    let outcome = service
        .deploy(&cfg.credentials)
        .instrument(info_span!("deploy", user = %cfg.credentials.user))
        .await?;

    deployment_ends(&outcome, start_time.elapsed(), cfg);
    Ok(())
}

fn deployment_ends(outcome: &DeploymentOutcome, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        mprint!();
    }

    let elapsed: String = format!("{:.2}s", total_time.as_secs_f64());
    let line: String = closing_line(outcome, &elapsed);

    match outcome {
        DeploymentOutcome::Verified { .. } => {
            if cfg.quiet == 0 {
                print::fat_separator();
                print::centerln(&format!("Deployment complete in {}", elapsed.bold().yellow()));
            }
            success!("{line}");
        }
        _ => warn!("{line}"),
    }
}

/// Last line of a run. Goes through the log formatter, so it stays unstyled.
fn closing_line(outcome: &DeploymentOutcome, elapsed: &str) -> String {
    match outcome {
        DeploymentOutcome::Verified { address } => {
            format!("Application is installed and ready for use on the TPVM with IP: {address}")
        }
        DeploymentOutcome::Unverified => {
            format!("Deployment finished in {elapsed} without verification")
        }
        DeploymentOutcome::VerificationSkipped { address } => {
            format!("Deployment finished in {elapsed}; {address} was not verified")
        }
        DeploymentOutcome::TpvmNotRunning => "Nothing was deployed".to_string(),
    }
}
