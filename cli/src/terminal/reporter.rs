use std::time::Duration;

use efa_deploy_common::TRANSCRIPT_TARGET;
use efa_deploy_common::reporter::DeploymentReporter;
use tracing::{debug, info, warn};

use crate::terminal::{print, spinner};

/// Terminal side of a deployment: steps and notices on screen, command
/// transcripts to the log file only.
pub struct TerminalReporter {
    quiet: u8,
}

impl TerminalReporter {
    pub fn new(quiet: u8) -> Self {
        Self { quiet }
    }
}

impl DeploymentReporter for TerminalReporter {
    fn step(&self, number: u8, description: &str) {
        // Always logged so the file records progress even when quiet.
        debug!(step = number, "{description}");
        if self.quiet < 2 {
            print::step(number, description);
        }
    }

    fn done(&self) {
        if self.quiet == 0 {
            print::print_status("Done");
        }
    }

    fn transcript(&self, command: &str, output: &[String]) {
        debug!(target: TRANSCRIPT_TARGET, command, output = %output.join("\n"));
    }

    fn notice(&self, message: &str) {
        info!("{message}");
    }

    fn warning(&self, message: &str) {
        warn!("{message}");
    }

    fn wait_started(&self, reason: &str, ceiling: Duration) {
        debug!(reason, ceiling_secs = ceiling.as_secs(), "waiting for TPVM to settle");
        if self.quiet == 0 {
            spinner::start_wait(reason, ceiling);
        }
    }

    fn wait_finished(&self) {
        spinner::finish_wait();
    }

    fn remediation(&self, lines: &[&str]) {
        print::header("manual action required", self.quiet);
        for line in lines {
            warn!("{line}");
        }
    }
}
