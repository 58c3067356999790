//! # EFA Deployment Service
//!
//! Implements the "deploy EFA onto TPVM" use case.
//!
//! The run is a single linear procedure:
//! 1. make sure TPVM is installed (accepting the license EULA if needed),
//! 2. make sure it is running and set to boot with the switch,
//! 3. stop it, run the deployment script, start it again,
//! 4. read the address it was given and run the verification script there.
//!
//! Everything outside the process is reached through ports, so the whole
//! flow runs against fakes in tests.

use std::time::Duration;

use efa_deploy_common::config::{Credentials, Scripts, WaitPolicy};
use efa_deploy_common::error::{DeployError, ExecutionError};
use efa_deploy_common::executor::CommandExecutor;
use efa_deploy_common::reporter::DeploymentReporter;
use efa_deploy_common::scripts::ScriptRunner;
use efa_deploy_common::tpvm::TpvmAddresses;
use efa_deploy_common::tpvm::status::reports_missing_license;
use tracing::{debug, info, warn};

use crate::tpvm::Tpvm;
use crate::wait;

/// Operator instructions when TPVM never reaches the running state.
pub const REMEDIATION: &[&str] = &[
    "Failed to start TPVM to deploy the application",
    "Please clear any warnings/errors with the TPVM startup.",
    "The output of 'show tpvm status' should be as follows:",
    "TPVM is running, and AutoStart is enabled on this host.",
    "Any warnings can be cleared using tpvm show status clear-tag <tag>",
    "After clearing all error/warning messages run the 'efa deploy' command again",
];

/// How a deployment run ended, short of a fatal error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeploymentOutcome {
    /// Deployed and checked by the verification script.
    Verified { address: String },
    /// Deployed, but TPVM reported no usable address.
    Unverified,
    /// Deployed, but TPVM was down again by the time verification ran.
    VerificationSkipped { address: String },
    /// TPVM never came up; nothing was deployed.
    TpvmNotRunning,
}

/// Application Service for EFA deployment.
pub struct DeploymentService {
    executor: Box<dyn CommandExecutor>,
    scripts: Box<dyn ScriptRunner>,
    reporter: Box<dyn DeploymentReporter>,
    waits: WaitPolicy,
    script_paths: Scripts,
}

impl DeploymentService {
    pub fn new(
        executor: Box<dyn CommandExecutor>,
        scripts: Box<dyn ScriptRunner>,
        reporter: Box<dyn DeploymentReporter>,
        waits: WaitPolicy,
        script_paths: Scripts,
    ) -> Self {
        Self {
            executor,
            scripts,
            reporter,
            waits,
            script_paths,
        }
    }

    fn tpvm(&self) -> Tpvm<'_> {
        Tpvm::new(self.executor.as_ref(), self.reporter.as_ref())
    }

    /// Runs the whole deployment.
    ///
    /// A failing script or an unreachable switch CLI aborts immediately with
    /// a [`DeployError`]; nothing is rolled back.
    pub async fn deploy(&self, credentials: &Credentials) -> Result<DeploymentOutcome, DeployError> {
        let tpvm = self.tpvm();

        self.reporter.step(1, "Checking if TPVM is already set up");
        self.ensure_installed(tpvm).await?;
        self.reporter.done();

        self.reporter.step(2, "Checking if TPVM is already running");
        self.ensure_running(tpvm).await?;
        self.reporter.done();

        self.reporter.step(3, "Setting auto-boot for TPVM");
        tpvm.enable_auto_boot().await?;
        self.reporter.done();

        if !tpvm.is_running().await? {
            warn!("TPVM is still not running, aborting deployment");
            self.reporter.remediation(REMEDIATION);
            return Ok(DeploymentOutcome::TpvmNotRunning);
        }

        self.reporter.step(4, "Stopping TPVM for EFA deployment");
        tpvm.stop().await?;
        self.reporter.done();

        self.reporter.step(5, "Running the EFA deployment script");
        self.scripts.run(&self.script_paths.deploy, &[]).await?;
        self.reporter.done();

        self.reporter.step(6, "Starting TPVM after EFA deployment");
        tpvm.start().await?;
        self.settle_running(tpvm, "TPVM restart", self.waits.restart_settle)
            .await?;
        self.reporter.done();

        self.reporter.step(7, "Getting the IP address assigned to TPVM");
        let address = self.resolve_address(tpvm).await?;
        info!("IP address of the TPVM: {}", address.as_deref().unwrap_or(""));
        self.reporter.done();

        match address {
            Some(address) => self.verify(tpvm, address, credentials).await,
            None => {
                self.reporter.warning(
                    "Completed application deployment but couldn't verify due to IP not assigned to TPVM",
                );
                Ok(DeploymentOutcome::Unverified)
            }
        }
    }

    async fn ensure_installed(&self, tpvm: Tpvm<'_>) -> Result<(), DeployError> {
        if tpvm.is_installed().await? {
            return Ok(());
        }

        info!("Initializing TPVM, since it was not set up");
        let output = tpvm.install().await?;
        if reports_missing_license(&output) {
            self.reporter.notice("Adding ADVANCED_FEATURES license");
            tpvm.accept_license().await?;
            tpvm.install().await?;
        }

        self.reporter
            .wait_started("TPVM installation", self.waits.install_settle);
        let settled = wait::settle(self.waits.mode, self.waits.install_settle, || {
            tpvm.is_installed()
        })
        .await;
        self.reporter.wait_finished();
        settled?;
        Ok(())
    }

    async fn ensure_running(&self, tpvm: Tpvm<'_>) -> Result<(), DeployError> {
        if tpvm.is_running().await? {
            return Ok(());
        }

        info!("Starting TPVM since it is not running");
        tpvm.start().await?;
        self.settle_running(tpvm, "TPVM start", self.waits.start_settle)
            .await
    }

    async fn settle_running(
        &self,
        tpvm: Tpvm<'_>,
        reason: &str,
        ceiling: Duration,
    ) -> Result<(), DeployError> {
        self.reporter.wait_started(reason, ceiling);
        let settled = wait::settle(self.waits.mode, ceiling, || tpvm.is_running()).await;
        self.reporter.wait_finished();
        settled?;
        Ok(())
    }

    /// First IPv4 address, else first IPv6 address. Output the parser cannot
    /// make sense of counts as no address.
    async fn resolve_address(&self, tpvm: Tpvm<'_>) -> Result<Option<String>, ExecutionError> {
        let output = tpvm.ip_address_output().await?;
        match TpvmAddresses::parse(&output) {
            Ok(addresses) => {
                debug!(ipv4 = ?addresses.ipv4, ipv6 = ?addresses.ipv6, "parsed TPVM addresses");
                Ok(addresses.preferred().map(str::to_string))
            }
            Err(err) => {
                self.reporter
                    .warning(&format!("Could not read TPVM addresses: {err}"));
                Ok(None)
            }
        }
    }

    async fn verify(
        &self,
        tpvm: Tpvm<'_>,
        address: String,
        credentials: &Credentials,
    ) -> Result<DeploymentOutcome, DeployError> {
        self.reporter
            .step(8, "Verifying client and server deployment on the TPVM");

        if !tpvm.is_running().await? {
            self.reporter
                .warning("Failed to verify EFA deployment, since TPVM is not running");
            return Ok(DeploymentOutcome::VerificationSkipped { address });
        }

        let args = [
            address.as_str(),
            credentials.user.as_str(),
            credentials.password.as_str(),
        ];
        self.scripts.run(&self.script_paths.verify, &args).await?;
        self.reporter.done();

        Ok(DeploymentOutcome::Verified { address })
    }
}
