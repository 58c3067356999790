use efa_deploy_common::error::{AddressParseError, ExecutionError};
use efa_deploy_common::executor::CommandExecutor;
use efa_deploy_common::reporter::DeploymentReporter;
use efa_deploy_common::tpvm::TpvmAddresses;

use crate::tpvm::Tpvm;

/// Read-only inspection of the TPVM, for operators checking before a deploy.
pub struct StatusService {
    executor: Box<dyn CommandExecutor>,
    reporter: Box<dyn DeploymentReporter>,
}

pub struct TpvmReport {
    pub installed: bool,
    pub running: bool,
    /// Only queried while TPVM is running.
    pub addresses: Option<Result<TpvmAddresses, AddressParseError>>,
}

impl StatusService {
    pub fn new(executor: Box<dyn CommandExecutor>, reporter: Box<dyn DeploymentReporter>) -> Self {
        Self { executor, reporter }
    }

    pub async fn inspect(&self) -> Result<TpvmReport, ExecutionError> {
        let tpvm = Tpvm::new(self.executor.as_ref(), self.reporter.as_ref());
        let status = tpvm.status().await?;

        let addresses = if status.is_running() {
            let output = tpvm.ip_address_output().await?;
            Some(TpvmAddresses::parse(&output))
        } else {
            None
        };

        Ok(TpvmReport {
            installed: status.is_installed(),
            running: status.is_running(),
            addresses,
        })
    }
}
