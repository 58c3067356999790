use efa_deploy_common::error::ExecutionError;
use efa_deploy_common::executor::CommandExecutor;
use efa_deploy_common::reporter::DeploymentReporter;
use efa_deploy_common::tpvm::{TpvmCommand, TpvmStatus};

/// Typed view of the TPVM administrative commands.
///
/// Every command's raw output is handed to the reporter's transcript before
/// it is interpreted.
#[derive(Clone, Copy)]
pub struct Tpvm<'a> {
    executor: &'a dyn CommandExecutor,
    reporter: &'a dyn DeploymentReporter,
}

impl<'a> Tpvm<'a> {
    pub fn new(executor: &'a dyn CommandExecutor, reporter: &'a dyn DeploymentReporter) -> Self {
        Self { executor, reporter }
    }

    pub async fn run(&self, command: TpvmCommand) -> Result<Vec<String>, ExecutionError> {
        let output = self.executor.execute(command.as_str()).await?;
        self.reporter.transcript(command.as_str(), &output);
        Ok(output)
    }

    pub async fn status(&self) -> Result<TpvmStatus, ExecutionError> {
        self.run(TpvmCommand::ShowStatus)
            .await
            .map(TpvmStatus::from_lines)
    }

    pub async fn is_installed(&self) -> Result<bool, ExecutionError> {
        Ok(self.status().await?.is_installed())
    }

    pub async fn is_running(&self) -> Result<bool, ExecutionError> {
        Ok(self.status().await?.is_running())
    }

    pub async fn install(&self) -> Result<Vec<String>, ExecutionError> {
        self.run(TpvmCommand::Install).await
    }

    pub async fn accept_license(&self) -> Result<(), ExecutionError> {
        self.run(TpvmCommand::AcceptLicense).await.map(drop)
    }

    pub async fn start(&self) -> Result<(), ExecutionError> {
        self.run(TpvmCommand::Start).await.map(drop)
    }

    pub async fn stop(&self) -> Result<(), ExecutionError> {
        self.run(TpvmCommand::Stop).await.map(drop)
    }

    pub async fn enable_auto_boot(&self) -> Result<(), ExecutionError> {
        self.run(TpvmCommand::EnableAutoBoot).await.map(drop)
    }

    pub async fn ip_address_output(&self) -> Result<Vec<String>, ExecutionError> {
        self.run(TpvmCommand::ShowIpAddress).await
    }
}
