use std::path::Path;

use async_trait::async_trait;
use efa_deploy_common::error::ExternalCommandError;
use efa_deploy_common::scripts::ScriptRunner;
use tokio::process::Command;
use tracing::debug;

/// Runs scripts as child processes sharing this process's terminal.
pub struct ProcessScriptRunner;

#[async_trait]
impl ScriptRunner for ProcessScriptRunner {
    async fn run(&self, script: &Path, args: &[&str]) -> Result<(), ExternalCommandError> {
        // Arguments carry credentials; only the path is logged.
        debug!(script = %script.display(), "running external script");

        let status = Command::new(script)
            .args(args)
            .status()
            .await
            .map_err(|source| ExternalCommandError::Spawn {
                script: script.to_path_buf(),
                source,
            })?;

        match status.code() {
            Some(0) => Ok(()),
            Some(code) => Err(ExternalCommandError::Exited {
                script: script.to_path_buf(),
                code,
            }),
            None => Err(ExternalCommandError::Terminated {
                script: script.to_path_buf(),
            }),
        }
    }
}
