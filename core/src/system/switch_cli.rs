use std::process::Stdio;

use async_trait::async_trait;
use efa_deploy_common::config::SwitchCliSettings;
use efa_deploy_common::error::ExecutionError;
use efa_deploy_common::executor::CommandExecutor;
use tokio::process::Command;
use tracing::debug;

/// Runs administrative commands through the switch's CLI runner program.
///
/// The switch reports command errors as text, so a nonzero exit is not an
/// error here: stdout and stderr are both returned for the caller to read.
pub struct SwitchCli {
    program: String,
    args: Vec<String>,
}

impl SwitchCli {
    pub fn new(settings: &SwitchCliSettings) -> Self {
        Self {
            program: settings.program.clone(),
            args: settings.args.clone(),
        }
    }
}

#[async_trait]
impl CommandExecutor for SwitchCli {
    async fn execute(&self, command: &str) -> Result<Vec<String>, ExecutionError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(command)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ExecutionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        match output.status.code() {
            Some(0) => {}
            Some(code) => debug!(command, code, "switch CLI exited with nonzero status"),
            None => {
                return Err(ExecutionError::Terminated {
                    command: command.to_string(),
                });
            }
        }

        let mut lines = to_lines(&output.stdout);
        lines.extend(to_lines(&output.stderr));
        Ok(lines)
    }
}

fn to_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}
