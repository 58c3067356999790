use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The switch CLI could not be reached or did not complete.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("failed to launch switch CLI '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("switch CLI was terminated by a signal while running '{command}'")]
    Terminated { command: String },
}

/// An external script could not be run or reported failure.
#[derive(Debug, Error)]
pub enum ExternalCommandError {
    #[error("failed to launch {}: {source}", script.display())]
    Spawn {
        script: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} exited with status {code}", script.display())]
    Exited { script: PathBuf, code: i32 },
    #[error("{} was terminated by a signal", script.display())]
    Terminated { script: PathBuf },
}

impl ExternalCommandError {
    /// Exit status the whole process should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exited { code, .. } => *code,
            Self::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound => 127,
            Self::Spawn { .. } => 126,
            Self::Terminated { .. } => 1,
        }
    }
}

/// `show tpvm ip-address` output did not have the expected shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    #[error("missing '{0}' marker in address output")]
    MissingMarker(&'static str),
    #[error("'IPv6:' marker appears before 'IPv4:' marker")]
    OutOfOrder,
}

/// Fatal failures of a deployment run.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error(transparent)]
    ExternalCommand(#[from] ExternalCommandError),
}

impl DeployError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Execution(_) => 1,
            Self::ExternalCommand(err) => err.exit_code(),
        }
    }
}
