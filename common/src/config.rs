use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password";
pub const DEFAULT_LOG_FILE: &str = "/var/log/efa_deploy.log";
pub const DEFAULT_DEPLOY_SCRIPT: &str = "/fabos/sbin/efa_deployment.sh";
pub const DEFAULT_VERIFY_SCRIPT: &str = "/fabos/sbin/efa_verification.sh";
pub const DEFAULT_CLI_PROGRAM: &str = "cliexec";
pub const DEFAULT_CLI_ARGS: &[&str] = &["-c"];

pub const INSTALL_SETTLE: Duration = Duration::from_secs(20);
pub const START_SETTLE: Duration = Duration::from_secs(20);
pub const RESTART_SETTLE: Duration = Duration::from_secs(40);

pub struct Config {
    /// Credentials forwarded to the verification script.
    pub credentials: Credentials,
    pub scripts: Scripts,
    pub waits: WaitPolicy,
    pub switch_cli: SwitchCliSettings,
    /// Debug-level transcript of every switch command ends up here.
    pub log_file: PathBuf,
    pub no_banner: bool,
    /// Each level hides more of the decorative terminal output.
    pub quiet: u8,
}

/// Username/password pair handed to the verification script.
///
/// `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USER, DEFAULT_PASSWORD)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"********")
            .finish()
    }
}

/// Locations of the external shell scripts shipped with the switch image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scripts {
    pub deploy: PathBuf,
    pub verify: PathBuf,
}

impl Default for Scripts {
    fn default() -> Self {
        Self {
            deploy: PathBuf::from(DEFAULT_DEPLOY_SCRIPT),
            verify: PathBuf::from(DEFAULT_VERIFY_SCRIPT),
        }
    }
}

/// How the switch CLI is reached: `<program> <args...> "<command>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchCliSettings {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for SwitchCliSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_CLI_PROGRAM.to_string(),
            args: DEFAULT_CLI_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Strategy used while TPVM settles after install/start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitMode {
    /// Sleep for the whole ceiling.
    Blind,
    /// Re-query status every `interval`, giving up once the ceiling elapses.
    Poll { interval: Duration },
}

/// Upper bounds for each settle phase of a deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitPolicy {
    pub install_settle: Duration,
    pub start_settle: Duration,
    pub restart_settle: Duration,
    pub mode: WaitMode,
}

impl WaitPolicy {
    pub fn with_mode(mode: WaitMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            install_settle: INSTALL_SETTLE,
            start_settle: START_SETTLE,
            restart_settle: RESTART_SETTLE,
            mode: WaitMode::Blind,
        }
    }
}
