use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use efa_deploy_common::config::{Scripts, WaitPolicy};
use efa_deploy_common::error::{ExecutionError, ExternalCommandError};
use efa_deploy_common::executor::CommandExecutor;
use efa_deploy_common::reporter::DeploymentReporter;
use efa_deploy_common::scripts::ScriptRunner;
use efa_deploy_core::deployment::DeploymentService;

pub const RUNNING: &str = "TPVM is running, and AutoStart is enabled on this host.";
pub const STOPPED: &str = "TPVM is not running, and AutoStart is disabled on this host.";
pub const NOT_INSTALLED: &str = "TPVM is not installed.";
pub const LICENSE_MISSING: &str = "ERROR: ADVANCED_FEATURES license is missing.";

pub const SHOW_STATUS: &str = "show tpvm status";
pub const SHOW_IP: &str = "show tpvm ip-address";
pub const INSTALL: &str = "tpvm install";
pub const ACCEPT_LICENSE: &str = "license eula accept ADVANCED_FEATURES";
pub const START: &str = "tpvm start";
pub const STOP: &str = "tpvm stop";
pub const AUTO_BOOT: &str = "tpvm auto-boot enable";

/// Switch whose answers are queued per command. The last queued answer
/// repeats once the queue is down to it.
#[derive(Clone, Default)]
pub struct FakeSwitch {
    state: Arc<Mutex<SwitchState>>,
}

#[derive(Default)]
struct SwitchState {
    responses: HashMap<String, VecDeque<Vec<String>>>,
    issued: Vec<String>,
    broken: Option<String>,
}

impl FakeSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, command: &str, lines: &[&str]) -> Self {
        self.respond_with(command, lines.iter().map(|l| l.to_string()).collect())
    }

    pub fn respond_with(self, command: &str, lines: Vec<String>) -> Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .entry(command.to_string())
            .or_default()
            .push_back(lines);
        self
    }

    /// Every execution of `command` fails as if the CLI could not be reached.
    pub fn break_on(self, command: &str) -> Self {
        self.state.lock().unwrap().broken = Some(command.to_string());
        self
    }

    pub fn issued(&self) -> Vec<String> {
        self.state.lock().unwrap().issued.clone()
    }

    pub fn count(&self, command: &str) -> usize {
        self.issued().iter().filter(|c| *c == command).count()
    }
}

#[async_trait]
impl CommandExecutor for FakeSwitch {
    async fn execute(&self, command: &str) -> Result<Vec<String>, ExecutionError> {
        let mut state = self.state.lock().unwrap();
        state.issued.push(command.to_string());

        if state.broken.as_deref() == Some(command) {
            return Err(ExecutionError::Spawn {
                program: "fake-switch".into(),
                source: io::Error::new(io::ErrorKind::BrokenPipe, "link down"),
            });
        }

        let output = match state.responses.get_mut(command) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_default(),
            Some(queue) => queue.front().cloned().unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(output)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptCall {
    pub script: PathBuf,
    pub args: Vec<String>,
}

/// Records script invocations; scripts succeed unless given an exit code.
#[derive(Clone, Default)]
pub struct FakeScripts {
    calls: Arc<Mutex<Vec<ScriptCall>>>,
    exit_codes: Arc<Mutex<HashMap<PathBuf, i32>>>,
}

impl FakeScripts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(self, script: impl Into<PathBuf>, code: i32) -> Self {
        self.exit_codes.lock().unwrap().insert(script.into(), code);
        self
    }

    pub fn calls(&self) -> Vec<ScriptCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptRunner for FakeScripts {
    async fn run(&self, script: &Path, args: &[&str]) -> Result<(), ExternalCommandError> {
        self.calls.lock().unwrap().push(ScriptCall {
            script: script.to_path_buf(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });

        match self.exit_codes.lock().unwrap().get(script) {
            Some(&code) => Err(ExternalCommandError::Exited {
                script: script.to_path_buf(),
                code,
            }),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Step(u8),
    Done,
    Transcript(String),
    Notice(String),
    Warning(String),
    WaitStarted(String, Duration),
    WaitFinished,
    Remediation(Vec<String>),
}

#[derive(Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn steps(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Step(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Warning(w) => Some(w),
                _ => None,
            })
            .collect()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::WaitStarted(_, ceiling) => Some(ceiling),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl DeploymentReporter for RecordingReporter {
    fn step(&self, number: u8, _description: &str) {
        self.push(Event::Step(number));
    }

    fn done(&self) {
        self.push(Event::Done);
    }

    fn transcript(&self, command: &str, _output: &[String]) {
        self.push(Event::Transcript(command.to_string()));
    }

    fn notice(&self, message: &str) {
        self.push(Event::Notice(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.push(Event::Warning(message.to_string()));
    }

    fn wait_started(&self, reason: &str, ceiling: Duration) {
        self.push(Event::WaitStarted(reason.to_string(), ceiling));
    }

    fn wait_finished(&self) {
        self.push(Event::WaitFinished);
    }

    fn remediation(&self, lines: &[&str]) {
        self.push(Event::Remediation(
            lines.iter().map(|l| l.to_string()).collect(),
        ));
    }
}

/// Fakes wired into a service, kept around for assertions.
pub struct Harness {
    pub switch: FakeSwitch,
    pub scripts: FakeScripts,
    pub reporter: RecordingReporter,
    pub service: DeploymentService,
}

impl Harness {
    pub fn new(switch: FakeSwitch, scripts: FakeScripts) -> Self {
        Self::with_waits(switch, scripts, WaitPolicy::default())
    }

    pub fn with_waits(switch: FakeSwitch, scripts: FakeScripts, waits: WaitPolicy) -> Self {
        let reporter = RecordingReporter::new();
        let service = DeploymentService::new(
            Box::new(switch.clone()),
            Box::new(scripts.clone()),
            Box::new(reporter.clone()),
            waits,
            Scripts::default(),
        );
        Self {
            switch,
            scripts,
            reporter,
            service,
        }
    }
}

/// `show tpvm ip-address` output with the given addresses.
pub fn ip_output(ipv4: &[&str], ipv6: &[&str]) -> Vec<String> {
    let mut lines = vec!["IPv4:".to_string()];
    lines.extend(ipv4.iter().map(|ip| format!(" eth0 {ip}")));
    lines.push("IPv6:".to_string());
    lines.extend(ipv6.iter().map(|ip| format!(" eth0 {ip}")));
    lines
}
