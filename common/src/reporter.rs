use std::time::Duration;

/// Everything a deployment wants the operator (or the log file) to see.
///
/// The orchestrator never prints on its own; the CLI provides the terminal
/// implementation and tests provide a recording one.
pub trait DeploymentReporter: Send + Sync {
    /// A numbered step has started.
    fn step(&self, number: u8, description: &str);

    /// The current step finished.
    fn done(&self);

    /// Raw output of a switch command, for the diagnostic log.
    fn transcript(&self, command: &str, output: &[String]);

    fn notice(&self, message: &str);

    fn warning(&self, message: &str);

    /// A settle wait of at most `ceiling` is starting.
    fn wait_started(&self, reason: &str, ceiling: Duration);

    fn wait_finished(&self);

    /// Manual steps the operator has to take before retrying.
    fn remediation(&self, lines: &[&str]);
}
