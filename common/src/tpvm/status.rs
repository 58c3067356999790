pub const RUNNING_MARKER: &str = "TPVM is running";
pub const NOT_INSTALLED_MARKER: &str = "TPVM is not installed";
pub const UNREACHABLE_PREFIX: &str = "this host cannot be reached with";
pub const LICENSE_MISSING_MARKER: &str = "ERROR: ADVANCED_FEATURES license is missing.";

/// Output of `show tpvm status`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TpvmStatus {
    lines: Vec<String>,
}

impl TpvmStatus {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn is_running(&self) -> bool {
        self.lines.iter().any(|line| line.contains(RUNNING_MARKER))
    }

    /// Anything other than an explicit "not installed" or an unreachable
    /// host counts as installed.
    pub fn is_installed(&self) -> bool {
        let unreachable = self
            .lines
            .first()
            .is_some_and(|line| line.trim_start().starts_with(UNREACHABLE_PREFIX));
        let not_installed = self
            .lines
            .iter()
            .any(|line| line.contains(NOT_INSTALLED_MARKER));

        !(unreachable || not_installed)
    }
}

/// Whether `tpvm install` refused because the EULA was never accepted.
pub fn reports_missing_license(output: &[String]) -> bool {
    output
        .iter()
        .any(|line| line.contains(LICENSE_MISSING_MARKER))
}
