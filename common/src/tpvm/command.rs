use std::fmt;

/// Administrative commands issued against the switch during a deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TpvmCommand {
    ShowStatus,
    ShowIpAddress,
    Install,
    AcceptLicense,
    Start,
    Stop,
    EnableAutoBoot,
}

impl TpvmCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShowStatus => "show tpvm status",
            Self::ShowIpAddress => "show tpvm ip-address",
            Self::Install => "tpvm install",
            Self::AcceptLicense => "license eula accept ADVANCED_FEATURES",
            Self::Start => "tpvm start",
            Self::Stop => "tpvm stop",
            Self::EnableAutoBoot => "tpvm auto-boot enable",
        }
    }
}

impl fmt::Display for TpvmCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
