//! # TPVM Address Model
//!
//! `show tpvm ip-address` lists the interfaces of the TPVM grouped by family:
//!
//! ```text
//! IPv4:
//!  eth0 10.24.15.120/20
//! IPv6:
//!  eth0 fe80::250:56ff:fe9f:1a2b/64
//! ```
//!
//! Every line after a marker contributes its second whitespace-separated
//! token. The `IPv4:` marker is expected before the `IPv6:` marker.

use crate::error::AddressParseError;

pub const IPV4_MARKER: &str = "IPv4:";
pub const IPV6_MARKER: &str = "IPv6:";

/// Addresses assigned to the TPVM, in the order the switch listed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TpvmAddresses {
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

impl TpvmAddresses {
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, AddressParseError> {
        let v4 = marker_position(lines, IPV4_MARKER)
            .ok_or(AddressParseError::MissingMarker(IPV4_MARKER))?;
        let v6 = marker_position(lines, IPV6_MARKER)
            .ok_or(AddressParseError::MissingMarker(IPV6_MARKER))?;

        if v6 < v4 {
            return Err(AddressParseError::OutOfOrder);
        }

        Ok(Self {
            ipv4: second_tokens(&lines[v4 + 1..v6]),
            ipv6: second_tokens(&lines[v6 + 1..]),
        })
    }

    /// First IPv4 address if there is one, otherwise the first IPv6 address.
    pub fn preferred(&self) -> Option<&str> {
        self.ipv4
            .first()
            .or_else(|| self.ipv6.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }
}

fn marker_position<S: AsRef<str>>(lines: &[S], marker: &str) -> Option<usize> {
    lines.iter().position(|line| line.as_ref().trim() == marker)
}

// Lines without a second token (blank separators) are skipped.
fn second_tokens<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| line.as_ref().split_whitespace().nth(1))
        .map(str::to_string)
        .collect()
}
