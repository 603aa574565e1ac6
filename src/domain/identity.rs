//! Reporting identity of this process.
//!
//! The monitoring formatter tags every datapoint with the host, port, and
//! role of the reporting process. Identity is sourced once at startup from
//! configuration and passed into the formatter as a plain value.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;

// DNS-label grammar, loose enough to accept FQDNs.
static HOSTNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9.-]*$").expect("hostname pattern is valid"));

/// Identity this process reports to the monitoring pipeline.
#[derive(Debug, Clone)]
pub struct ProcessIdentity {
    /// Advertised IP or hostname. `None` (or empty) falls back to the
    /// machine hostname at format time.
    pub local_ip: Option<String>,
    /// Advertised service port.
    pub port: u16,
    /// Role name of this process (e.g. `graphd`, `storaged`).
    pub role: String,
}

impl ProcessIdentity {
    /// Host part of the reporting endpoint.
    ///
    /// # Errors
    /// Fails when a configured host string does not pass host-or-IP
    /// validation, or when the machine hostname cannot be resolved.
    pub fn reporting_host(&self) -> Result<String> {
        match self.local_ip.as_deref() {
            None | Some("") => local_hostname(),
            Some(host) => {
                validate_host_or_ip(host)?;
                Ok(host.to_string())
            }
        }
    }

    /// Full `host:port` endpoint address string.
    pub fn endpoint(&self) -> Result<String> {
        Ok(format!("{}:{}", self.reporting_host()?, self.port))
    }
}

/// Accepts an IP literal (v4 or v6) or a plausible DNS hostname.
pub fn validate_host_or_ip(host: &str) -> Result<()> {
    if host.parse::<IpAddr>().is_ok() || HOSTNAME_RE.is_match(host) {
        return Ok(());
    }
    bail!("invalid host or ip: '{host}'")
}

fn local_hostname() -> Result<String> {
    let name = hostname::get()
        .map_err(|err| anyhow::anyhow!("failed to resolve local hostname: {err}"))?;
    Ok(name.to_string_lossy().into_owned())
}
