//! Server snapshot provider.
//!
//! The extraction layer asks an injected [`SystemInfoProvider`] for the
//! serving process's details instead of reading them itself, so tests can
//! pin hostname and uptime to fixed values.

use std::time::Instant;

use crate::models::ServerInfo;

/// Source of the server details stored with each report.
pub trait SystemInfoProvider: Send + Sync {
    /// Returns a snapshot taken at the moment of the call.
    fn snapshot(&self) -> ServerInfo;
}

/// Reads the details of the running process.
#[derive(Debug, Clone)]
pub struct HostSystemInfo {
    started: Instant,
}

impl HostSystemInfo {
    /// Creates a provider whose uptime counts from now. Construct it once at
    /// process start.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for HostSystemInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemInfoProvider for HostSystemInfo {
    fn snapshot(&self) -> ServerInfo {
        ServerInfo {
            hostname: gethostname::gethostname()
                .to_str()
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
            platform: Some(std::env::consts::OS.to_string()),
            arch: Some(std::env::consts::ARCH.to_string()),
            runtime_version: Some(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            )),
            uptime: Some(self.started.elapsed().as_secs_f64()),
        }
    }
}

/// Provider that always returns the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct FixedSystemInfo(pub ServerInfo);

impl SystemInfoProvider for FixedSystemInfo {
    fn snapshot(&self) -> ServerInfo {
        self.0.clone()
    }
}
