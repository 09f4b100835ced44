use ptmark_ptsl::{ClientOptions, Credentials};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ptsl: PtslConfig,

    #[serde(default)]
    pub markers: MarkerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PtslConfig {
    /// Base URL of the PTSL endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Company name presented when registering the connection
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Application name presented when registering the connection
    #[serde(default = "default_application_name")]
    pub application_name: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Protocol version sent in every request header
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_endpoint() -> String {
    ptmark_ptsl::client::DEFAULT_ENDPOINT.to_string()
}
fn default_company_name() -> String {
    "ptmark".to_string()
}
fn default_application_name() -> String {
    "ptmark bar markers".to_string()
}
fn default_timeout() -> u64 {
    10
}
fn default_version() -> u32 {
    1
}

impl Default for PtslConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            company_name: default_company_name(),
            application_name: default_application_name(),
            timeout_secs: default_timeout(),
            version: default_version(),
        }
    }
}

impl PtslConfig {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            version: self.version,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.company_name, &self.application_name)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkerConfig {
    /// Lowest memory-location number the allocator will hand out
    #[serde(default = "default_first_slot")]
    pub first_slot: u32,

    /// Number of created markers logged individually before summarizing
    #[serde(default = "default_log_first")]
    pub log_first: usize,
}

fn default_first_slot() -> u32 {
    1
}
fn default_log_first() -> usize {
    5
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            first_slot: default_first_slot(),
            log_first: default_log_first(),
        }
    }
}
