//! Outbound email delivery configuration

use serde::{Deserialize, Serialize};

/// Email service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Email provider ("smtp" or "mock")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// SMTP relay host
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP relay port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username
    #[serde(default)]
    pub smtp_username: String,

    /// SMTP password
    #[serde(default)]
    pub smtp_password: String,

    /// Sender address for verification emails
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Display name used with the sender address
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Timeout for SMTP operations, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            from_name: default_from_name(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_provider() -> String {
    String::from("mock")
}

fn default_smtp_host() -> String {
    String::from("localhost")
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    String::from("noreply@iitconnect.ac.in")
}

fn default_from_name() -> String {
    String::from("IIT Connect")
}

fn default_request_timeout_secs() -> u64 {
    30
}
