//! Server Config

use clap::Args;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port; each service falls back to its own default
    #[arg(short, long, env = "SERVER_PORT")]
    pub port: Option<u16>,
}

impl ServerRuntimeConfig {
    /// Get the socket address for binding, using `default_port` when no port was given.
    #[must_use]
    pub fn socket_addr(&self, default_port: u16) -> String {
        format!("{}:{}", self.host, self.port.unwrap_or(default_port))
    }
}
