// Configuration module entry point
// Built-in defaults layered under the CLI port override

mod args;
mod state;
mod types;

use std::net::SocketAddr;

use args::parse_port_arg;

pub use args::ArgsError;
pub use state::AppState;
pub use types::Config;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

impl Config {
    /// Build the configuration from `argv`.
    ///
    /// No file or environment sources are consulted.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ArgsError> {
        let port = parse_port_arg(args)?;
        Self::load(port)
    }

    /// Build the configuration from defaults plus an optional port override
    pub fn load(port: Option<u16>) -> Result<Self, ArgsError> {
        let settings = config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("performance.keep_alive", true)?
            .set_override_option("server.port", port.map(i64::from))?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
