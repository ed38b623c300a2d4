/// The one address the server binds.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Startup configuration. Nothing is read from the environment, files or
    /// arguments; the listen address is fixed.
    pub fn load() -> Self {
        Self::default()
    }
}
