/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 1754;
/// Interface used when none is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Where and how the HTTP service listens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind. `0` picks a free port.
    pub port: u16,
    /// Request-handling threads.
    pub workers: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            workers: std::thread::available_parallelism()
                .map(usize::from)
                .unwrap_or(4),
        }
    }
}

impl ServiceConfig {
    /// `host:port` bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
