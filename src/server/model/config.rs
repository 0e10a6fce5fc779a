use std::net::SocketAddrV4;

/// Server configs
#[derive(Debug)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// tax rate applied when a tab is closed, e.g. 0.18 for 18%
    pub tax_rate: f64,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, tax_rate: f64) -> Self {
        Self { addr, tax_rate }
    }
}
