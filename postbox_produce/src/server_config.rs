use std::net::{Ipv4Addr, SocketAddr};

/// Configuration options for the publish HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Where to accept HTTP connections
    bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000)),
        }
    }
}

impl ServerConfig {
    pub fn new() -> ServerConfig {
        ServerConfig::default()
    }

    pub fn bind_addr(mut self, bind_addr: SocketAddr) -> ServerConfig {
        self.bind_addr = bind_addr;
        self
    }
    pub fn get_bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    pub fn port(mut self, port: u16) -> ServerConfig {
        self.bind_addr.set_port(port);
        self
    }
}
