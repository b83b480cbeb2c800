//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use payments::outbound::persistence::FaultPolicy;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) faults: Arc<dyn FaultPolicy>,
}

impl ServerConfig {
    /// Construct a server configuration from the bind address and the fault
    /// policy driving the simulated store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, faults: Arc<dyn FaultPolicy>) -> Self {
        Self { bind_addr, faults }
    }
}
