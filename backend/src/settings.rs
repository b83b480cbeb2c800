//! Service settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `PAYMENTS_*` environment variables, or a
//! configuration file, with built-in fallbacks for anything left unset.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::sync::Arc;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::persistence::{
    DEFAULT_FAILURE_RATE, EntropyFaults, FailureRate, FaultPolicy, InvalidFailureRate,
    SeededFaults,
};

/// Errors raised while turning settings into runtime values.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid host {host:?}: {source}")]
    InvalidHost {
        /// Host as configured.
        host: String,
        /// Parser failure.
        #[source]
        source: AddrParseError,
    },
    /// The configured fault rate is not a probability.
    #[error(transparent)]
    InvalidFaultRate(#[from] InvalidFailureRate),
}

/// Configuration values for the payments service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PAYMENTS")]
pub struct ServiceSettings {
    /// IP address the HTTP listener binds to.
    #[ortho_config(default = "0.0.0.0".to_owned())]
    pub host: String,
    /// TCP port the HTTP listener binds to.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Probability that a simulated payment write fails.
    #[ortho_config(default = DEFAULT_FAILURE_RATE)]
    pub fault_rate: f64,
    /// Seed that makes injected write failures reproducible.
    pub fault_seed: Option<u64>,
}

impl ServiceSettings {
    /// Return the socket address to bind.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|source| SettingsError::InvalidHost {
                host: self.host.clone(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Return the configured failure rate.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidFaultRate`] when the rate lies outside
    /// `[0, 1]`.
    pub fn failure_rate(&self) -> Result<FailureRate, SettingsError> {
        Ok(FailureRate::new(self.fault_rate)?)
    }

    /// Build the fault policy for the simulated payment store.
    ///
    /// A configured seed selects [`SeededFaults`]; otherwise every write draws
    /// fresh randomness through [`EntropyFaults`].
    ///
    /// # Errors
    /// Propagates [`SettingsError::InvalidFaultRate`].
    pub fn fault_policy(&self) -> Result<Arc<dyn FaultPolicy>, SettingsError> {
        let rate = self.failure_rate()?;
        Ok(match self.fault_seed {
            Some(seed) => Arc::new(SeededFaults::new(rate, seed)),
            None => Arc::new(EntropyFaults::new(rate)),
        })
    }
}
