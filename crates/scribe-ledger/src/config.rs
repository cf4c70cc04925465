//! Client-side connection configuration.

use std::time::Duration;

/// Default ledger address.
pub const DEFAULT_ADDR: &str = "localhost:50051";

/// Default request deadline, measured from request initiation.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How to reach the ledger peer.
///
/// Transport security is a deployment choice: the reference deployment
/// trusts the peer over plaintext `ws://`, while `tls` switches the same
/// contract onto `wss://`.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Peer address as `host:port`.
    pub addr: String,
    /// Use an encrypted channel (`wss://`) instead of plaintext.
    pub tls: bool,
    /// Deadline for the submission round trip; on expiry the in-flight
    /// call is aborted and reported as a timeout.
    pub request_timeout: Duration,
    /// Bound on connection establishment.
    pub connection_timeout: Duration,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            tls: false,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connection_timeout: Duration::from_secs(5),
        }
    }
}

impl LedgerConfig {
    /// Config for a peer address, with default timeouts and no TLS.
    #[must_use]
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            ..Self::default()
        }
    }

    /// Toggle the encrypted channel.
    #[must_use]
    pub fn with_tls(mut self, tls: bool) -> Self {
        self.tls = tls;
        self
    }

    /// Override the request deadline.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// The connection URL for this config.
    #[must_use]
    pub fn url(&self) -> String {
        let scheme = if self.tls { "wss" } else { "ws" };
        format!("{scheme}://{}", self.addr)
    }
}
