//! Submitting client: one signed envelope, one round trip.

use jsonrpsee::core::ClientError;
use jsonrpsee::ws_client::{WsClient, WsClientBuilder};
use scribe_record::SignedEnvelope;
use tracing::{debug, info, warn};

use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::rpc::{LedgerRpcClient, SubmitReceipt};

/// A client connected to the audit ledger.
///
/// Holds one connection for one invocation; dropping the client releases
/// the connection regardless of how the submission went.
pub struct LedgerClient {
    client: WsClient,
    config: LedgerConfig,
}

impl LedgerClient {
    /// Connect to the ledger peer described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unreachable`] if no connection can be
    /// established within the configured bound.
    pub async fn connect(config: LedgerConfig) -> LedgerResult<Self> {
        let url = config.url();
        debug!(%url, "connecting to ledger");

        let client = WsClientBuilder::default()
            .connection_timeout(config.connection_timeout)
            .request_timeout(config.request_timeout)
            .build(&url)
            .await
            .map_err(|e| LedgerError::Unreachable {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    /// Submit a signed envelope and wait for the ledger's receipt.
    ///
    /// Exactly one request/response round trip, bounded by the configured
    /// deadline. A receipt with failure status is returned as data: the
    /// ledger answered, it just said no.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::DeadlineExceeded`] if the deadline expires,
    /// [`LedgerError::Rpc`] on a protocol-level error from the peer, or
    /// [`LedgerError::Transport`] if the connection fails mid-call.
    pub async fn submit(&self, envelope: &SignedEnvelope) -> LedgerResult<SubmitReceipt> {
        let req_id = envelope.record().req_id.clone();
        info!(%req_id, url = %self.config.url(), "submitting signed audit record");

        let receipt = self
            .client
            .submit_audit(envelope.clone())
            .await
            .map_err(|e| self.map_client_error(e))?;

        if receipt.req_id != req_id {
            warn!(
                submitted = %req_id,
                echoed = %receipt.req_id,
                "ledger echoed a different request id"
            );
        }

        debug!(%req_id, status = %receipt.status, "received ledger receipt");
        Ok(receipt)
    }

    fn map_client_error(&self, err: ClientError) -> LedgerError {
        match err {
            ClientError::RequestTimeout => LedgerError::DeadlineExceeded {
                timeout: self.config.request_timeout,
            },
            ClientError::Call(e) => LedgerError::Rpc {
                code: e.code(),
                message: e.message().to_string(),
            },
            ClientError::Transport(e) => LedgerError::Transport(e.to_string()),
            other => LedgerError::Transport(other.to_string()),
        }
    }
}

impl std::fmt::Debug for LedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerClient")
            .field("url", &self.config.url())
            .finish_non_exhaustive()
    }
}
