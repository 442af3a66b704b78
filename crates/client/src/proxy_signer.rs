//! Transaction signer that delegates signing to a wallet bridge.
//!
//! The proxy signer sends `eth_signTransaction` JSON-RPC requests to a
//! bridge service that fronts the actual wallet. The bridge owns key
//! custody and user approval; this client only sees the raw signed
//! bytes that come back.

use alloy_primitives::{Address, Bytes};
use alloy_rpc_types::eth::TransactionRequest;
use eyre::{bail, Result};
use serde::{Deserialize, Serialize};

/// A signer backed by a wallet bridge service.
///
/// Sends `eth_signTransaction` requests over HTTP and returns signed
/// raw transaction bytes ready for `provider.send_raw_transaction()`.
/// A request that the user rejects in the external wallet surfaces
/// here as a JSON-RPC error.
#[derive(Debug, Clone)]
pub struct ProxySigner {
    client: reqwest::Client,
    bridge_url: String,
    address: Address,
    chain_id: u64,
}

impl ProxySigner {
    /// Creates a new proxy signer.
    ///
    /// # Arguments
    /// * `bridge_url` - The URL of the wallet bridge (e.g., "http://localhost:9060")
    /// * `address` - The account address the bridge signs for
    /// * `chain_id` - The chain ID for EIP-155 replay protection
    pub fn new(bridge_url: impl Into<String>, address: Address, chain_id: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            bridge_url: bridge_url.into(),
            address,
            chain_id,
        }
    }

    /// Returns the signer's address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Signs a transaction via the wallet bridge.
    ///
    /// Returns the signed transaction as raw bytes, ready to be
    /// broadcast via `provider.send_raw_transaction()`.
    pub async fn sign_transaction(&self, tx: TransactionRequest) -> Result<Bytes> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method: "eth_signTransaction",
            params: [tx],
            id: 1,
        };

        let response = self
            .client
            .post(&self.bridge_url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            bail!("wallet bridge returned {status}: {body}");
        }

        let rpc_response: JsonRpcResponse<SignedTransactionResponse> = response.json().await?;

        match rpc_response.result {
            Some(result) => {
                let bytes: Bytes = result.raw.parse()?;
                Ok(bytes)
            }
            None => {
                let error = rpc_response.error.unwrap_or(JsonRpcError {
                    code: -1,
                    message: "unknown error".to_string(),
                });
                bail!("JSON-RPC error {}: {}", error.code, error.message);
            }
        }
    }

}

#[derive(Debug, Serialize)]
struct JsonRpcRequest<T> {
    jsonrpc: &'static str,
    method: &'static str,
    params: T,
    id: u32,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

/// Response from eth_signTransaction containing the signed transaction.
#[derive(Debug, Deserialize)]
struct SignedTransactionResponse {
    /// The signed transaction as hex-encoded RLP.
    raw: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_signer_accessors() {
        let signer = ProxySigner::new(
            "http://localhost:9060",
            address!("5CFFA347b0aE99cc01E5c01714cA5658e54a23D1"),
            56,
        );

        assert_eq!(
            signer.address(),
            address!("5CFFA347b0aE99cc01E5c01714cA5658e54a23D1")
        );
        assert_eq!(signer.chain_id(), 56);
    }
}
