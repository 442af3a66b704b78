//! Wallet backend implementations.
//!
//! Two connection paths are supported:
//! - [`LocalKeyWallet`]: an in-process private key, mainly for tooling
//!   and tests.
//! - [`BridgedWallet`]: an external wallet fronted by a signer bridge
//!   service; user approval happens in the external wallet.

use crate::{ConnectionError, Session, WalletProvider};
use alloy_primitives::Address;
use async_trait::async_trait;
use client::ProxySigner;
use tracing::debug;

/// Backend that signs with an in-process private key.
pub struct LocalKeyWallet {
    private_key: String,
    chain_id: u64,
}

impl LocalKeyWallet {
    pub const fn new(private_key: String, chain_id: u64) -> Self {
        Self {
            private_key,
            chain_id,
        }
    }
}

#[async_trait]
impl WalletProvider for LocalKeyWallet {
    fn name(&self) -> &str {
        "local"
    }

    async fn connect(&self) -> Result<Session, ConnectionError> {
        let (address, signer) = client::local_signer_fn(&self.private_key)
            .map_err(|e| ConnectionError::Backend(e.to_string()))?;

        debug!(%address, "Local key wallet ready");

        Ok(Session {
            address,
            chain_id: self.chain_id,
            signer,
        })
    }
}

/// Backend for an external wallet behind a signer bridge.
///
/// The bridge holds the keys; every signing request is approved in the
/// external wallet. Connecting only wires up the session; a rejection
/// of a later signing request surfaces through the transfer flow, not
/// here.
pub struct BridgedWallet {
    bridge_url: String,
    address: Address,
    chain_id: u64,
}

impl BridgedWallet {
    pub const fn new(bridge_url: String, address: Address, chain_id: u64) -> Self {
        Self {
            bridge_url,
            address,
            chain_id,
        }
    }
}

#[async_trait]
impl WalletProvider for BridgedWallet {
    fn name(&self) -> &str {
        "bridge"
    }

    async fn connect(&self) -> Result<Session, ConnectionError> {
        if self.address == Address::ZERO {
            return Err(ConnectionError::Backend(
                "bridge account address must not be zero".to_string(),
            ));
        }

        let proxy = ProxySigner::new(self.bridge_url.clone(), self.address, self.chain_id);
        let signer = client::proxy_signer_fn(proxy);

        debug!(address = %self.address, url = %self.bridge_url, "Bridged wallet ready");

        Ok(Session {
            address: self.address,
            chain_id: self.chain_id,
            signer,
        })
    }
}
