//! Wallet session management.
//!
//! This crate owns the connect half of the client: wallet backends
//! behind the [`WalletProvider`] trait, a [`WalletRegistry`] of named
//! backends, and the single-slot [`SessionStore`] holding the active
//! session.

pub mod providers;
pub mod store;

use alloy_primitives::Address;
use async_trait::async_trait;
use client::SignerFn;
use std::{collections::HashMap, fmt, sync::Arc};
use thiserror::Error;
use tracing::info;

pub use store::SessionStore;

/// An established wallet session.
///
/// Produced by a successful [`WalletProvider::connect`]. The signer is
/// bound to the address and authorizes every subsequent transaction.
#[derive(Clone)]
pub struct Session {
    /// The connected account address
    pub address: Address,
    /// Chain ID the signer signs for
    pub chain_id: u64,
    /// Signing capability bound to the address
    pub signer: SignerFn,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("address", &self.address)
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}

#[derive(Error, Debug)]
pub enum ConnectionError {
    /// No backend registered under the requested name
    #[error("No wallet backend named {0:?} is configured")]
    UnknownBackend(String),

    /// The user (or the external wallet) rejected the connection
    #[error("Wallet connection rejected: {0}")]
    Rejected(String),

    /// The backend failed to produce a session
    #[error("Wallet backend error: {0}")]
    Backend(String),
}

/// A wallet backend that can establish a session.
///
/// Implementations cover the supported connection paths: an
/// in-process private key and a bridged external wallet. Backends are
/// selected by name through the [`WalletRegistry`].
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Registry name of this backend.
    fn name(&self) -> &str;

    /// Establish a session.
    ///
    /// Awaits whatever approval the backend requires and derives the
    /// account address from the resulting signer. On failure no
    /// session is established.
    async fn connect(&self) -> Result<Session, ConnectionError>;
}

/// Registry of named wallet backends.
///
/// The set of recognized backends is static configuration: each is
/// registered once at startup and looked up by name when the user
/// triggers a connect.
#[derive(Default)]
pub struct WalletRegistry {
    backends: HashMap<String, Arc<dyn WalletProvider>>,
}

impl WalletRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend under its own name. A later registration
    /// with the same name replaces the earlier one.
    pub fn register(&mut self, backend: Arc<dyn WalletProvider>) {
        self.backends.insert(backend.name().to_string(), backend);
    }

    /// Names of all registered backends.
    pub fn names(&self) -> Vec<&str> {
        self.backends.keys().map(String::as_str).collect()
    }

    /// Connect through the named backend.
    pub async fn connect(&self, name: &str) -> Result<Session, ConnectionError> {
        let backend = self
            .backends
            .get(name)
            .ok_or_else(|| ConnectionError::UnknownBackend(name.to_string()))?;

        let session = backend.connect().await?;
        info!(backend = name, address = %session.address, "Wallet connected");

        Ok(session)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    /// Backend that yields a fixed session without external calls.
    pub struct StubWallet {
        pub address: Address,
    }

    #[async_trait]
    impl WalletProvider for StubWallet {
        fn name(&self) -> &str {
            "stub"
        }

        async fn connect(&self) -> Result<Session, ConnectionError> {
            Ok(Session {
                address: self.address,
                chain_id: 1,
                signer: Arc::new(|_tx| {
                    Box::pin(async { panic!("stub signer should not be called") })
                }),
            })
        }
    }

    /// Backend that always reports a user rejection.
    pub struct RejectingWallet;

    #[async_trait]
    impl WalletProvider for RejectingWallet {
        fn name(&self) -> &str {
            "rejecting"
        }

        async fn connect(&self) -> Result<Session, ConnectionError> {
            Err(ConnectionError::Rejected("user declined".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::{RejectingWallet, StubWallet};
    use super::*;

    #[tokio::test]
    async fn test_connect_through_registry() {
        let address = Address::repeat_byte(0xAA);
        let mut registry = WalletRegistry::new();
        registry.register(Arc::new(StubWallet { address }));

        let session = registry.connect("stub").await.unwrap();
        assert_eq!(session.address, address);
        assert_eq!(session.chain_id, 1);
    }

    #[tokio::test]
    async fn test_unknown_backend() {
        let registry = WalletRegistry::new();

        let result = registry.connect("metamask").await;
        assert!(matches!(result, Err(ConnectionError::UnknownBackend(_))));
    }

    #[tokio::test]
    async fn test_rejected_connection() {
        let mut registry = WalletRegistry::new();
        registry.register(Arc::new(RejectingWallet));

        let result = registry.connect("rejecting").await;
        assert!(matches!(result, Err(ConnectionError::Rejected(_))));
    }

    #[test]
    fn test_registry_names() {
        let mut registry = WalletRegistry::new();
        registry.register(Arc::new(StubWallet {
            address: Address::ZERO,
        }));
        registry.register(Arc::new(RejectingWallet));

        let mut names = registry.names();
        names.sort_unstable();
        assert_eq!(names, vec!["rejecting", "stub"]);
    }

    #[test]
    fn test_session_debug_hides_signer() {
        let session = Session {
            address: Address::repeat_byte(0xAA),
            chain_id: 56,
            signer: Arc::new(|_tx| Box::pin(async { panic!("unused") })),
        };

        let debug = format!("{:?}", session);
        assert!(debug.contains("address"));
        assert!(!debug.contains("signer"));
    }
}
