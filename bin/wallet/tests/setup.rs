//! Common test setup utilities shared across integration tests.
#![allow(dead_code)] // not every test file uses every helper

use alloy_primitives::{address, Address};
use alloy_provider::{network::Ethereum, Provider, RootProvider};
use session::{Session, SessionStore, WalletRegistry};
use std::sync::Arc;
use wallet::config::Config;

/// Well-known anvil dev key; safe for offline tests, never funded.
pub const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Address derived from `DEV_KEY`.
pub const DEV_ADDRESS: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

/// Minimal config for offline tests. No RPC calls are made against
/// the url.
pub fn test_config() -> Config {
    toml::from_str(
        r#"
        rpc_url = "http://localhost:8545"
        chain_id = 56
        wallet_backend = "local"
        "#,
    )
    .expect("test config must parse")
}

/// Registry with the local dev-key backend registered.
pub fn test_registry() -> WalletRegistry {
    wallet::build_registry(&test_config(), Some(DEV_KEY))
}

/// Provider that panics on any RPC call. Lets tests assert that
/// validation failures abort before touching the network.
#[derive(Clone)]
pub struct MockProvider;

impl Provider for MockProvider {
    fn root(&self) -> &RootProvider<Ethereum> {
        panic!("mock provider must not be used for network calls")
    }
}

/// Store pre-loaded with a session whose signer panics if invoked.
pub fn connected_store(address: Address) -> SessionStore {
    let store = SessionStore::new();
    store.set(Session {
        address,
        chain_id: 56,
        signer: Arc::new(|_tx| Box::pin(async { panic!("test signer should not be called") })),
    });
    store
}
