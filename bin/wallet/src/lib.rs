pub mod config;
pub mod metrics;

use ::config::TokenConfig;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use binding::token::IERC20;
use session::{
    providers::{BridgedWallet, LocalKeyWallet},
    ConnectionError, Session, SessionStore, WalletRegistry,
};
use std::sync::Arc;
use transfer::{TransferError, TransferExecutor, TransferRequest, TransferResult};

pub use crate::config::Config;

/// Build the wallet registry from configuration.
///
/// The "local" backend is registered when a private key is supplied;
/// the "bridge" backend when the bridge url and account address are
/// configured. The recognized set is fixed here; selection happens by
/// name at connect time.
pub fn build_registry(config: &Config, private_key: Option<&str>) -> WalletRegistry {
    let mut registry = WalletRegistry::new();

    if let Some(key) = private_key {
        registry.register(Arc::new(LocalKeyWallet::new(
            key.to_string(),
            config.chain_id,
        )));
    }

    if let (Some(url), Some(address)) = (&config.bridge_url, config.bridge_address) {
        registry.register(Arc::new(BridgedWallet::new(
            url.clone(),
            address,
            config.chain_id,
        )));
    }

    registry
}

/// Connect through the named backend and install the session.
///
/// On failure the store is left untouched, so a previously connected
/// session (if any) stays usable.
pub async fn connect_wallet(
    registry: &WalletRegistry,
    backend: &str,
    store: &SessionStore,
) -> Result<Session, ConnectionError> {
    let session = registry.connect(backend).await?;
    store.set(session.clone());
    Ok(session)
}

/// Run a transfer against the currently stored session.
pub async fn send_token<P>(
    executor: &TransferExecutor<P>,
    store: &SessionStore,
    request: &TransferRequest,
) -> Result<TransferResult, TransferError>
where
    P: Provider + Clone,
{
    let session = store.get();
    executor.transfer(session.as_ref(), request).await
}

/// Query the holder's token balance in smallest units.
pub async fn query_token_balance<P>(
    provider: &P,
    token: &TokenConfig,
    holder: Address,
) -> eyre::Result<U256>
where
    P: Provider + Clone,
{
    let contract = IERC20::new(token.address, provider);
    let balance = contract.balanceOf(holder).call().await?;
    Ok(balance)
}
