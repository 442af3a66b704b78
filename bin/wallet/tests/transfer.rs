//! Integration tests for the transfer flow preconditions.
//!
//! These run against a panicking mock provider: every asserted failure
//! must be produced before any network call is made.

#[path = "setup.rs"]
mod setup;

use session::SessionStore;
use setup::{connected_store, MockProvider, DEV_ADDRESS};
use transfer::{TransferError, TransferExecutor, TransferRequest};

const RECIPIENT: &str = "0x0202020202020202020202020202020202020202";

fn executor() -> TransferExecutor<MockProvider> {
    let token = setup::test_config().token;
    TransferExecutor::new(MockProvider, token.address, token.decimals)
}

fn request(recipient: &str, amount: &str) -> TransferRequest {
    TransferRequest {
        recipient: recipient.to_string(),
        amount: amount.to_string(),
    }
}

#[tokio::test]
async fn test_send_without_session() {
    let store = SessionStore::new();

    let result = wallet::send_token(&executor(), &store, &request(RECIPIENT, "2.5")).await;

    assert!(matches!(result, Err(TransferError::NotConnected)));
}

#[tokio::test]
async fn test_send_after_disconnect() {
    let store = connected_store(DEV_ADDRESS);
    store.clear();

    let result = wallet::send_token(&executor(), &store, &request(RECIPIENT, "2.5")).await;

    assert!(matches!(result, Err(TransferError::NotConnected)));
}

#[tokio::test]
async fn test_send_empty_recipient() {
    let store = connected_store(DEV_ADDRESS);

    let result = wallet::send_token(&executor(), &store, &request("", "2.5")).await;

    assert!(matches!(result, Err(TransferError::InvalidInput(_))));
}

#[tokio::test]
async fn test_send_empty_amount() {
    let store = connected_store(DEV_ADDRESS);

    let result = wallet::send_token(&executor(), &store, &request(RECIPIENT, "")).await;

    assert!(matches!(result, Err(TransferError::InvalidInput(_))));
}

#[tokio::test]
async fn test_send_non_numeric_amount() {
    let store = connected_store(DEV_ADDRESS);

    let result = wallet::send_token(&executor(), &store, &request(RECIPIENT, "two point five")).await;

    assert!(matches!(result, Err(TransferError::InvalidInput(_))));
}

#[tokio::test]
async fn test_send_excess_precision_amount() {
    let store = connected_store(DEV_ADDRESS);

    // Seven fractional digits against the six-decimal default token
    let result = wallet::send_token(&executor(), &store, &request(RECIPIENT, "1.2345678")).await;

    assert!(matches!(result, Err(TransferError::InvalidInput(_))));
}

#[tokio::test]
async fn test_send_malformed_recipient() {
    let store = connected_store(DEV_ADDRESS);

    let result = wallet::send_token(&executor(), &store, &request("nowhere", "2.5")).await;

    assert!(matches!(result, Err(TransferError::InvalidInput(_))));
}
