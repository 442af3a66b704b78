//! The transfer executor: validate, check balance, submit.

use crate::{units, TransferError, TransferPhase, TransferRequest, TransferResult};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use binding::token::IERC20;
use session::Session;
use tracing::{debug, info, warn};

/// Executes token transfers against a fixed token contract.
///
/// Stateless between invocations: every call reads the current
/// balance, decides, and optionally submits. The session handle comes
/// from the caller on each call rather than from hidden global state.
pub struct TransferExecutor<P> {
    provider: P,
    token: Address,
    decimals: u8,
}

impl<P> TransferExecutor<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, token: Address, decimals: u8) -> Self {
        Self {
            provider,
            token,
            decimals,
        }
    }

    /// The token contract this executor is scoped to.
    pub const fn token(&self) -> Address {
        self.token
    }

    /// Validate, check balance, and submit a transfer.
    ///
    /// Preconditions are checked in order, first failure wins, and a
    /// failed precondition aborts with no side effects. Submission
    /// returns once the transaction is accepted into the pool; the
    /// receipt is not awaited.
    pub async fn transfer(
        &self,
        session: Option<&Session>,
        request: &TransferRequest,
    ) -> Result<TransferResult, TransferError> {
        debug!(phase = %TransferPhase::Validating, "Validating transfer request");

        let session = session.ok_or(TransferError::NotConnected)?;

        if request.recipient.is_empty() || request.amount.is_empty() {
            return Err(TransferError::InvalidInput(
                "recipient address and amount are both required".to_string(),
            ));
        }

        let amount = units::scale(&request.amount, self.decimals)?;

        let recipient: Address = request.recipient.parse().map_err(|e| {
            TransferError::InvalidInput(format!(
                "malformed recipient address {:?}: {}",
                request.recipient, e
            ))
        })?;

        debug!(
            phase = %TransferPhase::BalanceCheck,
            holder = %session.address,
            token = %self.token,
            "Querying token balance"
        );

        let contract = IERC20::new(self.token, &self.provider);
        let balance = contract
            .balanceOf(session.address)
            .call()
            .await
            .map_err(|e| {
                warn!(phase = %TransferPhase::Failed, error = %e, "Balance query failed");
                TransferError::SubmissionFailed(format!("balance query failed: {e}"))
            })?;

        debug!(
            balance = %balance,
            readable = %units::descale(balance, self.decimals),
            "Token balance fetched"
        );

        ensure_sufficient(balance, amount, self.decimals)?;

        info!(
            phase = %TransferPhase::Submitting,
            recipient = %recipient,
            amount = %amount,
            "Sufficient balance, submitting transfer"
        );

        let call = contract.transfer(recipient, amount);
        let tx_request = call.into_transaction_request();

        let filled_tx =
            client::fill_transaction(tx_request, &self.provider, session.address, session.chain_id)
                .await
                .map_err(|e| {
                    warn!(phase = %TransferPhase::Failed, error = %e, "Transaction fill failed");
                    TransferError::SubmissionFailed(format!("transaction fill failed: {e}"))
                })?;

        let signed_tx = (session.signer)(filled_tx).await.map_err(|e| {
            warn!(phase = %TransferPhase::Failed, error = %e, "Signing failed");
            TransferError::SubmissionFailed(format!("signing failed: {e}"))
        })?;

        let pending = self
            .provider
            .send_raw_transaction(&signed_tx)
            .await
            .map_err(|e| {
                warn!(phase = %TransferPhase::Failed, error = %e, "Broadcast failed");
                TransferError::SubmissionFailed(format!("broadcast failed: {e}"))
            })?;

        let tx_hash = *pending.tx_hash();

        info!(
            phase = %TransferPhase::Submitted,
            tx_hash = %tx_hash,
            "Transfer submitted"
        );

        Ok(TransferResult { tx_hash })
    }
}

/// Exact smallest-unit comparison of balance against amount.
///
/// Monetary values: integer comparison only, never floating point. On
/// shortfall the error carries the descaled balance for display.
fn ensure_sufficient(balance: U256, amount: U256, decimals: u8) -> Result<(), TransferError> {
    if balance < amount {
        return Err(TransferError::InsufficientBalance {
            balance: units::descale(balance, decimals),
        });
    }
    Ok(())
}
