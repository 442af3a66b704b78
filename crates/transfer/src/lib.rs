//! Token transfer execution.
//!
//! Given a connected session, the [`TransferExecutor`] validates a
//! transfer request, checks the sender's on-chain token balance, and
//! submits an ERC20 transfer. Each invocation is stateless apart from
//! the session handle it receives; the result reports the submitted
//! transaction hash, not its confirmation.

pub mod executor;
pub mod units;

use alloy_primitives::TxHash;
use std::fmt;
use thiserror::Error;

pub use executor::TransferExecutor;

/// A transfer request as received from the presentation layer.
///
/// Both fields are untrusted text; validation happens inside the
/// executor. Constructed fresh per submit action, never persisted.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// Recipient account address, hex text
    pub recipient: String,
    /// Amount in human-readable token units, decimal text
    pub amount: String,
}

/// Result of a transfer attempt that reached submission.
///
/// A result existing at all means the transaction was accepted into
/// the submission pipeline (not necessarily mined); every failed
/// attempt surfaces as a [`TransferError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferResult {
    /// Hash of the submitted transaction
    pub tx_hash: TxHash,
}

#[derive(Error, Debug)]
pub enum TransferError {
    /// No session established; connect a wallet first
    #[error("No wallet connected. Please connect your wallet first.")]
    NotConnected,

    /// Missing or malformed recipient/amount
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Balance below the requested amount; carries the current
    /// human-readable balance for display
    #[error("Insufficient balance. Your current balance is {balance}")]
    InsufficientBalance {
        /// Current balance, descaled to token units
        balance: String,
    },

    /// Network, contract, or signer-level rejection during balance
    /// query or submission
    #[error("Transfer failed: {0}")]
    SubmissionFailed(String),
}

impl TransferError {
    /// Stable label for metrics and logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotConnected => "not_connected",
            Self::InvalidInput(_) => "invalid_input",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::SubmissionFailed(_) => "submission_failed",
        }
    }
}

/// Phase of a single transfer attempt.
///
/// `Submitted` and `Failed` are terminal; there is no retry
/// transition. Phases are emitted through tracing for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferPhase {
    Idle,
    Validating,
    BalanceCheck,
    Submitting,
    Submitted,
    Failed,
}

impl TransferPhase {
    /// Whether the attempt has reached a terminal phase.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Submitted | Self::Failed)
    }
}

impl fmt::Display for TransferPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::BalanceCheck => "balance_check",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(TransferError::NotConnected.kind(), "not_connected");
        assert_eq!(
            TransferError::InvalidInput("x".to_string()).kind(),
            "invalid_input"
        );
        assert_eq!(
            TransferError::InsufficientBalance {
                balance: "1.0".to_string()
            }
            .kind(),
            "insufficient_balance"
        );
        assert_eq!(
            TransferError::SubmissionFailed("x".to_string()).kind(),
            "submission_failed"
        );
    }

    #[test]
    fn test_result_carries_only_the_submitted_hash() {
        // A result existing implies submission; failures are errors,
        // so there is no failure status to carry alongside the hash.
        let result = TransferResult {
            tx_hash: TxHash::repeat_byte(0x11),
        };
        assert_eq!(result.tx_hash, TxHash::repeat_byte(0x11));
    }

    #[test]
    fn test_insufficient_balance_message_shows_balance() {
        let err = TransferError::InsufficientBalance {
            balance: "1.0".to_string(),
        };
        assert!(err.to_string().contains("1.0"));
    }

    #[test]
    fn test_terminal_phases() {
        assert!(TransferPhase::Submitted.is_terminal());
        assert!(TransferPhase::Failed.is_terminal());
        assert!(!TransferPhase::Idle.is_terminal());
        assert!(!TransferPhase::Validating.is_terminal());
        assert!(!TransferPhase::BalanceCheck.is_terminal());
        assert!(!TransferPhase::Submitting.is_terminal());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(TransferPhase::BalanceCheck.to_string(), "balance_check");
        assert_eq!(TransferPhase::Submitted.to_string(), "submitted");
    }
}
