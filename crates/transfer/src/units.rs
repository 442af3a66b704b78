//! Conversion between human-readable token amounts and smallest units.
//!
//! Amounts are monetary values: they live as `U256` integers in the
//! token's smallest unit and are never compared through floating
//! point. Scaling uses the token's fixed decimal factor (6 for USDT).

use crate::TransferError;
use alloy_primitives::{
    utils::{format_units, parse_units},
    U256,
};

/// Scale a human-readable decimal string into smallest units.
///
/// Rejects non-numeric input, negative amounts, and amounts with more
/// fractional digits than the token carries. Rejection (rather than
/// truncation) keeps the round-trip with [`descale`] exact.
pub fn scale(amount: &str, decimals: u8) -> Result<U256, TransferError> {
    let parsed = parse_units(amount, decimals)
        .map_err(|e| TransferError::InvalidInput(format!("invalid amount {amount:?}: {e}")))?;

    if parsed.is_negative() {
        return Err(TransferError::InvalidInput(format!(
            "amount must not be negative: {amount:?}"
        )));
    }

    Ok(parsed.get_absolute())
}

/// Descale a smallest-unit amount back into a human-readable string.
///
/// Trailing fractional zeros are trimmed but one fractional digit is
/// always kept, so 1_000_000 at 6 decimals reads "1.0".
pub fn descale(amount: U256, decimals: u8) -> String {
    let mut formatted = match format_units(amount, decimals) {
        Ok(s) => s,
        // Unreachable for sane decimals; fall back to the raw integer
        Err(_) => return amount.to_string(),
    };

    if formatted.contains('.') {
        while formatted.ends_with('0') {
            formatted.pop();
        }
        if formatted.ends_with('.') {
            formatted.push('0');
        }
    }

    formatted
}
