//! Token contract configuration.
//!
//! The client transfers a single, fixed ERC20 token. The contract
//! address, decimal scale, and display symbol are treated as external
//! interface contract and fixed at configuration time.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// The ERC20 token the client transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Token contract address
    pub address: Address,
    /// Number of decimals in the token's smallest-unit representation
    pub decimals: u8,
    /// Display symbol for user-facing messages
    pub symbol: String,
}

impl TokenConfig {
    /// Default USDT configuration.
    pub fn usdt() -> Self {
        Self {
            // https://bscscan.com/address/0x55d398326f99059fF775485246999027B3197955
            address: address!("0x55d398326f99059fF775485246999027B3197955"),
            decimals: 6,
            symbol: "USDT".to_string(),
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::usdt()
    }
}

/// Builder for custom token configurations.
#[derive(Debug, Clone)]
pub struct TokenConfigBuilder {
    token: TokenConfig,
}

impl TokenConfigBuilder {
    /// Start with USDT defaults.
    pub fn usdt() -> Self {
        Self {
            token: TokenConfig::usdt(),
        }
    }

    /// Override the token contract address.
    pub const fn address(mut self, address: Address) -> Self {
        self.token.address = address;
        self
    }

    /// Override the token decimals.
    pub const fn decimals(mut self, decimals: u8) -> Self {
        self.token.decimals = decimals;
        self
    }

    /// Override the display symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.token.symbol = symbol.into();
        self
    }

    /// Build the token configuration.
    pub fn build(self) -> TokenConfig {
        self.token
    }
}
