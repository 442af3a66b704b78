//! Configuration types for the token transfer client.
//!
//! This crate provides:
//! - The token contract configuration (address, decimals, symbol)
//! - A builder for overriding the defaults in tests and tooling

pub mod token;

pub use token::{TokenConfig, TokenConfigBuilder};
