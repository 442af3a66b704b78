//! Contract bindings for external contracts.
//!
//! The client talks to exactly one contract class: the ERC20 token
//! being transferred. The binding is generated with alloy's `sol!`
//! macro and covers only the surface the transfer flow needs.

pub mod token;
