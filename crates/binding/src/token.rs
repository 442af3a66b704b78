//! ERC20 token contract binding.
//!
//! Minimal ABI surface for the transfer flow: `transfer` and
//! `balanceOf`, plus the `Transfer` event.

use alloy_sol_types::sol;

sol! {
    /// ERC20 token interface, restricted to the calls the client makes.
    #[sol(rpc)]
    interface IERC20 {
        /// Emitted when tokens are transferred
        event Transfer(
            address indexed from,
            address indexed to,
            uint256 value
        );

        /// Get token balance of an account
        function balanceOf(address account) external view returns (uint256);

        /// Transfer tokens to recipient
        function transfer(address recipient, uint256 amount) external returns (bool);
    }
}
