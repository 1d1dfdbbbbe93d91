//! Definitions of Solidity types used during deployment

use alloy::{sol, sol_types::SolValue};

sol! {
    /// Constructor arguments of the Uniswap V3 limit order contract, in
    /// positional ABI order
    #[derive(Debug)]
    struct LimitOrderInitArgs {
        /// Compass oracle/controller contract address
        address compass_evm;
        /// Uniswap V3 NFT position manager contract address
        address uniswap_v3_nft_manager;
        /// Uniswap swap router contract address
        address router;
        /// Address receiving gas refunds
        address refund_wallet;
        /// Flat per-order fee, in wei
        uint256 fee;
        /// Address receiving service fees
        address service_fee_collector;
        /// Service fee amount
        uint256 service_fee;
    }
}

/// ABI-encode the constructor arguments as they are appended to the
/// contract's deployment bytecode
pub fn limit_order_constructor_calldata(args: &LimitOrderInitArgs) -> Vec<u8> {
    args.abi_encode_params()
}
