//! Constants used in the deploy scripts

/// The ABI of the Uniswap V3 limit order contract
pub const LIMIT_ORDER_ABI: &str = include_str!("../artifacts/LimitOrderUniswapV3.abi");

/// The bytecode of the Uniswap V3 limit order contract
pub const LIMIT_ORDER_BYTECODE: &str = include_str!("../artifacts/LimitOrderUniswapV3.bin");

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The number of arguments taken by the limit order contract's constructor
pub const NUM_CONSTRUCTOR_ARGS: usize = 7;

/// The numerator of the multiplier applied to the base fee when computing
/// the maximum fee per gas
pub const MAX_BASE_FEE_MULTIPLIER_NUM: u128 = 12;

/// The denominator of the multiplier applied to the base fee when computing
/// the maximum fee per gas
pub const MAX_BASE_FEE_MULTIPLIER_DEN: u128 = 10;

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The limit order contract key in the `deployments.json` file
pub const LIMIT_ORDER_CONTRACT_KEY: &str = "limit_order_uniswap_v3";
