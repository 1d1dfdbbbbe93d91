//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use alloy::providers::Provider;
use clap::{Args, Parser, Subcommand};

use crate::{commands::deploy_limit_order, errors::ScriptError};

/// CLI for deploying the Uniswap V3 limit order contract
#[derive(Parser)]
pub struct Cli {
    /// The deployer account
    #[command(flatten)]
    pub deployer: DeployerArgs,

    /// Network RPC URL
    #[arg(short, long, env)]
    pub rpc_url: String,

    /// Path to the deployments file
    #[arg(short, long, env, default_value = "deployments.json")]
    pub deployments_path: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Arguments identifying the deployer account.
///
/// The deployer is given either as a raw private key or as an encrypted
/// keystore file plus its password.
#[derive(Args)]
pub struct DeployerArgs {
    /// Private key of the deployer, in hex
    #[arg(short, long, env, conflicts_with = "keystore")]
    pub priv_key: Option<String>,

    /// Path to an encrypted keystore file holding the deployer key
    #[arg(
        short,
        long,
        env,
        required_unless_present = "priv_key",
        requires = "keystore_password"
    )]
    pub keystore: Option<PathBuf>,

    /// Password with which the keystore file is encrypted
    #[arg(long, env, requires = "keystore")]
    pub keystore_password: Option<String>,
}

/// The possible commands to run
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the limit order contract
    DeployLimitOrder(DeployLimitOrderArgs),
}

impl Command {
    /// Run the command against the given RPC client
    pub async fn run(
        self,
        client: impl Provider,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployLimitOrder(args) => {
                deploy_limit_order(args, client, deployments_path).await
            }
        }
    }
}

/// Deploy the Uniswap V3 limit order contract.
///
/// The arguments below are passed positionally to the contract's
/// constructor, in the order defined by its ABI. Addresses must carry a
/// valid EIP-55 checksum.
#[derive(Args)]
pub struct DeployLimitOrderArgs {
    /// Compass oracle/controller contract address in hex
    #[arg(long)]
    pub compass_evm: String,

    /// Uniswap V3 NFT position manager contract address in hex
    #[arg(long)]
    pub uniswap_v3_nft_manager: String,

    /// Uniswap swap router contract address in hex
    #[arg(long)]
    pub router: String,

    /// Address receiving gas refunds, in hex
    #[arg(long)]
    pub refund_wallet: String,

    /// Flat per-order fee, in wei
    #[arg(long)]
    pub fee: u128,

    /// Address receiving service fees, in hex
    #[arg(long)]
    pub service_fee_collector: String,

    /// Service fee amount
    #[arg(long)]
    pub service_fee: u128,

    /// Maximum fee per gas for the deployment transaction, in wei.
    ///
    /// Computed from the chain's current base fee when omitted.
    #[arg(long)]
    pub max_fee_per_gas: Option<u128>,

    /// Maximum priority fee per gas for the deployment transaction, in wei.
    ///
    /// Fetched from the chain when omitted.
    #[arg(long)]
    pub max_priority_fee_per_gas: Option<u128>,
}
