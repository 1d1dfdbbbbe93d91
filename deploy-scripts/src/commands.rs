//! Implementations of the various deploy scripts

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
};
use tracing::info;

use crate::{
    cli::DeployLimitOrderArgs,
    constants::{LIMIT_ORDER_BYTECODE, LIMIT_ORDER_CONTRACT_KEY, NUM_DEPLOY_CONFIRMATIONS},
    errors::ScriptError,
    fees::resolve_gas_fees,
    solidity::{LimitOrderInitArgs, limit_order_constructor_calldata},
    utils::{parse_limit_order_abi, write_deployed_address},
};

/// Deploy the limit order contract with the constructor arguments given on
/// the command line, recording the deployed address in the deployments file
pub async fn deploy_limit_order(
    args: DeployLimitOrderArgs,
    client: impl Provider,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    // Check the committed artifact against the argument tuple before
    // touching the network
    parse_limit_order_abi()?;
    let constructor_args = parse_constructor_args(&args)?;

    let (max_fee_per_gas, max_priority_fee_per_gas) = resolve_gas_fees(
        &client,
        args.max_fee_per_gas,
        args.max_priority_fee_per_gas,
    )
    .await?;

    info!(
        max_fee_per_gas,
        max_priority_fee_per_gas, "Deploying limit order contract"
    );

    let tx = TransactionRequest::default()
        .with_deploy_code(limit_order_deploy_code(&constructor_args)?)
        .with_max_fee_per_gas(max_fee_per_gas)
        .with_max_priority_fee_per_gas(max_priority_fee_per_gas);

    let receipt = client
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(
            "deployment transaction reverted".to_string(),
        ));
    }

    let contract_address = receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment("no contract address in receipt".to_string())
    })?;

    info!("Limit order contract deployed at {contract_address:#x}");

    write_deployed_address(deployments_path, LIMIT_ORDER_CONTRACT_KEY, contract_address)
}

/// Parse the constructor arguments from their command line representation
fn parse_constructor_args(
    args: &DeployLimitOrderArgs,
) -> Result<LimitOrderInitArgs, ScriptError> {
    Ok(LimitOrderInitArgs {
        compass_evm: parse_address("compass_evm", &args.compass_evm)?,
        uniswap_v3_nft_manager: parse_address(
            "uniswap_v3_nft_manager",
            &args.uniswap_v3_nft_manager,
        )?,
        router: parse_address("router", &args.router)?,
        refund_wallet: parse_address("refund_wallet", &args.refund_wallet)?,
        fee: U256::from(args.fee),
        service_fee_collector: parse_address(
            "service_fee_collector",
            &args.service_fee_collector,
        )?,
        service_fee: U256::from(args.service_fee),
    })
}

/// Parse a checksummed address argument, naming the offending field on error
fn parse_address(field: &str, value: &str) -> Result<Address, ScriptError> {
    Address::parse_checksummed(value, None)
        .map_err(|e| ScriptError::CalldataConstruction(format!("{field}: {e}")))
}

/// Assemble the deployment code for the limit order contract: the compiled
/// bytecode followed by the ABI-encoded constructor arguments
fn limit_order_deploy_code(args: &LimitOrderInitArgs) -> Result<Bytes, ScriptError> {
    let bytecode = hex::decode(LIMIT_ORDER_BYTECODE.trim().trim_start_matches("0x"))
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    Ok([bytecode, limit_order_constructor_calldata(args)]
        .concat()
        .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NUM_CONSTRUCTOR_ARGS;

    /// A deploy argument set with valid checksummed mainnet addresses
    fn deploy_args() -> DeployLimitOrderArgs {
        DeployLimitOrderArgs {
            compass_evm: "0x652Bf77d9F1BDA15B86894a185E8C22d9c722EB4".to_string(),
            uniswap_v3_nft_manager: "0xC36442b4a4522E871399CD717aBDD847Ab11FE88".to_string(),
            router: "0x68b3465833fb72A70ecDF485E0e4C7bD8665Fc45".to_string(),
            refund_wallet: "0x6dc0A87638CD75Cc700cCdB226c7ab6C054bc70b".to_string(),
            fee: 10_000_000_000_000_000,
            service_fee_collector: "0xe693603C9441f0e645Af6A5898b76a60dbf757F4".to_string(),
            service_fee: 0,
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
        }
    }

    #[test]
    fn parses_valid_constructor_args() {
        let parsed = parse_constructor_args(&deploy_args()).unwrap();
        assert_eq!(parsed.fee, U256::from(10_000_000_000_000_000u64));
        assert_eq!(parsed.service_fee, U256::ZERO);
    }

    #[test]
    fn rejects_empty_address() {
        let mut args = deploy_args();
        args.refund_wallet = String::new();

        let err = parse_constructor_args(&args).unwrap_err();
        assert!(matches!(err, ScriptError::CalldataConstruction(_)));
        assert!(err.to_string().contains("refund_wallet"));
    }

    #[test]
    fn rejects_bad_checksum() {
        let mut args = deploy_args();
        args.compass_evm = args.compass_evm.to_lowercase();

        assert!(matches!(
            parse_constructor_args(&args),
            Err(ScriptError::CalldataConstruction(_))
        ));
    }

    #[test]
    fn deploy_code_appends_constructor_args_to_bytecode() {
        let args = parse_constructor_args(&deploy_args()).unwrap();
        let code = limit_order_deploy_code(&args).unwrap();

        let bytecode = hex::decode(LIMIT_ORDER_BYTECODE.trim().trim_start_matches("0x")).unwrap();
        assert!(code.starts_with(&bytecode));
        assert_eq!(code.len(), bytecode.len() + NUM_CONSTRUCTOR_ARGS * 32);
        assert_eq!(
            code[bytecode.len()..],
            limit_order_constructor_calldata(&args)[..]
        );
    }
}
