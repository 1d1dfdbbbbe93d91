//! Utilities for the deploy scripts

use std::{fs, path::PathBuf, str::FromStr};

use alloy::{
    json_abi::JsonAbi,
    network::EthereumWallet,
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use json::JsonValue;
use url::Url;

use crate::{
    cli::DeployerArgs,
    constants::{DEPLOYMENTS_KEY, LIMIT_ORDER_ABI, NUM_CONSTRUCTOR_ARGS},
    errors::ScriptError,
};

/// Load the deployer's signing key, either from a raw private key or by
/// decrypting a keystore file
pub fn load_signer(deployer: &DeployerArgs) -> Result<PrivateKeySigner, ScriptError> {
    if let Some(priv_key) = &deployer.priv_key {
        return PrivateKeySigner::from_str(priv_key)
            .map_err(|e| ScriptError::ClientInitialization(e.to_string()));
    }

    let keystore = deployer.keystore.as_ref().ok_or_else(|| {
        ScriptError::ClientInitialization("no deployer credential provided".to_string())
    })?;
    let password = deployer.keystore_password.as_deref().ok_or_else(|| {
        ScriptError::ClientInitialization("no keystore password provided".to_string())
    })?;

    PrivateKeySigner::decrypt_keystore(keystore, password)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))
}

/// Set up an RPC client signing with the deployer's key
pub fn setup_client(
    signer: PrivateKeySigner,
    rpc_url: &str,
) -> Result<impl Provider, ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let wallet = EthereumWallet::from(signer);

    Ok(ProviderBuilder::new().wallet(wallet).connect_http(url))
}

/// Parse the limit order contract's ABI artifact, checking that its
/// constructor takes the argument tuple the scripts encode
pub fn parse_limit_order_abi() -> Result<JsonAbi, ScriptError> {
    let abi: JsonAbi = serde_json::from_str(LIMIT_ORDER_ABI)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let constructor = abi
        .constructor
        .as_ref()
        .ok_or_else(|| ScriptError::ArtifactParsing("ABI has no constructor".to_string()))?;

    if constructor.inputs.len() != NUM_CONSTRUCTOR_ARGS {
        return Err(ScriptError::ArtifactParsing(format!(
            "expected {NUM_CONSTRUCTOR_ARGS} constructor arguments, ABI has {}",
            constructor.inputs.len()
        )));
    }

    Ok(abi)
}

/// Read a JSON value from the given file
pub fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Parse a deployed contract address from the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(
        parsed_json[DEPLOYMENTS_KEY][contract_key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ReadDeployments(
                    "could not parse contract address from deployments file".to_string(),
                )
            })?,
    )
    .map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Write a deployed contract address under the given key in the deployments
/// file, creating the file if it does not exist
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }

    let mut parsed_json = get_json_from_file(file_path)?;
    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}
