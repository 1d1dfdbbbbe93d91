//! Gas fee computation for the deployment transaction

use alloy::{consensus::BlockHeader, eips::BlockId, providers::Provider};

use crate::{
    constants::{MAX_BASE_FEE_MULTIPLIER_DEN, MAX_BASE_FEE_MULTIPLIER_NUM},
    errors::ScriptError,
};

/// Compute the maximum fee per gas from a base fee and a priority fee.
///
/// The base fee is padded by a truncating 1.2x multiplier to absorb base fee
/// growth between estimation and inclusion.
pub fn max_fee_per_gas(base_fee: u128, priority_fee: u128) -> u128 {
    base_fee * MAX_BASE_FEE_MULTIPLIER_NUM / MAX_BASE_FEE_MULTIPLIER_DEN + priority_fee
}

/// Fetch the suggested priority fee from the chain
pub async fn fetch_priority_fee(client: &impl Provider) -> Result<u128, ScriptError> {
    client
        .get_max_priority_fee_per_gas()
        .await
        .map_err(|e| ScriptError::FeeEstimation(e.to_string()))
}

/// Fetch the latest block's base fee from the chain.
///
/// Chains without EIP-1559 base fees are rejected.
pub async fn fetch_base_fee(client: &impl Provider) -> Result<u128, ScriptError> {
    let block = client
        .get_block(BlockId::latest())
        .await
        .map_err(|e| ScriptError::FeeEstimation(e.to_string()))?
        .ok_or_else(|| ScriptError::FeeEstimation("no latest block".to_string()))?;

    block
        .header
        .base_fee_per_gas()
        .map(u128::from)
        .ok_or_else(|| ScriptError::FeeEstimation("chain has no base fee".to_string()))
}

/// Resolve the gas fee parameters for the deployment transaction.
///
/// Operator-supplied overrides are used verbatim; missing values are derived
/// from the chain's current fee market. Returns
/// `(max_fee_per_gas, max_priority_fee_per_gas)`.
pub async fn resolve_gas_fees(
    client: &impl Provider,
    max_fee_override: Option<u128>,
    priority_fee_override: Option<u128>,
) -> Result<(u128, u128), ScriptError> {
    let priority_fee = match priority_fee_override {
        Some(fee) => fee,
        None => fetch_priority_fee(client).await?,
    };

    let max_fee = match max_fee_override {
        Some(fee) => fee,
        None => max_fee_per_gas(fetch_base_fee(client).await?, priority_fee),
    };

    Ok((max_fee, priority_fee))
}

#[cfg(test)]
mod tests {
    use alloy::providers::{ProviderBuilder, mock::Asserter};

    use super::*;

    #[test]
    fn max_fee_with_exact_multiple() {
        // 10 * 1.2 = 12
        assert_eq!(max_fee_per_gas(10, 3), 15);
    }

    #[test]
    fn max_fee_truncates() {
        // 7 * 1.2 = 8.4, truncated to 8
        assert_eq!(max_fee_per_gas(7, 0), 8);
        // 1 * 1.2 = 1.2, truncated to 1
        assert_eq!(max_fee_per_gas(1, 1), 2);
    }

    #[test]
    fn max_fee_at_mainnet_scale() {
        // 30 gwei base fee, 2 gwei priority fee
        assert_eq!(
            max_fee_per_gas(30_000_000_000, 2_000_000_000),
            38_000_000_000
        );
    }

    #[test]
    fn max_fee_with_zero_base_fee() {
        assert_eq!(max_fee_per_gas(0, 5), 5);
    }

    #[tokio::test]
    async fn fetch_priority_fee_from_chain() {
        let asserter = Asserter::new();
        asserter.push_success(&serde_json::Value::from(1_500_000_000u64));

        let provider = ProviderBuilder::new().connect_mocked_client(asserter);
        assert_eq!(fetch_priority_fee(&provider).await.unwrap(), 1_500_000_000);
    }

    #[tokio::test]
    async fn fetch_priority_fee_surfaces_rpc_error() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("RPC error");

        let provider = ProviderBuilder::new().connect_mocked_client(asserter);
        assert!(matches!(
            fetch_priority_fee(&provider).await,
            Err(ScriptError::FeeEstimation(_))
        ));
    }

    #[tokio::test]
    async fn resolve_gas_fees_with_overrides_skips_rpc() {
        // No responses pushed, so any RPC call would fail
        let provider = ProviderBuilder::new().connect_mocked_client(Asserter::new());

        let fees = resolve_gas_fees(&provider, Some(100), Some(7)).await.unwrap();
        assert_eq!(fees, (100, 7));
    }

    #[tokio::test]
    async fn resolve_gas_fees_computes_max_fee_from_priority_override() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("base fee unavailable");

        let provider = ProviderBuilder::new().connect_mocked_client(asserter);
        // The priority fee override keeps `eth_maxPriorityFeePerGas` from
        // being called; the base fee fetch still runs and fails
        assert!(matches!(
            resolve_gas_fees(&provider, None, Some(7)).await,
            Err(ScriptError::FeeEstimation(_))
        ));
    }
}
