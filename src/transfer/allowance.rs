//! Allowance validation for token-gated approval chains

use alloy_primitives::U256;
use async_trait::async_trait;
use tracing::debug;

use crate::amount::float_amount_to_int;
use crate::client::TokenWithChainDetails;
use crate::errors::{ClientError, TransferError};

/// On-chain read capability implemented by a chain-interaction collaborator
///
/// This crate never talks to a chain directly; implementors wrap whatever
/// RPC stack fits the chain family.
#[async_trait]
pub trait ChainInteraction: Send + Sync {
    /// The amount `owner` has currently approved the bridge contract to
    /// spend of `token`, in smallest units.
    async fn current_allowance(
        &self,
        owner: &str,
        token: &TokenWithChainDetails,
    ) -> Result<U256, ClientError>;
}

/// Parameters for an allowance check ahead of a transfer
#[derive(Debug, Clone)]
pub struct CheckAllowanceParams {
    /// The token to be transferred
    pub token: TokenWithChainDetails,
    /// Address of the token owner granting the spend
    pub owner: String,
    /// Human-readable decimal amount to check, pre-scaling
    pub amount: String,
}

/// Verify the owner's approved allowance covers the requested amount
///
/// Scales the requested amount to smallest units and compares it against
/// the live allowance read through `chain`. Equality passes; anything above
/// the allowance fails with [`TransferError::InsufficientAllowance`] before
/// a doomed on-chain transaction is ever built.
///
/// Returns the scaled requested amount on success so callers can reuse it.
pub async fn check_allowance<C: ChainInteraction>(
    chain: &C,
    params: &CheckAllowanceParams,
) -> Result<U256, TransferError> {
    let requested = float_amount_to_int(&params.amount, params.token.decimals)?;
    let allowance = chain
        .current_allowance(&params.owner, &params.token)
        .await?;

    debug!(
        owner = %params.owner,
        token = %params.token.symbol,
        requested = %requested,
        allowance = %allowance,
        "checked token allowance"
    );

    if requested > allowance {
        return Err(TransferError::InsufficientAllowance {
            requested,
            allowance,
        });
    }
    Ok(requested)
}
