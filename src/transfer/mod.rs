//! Transfer parameter normalization
//!
//! Turns a human-supplied transfer request into a chain-ready, unit-scaled
//! descriptor: exact decimal scaling, fee accounting by payment method, and
//! per-family address representation. The transform is pure aside from the
//! data it pulls through the information service, so a failed preparation
//! leaves nothing to roll back.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::amount::float_amount_to_int;
use crate::chains::ChainSymbol;
use crate::client::{
    InformationService, Messenger, ReceiveTransactionCostRequest, TokenWithChainDetails,
};
use crate::errors::{AmountError, TransferError};

mod address;
mod allowance;

pub use address::AccountAddress;
pub use allowance::{check_allowance, ChainInteraction, CheckAllowanceParams};

/// How the gas fee for a transfer is paid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeePaymentMethod {
    /// The fee rides along as native-currency value on the transaction;
    /// the transferred token amount is untouched.
    #[default]
    #[serde(rename = "WITH_NATIVE_CURRENCY")]
    WithNativeCurrency,
    /// The fee is deducted from the transferred token amount, denominated
    /// in smallest units of the source token.
    #[serde(rename = "WITH_STABLECOIN")]
    WithStablecoin,
}

impl std::fmt::Display for FeePaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeePaymentMethod::WithNativeCurrency => f.write_str("WITH_NATIVE_CURRENCY"),
            FeePaymentMethod::WithStablecoin => f.write_str("WITH_STABLECOIN"),
        }
    }
}

/// Caller-supplied transfer request, pre-scaling
#[derive(Debug, Clone)]
pub struct SendParams {
    /// Human-readable decimal amount of tokens to transfer. Includes the
    /// fee when `gas_fee_payment_method` is
    /// [`FeePaymentMethod::WithStablecoin`].
    pub amount: String,
    /// Account address the tokens leave from
    pub from_account_address: String,
    /// Account address the tokens arrive at
    pub to_account_address: String,
    /// Messenger protocol relaying the transfer confirmation
    pub messenger: Messenger,
    /// Gas fee as a decimal integer string in smallest units: source-chain
    /// native currency for the native method, source token for the
    /// stablecoin method. When absent, the default fee is fetched from the
    /// information service.
    pub fee: Option<String>,
    /// Fee payment method; native currency when absent
    pub gas_fee_payment_method: Option<FeePaymentMethod>,
    /// The token on the source chain
    pub source_token: TokenWithChainDetails,
    /// The token on the destination chain
    pub destination_token: TokenWithChainDetails,
}

/// Chain-ready transfer descriptor, post-scaling
///
/// Everything a chain family's transaction builder needs: integer amounts
/// in smallest units and addresses in the representation the destination
/// family consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxSendParams {
    /// Transfer amount in smallest units of the source token
    pub amount: U256,
    /// Bridge contract address on the source chain
    pub contract_address: String,
    /// Bridge-protocol id of the source chain
    pub from_chain_id: u64,
    /// Symbol of the source chain
    pub from_chain_symbol: ChainSymbol,
    /// Sender account address, as supplied (the signer-side string form)
    pub from_account_address: String,
    /// Source token address in the source family's representation
    pub from_token_address: AccountAddress,
    /// Bridge-protocol id of the destination chain
    pub to_chain_id: u64,
    /// Recipient account address in the destination family's representation
    pub to_account_address: AccountAddress,
    /// Destination token address in the destination family's representation
    pub to_token_address: AccountAddress,
    /// Messenger protocol relaying the transfer confirmation
    pub messenger: Messenger,
    /// Gas fee in smallest units (see [`SendParams::fee`] for denomination)
    pub fee: U256,
    /// How the fee is paid
    pub gas_fee_payment_method: FeePaymentMethod,
}

/// Parse a fee given as a decimal integer string in smallest units
fn parse_int_fee(value: &str) -> Result<U256, AmountError> {
    U256::from_str_radix(value.trim(), 10)
        .map_err(|e| AmountError::invalid(value, format!("expected integer smallest units: {e}")))
}

/// Normalize a transfer request into chain-ready parameters
///
/// Enforces, in order:
///
/// 1. fee resolution: an explicit fee is parsed as integer smallest units;
///    with no explicit fee, the native-currency default is fetched through
///    `client` (typically a [`CachingClient`](crate::client::CachingClient)),
///    while the stablecoin method requires an explicit amount;
/// 2. decimal scaling of the transfer amount with truncation toward zero;
/// 3. stablecoin fee deduction from the scaled amount, which must stay
///    non-negative;
/// 4. per-family address representation for the source token and the
///    destination account and token.
pub async fn prepare_tx_send_params<C: InformationService>(
    client: &C,
    params: &SendParams,
) -> Result<TxSendParams, TransferError> {
    let source = &params.source_token;
    let destination = &params.destination_token;
    let gas_fee_payment_method = params.gas_fee_payment_method.unwrap_or_default();

    let fee = match &params.fee {
        Some(fee) => parse_int_fee(fee)?,
        None => match gas_fee_payment_method {
            FeePaymentMethod::WithNativeCurrency => {
                let request = ReceiveTransactionCostRequest {
                    source_chain_id: source.chain_id,
                    destination_chain_id: destination.chain_id,
                    messenger: params.messenger,
                };
                let cost = client.receive_transaction_cost(&request).await?;
                parse_int_fee(&cost.fee).map_err(|_| {
                    crate::errors::ClientError::invalid_response(format!(
                        "receive cost fee is not a decimal integer: {:?}",
                        cost.fee
                    ))
                })?
            }
            FeePaymentMethod::WithStablecoin => {
                return Err(TransferError::FeeRequired {
                    method: gas_fee_payment_method.to_string(),
                })
            }
        },
    };

    let scaled = float_amount_to_int(&params.amount, source.decimals)?;
    let amount = match gas_fee_payment_method {
        FeePaymentMethod::WithNativeCurrency => scaled,
        FeePaymentMethod::WithStablecoin => {
            // Fee comes out of the transferred tokens; the remainder must
            // not go negative
            let remaining = scaled
                .checked_sub(fee)
                .ok_or(TransferError::AmountTooLowForFee { amount: scaled, fee })?;
            if remaining.is_zero() {
                warn!(
                    amount = %scaled,
                    fee = %fee,
                    "stablecoin fee consumes the entire transfer amount"
                );
            }
            remaining
        }
    };

    let from_chain_type = source.chain_symbol.chain_type();
    let to_chain_type = destination.chain_symbol.chain_type();

    let tx_params = TxSendParams {
        amount,
        contract_address: source.bridge_address.clone(),
        from_chain_id: source.chain_id,
        from_chain_symbol: source.chain_symbol,
        from_account_address: params.from_account_address.clone(),
        from_token_address: AccountAddress::from_chain_str(&source.token_address, from_chain_type)?,
        to_chain_id: destination.chain_id,
        to_account_address: AccountAddress::from_chain_str(
            &params.to_account_address,
            to_chain_type,
        )?,
        to_token_address: AccountAddress::from_chain_str(
            &destination.token_address,
            to_chain_type,
        )?,
        messenger: params.messenger,
        fee,
        gas_fee_payment_method,
    };

    info!(
        from_chain = %tx_params.from_chain_symbol,
        to_chain = %destination.chain_symbol,
        amount = %tx_params.amount,
        fee = %tx_params.fee,
        method = %tx_params.gas_fee_payment_method,
        messenger = ?tx_params.messenger,
        "prepared transfer parameters"
    );

    Ok(tx_params)
}
