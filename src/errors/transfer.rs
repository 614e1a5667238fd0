//! Error types for transfer parameter preparation.

use alloy_primitives::U256;

use super::{AmountError, ClientError, RegistryError};

/// Errors that can occur while normalizing a transfer request into
/// chain-ready parameters.
///
/// Validation failures surface before any transaction is built, so a failed
/// preparation never costs gas and never leaves partial state behind.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// The requested amount exceeds the currently approved allowance.
    #[error("Insufficient allowance: requested {requested}, approved {allowance}")]
    InsufficientAllowance {
        /// Requested transfer amount in smallest units
        requested: U256,
        /// Currently approved allowance in smallest units
        allowance: U256,
    },

    /// Paying the fee from the transferred tokens would make the amount
    /// negative.
    #[error("Amount {amount} is too low to cover the stablecoin fee {fee}")]
    AmountTooLowForFee {
        /// Scaled transfer amount in smallest units
        amount: U256,
        /// Fee in smallest units of the source token
        fee: U256,
    },

    /// The fee payment method requires an explicit fee amount.
    ///
    /// Deriving a stablecoin-denominated fee from gas-fee options requires
    /// price data this crate does not own, so the caller must supply it.
    #[error("Fee payment method {method} requires an explicit fee amount")]
    FeeRequired {
        /// The payment method that was requested
        method: String,
    },

    /// An account or token address could not be converted to the
    /// destination chain's native representation.
    #[error("Invalid address {address:?} for chain family {chain_type}: {details}")]
    InvalidAddress {
        /// The offending address
        address: String,
        /// Family whose representation rules were violated
        chain_type: String,
        /// Why conversion failed
        details: String,
    },

    /// Error from amount parsing or scaling.
    #[error(transparent)]
    Amount(#[from] AmountError),

    /// Error from the information service or chain-interaction collaborator.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Error from the chain registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl TransferError {
    /// Create an `InvalidAddress` error for a specific address.
    pub fn invalid_address(
        address: impl Into<String>,
        chain_type: impl std::fmt::Display,
        details: impl Into<String>,
    ) -> Self {
        TransferError::InvalidAddress {
            address: address.into(),
            chain_type: chain_type.to_string(),
            details: details.into(),
        }
    }
}
