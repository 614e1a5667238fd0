//! Error types for the corebridge library.
//!
//! This module provides strongly-typed errors for all public APIs. It follows
//! a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`RegistryError`],
//!   [`ClientError`], [`AmountError`], [`TransferError`])
//! - **Unified error type** ([`CorebridgeError`]) for convenience when the
//!   error source does not matter
//!
//! All module-specific error types convert to `CorebridgeError` via `From`
//! implementations, so `?` propagates them naturally.

mod amount;
mod client;
mod registry;
mod transfer;

pub use amount::AmountError;
pub use client::ClientError;
pub use registry::RegistryError;
pub use transfer::TransferError;

/// Unified error type for all corebridge operations.
///
/// Wraps every module-specific error type, providing a single error surface
/// for callers that do not need to distinguish sources.
#[derive(Debug, thiserror::Error)]
pub enum CorebridgeError {
    /// Error from chain registry lookups.
    #[error("Chain registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Error from the bridge information service.
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Error from amount parsing or scaling.
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    /// Error from transfer parameter preparation.
    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),
}
