//! Client library for preparing cross-chain token transfers through a single
//! normalized API.
//!
//! corebridge covers the load-bearing core of a bridge client:
//!
//! - [`chains`]: the immutable registry of supported chains and their
//!   families, with decimal-precision and addressing rules
//! - [`client`]: the remote information-service capability and a
//!   TTL-bounded read-through caching decorator around it
//! - [`transfer`]: normalization of a human-supplied transfer request into
//!   a chain-ready, unit-scaled descriptor with fee and allowance
//!   invariants enforced
//!
//! Transport, signing, and per-chain transaction construction are external
//! collaborators consumed through the [`client::InformationService`] and
//! [`transfer::ChainInteraction`] seams.
//!
//! # Example
//!
//! ```rust,ignore
//! use corebridge::client::{CachingClient, InformationService, Messenger};
//! use corebridge::transfer::{prepare_tx_send_params, SendParams};
//!
//! let client = CachingClient::new(http_client);
//! let tokens = client.token_info().await?;
//!
//! let params = SendParams {
//!     amount: "1.5".into(),
//!     from_account_address: sender,
//!     to_account_address: recipient,
//!     messenger: Messenger::Allbridge,
//!     fee: None,
//!     gas_fee_payment_method: None,
//!     source_token: usdc_on_eth,
//!     destination_token: usdc_on_trx,
//! };
//! let tx_params = prepare_tx_send_params(&client, &params).await?;
//! // hand tx_params to the destination family's transaction builder
//! ```

pub mod amount;
pub mod cache;
pub mod chains;
pub mod client;
pub mod errors;
pub mod transfer;

pub use chains::{descriptor_of, ChainProperties, ChainSymbol, ChainType};
pub use client::{
    CacheTtlConfig, CachingClient, InformationService, Messenger, TokenInfo,
    TokenWithChainDetails,
};
pub use errors::CorebridgeError;
pub use transfer::{
    check_allowance, prepare_tx_send_params, AccountAddress, ChainInteraction,
    CheckAllowanceParams, FeePaymentMethod, SendParams, TxSendParams,
};
