//! Per-family account address representation

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chains::ChainType;
use crate::errors::TransferError;

/// Tron address version byte, the first byte of the 21-byte form
const TRON_ADDRESS_PREFIX: u8 = 0x41;

/// Length of a base58-decoded Solana public key
const SOLANA_PUBKEY_LEN: usize = 32;

/// An account or token address in the representation its chain family's
/// transaction builders consume
///
/// Exactly one representation is ever populated: EVM chains keep the hex
/// string, non-EVM chains carry the decoded native bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountAddress {
    /// Hex string address of an EVM-family chain
    Evm(String),
    /// Raw native bytes of a non-EVM address (Solana pubkey, Tron prefixed
    /// address)
    Bytes(Vec<u8>),
}

impl AccountAddress {
    /// Convert a chain-native string address to the representation the
    /// family's transaction builder expects
    ///
    /// - EVM: validated, kept string-encoded
    /// - Solana: base58-decoded to the 32-byte public key
    /// - Tron: base58check-decoded to the 21-byte `0x41`-prefixed form
    pub fn from_chain_str(address: &str, chain_type: ChainType) -> Result<Self, TransferError> {
        match chain_type {
            ChainType::Evm => {
                alloy_primitives::Address::from_str(address).map_err(|e| {
                    TransferError::invalid_address(address, chain_type, e.to_string())
                })?;
                Ok(AccountAddress::Evm(address.to_string()))
            }
            ChainType::Solana => {
                let bytes = bs58::decode(address).into_vec().map_err(|e| {
                    TransferError::invalid_address(address, chain_type, e.to_string())
                })?;
                if bytes.len() != SOLANA_PUBKEY_LEN {
                    return Err(TransferError::invalid_address(
                        address,
                        chain_type,
                        format!("decoded to {} bytes, expected {SOLANA_PUBKEY_LEN}", bytes.len()),
                    ));
                }
                Ok(AccountAddress::Bytes(bytes))
            }
            ChainType::Trx => {
                let bytes = bs58::decode(address)
                    .with_check(None)
                    .into_vec()
                    .map_err(|e| {
                        TransferError::invalid_address(address, chain_type, e.to_string())
                    })?;
                match bytes.first() {
                    Some(&TRON_ADDRESS_PREFIX) if bytes.len() == 21 => {
                        Ok(AccountAddress::Bytes(bytes))
                    }
                    _ => Err(TransferError::invalid_address(
                        address,
                        chain_type,
                        "expected 21 bytes with a 0x41 version prefix",
                    )),
                }
            }
        }
    }
}
