//! Bridge information-service capability and its wire models
//!
//! The [`InformationService`] trait is the seam between this crate and the
//! remote bridge API. Transport (HTTP, retries, auth) lives in the
//! implementor; this crate only defines the capability and decorates it with
//! caching (see [`CachingClient`]).

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::chains::ChainSymbol;
use crate::errors::ClientError;

mod cache;

pub use cache::{
    CacheTtlConfig, CachingClient, DEFAULT_RECEIVE_COST_TTL, DEFAULT_TOKEN_INFO_TTL,
};

/// Cross-chain message-passing protocol used to relay transfer confirmation
/// between source and destination chains
///
/// Serialized as the bridge API's numeric protocol identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Messenger {
    /// The bridge's own messenger protocol
    Allbridge,
    /// The Wormhole messenger protocol
    Wormhole,
}

impl From<Messenger> for u8 {
    fn from(messenger: Messenger) -> u8 {
        match messenger {
            Messenger::Allbridge => 1,
            Messenger::Wormhole => 2,
        }
    }
}

impl TryFrom<u8> for Messenger {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Messenger::Allbridge),
            2 => Ok(Messenger::Wormhole),
            other => Err(format!("unknown messenger protocol id: {other}")),
        }
    }
}

/// A supported token together with the chain it lives on
///
/// Carries the subset of the upstream token list that transfer preparation
/// consumes: addressing, decimal precision, and the bridge contract to send
/// through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenWithChainDetails {
    /// Display name of the token
    pub name: String,
    /// Ticker symbol of the token
    pub symbol: String,
    /// Number of decimal places of the token
    pub decimals: u8,
    /// Token contract address in the owning chain's own encoding
    pub token_address: String,
    /// Liquidity pool address for this token on its chain
    pub pool_address: String,
    /// Symbol of the chain the token lives on
    pub chain_symbol: ChainSymbol,
    /// Bridge-protocol numeric id of the owning chain
    ///
    /// This is the id the bridge API speaks, distinct from the EVM network
    /// id kept in the chain registry.
    pub chain_id: u64,
    /// Bridge contract address on the owning chain
    pub bridge_address: String,
}

/// Supported-token listing reported by the bridge API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Every token the bridge currently supports, across all chains
    pub tokens: Vec<TokenWithChainDetails>,
}

impl TokenInfo {
    /// Tokens living on a specific chain
    pub fn tokens_on(&self, chain: ChainSymbol) -> impl Iterator<Item = &TokenWithChainDetails> {
        self.tokens.iter().filter(move |t| t.chain_symbol == chain)
    }
}

/// Request for the cost of delivering a transfer on the destination chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveTransactionCostRequest {
    /// Bridge-protocol id of the source chain
    pub source_chain_id: u64,
    /// Bridge-protocol id of the destination chain
    pub destination_chain_id: u64,
    /// Messenger protocol relaying the transfer
    pub messenger: Messenger,
}

/// Cost of delivering a transfer, in smallest units of the source chain's
/// native currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveTransactionCostResponse {
    /// Fee as a decimal integer string in smallest units
    pub fee: String,
}

/// Delivery state of a previously submitted transfer
///
/// Inherently time-sensitive; the caching decorator never caches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferStatusResponse {
    /// Transaction id on the source chain
    pub tx_id: String,
    /// Chain the transfer originated from
    pub source_chain_symbol: ChainSymbol,
    /// Chain the transfer is delivered to
    pub destination_chain_symbol: ChainSymbol,
    /// Messenger protocol relaying the transfer
    pub messenger: Messenger,
    /// Whether the destination-side transaction has been confirmed
    pub confirmed: bool,
}

/// Key identifying a liquidity pool
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolKey {
    /// Chain the pool lives on
    pub chain_symbol: ChainSymbol,
    /// Pool contract address in the chain's own encoding
    pub pool_address: String,
}

/// Snapshot of a liquidity pool's balances
///
/// Freshness is managed by the pool-information collaborator; the caching
/// decorator passes these through uncached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    /// Real token balance of the pool, smallest units
    pub token_balance: String,
    /// Virtual USD balance of the pool, smallest units
    pub vusd_balance: String,
    /// Total LP token amount issued by the pool
    pub total_lp_amount: String,
    /// Accumulated reward per share, scaled by the pool's precision factor
    pub acc_reward_per_share_p: String,
}

/// Pool snapshots keyed by pool identity
pub type PoolInfoMap = HashMap<PoolKey, PoolInfo>;

/// Remote bridge information-service capability
///
/// Implemented by the transport layer (an HTTP client in production, mocks
/// in tests). Object-safe, so it can be decorated and boxed; the caching
/// decorator [`CachingClient`] wraps any implementor.
#[async_trait]
pub trait InformationService: Send + Sync {
    /// Fetch the supported-token listing.
    async fn token_info(&self) -> Result<TokenInfo, ClientError>;

    /// Fetch the cost of delivering a transfer on the destination chain.
    async fn receive_transaction_cost(
        &self,
        request: &ReceiveTransactionCostRequest,
    ) -> Result<ReceiveTransactionCostResponse, ClientError>;

    /// Fetch the delivery state of a submitted transfer.
    async fn transfer_status(
        &self,
        chain: ChainSymbol,
        tx_id: &str,
    ) -> Result<TransferStatusResponse, ClientError>;

    /// Fetch balance snapshots for a set of liquidity pools.
    async fn pool_info(&self, pools: &[PoolKey]) -> Result<PoolInfoMap, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messenger_numeric_serde() {
        assert_eq!(serde_json::to_string(&Messenger::Allbridge).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Messenger::Wormhole).unwrap(), "2");

        let back: Messenger = serde_json::from_str("2").unwrap();
        assert_eq!(back, Messenger::Wormhole);

        let err = serde_json::from_str::<Messenger>("9");
        assert!(err.is_err());
    }

    #[test]
    fn test_token_info_camel_case_wire_format() {
        let json = r#"{
            "tokens": [{
                "name": "USD Coin",
                "symbol": "USDC",
                "decimals": 6,
                "tokenAddress": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                "poolAddress": "0x1111111111111111111111111111111111111111",
                "chainSymbol": "ETH",
                "chainId": 1,
                "bridgeAddress": "0x2222222222222222222222222222222222222222"
            }]
        }"#;

        let info: TokenInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.tokens.len(), 1);
        let token = &info.tokens[0];
        assert_eq!(token.symbol, "USDC");
        assert_eq!(token.decimals, 6);
        assert_eq!(token.chain_symbol, ChainSymbol::ETH);
    }

    #[test]
    fn test_tokens_on_filters_by_chain() {
        let eth_token = TokenWithChainDetails {
            name: "USD Coin".into(),
            symbol: "USDC".into(),
            decimals: 6,
            token_address: "0xaa".into(),
            pool_address: "0xbb".into(),
            chain_symbol: ChainSymbol::ETH,
            chain_id: 1,
            bridge_address: "0xcc".into(),
        };
        let trx_token = TokenWithChainDetails {
            chain_symbol: ChainSymbol::TRX,
            chain_id: 4,
            ..eth_token.clone()
        };
        let info = TokenInfo {
            tokens: vec![eth_token, trx_token],
        };

        let on_trx: Vec<_> = info.tokens_on(ChainSymbol::TRX).collect();
        assert_eq!(on_trx.len(), 1);
        assert_eq!(on_trx[0].chain_symbol, ChainSymbol::TRX);
    }

    #[test]
    fn test_receive_cost_request_is_hashable_key() {
        use std::collections::HashSet;

        let a = ReceiveTransactionCostRequest {
            source_chain_id: 1,
            destination_chain_id: 4,
            messenger: Messenger::Allbridge,
        };
        let b = ReceiveTransactionCostRequest {
            messenger: Messenger::Wormhole,
            ..a
        };

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        // Requests differing in any field are distinct keys
        assert_eq!(set.len(), 2);
        // Identical requests collapse to the same key
        set.insert(a);
        assert_eq!(set.len(), 2);
    }
}
