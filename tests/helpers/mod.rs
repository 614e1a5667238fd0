//! Test helpers for corebridge integration tests
//!
//! Provides mock implementations of the capability traits so caching and
//! transfer-preparation logic can be tested without a real bridge API or
//! chain connection.

// Each integration test binary compiles this module separately and uses a
// different subset of it
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use alloy_primitives::U256;
use async_trait::async_trait;
use corebridge::chains::ChainSymbol;
use corebridge::client::{
    InformationService, PoolInfoMap, PoolKey, ReceiveTransactionCostRequest,
    ReceiveTransactionCostResponse, TokenInfo, TokenWithChainDetails, TransferStatusResponse,
};
use corebridge::errors::ClientError;
use corebridge::transfer::ChainInteraction;

/// Counting mock of the bridge information service
///
/// Every method records its invocation count so tests can assert exactly
/// how many calls reached "upstream" through the caching decorator. The
/// receive-cost fee is derived from the request plus the call count, so a
/// cached response is distinguishable from a fresh one.
#[derive(Default)]
pub struct MockInformationService {
    token_info: TokenInfo,
    upstream_delay: Option<Duration>,
    fail_next_token_info: AtomicBool,
    pub token_info_calls: AtomicUsize,
    pub receive_cost_calls: AtomicUsize,
    pub transfer_status_calls: AtomicUsize,
    pub pool_info_calls: AtomicUsize,
}

impl MockInformationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token listing returned by `token_info`
    pub fn with_token_info(mut self, token_info: TokenInfo) -> Self {
        self.token_info = token_info;
        self
    }

    /// Delay every upstream call, to widen race windows in concurrency tests
    pub fn with_upstream_delay(mut self, delay: Duration) -> Self {
        self.upstream_delay = Some(delay);
        self
    }

    /// Make the next `token_info` call fail with an upstream error
    pub fn fail_next_token_info(&self) {
        self.fail_next_token_info.store(true, Ordering::SeqCst);
    }

    async fn simulate_latency(&self) {
        if let Some(delay) = self.upstream_delay {
            tokio::time::sleep(delay).await;
        }
    }
}

/// The deterministic fee the mock reports for a request on its nth call
/// (1-based)
pub fn expected_mock_fee(request: &ReceiveTransactionCostRequest, nth_call: usize) -> String {
    let messenger_id = u8::from(request.messenger) as u64;
    let fee = request.source_chain_id * 1_000_000
        + request.destination_chain_id * 10_000
        + messenger_id * 100
        + nth_call as u64;
    fee.to_string()
}

#[async_trait]
impl InformationService for MockInformationService {
    async fn token_info(&self) -> Result<TokenInfo, ClientError> {
        self.token_info_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        if self.fail_next_token_info.swap(false, Ordering::SeqCst) {
            return Err(ClientError::upstream("mock upstream outage"));
        }
        Ok(self.token_info.clone())
    }

    async fn receive_transaction_cost(
        &self,
        request: &ReceiveTransactionCostRequest,
    ) -> Result<ReceiveTransactionCostResponse, ClientError> {
        let nth = self.receive_cost_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.simulate_latency().await;
        Ok(ReceiveTransactionCostResponse {
            fee: expected_mock_fee(request, nth),
        })
    }

    async fn transfer_status(
        &self,
        chain: ChainSymbol,
        tx_id: &str,
    ) -> Result<TransferStatusResponse, ClientError> {
        self.transfer_status_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        Ok(TransferStatusResponse {
            tx_id: tx_id.to_string(),
            source_chain_symbol: chain,
            destination_chain_symbol: ChainSymbol::ETH,
            messenger: corebridge::client::Messenger::Allbridge,
            confirmed: false,
        })
    }

    async fn pool_info(&self, pools: &[PoolKey]) -> Result<PoolInfoMap, ClientError> {
        self.pool_info_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        Ok(pools
            .iter()
            .map(|key| {
                (
                    key.clone(),
                    corebridge::client::PoolInfo {
                        token_balance: "1000000".into(),
                        vusd_balance: "1000000".into(),
                        total_lp_amount: "2000000".into(),
                        acc_reward_per_share_p: "0".into(),
                    },
                )
            })
            .collect())
    }
}

/// Mock chain-interaction collaborator with a fixed approved allowance
pub struct MockChainInteraction {
    allowance: U256,
    pub allowance_calls: AtomicUsize,
}

impl MockChainInteraction {
    pub fn with_allowance(allowance: U256) -> Self {
        Self {
            allowance,
            allowance_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ChainInteraction for MockChainInteraction {
    async fn current_allowance(
        &self,
        _owner: &str,
        _token: &TokenWithChainDetails,
    ) -> Result<U256, ClientError> {
        self.allowance_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.allowance)
    }
}

/// Build a token entry on an EVM chain
pub fn evm_token(chain_symbol: ChainSymbol, chain_id: u64, decimals: u8) -> TokenWithChainDetails {
    TokenWithChainDetails {
        name: "USD Coin".into(),
        symbol: "USDC".into(),
        decimals,
        token_address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".into(),
        pool_address: "0x1111111111111111111111111111111111111111".into(),
        chain_symbol,
        chain_id,
        bridge_address: "0x2222222222222222222222222222222222222222".into(),
    }
}

/// Build a token entry on Tron, with a freshly encoded base58check address
pub fn trx_token(chain_id: u64, decimals: u8) -> TokenWithChainDetails {
    TokenWithChainDetails {
        name: "Tether USD".into(),
        symbol: "USDT".into(),
        decimals,
        token_address: tron_address(0x11),
        pool_address: tron_address(0x22),
        chain_symbol: ChainSymbol::TRX,
        chain_id,
        bridge_address: tron_address(0x33),
    }
}

/// Build a token entry on Solana
pub fn sol_token(chain_id: u64, decimals: u8) -> TokenWithChainDetails {
    TokenWithChainDetails {
        name: "USD Coin".into(),
        symbol: "USDC".into(),
        decimals,
        // The system program address: decodes to 32 zero bytes
        token_address: "11111111111111111111111111111111".into(),
        pool_address: "11111111111111111111111111111111".into(),
        chain_symbol: ChainSymbol::SOL,
        chain_id,
        bridge_address: "11111111111111111111111111111111".into(),
    }
}

/// Base58check-encode a synthetic 21-byte Tron address filled with `byte`
pub fn tron_address(byte: u8) -> String {
    let mut payload = vec![0x41u8];
    payload.extend_from_slice(&[byte; 20]);
    bs58::encode(payload).with_check().into_string()
}
