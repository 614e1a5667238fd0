//! Read-through caching decorator for the information service

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::cache::TtlCache;
use crate::chains::ChainSymbol;
use crate::errors::ClientError;

use super::{
    InformationService, PoolInfoMap, PoolKey, ReceiveTransactionCostRequest,
    ReceiveTransactionCostResponse, TokenInfo, TransferStatusResponse,
};

/// Default lifetime of the cached supported-token listing
pub const DEFAULT_TOKEN_INFO_TTL: Duration = Duration::from_secs(120);

/// Default lifetime of a cached receive-cost quote
pub const DEFAULT_RECEIVE_COST_TTL: Duration = Duration::from_secs(20);

/// TTL configuration for [`CachingClient`]
///
/// Defaults match the bridge API's freshness expectations: the token listing
/// changes rarely (120 s), delivery-cost quotes track gas prices (20 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtlConfig {
    /// Lifetime of the cached token listing
    pub token_info_ttl: Duration,
    /// Lifetime of a cached receive-cost quote
    pub receive_cost_ttl: Duration,
}

impl Default for CacheTtlConfig {
    fn default() -> Self {
        Self {
            token_info_ttl: DEFAULT_TOKEN_INFO_TTL,
            receive_cost_ttl: DEFAULT_RECEIVE_COST_TTL,
        }
    }
}

/// Caching decorator around an [`InformationService`]
///
/// Owns the wrapped service by composition and adds TTL-bounded memoization
/// for the two hot, cacheable calls:
///
/// - [`token_info`](InformationService::token_info): single fixed key
/// - [`receive_transaction_cost`](InformationService::receive_transaction_cost):
///   keyed by the full request (source chain, destination chain,
///   messenger), so requests differing in any field never share an entry
///
/// `transfer_status` and `pool_info` are forwarded uncached: status must
/// never be served stale, and pool freshness is its own collaborator's
/// concern.
///
/// # Concurrency
///
/// The internal stores are mutex-guarded and the locks are released before
/// awaiting the wrapped service, so a cache miss never blocks other keys.
/// Concurrent misses on the *same* key are not deduplicated: two
/// simultaneous first-requests may both call upstream. Upstream reads are
/// idempotent, so the duplicate costs a request, not correctness.
///
/// Upstream failures propagate unchanged and are never cached.
///
/// # Examples
///
/// ```rust,ignore
/// use corebridge::client::{CachingClient, CacheTtlConfig};
///
/// let client = CachingClient::new(http_client);
/// let tokens = client.token_info().await?; // fetched
/// let tokens = client.token_info().await?; // served from cache
/// ```
pub struct CachingClient<C> {
    inner: C,
    token_info_cache: Mutex<TtlCache<(), TokenInfo>>,
    receive_cost_cache:
        Mutex<TtlCache<ReceiveTransactionCostRequest, ReceiveTransactionCostResponse>>,
}

impl<C> CachingClient<C> {
    /// Wrap `inner` with the default TTLs (120 s token info, 20 s cost)
    pub fn new(inner: C) -> Self {
        Self::with_config(inner, CacheTtlConfig::default())
    }

    /// Wrap `inner` with explicit TTLs
    pub fn with_config(inner: C, config: CacheTtlConfig) -> Self {
        Self {
            inner,
            token_info_cache: Mutex::new(TtlCache::new(config.token_info_ttl)),
            receive_cost_cache: Mutex::new(TtlCache::new(config.receive_cost_ttl)),
        }
    }

    /// The wrapped service
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: InformationService> InformationService for CachingClient<C> {
    async fn token_info(&self) -> Result<TokenInfo, ClientError> {
        if let Some(cached) = self
            .token_info_cache
            .lock()
            .expect("token info cache lock poisoned")
            .get(&())
        {
            debug!("token_info served from cache");
            return Ok(cached);
        }

        // Lock released above: a concurrent miss may also reach upstream
        let fetched = self.inner.token_info().await?;
        debug!(tokens = fetched.tokens.len(), "token_info fetched upstream");

        self.token_info_cache
            .lock()
            .expect("token info cache lock poisoned")
            .insert((), fetched.clone());
        Ok(fetched)
    }

    async fn receive_transaction_cost(
        &self,
        request: &ReceiveTransactionCostRequest,
    ) -> Result<ReceiveTransactionCostResponse, ClientError> {
        if let Some(cached) = self
            .receive_cost_cache
            .lock()
            .expect("receive cost cache lock poisoned")
            .get(request)
        {
            debug!(
                source_chain_id = request.source_chain_id,
                destination_chain_id = request.destination_chain_id,
                messenger = ?request.messenger,
                "receive_transaction_cost served from cache"
            );
            return Ok(cached);
        }

        let fetched = self.inner.receive_transaction_cost(request).await?;
        debug!(
            source_chain_id = request.source_chain_id,
            destination_chain_id = request.destination_chain_id,
            messenger = ?request.messenger,
            fee = %fetched.fee,
            "receive_transaction_cost fetched upstream"
        );

        self.receive_cost_cache
            .lock()
            .expect("receive cost cache lock poisoned")
            .insert(*request, fetched.clone());
        Ok(fetched)
    }

    async fn transfer_status(
        &self,
        chain: ChainSymbol,
        tx_id: &str,
    ) -> Result<TransferStatusResponse, ClientError> {
        // Always fresh: delivery state is mutable by nature
        self.inner.transfer_status(chain, tx_id).await
    }

    async fn pool_info(&self, pools: &[PoolKey]) -> Result<PoolInfoMap, ClientError> {
        self.inner.pool_info(pools).await
    }
}
