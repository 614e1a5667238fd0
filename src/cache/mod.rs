//! Generic caching infrastructure for TTL-bounded data.
//!
//! This module provides the reusable time-to-live cache used by the caching
//! client decorator. Expiry is checked lazily at read time; no background
//! sweeper is required for correctness.

mod ttl;

pub use ttl::TtlCache;
