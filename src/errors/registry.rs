//! Error types for chain registry lookups.

/// Errors that can occur when resolving chains in the static registry.
///
/// A registry miss is treated as a configuration or programmer error: the
/// static chain table must cover every symbol the upstream API can report,
/// so an unknown symbol means the table and the deployment have drifted
/// apart. Callers should not retry these errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The requested chain symbol has no registry entry.
    #[error("Unknown chain symbol: {symbol}")]
    NotFound {
        /// The symbol that failed to resolve
        symbol: String,
    },
}

impl RegistryError {
    /// Create a `NotFound` error for a specific symbol.
    pub fn not_found(symbol: impl Into<String>) -> Self {
        RegistryError::NotFound {
            symbol: symbol.into(),
        }
    }
}
