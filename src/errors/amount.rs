//! Error types for amount parsing and decimal scaling.

/// Errors that can occur when converting human-readable amounts to
/// smallest-unit integers.
///
/// These are caller-input errors: the transform is a pure function, so a
/// failure leaves no partial state behind.
#[derive(Debug, thiserror::Error)]
pub enum AmountError {
    /// The amount string is not a valid decimal number.
    #[error("Invalid amount {value:?}: {details}")]
    InvalidAmount {
        /// The offending input
        value: String,
        /// Why parsing failed
        details: String,
    },

    /// The amount is negative; transfers move non-negative values only.
    #[error("Negative amount not allowed: {value}")]
    NegativeAmount {
        /// The offending input
        value: String,
    },

    /// The scaled amount does not fit in 256 bits.
    #[error("Amount {value} at {decimals} decimals overflows 256 bits")]
    Overflow {
        /// The offending input
        value: String,
        /// Decimal count used for scaling
        decimals: u8,
    },
}

impl AmountError {
    /// Create an `InvalidAmount` error for a specific input.
    pub fn invalid(value: impl Into<String>, details: impl Into<String>) -> Self {
        AmountError::InvalidAmount {
            value: value.into(),
            details: details.into(),
        }
    }
}
