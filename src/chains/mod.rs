//! Static registry of supported chains
//!
//! The registry reconciles decimal precision and addressing conventions
//! across the chain families the bridge spans (EVM, Solana, Tron). It is
//! built once at process start and never mutated afterwards, so lookups need
//! no synchronization.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;

/// Symbol of a supported chain
///
/// Symbols are globally unique keys into the chain registry. The set is
/// closed: every symbol the upstream bridge API can report must have an
/// entry here, which the surrounding deployment keeps in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainSymbol {
    /// The Goerli testnet
    GRL,
    /// The Sepolia testnet
    SPL,
    /// The BNB Smart Chain main network
    BSC,
    /// The Ethereum main network
    ETH,
    /// The Solana network
    SOL,
    /// The TRON network
    TRX,
    /// The Polygon network
    POL,
    /// The Polygon Mumbai testnet
    MUM,
    /// The Arbitrum network
    ARB,
}

impl ChainSymbol {
    /// All registered chain symbols
    pub const ALL: [ChainSymbol; 9] = [
        ChainSymbol::GRL,
        ChainSymbol::SPL,
        ChainSymbol::BSC,
        ChainSymbol::ETH,
        ChainSymbol::SOL,
        ChainSymbol::TRX,
        ChainSymbol::POL,
        ChainSymbol::MUM,
        ChainSymbol::ARB,
    ];

    /// Look up this chain's registry entry
    ///
    /// Total for the closed symbol set, so it cannot fail. Use
    /// [`descriptor_of`] when starting from an untrusted string symbol.
    pub fn properties(&self) -> &'static ChainProperties {
        CHAIN_REGISTRY
            .get(self)
            .unwrap_or_else(|| unreachable!("registry covers every ChainSymbol variant"))
    }

    /// The family this chain belongs to
    pub fn chain_type(&self) -> ChainType {
        self.properties().chain_type
    }
}

impl FromStr for ChainSymbol {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GRL" => Ok(ChainSymbol::GRL),
            "SPL" => Ok(ChainSymbol::SPL),
            "BSC" => Ok(ChainSymbol::BSC),
            "ETH" => Ok(ChainSymbol::ETH),
            "SOL" => Ok(ChainSymbol::SOL),
            "TRX" => Ok(ChainSymbol::TRX),
            "POL" => Ok(ChainSymbol::POL),
            "MUM" => Ok(ChainSymbol::MUM),
            "ARB" => Ok(ChainSymbol::ARB),
            other => Err(RegistryError::not_found(other)),
        }
    }
}

impl std::fmt::Display for ChainSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ChainSymbol::GRL => "GRL",
            ChainSymbol::SPL => "SPL",
            ChainSymbol::BSC => "BSC",
            ChainSymbol::ETH => "ETH",
            ChainSymbol::SOL => "SOL",
            ChainSymbol::TRX => "TRX",
            ChainSymbol::POL => "POL",
            ChainSymbol::MUM => "MUM",
            ChainSymbol::ARB => "ARB",
        };
        f.write_str(s)
    }
}

/// Chain family: chains sharing addressing and numeric conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChainType {
    /// EVM-compatible chains (Ethereum, BSC, Polygon, Arbitrum, ...)
    Evm,
    /// The Solana network
    Solana,
    /// The TRON network
    Trx,
}

impl ChainType {
    /// Decimals of the family's native gas token
    ///
    /// One canonical value per family: EVM chains use 18 (wei), Solana uses
    /// 9 (lamports), Tron uses 6 (sun). Total mapping, never fails.
    pub const fn native_decimals(&self) -> u8 {
        match self {
            ChainType::Evm => 18,
            ChainType::Solana => 9,
            ChainType::Trx => 6,
        }
    }
}

impl std::fmt::Display for ChainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainType::Evm => f.write_str("EVM"),
            ChainType::Solana => f.write_str("SOLANA"),
            ChainType::Trx => f.write_str("TRX"),
        }
    }
}

/// Registry entry for a single supported chain
///
/// Serializable for diagnostics; entries only ever originate from the
/// static table, so there is no deserialization path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainProperties {
    /// Unique chain symbol, the registry key
    pub chain_symbol: ChainSymbol,
    /// EVM network id (`eth_chainId`), absent for non-EVM chains
    pub network_id: Option<u64>,
    /// Human-readable display name
    pub name: &'static str,
    /// Family the chain belongs to
    pub chain_type: ChainType,
}

const fn evm(chain_symbol: ChainSymbol, network_id: u64, name: &'static str) -> ChainProperties {
    ChainProperties {
        chain_symbol,
        network_id: Some(network_id),
        name,
        chain_type: ChainType::Evm,
    }
}

/// Immutable process-wide chain table, built on first access
static CHAIN_REGISTRY: LazyLock<HashMap<ChainSymbol, ChainProperties>> = LazyLock::new(|| {
    let entries = [
        evm(ChainSymbol::GRL, 0x5, "Goerli"),
        evm(ChainSymbol::SPL, 0xaa36a7, "Sepolia"),
        evm(ChainSymbol::BSC, 0x38, "BNB Chain"),
        evm(ChainSymbol::ETH, 0x1, "Ethereum"),
        evm(ChainSymbol::ARB, 0xa4b1, "Arbitrum"),
        evm(ChainSymbol::POL, 0x89, "Polygon"),
        evm(ChainSymbol::MUM, 0x13881, "Mumbai"),
        ChainProperties {
            chain_symbol: ChainSymbol::SOL,
            network_id: None,
            name: "Solana",
            chain_type: ChainType::Solana,
        },
        ChainProperties {
            chain_symbol: ChainSymbol::TRX,
            network_id: None,
            name: "Tron",
            chain_type: ChainType::Trx,
        },
    ];

    entries
        .into_iter()
        .map(|props| (props.chain_symbol, props))
        .collect()
});

/// Look up a chain descriptor by its string symbol
///
/// Fails with [`RegistryError::NotFound`] for unknown symbols. An unknown
/// symbol indicates a misconfiguration (the static table has drifted from
/// the upstream supported-chain list), not a recoverable condition.
pub fn descriptor_of(symbol: &str) -> Result<&'static ChainProperties, RegistryError> {
    let chain_symbol = ChainSymbol::from_str(symbol)?;
    Ok(chain_symbol.properties())
}
