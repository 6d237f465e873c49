//! Append-only hash-linked chain for Linkchain.
//!
//! This crate is the heart of Linkchain. It provides:
//! - [`Block`]: a sealed record committing to its payload and predecessor
//! - [`Chain`]: genesis initialization and append with the linkage invariant
//! - [`SharedChain`]: a lock-guarded chain for concurrent writers
//! - `ChainWriter` / `ChainReader` trait boundaries
//! - Full-chain validation reports
//! - Text and JSON diagnostic dumps

pub mod block;
pub mod chain;
pub mod config;
pub mod dump;
pub mod error;
pub mod shared;
pub mod traits;
pub mod validation;

pub use block::Block;
pub use chain::Chain;
pub use config::{ChainConfig, DEFAULT_GENESIS_PAYLOAD};
pub use dump::{BlockView, JsonDump, TextDump};
pub use error::LedgerError;
pub use shared::SharedChain;
pub use traits::{ChainReader, ChainWriter};
pub use validation::{ChainValidator, ValidationReport, Violation, ViolationKind};

pub use linkchain_types::Commitment;
