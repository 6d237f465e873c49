//! Cryptographic primitives for Linkchain.
//!
//! Provides the BLAKE3 commitment function and a generic hash chain
//! verifier. All hashing wraps an established library; no custom
//! cryptography.

pub mod chain;
pub mod hasher;

pub use chain::{ChainError, HashChainVerifier, Linked};
pub use hasher::CommitmentHasher;
