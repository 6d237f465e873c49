use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Number of bytes in a commitment digest.
pub const COMMITMENT_LEN: usize = 32;

/// Fixed-length digest binding a block to its payload and predecessor.
///
/// A `Commitment` is an opaque 32-byte value. It carries no knowledge of the
/// function that produced it; `linkchain-crypto` owns the digest itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Commitment([u8; COMMITMENT_LEN]);

impl Commitment {
    /// Wrap a pre-computed digest.
    pub const fn from_hash(hash: [u8; COMMITMENT_LEN]) -> Self {
        Self(hash)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }

    /// Lowercase hex encoding of the full digest.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Copy a digest out of a byte slice of exactly [`COMMITMENT_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        let arr: [u8; COMMITMENT_LEN] =
            bytes.try_into().map_err(|_| TypeError::InvalidLength {
                expected: COMMITMENT_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", self.short_hex())
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; COMMITMENT_LEN]> for Commitment {
    fn from(bytes: [u8; COMMITMENT_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Commitment> for [u8; COMMITMENT_LEN] {
    fn from(c: Commitment) -> Self {
        c.0
    }
}
