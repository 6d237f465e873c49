use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use linkchain_crypto::HashChainVerifier;
use linkchain_types::Commitment;

use crate::block::Block;
use crate::config::{ChainConfig, DEFAULT_GENESIS_PAYLOAD};
use crate::error::LedgerError;

/// An append-only sequence of hash-linked blocks.
///
/// Index 0 is always the genesis block. Every later block carries the
/// commitment of the block before it. A `Chain` can only be obtained through
/// a constructor that establishes this linkage, and the only mutation it
/// offers is [`Chain::append`], so the linkage holds for the chain's whole
/// lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawChain")]
pub struct Chain {
    blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_blocks: Option<usize>,
}

impl Chain {
    /// Start a chain holding only the default genesis block.
    pub fn initialize() -> Self {
        Self::seal_genesis(DEFAULT_GENESIS_PAYLOAD.as_bytes().to_vec(), None)
    }

    /// Start a chain whose genesis payload and capacity come from `config`.
    pub fn with_config(config: &ChainConfig) -> Result<Self, LedgerError> {
        config.validate()?;
        Ok(Self::seal_genesis(
            config.genesis_payload.as_bytes().to_vec(),
            config.max_blocks,
        ))
    }

    fn seal_genesis(payload: Vec<u8>, max_blocks: Option<usize>) -> Self {
        let genesis = Block::genesis(payload);
        info!(genesis = %genesis.commitment(), "initialized chain");
        Self {
            blocks: vec![genesis],
            max_blocks,
        }
    }

    /// Rebuild a chain from blocks produced elsewhere.
    ///
    /// The blocks must form a complete chain starting at genesis; anything
    /// else is rejected.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, LedgerError> {
        Self::from_parts(blocks, None)
    }

    fn from_parts(blocks: Vec<Block>, max_blocks: Option<usize>) -> Result<Self, LedgerError> {
        if blocks.is_empty() {
            return Err(LedgerError::EmptyChain);
        }
        if let Some(limit) = max_blocks {
            if blocks.len() > limit {
                return Err(LedgerError::CapacityExceeded { limit });
            }
        }
        HashChainVerifier::verify_chain(&blocks)?;
        Ok(Self { blocks, max_blocks })
    }

    /// Seal `payload` into a new tail block linked to the current tail.
    ///
    /// Returns the new tail. Existing blocks are never touched.
    pub fn append(&mut self, payload: impl Into<Vec<u8>>) -> Result<&Block, LedgerError> {
        if let Some(limit) = self.max_blocks {
            if self.blocks.len() >= limit {
                return Err(LedgerError::CapacityExceeded { limit });
            }
        }
        let tail = *self.tail()?.commitment();
        let block = Block::create(payload, Some(tail));
        debug!(
            index = self.blocks.len(),
            prev = %tail.short_hex(),
            commitment = %block.commitment().short_hex(),
            "appended block"
        );
        self.blocks.push(block);
        self.tail()
    }

    /// Check every link and every commitment, failing on the first problem.
    pub fn verify(&self) -> Result<(), LedgerError> {
        if self.blocks.is_empty() {
            return Err(LedgerError::EmptyChain);
        }
        HashChainVerifier::verify_chain(&self.blocks)?;
        Ok(())
    }

    pub fn genesis(&self) -> Result<&Block, LedgerError> {
        self.blocks.first().ok_or(LedgerError::EmptyChain)
    }

    pub fn tail(&self) -> Result<&Block, LedgerError> {
        self.blocks.last().ok_or(LedgerError::EmptyChain)
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Index of the block carrying `commitment`, if any.
    pub fn position(&self, commitment: &Commitment) -> Option<usize> {
        self.blocks.iter().position(|b| b.commitment() == commitment)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false` for a chain built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn max_blocks(&self) -> Option<usize> {
        self.max_blocks
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::initialize()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[derive(Deserialize)]
struct RawChain {
    blocks: Vec<Block>,
    #[serde(default)]
    max_blocks: Option<usize>,
}

impl TryFrom<RawChain> for Chain {
    type Error = LedgerError;

    fn try_from(raw: RawChain) -> Result<Self, Self::Error> {
        Self::from_parts(raw.blocks, raw.max_blocks)
    }
}
