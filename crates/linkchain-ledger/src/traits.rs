use crate::block::Block;
use crate::chain::Chain;
use crate::error::LedgerError;

/// Write boundary for chains shared between writers.
pub trait ChainWriter: Send + Sync {
    /// Append a block and return a copy of the new tail.
    fn append(&self, payload: Vec<u8>) -> Result<Block, LedgerError>;
}

/// Read boundary for chain inspection and validation.
pub trait ChainReader {
    fn tail(&self) -> Result<Block, LedgerError>;

    fn get(&self, index: usize) -> Result<Option<Block>, LedgerError>;

    fn block_count(&self) -> Result<usize, LedgerError>;

    /// Owned copy of every block, in chain order.
    fn snapshot(&self) -> Result<Vec<Block>, LedgerError>;
}

impl ChainReader for Chain {
    fn tail(&self) -> Result<Block, LedgerError> {
        Chain::tail(self).cloned()
    }

    fn get(&self, index: usize) -> Result<Option<Block>, LedgerError> {
        Ok(Chain::get(self, index).cloned())
    }

    fn block_count(&self) -> Result<usize, LedgerError> {
        Ok(Chain::len(self))
    }

    fn snapshot(&self) -> Result<Vec<Block>, LedgerError> {
        Ok(self.blocks().to_vec())
    }
}
