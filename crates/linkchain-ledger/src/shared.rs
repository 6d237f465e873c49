use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::block::Block;
use crate::chain::Chain;
use crate::config::ChainConfig;
use crate::error::LedgerError;
use crate::traits::{ChainReader, ChainWriter};

/// A [`Chain`] shared between threads.
///
/// Appends run read-tail, hash and push under a single write guard, so two
/// writers can never both link to the same tail. Clones share the same
/// underlying chain.
#[derive(Clone, Debug, Default)]
pub struct SharedChain {
    inner: Arc<RwLock<Chain>>,
}

impl SharedChain {
    pub fn new(chain: Chain) -> Self {
        Self {
            inner: Arc::new(RwLock::new(chain)),
        }
    }

    pub fn with_config(config: &ChainConfig) -> Result<Self, LedgerError> {
        Ok(Self::new(Chain::with_config(config)?))
    }

    /// Run `f` against the chain under the read guard.
    pub fn read<T>(&self, f: impl FnOnce(&Chain) -> T) -> Result<T, LedgerError> {
        let chain = self.read_guard()?;
        Ok(f(&*chain))
    }

    /// Fail-fast integrity check of the current chain.
    pub fn verify(&self) -> Result<(), LedgerError> {
        self.read_guard()?.verify()
    }

    /// Take the chain out, if this is the last handle to it.
    pub fn try_into_inner(self) -> Result<Chain, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => lock.into_inner().map_err(|poisoned| Self::new(poisoned.into_inner())),
            Err(inner) => Err(Self { inner }),
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Chain>, LedgerError> {
        self.inner.read().map_err(|_| LedgerError::LockPoisoned)
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Chain>, LedgerError> {
        self.inner.write().map_err(|_| LedgerError::LockPoisoned)
    }
}

impl ChainWriter for SharedChain {
    fn append(&self, payload: Vec<u8>) -> Result<Block, LedgerError> {
        let mut chain = self.write_guard()?;
        chain.append(payload).cloned()
    }
}

impl ChainReader for SharedChain {
    fn tail(&self) -> Result<Block, LedgerError> {
        self.read_guard()?.tail().cloned()
    }

    fn get(&self, index: usize) -> Result<Option<Block>, LedgerError> {
        Ok(self.read_guard()?.get(index).cloned())
    }

    fn block_count(&self) -> Result<usize, LedgerError> {
        Ok(self.read_guard()?.len())
    }

    fn snapshot(&self) -> Result<Vec<Block>, LedgerError> {
        Ok(self.read_guard()?.blocks().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn append_through_handle_links_to_tail() {
        let shared = SharedChain::default();
        let genesis = shared.tail().unwrap();

        let block = shared.append(b"first".to_vec()).unwrap();
        assert_eq!(block.prev_commitment(), Some(genesis.commitment()));
        assert_eq!(shared.block_count().unwrap(), 2);
        assert_eq!(shared.get(1).unwrap(), Some(block));
        assert_eq!(shared.get(2).unwrap(), None);
    }

    #[test]
    fn concurrent_writers_never_fork() {
        let shared = SharedChain::default();
        let writers = 8;
        let per_writer = 25;

        let handles: Vec<_> = (0..writers)
            .map(|w| {
                let chain = shared.clone();
                thread::spawn(move || {
                    for i in 0..per_writer {
                        chain.append(format!("writer-{w}-{i}").into_bytes()).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.block_count().unwrap(), 1 + writers * per_writer);
        shared.verify().unwrap();

        let blocks = shared.snapshot().unwrap();
        let mut prevs: Vec<_> = blocks.iter().filter_map(Block::prev_commitment).collect();
        let total = prevs.len();
        prevs.sort();
        prevs.dedup();
        assert_eq!(prevs.len(), total, "two blocks share a predecessor");
    }

    #[test]
    fn read_exposes_chain() {
        let shared = SharedChain::default();
        shared.append(b"x".to_vec()).unwrap();
        let len = shared.read(Chain::len).unwrap();
        assert_eq!(len, 2);
    }

    #[test]
    fn with_config_respects_capacity() {
        let config = ChainConfig {
            max_blocks: Some(1),
            ..Default::default()
        };
        let shared = SharedChain::with_config(&config).unwrap();
        let err = shared.append(b"no room".to_vec()).unwrap_err();
        assert_eq!(err, LedgerError::CapacityExceeded { limit: 1 });
    }

    #[test]
    fn try_into_inner_requires_sole_handle() {
        let shared = SharedChain::default();
        let other = shared.clone();
        let shared = shared.try_into_inner().unwrap_err();
        drop(other);
        let chain = shared.try_into_inner().unwrap();
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let shared = SharedChain::default();
        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the chain lock");
        })
        .join();

        assert_eq!(shared.tail().unwrap_err(), LedgerError::LockPoisoned);
        assert_eq!(
            shared.append(b"late".to_vec()).unwrap_err(),
            LedgerError::LockPoisoned
        );
    }
}
