use rayon::prelude::*;
use std::sync::Arc;

use crate::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use crate::crypto::cipher_types::CipherError;
use crate::crypto::des::Des;

// Buffers at or above this size are fanned out across the rayon pool.
const OPTIMAL_PARALLELISM_THRESHOLD: usize = 4 * 1024 * 1024;

/// Caller-owned ECB driver over one keyed block cipher. Blocks are
/// processed independently, with no chaining value and no padding; the
/// buffer length must already be a whole number of blocks.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn BlockCipher + Send + Sync>,
}

impl CipherContext {
    pub fn new(algorithm: Box<dyn BlockCipher + Send + Sync>) -> Self {
        Self {
            algorithm: Arc::from(algorithm),
        }
    }

    /// Context over a freshly keyed DES instance.
    pub fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        Ok(Self::new(Box::new(Des::new(key)?)))
    }

    /// Re-derives the schedule. Only possible while the context is not
    /// shared; clones hold the same schedule and would observe the write.
    pub fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let algorithm = Arc::get_mut(&mut self.algorithm).ok_or(CipherError::ContextShared)?;
        algorithm.set_key(key)
    }

    pub fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut out = block.to_vec();
        self.algorithm.encrypt_block_in_place(&mut out)?;
        Ok(out)
    }

    pub fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut out = block.to_vec();
        self.algorithm.decrypt_block_in_place(&mut out)?;
        Ok(out)
    }

    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.algorithm.encrypt(data)
    }

    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.algorithm.decrypt(data)
    }

    pub fn encrypt_buffer(&self, buffer: &mut [u8]) -> Result<(), CipherError> {
        self.process_buffer(buffer, true)
    }

    pub fn decrypt_buffer(&self, buffer: &mut [u8]) -> Result<(), CipherError> {
        self.process_buffer(buffer, false)
    }

    fn process_buffer(&self, buffer: &mut [u8], encrypt: bool) -> Result<(), CipherError> {
        let block_size = self.algorithm.block_size();
        if buffer.len() % block_size != 0 {
            return Err(CipherError::InvalidBufferLength(buffer.len()));
        }

        let per_block = |block: &mut [u8]| {
            if encrypt {
                self.algorithm.encrypt_block_in_place(block)
            } else {
                self.algorithm.decrypt_block_in_place(block)
            }
        };

        if buffer.len() >= OPTIMAL_PARALLELISM_THRESHOLD {
            buffer.par_chunks_mut(block_size).try_for_each(per_block)
        } else {
            buffer.chunks_exact_mut(block_size).try_for_each(per_block)
        }
    }
}
