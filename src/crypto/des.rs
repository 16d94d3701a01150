use crate::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use crate::crypto::cipher_types::{BLOCK_SIZE, CipherError, KeyDirection, RoundKeys};
use crate::crypto::des_key_expansion::expand_key;
use crate::crypto::des_transformation::transform;
use crate::crypto::utils::{pack_block, unpack_block};

/// DES with both round-key schedules derived up front. The schedules are
/// immutable for the lifetime of the value; re-keying goes through
/// `set_key` and therefore requires exclusive access.
#[derive(Clone)]
pub struct Des {
    encrypt_keys: RoundKeys,
    decrypt_keys: RoundKeys,
}

impl Des {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Ok(Des {
            encrypt_keys: expand_key(key, KeyDirection::Encrypt)?,
            decrypt_keys: expand_key(key, KeyDirection::Decrypt)?,
        })
    }

    /// Rebuilds a cipher from schedules taken with [`Des::export_round_keys`].
    pub fn from_round_keys(encrypt_keys: RoundKeys, decrypt_keys: RoundKeys) -> Self {
        Des {
            encrypt_keys,
            decrypt_keys,
        }
    }

    pub fn export_round_keys(&self) -> (RoundKeys, RoundKeys) {
        (self.encrypt_keys, self.decrypt_keys)
    }

    pub fn encrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        process_block(block, &self.encrypt_keys)
    }

    pub fn decrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        process_block(block, &self.decrypt_keys)
    }

    fn process_buffer(&self, data: &[u8], keys: &RoundKeys) -> Result<Vec<u8>, CipherError> {
        if data.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidBufferLength(data.len()));
        }
        Ok(data
            .chunks_exact(BLOCK_SIZE)
            .flat_map(|chunk| process_block(chunk.try_into().unwrap(), keys))
            .collect())
    }
}

fn process_block(block: &[u8; BLOCK_SIZE], keys: &RoundKeys) -> [u8; BLOCK_SIZE] {
    let (word0, word1) = pack_block(block);
    let (word0, word1) = transform(word0, word1, keys);
    unpack_block(word0, word1)
}

impl CipherAlgorithm for Des {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.process_buffer(data, &self.encrypt_keys)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.process_buffer(data, &self.decrypt_keys)
    }
}

impl SymmetricCipher for Des {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        self.encrypt_keys = expand_key(key, KeyDirection::Encrypt)?;
        self.decrypt_keys = expand_key(key, KeyDirection::Decrypt)?;
        Ok(())
    }
}

impl BlockCipher for Des {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block_in_place(&self, block: &mut [u8]) -> Result<(), CipherError> {
        if block.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidBlockLength(block.len()));
        }
        let mut fixed = [0u8; BLOCK_SIZE];
        fixed.copy_from_slice(block);
        block.copy_from_slice(&self.encrypt_block(&fixed));
        Ok(())
    }

    fn decrypt_block_in_place(&self, block: &mut [u8]) -> Result<(), CipherError> {
        if block.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidBlockLength(block.len()));
        }
        let mut fixed = [0u8; BLOCK_SIZE];
        fixed.copy_from_slice(block);
        block.copy_from_slice(&self.decrypt_block(&fixed));
        Ok(())
    }
}
