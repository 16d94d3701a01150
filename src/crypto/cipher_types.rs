use thiserror::Error;

pub const BLOCK_SIZE: usize = 8;
pub const KEY_SIZE: usize = 8;
pub const ROUND_KEY_WORDS: usize = 32;

/// 16 rounds x 2 words, each word holding four 6-bit subkey groups.
pub type RoundKeys = [u32; ROUND_KEY_WORDS];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDirection {
    Encrypt,
    Decrypt,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("key must be exactly 8 bytes, got {0}")]
    InvalidKeyLength(usize),
    #[error("block must be exactly 8 bytes, got {0}")]
    InvalidBlockLength(usize),
    #[error("buffer length {0} is not a multiple of the block size")]
    InvalidBufferLength(usize),
    #[error("cipher context is shared and cannot be re-keyed")]
    ContextShared,
}
