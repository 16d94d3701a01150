use crate::crypto::cipher_types::BLOCK_SIZE;

/// Splits an 8-byte block into two big-endian words; byte 0 becomes the
/// most significant byte of the first word.
pub fn pack_block(block: &[u8; BLOCK_SIZE]) -> (u32, u32) {
    let word0 = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);
    let word1 = u32::from_be_bytes([block[4], block[5], block[6], block[7]]);
    (word0, word1)
}

/// Exact inverse of [`pack_block`].
pub fn unpack_block(word0: u32, word1: u32) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    block[..4].copy_from_slice(&word0.to_be_bytes());
    block[4..].copy_from_slice(&word1.to_be_bytes());
    block
}
