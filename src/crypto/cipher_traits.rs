use crate::crypto::cipher_types::CipherError;

pub trait CipherAlgorithm {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;
}

pub trait BlockCipher: SymmetricCipher {
    fn block_size(&self) -> usize;
    fn encrypt_block_in_place(&self, block: &mut [u8]) -> Result<(), CipherError>;
    fn decrypt_block_in_place(&self, block: &mut [u8]) -> Result<(), CipherError>;
}
