use des::crypto::cipher_context::CipherContext;
use des::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use des::crypto::cipher_types::CipherError;
use des::crypto::des::Des;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

struct IdentityCipher;

impl CipherAlgorithm for IdentityCipher {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(data.to_vec())
    }
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(data.to_vec())
    }
}

impl SymmetricCipher for IdentityCipher {
    fn set_key(&mut self, _: &[u8]) -> Result<(), CipherError> {
        Ok(())
    }
}

impl BlockCipher for IdentityCipher {
    fn block_size(&self) -> usize {
        8
    }
    fn encrypt_block_in_place(&self, _: &mut [u8]) -> Result<(), CipherError> {
        Ok(())
    }
    fn decrypt_block_in_place(&self, _: &mut [u8]) -> Result<(), CipherError> {
        Ok(())
    }
}

fn random_bytes(len: usize, rng: &mut StdRng) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

#[test]
fn test_context_known_answer() {
    let ctx = CipherContext::with_key(&hex_literal::hex!("0123456789abcdef")).unwrap();
    let ciphertext = ctx
        .encrypt_block(&hex_literal::hex!("0123456789abcde7"))
        .unwrap();
    assert_eq!(ciphertext, hex_literal::hex!("c95744256a5ed31d"));
}

#[test]
fn test_buffer_equals_concatenated_blocks() {
    let mut rng = StdRng::seed_from_u64(1);
    let ctx = CipherContext::with_key(&hex_literal::hex!("133457799bbcdff1")).unwrap();
    let data = random_bytes(8 * 16, &mut rng);

    let mut expected = Vec::new();
    for chunk in data.chunks_exact(8) {
        expected.extend(ctx.encrypt_block(chunk).unwrap());
    }

    let mut buffer = data.clone();
    ctx.encrypt_buffer(&mut buffer).unwrap();
    assert_eq!(buffer, expected);
    assert_eq!(ctx.encrypt(&data).unwrap(), expected);
}

#[test]
fn test_identical_blocks_give_identical_ciphertext_blocks() {
    let ctx = CipherContext::with_key(&hex_literal::hex!("0123456789abcdef")).unwrap();

    let mut buffer = [0x41u8; 24];
    ctx.encrypt_buffer(&mut buffer).unwrap();
    assert_eq!(buffer[..8], buffer[8..16]);
    assert_eq!(buffer[..8], buffer[16..24]);
}

#[test]
fn test_buffer_roundtrip_in_place() {
    let mut rng = StdRng::seed_from_u64(2);
    let ctx = CipherContext::with_key(&hex_literal::hex!("fedcba9876543210")).unwrap();

    let data = random_bytes(8 * 100, &mut rng);
    let mut buffer = data.clone();
    ctx.encrypt_buffer(&mut buffer).unwrap();
    assert_ne!(buffer, data);
    ctx.decrypt_buffer(&mut buffer).unwrap();
    assert_eq!(buffer, data);
}

// 4 MiB pushes the driver onto the rayon path; the result must be
// identical to the sequential walk.
#[test]
fn test_parallel_buffer_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(3);
    let key = hex_literal::hex!("0123456789abcdef");
    let ctx = CipherContext::with_key(&key).unwrap();
    let des = Des::new(&key).unwrap();

    let data = random_bytes(4 * 1024 * 1024, &mut rng);
    let mut buffer = data.clone();
    ctx.encrypt_buffer(&mut buffer).unwrap();
    assert_eq!(buffer, des.encrypt(&data).unwrap());

    ctx.decrypt_buffer(&mut buffer).unwrap();
    assert_eq!(buffer, data);
}

#[test]
fn test_empty_buffer_is_a_noop() {
    let ctx = CipherContext::with_key(&[0x10u8; 8]).unwrap();
    let mut buffer: [u8; 0] = [];
    ctx.encrypt_buffer(&mut buffer).unwrap();
    assert_eq!(ctx.encrypt(&[]).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_boundary_rejection() {
    assert_eq!(
        CipherContext::with_key(&[0u8; 7]).err(),
        Some(CipherError::InvalidKeyLength(7))
    );
    assert_eq!(
        CipherContext::with_key(&[0u8; 9]).err(),
        Some(CipherError::InvalidKeyLength(9))
    );

    let ctx = CipherContext::with_key(&[0u8; 8]).unwrap();
    let mut seven = [0u8; 7];
    assert_eq!(
        ctx.encrypt_buffer(&mut seven),
        Err(CipherError::InvalidBufferLength(7))
    );
    let mut nine = [0u8; 9];
    assert_eq!(
        ctx.decrypt_buffer(&mut nine),
        Err(CipherError::InvalidBufferLength(9))
    );

    assert_eq!(
        ctx.encrypt_block(&[0u8; 4]).err(),
        Some(CipherError::InvalidBlockLength(4))
    );
}

#[test]
fn test_set_key_requires_exclusive_context() {
    let mut ctx = CipherContext::with_key(&[0x22u8; 8]).unwrap();
    ctx.set_key(&hex_literal::hex!("0123456789abcdef")).unwrap();
    let ciphertext = ctx
        .encrypt_block(&hex_literal::hex!("0123456789abcde7"))
        .unwrap();
    assert_eq!(ciphertext, hex_literal::hex!("c95744256a5ed31d"));

    let _clone = ctx.clone();
    assert_eq!(
        ctx.set_key(&[0x33u8; 8]),
        Err(CipherError::ContextShared)
    );
}

#[test]
fn test_context_over_custom_block_cipher() {
    let ctx = CipherContext::new(Box::new(IdentityCipher));
    let mut buffer = [0xabu8; 32];
    ctx.encrypt_buffer(&mut buffer).unwrap();
    assert_eq!(buffer, [0xabu8; 32]);

    let mut five = [0u8; 5];
    assert_eq!(
        ctx.encrypt_buffer(&mut five),
        Err(CipherError::InvalidBufferLength(5))
    );
}
