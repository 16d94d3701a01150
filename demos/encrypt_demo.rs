use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use des::crypto::cipher_context::CipherContext;
use des::crypto::cipher_types::{CipherError, KeyDirection};
use des::crypto::des::Des;
use des::crypto::des_key_expansion::expand_key;

fn main() -> Result<(), CipherError> {
    // --------------------------------------------------------
    // 0) Known-answer check
    // --------------------------------------------------------
    println!("=== Known-answer check ===");
    let key = hex_literal::hex!("0123456789abcdef");
    let plaintext = hex_literal::hex!("0123456789abcde7");

    let des = Des::new(&key)?;
    let ciphertext = des.encrypt_block(&plaintext);
    let decrypted = des.decrypt_block(&ciphertext);
    println!(" Key:        {:02x?}", key);
    println!(" Plaintext:  {:02x?}", plaintext);
    println!(" Ciphertext: {:02x?}", ciphertext);
    println!(" Decrypted:  {:02x?}", decrypted);
    assert_eq!(ciphertext, hex_literal::hex!("c95744256a5ed31d"));
    assert_eq!(decrypted, plaintext);

    // --------------------------------------------------------
    // 1) Round-key schedule demo
    // --------------------------------------------------------
    println!("\n=== Round-key schedule demo ===");
    let encrypt_keys = expand_key(&key, KeyDirection::Encrypt)?;
    let decrypt_keys = expand_key(&key, KeyDirection::Decrypt)?;
    println!(
        " Round  0 subkey words: {:08x} {:08x}",
        encrypt_keys[0], encrypt_keys[1]
    );
    println!(
        " Round 15 subkey words: {:08x} {:08x}",
        encrypt_keys[30], encrypt_keys[31]
    );
    assert_eq!(&encrypt_keys[0..2], &decrypt_keys[30..32]);
    println!(" Decrypt schedule is the encrypt schedule reversed: OK");

    // --------------------------------------------------------
    // 2) Random buffer through the ECB context
    // --------------------------------------------------------
    println!("\n=== Random buffer demo ===");
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let mut data = vec![0u8; 1024];
    rng.fill_bytes(&mut data);

    let ctx = CipherContext::with_key(&key)?;
    let mut buffer = data.clone();
    ctx.encrypt_buffer(&mut buffer)?;
    println!(" First ciphertext block: {:02x?}", &buffer[..8]);
    ctx.decrypt_buffer(&mut buffer)?;
    assert_eq!(buffer, data);
    println!(" {} bytes encrypted and decrypted in place OK", data.len());

    Ok(())
}
