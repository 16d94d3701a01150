use des::crypto::cipher_types::{CipherError, KeyDirection};
use des::crypto::des_key_expansion::expand_key;

#[test]
fn test_decrypt_schedule_is_encrypt_schedule_reversed() {
    let key = hex_literal::hex!("0123456789abcdef");
    let encrypt_keys = expand_key(&key, KeyDirection::Encrypt).unwrap();
    let decrypt_keys = expand_key(&key, KeyDirection::Decrypt).unwrap();

    for round in 0..16 {
        let mirrored = 15 - round;
        assert_eq!(encrypt_keys[2 * round], decrypt_keys[2 * mirrored]);
        assert_eq!(encrypt_keys[2 * round + 1], decrypt_keys[2 * mirrored + 1]);
    }
}

#[test]
fn test_expansion_is_deterministic() {
    let key = hex_literal::hex!("133457799bbcdff1");
    assert_eq!(
        expand_key(&key, KeyDirection::Encrypt).unwrap(),
        expand_key(&key, KeyDirection::Encrypt).unwrap()
    );
}

#[test]
fn test_schedules_for_opposite_directions_differ() {
    let key = hex_literal::hex!("133457799bbcdff1");
    assert_ne!(
        expand_key(&key, KeyDirection::Encrypt).unwrap(),
        expand_key(&key, KeyDirection::Decrypt).unwrap()
    );
}

// For 0x0101...01 every selected key bit is zero, so all sixteen subkeys
// collapse to the same value and both schedules coincide.
#[test]
fn test_weak_key_schedules_coincide() {
    let weak_key = [0x01u8; 8];
    let encrypt_keys = expand_key(&weak_key, KeyDirection::Encrypt).unwrap();
    let decrypt_keys = expand_key(&weak_key, KeyDirection::Decrypt).unwrap();
    assert_eq!(encrypt_keys, decrypt_keys);
}

// Each schedule word packs four 6-bit groups at byte-aligned offsets;
// the two high bits of every byte stay clear.
#[test]
fn test_round_key_words_use_six_bit_groups() {
    let key = hex_literal::hex!("fedcba9876543210");
    let keys = expand_key(&key, KeyDirection::Encrypt).unwrap();
    for word in keys {
        assert_eq!(word & !0x3f3f_3f3f, 0);
    }
}

#[test]
fn test_invalid_key_lengths_rejected() {
    for len in [0usize, 7, 9, 16] {
        let key = vec![0u8; len];
        assert_eq!(
            expand_key(&key, KeyDirection::Encrypt),
            Err(CipherError::InvalidKeyLength(len))
        );
    }
}
