use bitvec::prelude::*;

use crate::crypto::cipher_types::{CipherError, KEY_SIZE, KeyDirection, ROUND_KEY_WORDS, RoundKeys};
use crate::crypto::des_tables::{PC1, PC2, TOTAL_ROTATIONS};

/// Expands an 8-byte key into the 32-word round-key schedule, ordered for
/// the requested direction. The decrypt schedule is the encrypt schedule
/// with the round order reversed.
pub fn expand_key(key: &[u8], direction: KeyDirection) -> Result<RoundKeys, CipherError> {
    if key.len() != KEY_SIZE {
        return Err(CipherError::InvalidKeyLength(key.len()));
    }

    // 1) PC-1: 64 бита ключа → 56 селекторных битов, чётность отброшена
    let key_bits = key.view_bits::<Msb0>();
    let mut selectors = bitarr![0; 56];
    for (j, &pos) in PC1.iter().enumerate() {
        selectors.set(j, key_bits[pos]);
    }

    let mut raw = [0u32; ROUND_KEY_WORDS];
    let mut rotated = bitarr![0; 56];
    for (round, &rotation) in TOTAL_ROTATIONS.iter().enumerate() {
        // 2) сдвигаем обе 28-битные половины на суммарное смещение раунда
        for j in 0..28 {
            let pos = j + rotation;
            rotated.set(j, selectors[if pos < 28 { pos } else { pos - 28 }]);
        }
        for j in 28..56 {
            let pos = j + rotation;
            rotated.set(j, selectors[if pos < 56 { pos } else { pos - 28 }]);
        }

        // 3) PC-2: по 24 бита из каждой половины
        let mut word_a = 0u32;
        let mut word_b = 0u32;
        for j in 0..24 {
            if rotated[PC2[j]] {
                word_a |= 1 << (23 - j);
            }
            if rotated[PC2[j + 24]] {
                word_b |= 1 << (23 - j);
            }
        }

        let slot = match direction {
            KeyDirection::Encrypt => 2 * round,
            KeyDirection::Decrypt => 2 * (15 - round),
        };
        raw[slot] = word_a;
        raw[slot + 1] = word_b;
    }

    Ok(cook_round_keys(&raw))
}

// Repacks each round's two 24-bit halves into the layout the round
// function indexes as four 6-bit groups per word.
fn cook_round_keys(raw: &RoundKeys) -> RoundKeys {
    let mut cooked = [0u32; ROUND_KEY_WORDS];
    for round in 0..16 {
        let (a, b) = (raw[2 * round], raw[2 * round + 1]);
        cooked[2 * round] = ((a & 0x00fc_0000) << 6)
            | ((a & 0x0000_0fc0) << 10)
            | ((b & 0x00fc_0000) >> 10)
            | ((b & 0x0000_0fc0) >> 6);
        cooked[2 * round + 1] = ((a & 0x0003_f000) << 12)
            | ((a & 0x0000_003f) << 16)
            | ((b & 0x0003_f000) >> 4)
            | (b & 0x0000_003f);
    }
    cooked
}
