/// Number of bytes in one SHA-1 block.
pub const BLOCK_LEN: usize = 64;

/// Number of rounds applied to each block, and the message schedule length.
const ROUNDS: usize = 80;

/// Initial hash state defined by FIPS 180-1.
pub const INITIAL_STATE: [u32; 5] = [
    0x6745_2301,
    0xEFCD_AB89,
    0x98BA_DCFE,
    0x1032_5476,
    0xC3D2_E1F0,
];

/// Round constants, one per quarter of the 80 rounds.
const K: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];

/// Expands one block into the 80-word message schedule.
///
/// Words 0..16 are the big-endian interpretation of the block's 4-byte
/// groups; the rest derive from the XOR recurrence with a 1-bit left
/// rotation. The schedule lives on the caller's stack, keeping concurrent
/// digests isolated.
fn message_schedule(block: &[u8; BLOCK_LEN]) -> [u32; ROUNDS] {
    let mut w = [0_u32; ROUNDS];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for t in 16..ROUNDS {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    w
}

/// Folds one 64-byte block into the hash state.
///
/// The state is updated in place; callers thread the same five words through
/// every block of a padded message, in order. The function is total and
/// reads nothing outside its arguments, so two independently initialized
/// states fed the same block always end up identical.
pub fn compress_block(state: &mut [u32; 5], block: &[u8; BLOCK_LEN]) {
    let w = message_schedule(block);

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (t, &word) in w.iter().enumerate() {
        let (f, k) = match t {
            0..=19 => ((b & c) | (!b & d), K[0]),
            20..=39 => (b ^ c ^ d, K[1]),
            40..=59 => ((b & c) | (b & d) | (c & d), K[2]),
            _ => (b ^ c ^ d, K[3]),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::padding::pad_message;

    #[test]
    fn schedule_starts_with_big_endian_words() {
        let mut block = [0_u8; BLOCK_LEN];
        block[..4].copy_from_slice(&[0x01, 0x23, 0x45, 0x67]);
        block[4..8].copy_from_slice(&[0x89, 0xAB, 0xCD, 0xEF]);

        let w = message_schedule(&block);
        assert_eq!(w[0], 0x0123_4567);
        assert_eq!(w[1], 0x89AB_CDEF);
        assert_eq!(w[2], 0);
        // w[16] = rotl1(w[13] ^ w[8] ^ w[2] ^ w[0])
        assert_eq!(w[16], 0x0123_4567_u32.rotate_left(1));
    }

    #[test]
    fn identical_states_stay_identical_across_a_block() {
        let padded = pad_message(b"abc").expect("padding a short message succeeds");
        let block: &[u8; BLOCK_LEN] = padded.as_slice().try_into().expect("one block");

        let mut first = INITIAL_STATE;
        let mut second = INITIAL_STATE;
        compress_block(&mut first, block);
        compress_block(&mut second, block);

        assert_eq!(first, second);
        assert_ne!(first, INITIAL_STATE);
    }
}
