use crate::compress::BLOCK_LEN;
use crate::error::Sha1Error;

/// Number of bytes occupied by the big-endian bit-length trailer.
const LENGTH_TRAILER_LEN: usize = 8;

/// Bytes the padding always appends: the `0x80` marker plus the trailer.
const MIN_PADDING_LEN: usize = 1 + LENGTH_TRAILER_LEN;

/// Computes the message length in bits as recorded by the padding trailer.
fn bit_length(len: usize) -> Result<u64, Sha1Error> {
    u64::try_from(len)
        .ok()
        .and_then(|bytes| bytes.checked_mul(8))
        .ok_or(Sha1Error::InputTooLarge { len })
}

/// Returns the padded buffer length for a message of `len` bytes.
///
/// The result is the smallest multiple of [`BLOCK_LEN`] with room for the
/// message, the `0x80` marker byte, and the 8-byte bit-length trailer. A
/// message whose tail leaves fewer than 9 spare bytes in its final block
/// spills into an additional block, so 55 bytes pad to 64 while 56 bytes
/// pad to 128.
///
/// # Errors
///
/// Returns [`Sha1Error::InputTooLarge`] when `len * 8` does not fit in the
/// 64-bit bit-length field or the padded length itself overflows `usize`.
pub fn padded_len(len: usize) -> Result<usize, Sha1Error> {
    bit_length(len)?;
    len.checked_add(MIN_PADDING_LEN)
        .and_then(|needed| needed.checked_next_multiple_of(BLOCK_LEN))
        .ok_or(Sha1Error::InputTooLarge { len })
}

/// Pads `message` into a freshly allocated buffer ready for compression.
///
/// The buffer holds the message bytes, a single `0x80` marker, zero fill,
/// and the original message length in bits as a big-endian 64-bit integer
/// occupying the final 8 bytes of the last block. Its length is always
/// [`padded_len`] of the message length.
///
/// Capacity is reserved up front with [`Vec::try_reserve_exact`] so an
/// allocation failure surfaces as an error rather than an abort, and no
/// partially padded buffer is ever returned.
///
/// # Errors
///
/// Returns [`Sha1Error::InputTooLarge`] when the bit-length does not fit in
/// 64 bits and [`Sha1Error::Allocation`] when the buffer cannot be
/// allocated.
pub fn pad_message(message: &[u8]) -> Result<Vec<u8>, Sha1Error> {
    let bits = bit_length(message.len())?;
    let total = padded_len(message.len())?;

    let mut padded = Vec::new();
    padded.try_reserve_exact(total)?;

    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(total - LENGTH_TRAILER_LEN, 0);
    padded.extend_from_slice(&bits.to_be_bytes());

    debug_assert_eq!(padded.len(), total);
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_byte_follows_message() {
        let padded = pad_message(b"abc").expect("padding a short message succeeds");
        assert_eq!(padded.len(), 64);
        assert_eq!(&padded[..3], b"abc");
        assert_eq!(padded[3], 0x80);
        assert!(padded[4..56].iter().all(|&byte| byte == 0));
        assert_eq!(&padded[56..], 24_u64.to_be_bytes().as_slice());
    }

    #[test]
    fn empty_message_pads_to_one_block() {
        let padded = pad_message(b"").expect("padding the empty message succeeds");
        assert_eq!(padded.len(), 64);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..56].iter().all(|&byte| byte == 0));
        assert_eq!(&padded[56..], 0_u64.to_be_bytes().as_slice());
    }

    #[test]
    fn trailer_spills_into_second_block_at_56_bytes() {
        assert_eq!(padded_len(55).expect("55 is in range"), 64);
        assert_eq!(padded_len(56).expect("56 is in range"), 128);
        assert_eq!(padded_len(63).expect("63 is in range"), 128);
        assert_eq!(padded_len(64).expect("64 is in range"), 128);
    }
}
