#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod compress;
mod digest;
mod error;
mod padding;

pub use compress::{BLOCK_LEN, INITIAL_STATE, compress_block};
pub use digest::Sha1Digest;
pub use error::Sha1Error;
pub use padding::{pad_message, padded_len};

/// Computes the SHA-1 digest of `message`.
///
/// The hash state starts from [`INITIAL_STATE`], the message is padded to a
/// multiple of [`BLOCK_LEN`] bytes with [`pad_message`], and every block is
/// folded into the state in order with [`compress_block`]. The padded
/// buffer is scoped to this call and released on every path.
///
/// Repeated calls with the same message always produce the same digest;
/// calls never share state, so digests of independent messages can run
/// concurrently.
///
/// # Errors
///
/// Propagates the padder's failures: [`Sha1Error::InputTooLarge`] when the
/// message bit-length does not fit the 64-bit trailer field and
/// [`Sha1Error::Allocation`] when the padded buffer cannot be allocated.
/// No digest value is produced on failure.
///
/// # Examples
///
/// ```
/// use sha1_digest::digest;
///
/// let digest = digest(b"abc")?;
/// assert_eq!(
///     digest.words(),
///     [0xA999_3E36, 0x4706_816A, 0xBA3E_2571, 0x7850_C26C, 0x9CD0_D89D],
/// );
/// # Ok::<(), sha1_digest::Sha1Error>(())
/// ```
pub fn digest(message: &[u8]) -> Result<Sha1Digest, Sha1Error> {
    let padded = pad_message(message)?;

    let mut state = INITIAL_STATE;
    let (blocks, remainder) = padded.as_chunks::<BLOCK_LEN>();
    debug_assert!(remainder.is_empty(), "padded length is a block multiple");
    for block in blocks {
        compress_block(&mut state, block);
    }

    Ok(Sha1Digest::new(state))
}
