use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while preparing a message for hashing.
///
/// Block compression is total, so every failure mode lives in the padding
/// stage: either the message cannot be described by the 64-bit bit-length
/// trailer, or the padded buffer cannot be allocated.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Sha1Error {
    /// The message bit-length does not fit the 64-bit length field appended
    /// by the padding trailer.
    #[error("message of {len} bytes exceeds the 64-bit bit-length field")]
    InputTooLarge {
        /// Byte length of the rejected message.
        len: usize,
    },

    /// The padded message buffer could not be allocated.
    ///
    /// The digest is never computed from a partial buffer; allocation
    /// failure aborts the call before any block is compressed.
    #[error("failed to allocate the padded message buffer")]
    Allocation(#[from] TryReserveError),
}
