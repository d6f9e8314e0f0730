use core::fmt;

/// Final value of a SHA-1 computation.
///
/// Wraps the five 32-bit state words accumulated across every block of the
/// padded message. Word zero carries the most significant bits of the
/// 160-bit digest.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Sha1Digest([u32; 5]);

impl Sha1Digest {
    /// Number of bytes in the encoded digest.
    pub const LEN: usize = 20;

    /// Wraps the five final state words.
    #[must_use]
    pub const fn new(words: [u32; 5]) -> Self {
        Self(words)
    }

    /// Returns the five digest words, most significant first.
    #[must_use]
    pub const fn words(self) -> [u32; 5] {
        self.0
    }

    /// Encodes the digest as 20 big-endian bytes.
    #[must_use]
    pub fn to_be_bytes(self) -> [u8; Self::LEN] {
        let mut bytes = [0_u8; Self::LEN];
        for (group, word) in bytes.chunks_exact_mut(4).zip(self.0) {
            group.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// Reconstructs a digest from its 20-byte big-endian encoding.
    #[must_use]
    pub fn from_be_bytes(bytes: [u8; Self::LEN]) -> Self {
        let mut words = [0_u32; 5];
        for (word, group) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([group[0], group[1], group[2], group[3]]);
        }
        Self(words)
    }
}

/// Formats the digest as 40 lowercase hex digits.
impl fmt::Display for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0 {
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}

impl From<Sha1Digest> for [u32; 5] {
    fn from(digest: Sha1Digest) -> Self {
        digest.words()
    }
}

impl From<&Sha1Digest> for [u32; 5] {
    fn from(digest: &Sha1Digest) -> Self {
        digest.words()
    }
}

impl From<Sha1Digest> for [u8; Sha1Digest::LEN] {
    fn from(digest: Sha1Digest) -> Self {
        digest.to_be_bytes()
    }
}

impl From<&Sha1Digest> for [u8; Sha1Digest::LEN] {
    fn from(digest: &Sha1Digest) -> Self {
        digest.to_be_bytes()
    }
}
