use std::fmt;

use zeroize::ZeroizeOnDrop;

use super::constants::*;
use super::utils::{load_words, to_array};
use super::CipherError;

/// Four raw key words extended with the parity word
/// `C240 ^ k0 ^ k1 ^ k2 ^ k3`.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct ExpandedKey {
    words: [u64; EXPANDED_KEY_WORDS],
}

impl ExpandedKey {
    /// Expands a key given as exactly 4 words.
    pub fn from_words(key: &[u64]) -> Result<ExpandedKey, CipherError> {
        let key = to_array::<NUM_WORDS256>(key).ok_or(CipherError::InvalidKeyLength)?;
        Ok(ExpandedKey::expand(&key))
    }

    /// Expands a key given as exactly 32 bytes, read as little-endian words.
    pub fn from_bytes(key: &[u8]) -> Result<ExpandedKey, CipherError> {
        let key = load_words::<NUM_WORDS256>(key).ok_or(CipherError::InvalidKeyLength)?;
        Ok(ExpandedKey::expand(&key))
    }

    fn expand(key: &[u64; NUM_WORDS256]) -> ExpandedKey {
        let mut words = [0u64; EXPANDED_KEY_WORDS];
        words[NUM_WORDS256] = C240;
        for (i, k) in key.iter().enumerate() {
            words[i] = *k;
            words[NUM_WORDS256] ^= k;
        }

        ExpandedKey { words }
    }

    pub fn words(&self) -> &[u64; EXPANDED_KEY_WORDS] {
        &self.words
    }

    /// Word `i` of the schedule, cyclic over the five words.
    #[inline]
    pub(crate) fn word(&self, i: usize) -> u64 {
        self.words[i % EXPANDED_KEY_WORDS]
    }
}

impl fmt::Debug for ExpandedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandedKey").finish_non_exhaustive()
    }
}
