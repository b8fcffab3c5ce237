use std::fmt;

use zeroize::ZeroizeOnDrop;

use super::constants::*;
use super::utils::{load_words, to_array};
use super::CipherError;

/// Two raw tweak words extended with `t0 ^ t1`.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct ExpandedTweak {
    words: [u64; EXPANDED_TWEAK_WORDS],
}

impl ExpandedTweak {
    pub fn from_words(tweak: &[u64]) -> Result<ExpandedTweak, CipherError> {
        let tweak = to_array::<TWEAK_WORDS>(tweak).ok_or(CipherError::InvalidTweakLength)?;
        Ok(ExpandedTweak::expand(&tweak))
    }

    /// Expands a tweak given as exactly 16 bytes, read as little-endian words.
    pub fn from_bytes(tweak: &[u8]) -> Result<ExpandedTweak, CipherError> {
        let tweak = load_words::<TWEAK_WORDS>(tweak).ok_or(CipherError::InvalidTweakLength)?;
        Ok(ExpandedTweak::expand(&tweak))
    }

    fn expand(tweak: &[u64; TWEAK_WORDS]) -> ExpandedTweak {
        ExpandedTweak {
            words: [tweak[0], tweak[1], tweak[0] ^ tweak[1]],
        }
    }

    pub fn words(&self) -> &[u64; EXPANDED_TWEAK_WORDS] {
        &self.words
    }

    #[inline]
    pub(crate) fn word(&self, i: usize) -> u64 {
        self.words[i % EXPANDED_TWEAK_WORDS]
    }
}

impl fmt::Debug for ExpandedTweak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandedTweak").finish_non_exhaustive()
    }
}
