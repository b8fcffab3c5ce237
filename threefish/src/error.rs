use std::fmt;

/// Errors reported at the API boundary of the cipher.
///
/// Lengths are validated before any state is read or written, so a call that
/// returns one of these has produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Key is not exactly 4 words (32 bytes).
    InvalidKeyLength,
    /// Tweak is not exactly 2 words (16 bytes).
    InvalidTweakLength,
    /// Source or destination block is not exactly 4 words (32 bytes).
    InvalidBlockLength,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidKeyLength => {
                write!(f, "Key must be exactly 32 bytes (4 words)")
            }
            CipherError::InvalidTweakLength => {
                write!(f, "Tweak must be exactly 16 bytes (2 words)")
            }
            CipherError::InvalidBlockLength => {
                write!(f, "Block must be exactly 32 bytes (4 words)")
            }
        }
    }
}

impl std::error::Error for CipherError {}
