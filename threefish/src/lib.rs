//! Threefish-256: the tweakable block cipher underneath Skein-256.
//!
//! A 256-bit key and a 128-bit tweak are expanded once into a [`Cipher256`],
//! which then encrypts and decrypts 256-bit blocks through 72 rounds of
//! add-rotate-xor mixing. Words are little-endian whenever bytes are involved.
//!
//! ```
//! use threefish::{Cipher256, CipherBlock};
//!
//! let key: Vec<u8> = (0..32).collect();
//! let tweak: Vec<u8> = (0..16).collect();
//! let cipher = Cipher256::new(&key, &tweak).unwrap();
//!
//! let plaintext = [7u8; 32];
//! let mut ciphertext = [0u8; 32];
//! let mut recovered = [0u8; 32];
//!
//! cipher.encrypt(&plaintext, &mut ciphertext).unwrap();
//! cipher.decrypt(&ciphertext, &mut recovered).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```

mod mix;
mod utils;
mod error;
pub mod constants;
pub mod key_schedule;
pub mod tweak_schedule;
pub mod network;
pub mod threefish256;

pub use error::CipherError;
pub use key_schedule::ExpandedKey;
pub use tweak_schedule::ExpandedTweak;
pub use threefish256::{Block, Cipher256};

/// Byte-oriented block cipher interface for modes built on top of the cipher.
pub trait CipherBlock {
    fn encrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<(), CipherError>;
    fn decrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<(), CipherError>;
    fn get_block_size(&self) -> usize;
}
