use super::{constants::*, network, utils::*, CipherBlock, CipherError};
use super::key_schedule::ExpandedKey;
use super::tweak_schedule::ExpandedTweak;

pub use super::network::Block;

use std::fmt;

/// Threefish-256 bound to one expanded key and one expanded tweak.
///
/// Block operations only read the schedule, so a shared `&Cipher256` can be
/// used from many threads at once. `rekey`/`retweak` need `&mut self`.
#[derive(Clone, PartialEq, Eq)]
pub struct Cipher256 {
    key: ExpandedKey,
    tweak: ExpandedTweak,
}

impl Cipher256 {
    /// Creates a new Threefish cipher with a block size of 256 bits.
    /// The key argument must be 32 bytes and the tweak argument must be 16 bytes.
    pub fn new(key: &[u8], tweak: &[u8]) -> Result<Cipher256, CipherError> {
        let key = ExpandedKey::from_bytes(key)?;
        let tweak = ExpandedTweak::from_bytes(tweak)?;

        Ok(Cipher256 { key, tweak })
    }

    /// 32-byte little-endian key and a 2-word tweak.
    pub fn from_key_bytes(key: &[u8], tweak: &[u64]) -> Result<Cipher256, CipherError> {
        let key = ExpandedKey::from_bytes(key)?;
        let tweak = ExpandedTweak::from_words(tweak)?;

        Ok(Cipher256 { key, tweak })
    }

    /// 4-word key and a 2-word tweak.
    pub fn from_key_words(key: &[u64], tweak: &[u64]) -> Result<Cipher256, CipherError> {
        let key = ExpandedKey::from_words(key)?;
        let tweak = ExpandedTweak::from_words(tweak)?;

        Ok(Cipher256 { key, tweak })
    }

    pub fn key(&self) -> &ExpandedKey {
        &self.key
    }

    pub fn tweak(&self) -> &ExpandedTweak {
        &self.tweak
    }

    /// Replaces the expanded key. On error the current key is kept.
    pub fn rekey(&mut self, key: &[u64]) -> Result<(), CipherError> {
        self.key = ExpandedKey::from_words(key)?;
        Ok(())
    }

    pub fn rekey_bytes(&mut self, key: &[u8]) -> Result<(), CipherError> {
        self.key = ExpandedKey::from_bytes(key)?;
        Ok(())
    }

    /// Replaces the expanded tweak. On error the current tweak is kept.
    pub fn retweak(&mut self, tweak: &[u64]) -> Result<(), CipherError> {
        self.tweak = ExpandedTweak::from_words(tweak)?;
        Ok(())
    }

    pub fn retweak_bytes(&mut self, tweak: &[u8]) -> Result<(), CipherError> {
        self.tweak = ExpandedTweak::from_bytes(tweak)?;
        Ok(())
    }

    pub fn encrypt_words(&self, block: &Block) -> Block {
        network::encrypt(block, &self.key, &self.tweak)
    }

    pub fn decrypt_words(&self, block: &Block) -> Block {
        network::decrypt(block, &self.key, &self.tweak)
    }

    /// Encrypts a block given as exactly 4 words.
    pub fn encrypt_block(&self, block: &[u64]) -> Result<Block, CipherError> {
        let block = to_array::<NUM_WORDS256>(block).ok_or(CipherError::InvalidBlockLength)?;
        Ok(self.encrypt_words(&block))
    }

    /// Decrypts a block given as exactly 4 words.
    pub fn decrypt_block(&self, block: &[u64]) -> Result<Block, CipherError> {
        let block = to_array::<NUM_WORDS256>(block).ok_or(CipherError::InvalidBlockLength)?;
        Ok(self.decrypt_words(&block))
    }

    fn process(&self, src: &[u8], dst: &mut [u8], f: fn(&Cipher256, &Block) -> Block) -> Result<(), CipherError> {
        if dst.len() != BLOCK_SIZE256 {
            return Err(CipherError::InvalidBlockLength);
        }

        let words = load_words::<NUM_WORDS256>(src).ok_or(CipherError::InvalidBlockLength)?;
        let out = f(self, &words);

        if !store_words(&out, dst) {
            return Err(CipherError::InvalidBlockLength);
        }

        Ok(())
    }
}

impl fmt::Debug for Cipher256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher256").finish_non_exhaustive()
    }
}

impl CipherBlock for Cipher256 {
    /// Loads plaintext from src, encrypts it, and stores it in dst.
    fn encrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<(), CipherError> {
        self.process(src, dst, Cipher256::encrypt_words)
    }

    /// Loads ciphertext from src, decrypts it, and stores it in dst.
    fn decrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<(), CipherError> {
        self.process(src, dst, Cipher256::decrypt_words)
    }

    fn get_block_size(&self) -> usize {
        BLOCK_SIZE256
    }
}



#[cfg(test)]
mod cipher256_test {
    use super::*;

    use std::sync::Arc;

    const PLAINTEXT: [u8; 32] = [
        1,2,3,4,5,6,7,8,
        1,2,3,4,5,6,7,8,
        1,2,3,4,5,6,7,8,
        1,2,3,4,5,6,7,8,
    ];

    const CIPHERTEXT: [u8; 32] = [
        162, 60, 114, 116, 90, 143, 88, 247,
        177, 45, 1, 223, 13, 109, 60, 141,
        2, 121, 59, 127, 220, 239, 145, 172,
        1, 206, 156, 17, 129, 49, 15, 214,
    ];

    fn counting_cipher() -> Cipher256 {
        let tweak: Vec<u8> = (0..16).collect();
        let key: Vec<u8> = (0..32).collect();

        Cipher256::new(&key, &tweak).unwrap()
    }

    #[test]
    fn new_errors(){
        let tweak: Vec<u8> = (0..15).collect();
        let key: Vec<u8> = (0..32).collect();

        let r = Cipher256::new(&key, &tweak);

        assert!(r.is_err());
        assert_eq!(r.unwrap_err(), CipherError::InvalidTweakLength);


        let tweak: Vec<u8> = (0..16).collect();
        let key: Vec<u8> = (0..31).collect();

        let r = Cipher256::new(&key, &tweak);

        assert!(r.is_err());
        assert_eq!(r.unwrap_err(), CipherError::InvalidKeyLength);
    }

    #[test]
    fn named_constructor_errors() {
        let key: Vec<u8> = (0..31).collect();
        assert_eq!(Cipher256::from_key_bytes(&key, &[0, 0]).unwrap_err(), CipherError::InvalidKeyLength);

        let key: Vec<u8> = (0..32).collect();
        assert_eq!(Cipher256::from_key_bytes(&key, &[0]).unwrap_err(), CipherError::InvalidTweakLength);

        assert_eq!(Cipher256::from_key_words(&[0; 3], &[0; 2]).unwrap_err(), CipherError::InvalidKeyLength);
        assert_eq!(Cipher256::from_key_words(&[0; 4], &[0; 3]).unwrap_err(), CipherError::InvalidTweakLength);
    }

    #[test]
    fn constructors_agree() {
        let key_words = [0x0706050403020100, 0x0f0e0d0c0b0a0908, 0x1716151413121110, 0x1f1e1d1c1b1a1918];
        let tweak_words = [506097522914230528, 1084818905618843912];
        let key: Vec<u8> = (0..32).collect();

        let by_bytes = counting_cipher();
        let by_key_bytes = Cipher256::from_key_bytes(&key, &tweak_words).unwrap();
        let by_words = Cipher256::from_key_words(&key_words, &tweak_words).unwrap();

        assert_eq!(by_bytes, by_key_bytes);
        assert_eq!(by_bytes, by_words);
    }

    #[test]
    fn new_res(){
        let c = counting_cipher();

        assert_eq!(c.tweak().words(), &[506097522914230528, 1084818905618843912, 578721382704613384], "tweaks are incorrect");
        assert_eq!(c.key().words()[4], 2004413935125273122, "key parity is incorrect");
    }

    #[test]
    fn encrypt_error_plaintext(){
        let plaintext = &PLAINTEXT[..31];
        let mut ciphertext: Vec<u8> = vec![0; 32];

        let c = counting_cipher();
        let r = c.encrypt(plaintext, &mut ciphertext);

        assert!(r.is_err());
        assert_eq!(r.unwrap_err(), CipherError::InvalidBlockLength);
        assert_eq!(ciphertext, vec![0; 32], "no output on error");
    }

    #[test]
    fn encrypt_error_ciphertext(){
        let mut ciphertext: Vec<u8> = vec![0; 31];

        let c = counting_cipher();
        let r = c.encrypt(&PLAINTEXT, &mut ciphertext);

        assert!(r.is_err());
        assert_eq!(r.unwrap_err(), CipherError::InvalidBlockLength);
    }

    #[test]
    fn encrypt_res(){
        let mut ciphertext: Vec<u8> = vec![0; 32];

        let c = counting_cipher();
        c.encrypt(&PLAINTEXT, &mut ciphertext).unwrap();

        assert_eq!(ciphertext, CIPHERTEXT);
    }

    #[test]
    fn decrypt_error_ciphertext(){
        let ciphertext = &CIPHERTEXT[..31];
        let mut plaintext: Vec<u8> = vec![0; 32];

        let block: Arc<dyn CipherBlock> = Arc::new(counting_cipher());
        let r = block.decrypt(ciphertext, &mut plaintext);

        assert!(r.is_err());
        assert_eq!(r.unwrap_err(), CipherError::InvalidBlockLength);
    }

    #[test]
    fn decrypt_error_plaintext(){
        let mut plaintext: Vec<u8> = vec![0; 33];

        let block: Arc<dyn CipherBlock> = Arc::new(counting_cipher());
        let r = block.decrypt(&CIPHERTEXT, &mut plaintext);

        assert!(r.is_err());
        assert_eq!(r.unwrap_err(), CipherError::InvalidBlockLength);
    }

    #[test]
    fn decrypt_res(){
        let mut plaintext: Vec<u8> = vec![0; 32];

        let block: Arc<dyn CipherBlock> = Arc::new(counting_cipher());
        block.decrypt(&CIPHERTEXT, &mut plaintext).unwrap();

        assert_eq!(plaintext, PLAINTEXT);
        assert_eq!(block.get_block_size(), 32);
    }

    #[test]
    fn word_block_errors() {
        let c = counting_cipher();

        assert_eq!(c.encrypt_block(&[1, 2, 3]).unwrap_err(), CipherError::InvalidBlockLength);
        assert_eq!(c.decrypt_block(&[1, 2, 3, 4, 5]).unwrap_err(), CipherError::InvalidBlockLength);
    }

    #[test]
    fn word_block_res() {
        let c = counting_cipher();
        let p = [0x0807060504030201u64; 4];

        let e = c.encrypt_block(&p).unwrap();
        assert_eq!(e, [0xf7588f5a74723ca2, 0x8d3c6d0ddf012db1, 0xac91efdc7f3b7902, 0xd60f3181119cce01]);
        assert_eq!(c.decrypt_block(&e).unwrap(), p);
    }

    #[test]
    fn rekey_and_retweak() {
        let mut c = Cipher256::from_key_words(&[0; 4], &[0; 2]).unwrap();
        let zero = c.encrypt_words(&[0; 4]);

        c.rekey(&[0x0706050403020100, 0x0f0e0d0c0b0a0908, 0x1716151413121110, 0x1f1e1d1c1b1a1918]).unwrap();
        c.retweak(&[506097522914230528, 1084818905618843912]).unwrap();
        assert_eq!(c, counting_cipher());

        c.rekey(&[0; 4]).unwrap();
        c.retweak_bytes(&[0; 16]).unwrap();
        assert_eq!(c.encrypt_words(&[0; 4]), zero);

        let key: Vec<u8> = (0..32).collect();
        c.rekey_bytes(&key).unwrap();
        c.retweak(&[506097522914230528, 1084818905618843912]).unwrap();
        assert_eq!(c, counting_cipher());
    }

    #[test]
    fn failed_rekey_keeps_state() {
        let mut c = counting_cipher();

        assert_eq!(c.rekey(&[1, 2]).unwrap_err(), CipherError::InvalidKeyLength);
        assert_eq!(c.rekey_bytes(&[0; 31]).unwrap_err(), CipherError::InvalidKeyLength);
        assert_eq!(c.retweak(&[1, 2, 3]).unwrap_err(), CipherError::InvalidTweakLength);
        assert_eq!(c.retweak_bytes(&[0; 15]).unwrap_err(), CipherError::InvalidTweakLength);

        assert_eq!(c, counting_cipher());
    }

    #[test]
    fn debug_hides_schedule() {
        assert_eq!(format!("{:?}", counting_cipher()), "Cipher256 { .. }");
    }
}
