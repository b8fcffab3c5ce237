//! The 72-round Threefish-256 mixing network.
//!
//! Rounds run in groups of four. Subkey `s` is added before group `s`
//! (`s = 0..17`) and subkey 18 after the last round; the state right after
//! that final injection is the ciphertext. Control flow depends only on
//! round and injection indices, never on key, tweak or data.

use super::constants::*;
use super::key_schedule::ExpandedKey;
use super::mix::Mix;
use super::tweak_schedule::ExpandedTweak;

pub type Block = [u64; NUM_WORDS256];

/// Words added to the state at injection `s`.
pub fn subkey(ek: &ExpandedKey, et: &ExpandedTweak, s: usize) -> Block {
    [
        ek.word(s),
        ek.word(s + 1).wrapping_add(et.word(s)),
        ek.word(s + 2).wrapping_add(et.word(s + 1)),
        ek.word(s + 3).wrapping_add(s as u64),
    ]
}

fn inject(words: &mut Block, ek: &ExpandedKey, et: &ExpandedTweak, s: usize) {
    let ks = subkey(ek, et, s);
    for (w, k) in words.iter_mut().zip(ks.iter()) {
        *w = w.wrapping_add(*k);
    }
}

fn eject(words: &mut Block, ek: &ExpandedKey, et: &ExpandedTweak, s: usize) {
    let ks = subkey(ek, et, s);
    for (w, k) in words.iter_mut().zip(ks.iter()) {
        *w = w.wrapping_sub(*k);
    }
}

fn round(words: &mut Block, d: usize) {
    for j in 0..(NUM_WORDS256 / 2) {
        let mix = Mix::new(d, j);
        (words[2 * j], words[2 * j + 1]) = mix.mix(words[2 * j], words[2 * j + 1]);
    }

    words.swap(1, 3);
}

fn unround(words: &mut Block, d: usize) {
    words.swap(1, 3);

    for j in (0..(NUM_WORDS256 / 2)).rev() {
        let mix = Mix::new(d, j);
        (words[2 * j], words[2 * j + 1]) = mix.demix(words[2 * j], words[2 * j + 1]);
    }
}

pub fn encrypt(block: &Block, ek: &ExpandedKey, et: &ExpandedTweak) -> Block {
    let mut words = *block;

    for s in 0..(INJECTION_COUNT - 1) {
        inject(&mut words, ek, et, s);

        for i in 0..ROUNDS_PER_INJECTION {
            round(&mut words, s * ROUNDS_PER_INJECTION + i);
        }
    }

    inject(&mut words, ek, et, INJECTION_COUNT - 1);
    words
}

pub fn decrypt(block: &Block, ek: &ExpandedKey, et: &ExpandedTweak) -> Block {
    let mut words = *block;

    eject(&mut words, ek, et, INJECTION_COUNT - 1);

    for s in (0..(INJECTION_COUNT - 1)).rev() {
        for i in (0..ROUNDS_PER_INJECTION).rev() {
            unround(&mut words, s * ROUNDS_PER_INJECTION + i);
        }

        eject(&mut words, ek, et, s);
    }

    words
}
