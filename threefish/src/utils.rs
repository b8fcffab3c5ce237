use byteorder::{ByteOrder, LittleEndian};

/// Decodes `src` as `N` little-endian words. Returns `None` unless
/// `src` is exactly `N * 8` bytes long.
pub fn load_words<const N: usize>(src: &[u8]) -> Option<[u64; N]> {
    if src.len() != N * 8 {
        return None;
    }

    let mut words = [0u64; N];
    LittleEndian::read_u64_into(src, &mut words);
    Some(words)
}

/// Encodes `words` little-endian into the front of `dst`. Returns `false`
/// and leaves `dst` untouched if it is shorter than `words.len() * 8`.
pub fn store_words(words: &[u64], dst: &mut [u8]) -> bool {
    let size = words.len() * 8;
    if dst.len() < size {
        return false;
    }

    LittleEndian::write_u64_into(words, &mut dst[..size]);
    true
}

/// Copies a word slice into a fixed array when the length matches exactly.
pub fn to_array<const N: usize>(src: &[u64]) -> Option<[u64; N]> {
    src.try_into().ok()
}
