pub const BLOCK_SIZE256: usize = 32;
pub const KEY_SIZE256: usize = 32;
pub const TWEAK_SIZE: usize = 16;

pub const NUM_ROUNDS256: usize = 72;
pub const NUM_WORDS256: usize = BLOCK_SIZE256 / 8;
pub const TWEAK_WORDS: usize = TWEAK_SIZE / 8;

pub const EXPANDED_KEY_WORDS: usize = NUM_WORDS256 + 1;
pub const EXPANDED_TWEAK_WORDS: usize = TWEAK_WORDS + 1;

// One injection before every group of four rounds, plus the final one.
pub const ROUNDS_PER_INJECTION: usize = 4;
pub const INJECTION_COUNT: usize = (NUM_ROUNDS256 / ROUNDS_PER_INJECTION) + 1;

/// Key schedule parity constant.
pub const C240: u64 = 0x1bd11bdaa9fc1a22;

pub const R4: [[u32; 2]; 8] = [
    [14, 16],
    [52, 57],
    [23, 40],
    [5,  37],
    [25, 33],
    [46, 12],
    [58, 22],
    [32, 32],
];
