use crate::constants;

/// MIX bound to one position of the network: round `d` and word pair `j`
/// (`j = 0` mixes words 0 and 1, `j = 1` mixes words 2 and 3).
pub struct Mix {
    d: usize,
    j: usize,
}

impl Mix {
    pub fn new(d: usize, j: usize) -> Mix {
        Mix { d, j }
    }

    fn shift(&self) -> u32 {
        constants::R4[self.d % 8][self.j]
    }

    pub fn mix(&self, x0: u64, x1: u64) -> (u64, u64) {
        let y0 = x0.wrapping_add(x1);
        let y1 = x1.rotate_left(self.shift()) ^ y0;
        (y0, y1)
    }

    pub fn demix(&self, y0: u64, y1: u64) -> (u64, u64) {
        let x1 = (y1 ^ y0).rotate_right(self.shift());
        let x0 = y0.wrapping_sub(x1);
        (x0, x1)
    }
}
