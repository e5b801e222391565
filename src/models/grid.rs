/// Compact square bit grid, one bit per module.
///
/// Backs both planes of a QR symbol: the dark/light plane and the parallel
/// function-module plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    data: Vec<u8>,
}

impl ModuleGrid {
    /// Create an all-false grid of `size` x `size` modules.
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size + 7) / 8;
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get bit at (x, y). Out-of-bounds reads are false.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        let index = y * self.size + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set bit at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.size || y >= self.size {
            return;
        }
        let index = y * self.size + x;
        if value {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Number of set bits.
    pub fn count_set(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}
