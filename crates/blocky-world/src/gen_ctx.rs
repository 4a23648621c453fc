use fastnoise_lite::FastNoiseLite;

/// Per-chunk generation scratch: seeded noise, the chunk's own RNG and the
/// surface heights of the columns being filled.
pub struct GenCtx {
    pub terrain: FastNoiseLite,
    pub rng: fastrand::Rng,
    pub(crate) tile_base: (i32, i32),
    pub(crate) tile_sx: i32,
    pub(crate) heights: Vec<i32>,
}

impl GenCtx {
    /// Surface height prepared for world column `(wx, wz)`, if it lies in the tile.
    pub fn height_at(&self, wx: i32, wz: i32) -> Option<i32> {
        let lx = wx - self.tile_base.0;
        let lz = wz - self.tile_base.1;
        if lx < 0 || lz < 0 || lx >= self.tile_sx {
            return None;
        }
        self.heights.get((lz * self.tile_sx + lx) as usize).copied()
    }
}
