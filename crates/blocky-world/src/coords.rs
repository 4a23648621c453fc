use serde::{Deserialize, Serialize};

/// Horizontal chunk-grid coordinate. Chunks are full-height columns, so
/// there is no vertical component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cz: self.cz + dz,
        }
    }

    /// Chessboard distance in chunks.
    #[inline]
    pub fn chebyshev(self, other: ChunkCoord) -> i32 {
        (self.cx - other.cx).abs().max((self.cz - other.cz).abs())
    }

    /// World-space block coordinate of this chunk's local origin.
    #[inline]
    pub fn world_origin(self, dims: ChunkDims) -> (i32, i32) {
        (self.cx * dims.sx, self.cz * dims.sz)
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Integer block coordinate. Local positions are chunk-relative and may sit
/// one step outside the chunk while an edit target is being resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn offset(self, (dx, dy, dz): (i32, i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from(v: (i32, i32, i32)) -> Self {
        Self::new(v.0, v.1, v.2)
    }
}

impl From<BlockPos> for (i32, i32, i32) {
    fn from(p: BlockPos) -> Self {
        (p.x, p.y, p.z)
    }
}

/// Extent of every chunk: `sx` × `sy` × `sz` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkDims {
    pub sx: i32,
    pub sy: i32,
    pub sz: i32,
}

impl Default for ChunkDims {
    fn default() -> Self {
        Self {
            sx: 8,
            sy: 32,
            sz: 8,
        }
    }
}

impl ChunkDims {
    #[inline]
    pub const fn new(sx: i32, sy: i32, sz: i32) -> Self {
        Self { sx, sy, sz }
    }

    #[inline]
    pub fn contains(&self, p: BlockPos) -> bool {
        self.contains_xz(p) && p.y >= 0 && p.y < self.sy
    }

    #[inline]
    pub fn contains_xz(&self, p: BlockPos) -> bool {
        p.x >= 0 && p.x < self.sx && p.z >= 0 && p.z < self.sz
    }

    /// Number of vertical bands of `band_height` cells needed to cover the chunk.
    #[inline]
    pub fn band_count(&self, band_height: i32) -> i32 {
        let h = band_height.max(1);
        (self.sy + h - 1) / h
    }

    /// Chunk containing world block column `(wx, wz)`.
    #[inline]
    pub fn chunk_of(&self, wx: i32, wz: i32) -> ChunkCoord {
        ChunkCoord::new(wx.div_euclid(self.sx), wz.div_euclid(self.sz))
    }
}
