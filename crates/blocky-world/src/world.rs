use blocky_blocks::MaterialKind;
use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::worldgen::{Flat, Mode, WorldGenConfig};
use crate::{ChunkCoord, ChunkDims, GenCtx};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WorldGenMode {
    Normal,
    Flat { thickness: i32 },
}

/// Generation parameters for a regenerable world. Holds no block data.
#[derive(Clone, Debug)]
pub struct World {
    pub dims: ChunkDims,
    pub seed: i32,
    pub mode: WorldGenMode,
    pub config: WorldGenConfig,
}

impl World {
    /// Chunk sizes below one cell are raised to one; use
    /// [`WorldGenConfig::validate`] to reject them instead.
    pub fn new(seed: i32, config: WorldGenConfig) -> Self {
        let mode = match config.mode {
            Mode::Normal => WorldGenMode::Normal,
            Mode::Flat => WorldGenMode::Flat {
                thickness: config.flat.thickness,
            },
        };
        let c = config.chunk;
        Self {
            dims: ChunkDims::new(c.sx.max(1), c.sy.max(1), c.sz.max(1)),
            seed,
            mode,
            config,
        }
    }

    /// Flat world of `thickness` layers; thickness 0 yields empty chunks.
    pub fn flat(dims: ChunkDims, thickness: i32) -> Self {
        let config = WorldGenConfig {
            mode: Mode::Flat,
            chunk: dims,
            flat: Flat { thickness },
            ..Default::default()
        };
        Self::new(0, config)
    }

    #[inline]
    pub fn is_flat(&self) -> bool {
        matches!(self.mode, WorldGenMode::Flat { .. })
    }

    #[inline]
    pub fn chunk_of(&self, wx: i32, wz: i32) -> ChunkCoord {
        self.dims.chunk_of(wx, wz)
    }

    /// Fresh generation context for one chunk. The RNG stream depends only on
    /// the world seed and the chunk coordinate.
    pub fn make_gen_ctx(&self, coord: ChunkCoord) -> GenCtx {
        let mut terrain = FastNoiseLite::with_seed(self.seed);
        terrain.set_noise_type(Some(NoiseType::OpenSimplex2));
        terrain.set_frequency(Some(self.config.height.frequency));
        GenCtx {
            terrain,
            rng: fastrand::Rng::with_seed(chunk_seed(self.seed, coord)),
            tile_base: (0, 0),
            tile_sx: 0,
            heights: Vec::new(),
        }
    }

    /// Fills `ctx` with surface heights for the `sx` × `sz` columns starting at `(base_x, base_z)`.
    pub fn prepare_height_tile(&self, ctx: &mut GenCtx, base_x: i32, base_z: i32, sx: i32, sz: i32) {
        ctx.tile_base = (base_x, base_z);
        ctx.tile_sx = sx;
        ctx.heights.clear();
        ctx.heights.reserve((sx * sz).max(0) as usize);
        for lz in 0..sz {
            for lx in 0..sx {
                let h = self.surface_height(&ctx.terrain, base_x + lx, base_z + lz);
                ctx.heights.push(h);
            }
        }
    }

    /// Number of filled cells in a column (surface is at `height - 1`).
    pub fn surface_height(&self, terrain: &FastNoiseLite, wx: i32, wz: i32) -> i32 {
        let top = self.dims.sy;
        match self.mode {
            WorldGenMode::Flat { thickness } => thickness.clamp(0, top),
            WorldGenMode::Normal => {
                let h = &self.config.height;
                let lo = h.min_y.clamp(0, top);
                let hi = h.max_y.clamp(lo, top);
                let n = terrain.get_noise_2d(wx as f32, wz as f32) * 0.5 + 0.5;
                let span = (hi - lo) as f32;
                (lo + (n.clamp(0.0, 1.0) * span).round() as i32).clamp(lo, hi)
            }
        }
    }

    /// Material at world cell `(wx, wy, wz)`, `None` for air. Columns must be
    /// prepared with [`World::prepare_height_tile`] first; cells are expected in
    /// a fixed visiting order so the RNG stream stays reproducible.
    pub fn material_at(&self, ctx: &mut GenCtx, wx: i32, wy: i32, wz: i32) -> Option<MaterialKind> {
        let height = match ctx.height_at(wx, wz) {
            Some(h) => h,
            None => self.surface_height(&ctx.terrain, wx, wz),
        };
        if wy < 0 || wy >= height {
            return None;
        }
        let depth = height - 1 - wy;
        if depth == 0 {
            return Some(MaterialKind::Grass);
        }
        if depth <= self.config.surface.dirt_depth {
            return Some(MaterialKind::Dirt);
        }
        if !self.is_flat() && ctx.rng.f32() < self.config.ores.coal_chance {
            return Some(MaterialKind::Coal);
        }
        Some(MaterialKind::Stone)
    }
}

fn chunk_seed(seed: i32, coord: ChunkCoord) -> u64 {
    let x = coord.cx as u32 as u64;
    let z = coord.cz as u32 as u64;
    (seed as u32 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ x.wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
        ^ z.wrapping_mul(0x1656_67B1_9E37_79F9).rotate_left(31)
}
