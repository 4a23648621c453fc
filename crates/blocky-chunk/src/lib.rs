//! Sparse block grid with cross-chunk neighbour links, and seeded population.
#![forbid(unsafe_code)]

mod block;
mod chunk;

pub use block::{Block, NeighborRef};
pub use chunk::{Chunk, ChunkLookup, NoNeighbors};

use blocky_blocks::Palette;
use blocky_world::{BlockPos, ChunkCoord, World};

/// Fills a new chunk from the world's seeded terrain. Neighbour links are left
/// empty; the owner rebuilds them once adjacent chunks exist.
pub fn populate_chunk(world: &World, palette: &Palette, coord: ChunkCoord) -> Chunk {
    let dims = world.dims;
    let (base_x, base_z) = coord.world_origin(dims);
    let mut chunk = Chunk::new(coord, dims);
    let mut ctx = world.make_gen_ctx(coord);
    world.prepare_height_tile(&mut ctx, base_x, base_z, dims.sx, dims.sz);
    for y in 0..dims.sy {
        for z in 0..dims.sz {
            for x in 0..dims.sx {
                if let Some(kind) = world.material_at(&mut ctx, base_x + x, y, base_z + z) {
                    chunk.add(BlockPos::new(x, y, z), palette.get(kind));
                }
            }
        }
    }
    log::trace!(
        "populated chunk ({}, {}) with {} blocks",
        coord.cx,
        coord.cz,
        chunk.len()
    );
    chunk
}
