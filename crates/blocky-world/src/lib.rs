//! Grid coordinates, chunk sizing and seeded terrain sampling.
#![forbid(unsafe_code)]

mod coords;
mod face;
mod gen_ctx;
mod world;
pub mod worldgen;

pub use coords::{BlockPos, ChunkCoord, ChunkDims};
pub use face::Face;
pub use gen_ctx::GenCtx;
pub use world::{World, WorldGenMode};
