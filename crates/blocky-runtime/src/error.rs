use blocky_world::{BlockPos, ChunkCoord};
use thiserror::Error;

/// Why an edit request was ignored. Rejections never change registry state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditRejected {
    #[error("no chunk at {chunk:?}")]
    NoChunk { chunk: ChunkCoord },
    #[error("hit does not resolve to a mesh face")]
    NoLookup,
    #[error("target chunk {chunk:?} is outside the generated world")]
    OutsideWorld { chunk: ChunkCoord },
    #[error("insertion at {pos:?} crosses more than one chunk edge")]
    DiagonalCrossing { pos: BlockPos },
    #[error("insertion height {y} is outside the column")]
    OutOfHeight { y: i32 },
    #[error("cell {pos:?} in chunk {chunk:?} is occupied")]
    Occupied { chunk: ChunkCoord, pos: BlockPos },
    #[error("insertion overlaps {count} entities")]
    EntityOverlap { count: usize },
    #[error("unknown material code {code}")]
    UnknownMaterial { code: u16 },
}
