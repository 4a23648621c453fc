use blocky_blocks::{BlockKind, FaceUvs, MaterialDef, MaterialKind};
use blocky_world::{BlockPos, ChunkCoord, Face};

/// Non-owning link to the block on the other side of a face. It names the
/// cell and caches the neighbour's kind; it is recomputed wholesale and never
/// patched in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NeighborRef {
    pub chunk: ChunkCoord,
    pub pos: BlockPos,
    pub kind: BlockKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    /// Chunk-local position.
    pub pos: BlockPos,
    pub material: MaterialKind,
    pub kind: BlockKind,
    pub color: u32,
    /// Per-face UVs, precomputed from the palette when the block is placed.
    pub faces: FaceUvs,
    pub(crate) neighbors: [Option<NeighborRef>; 6],
}

impl Block {
    pub fn new(pos: BlockPos, def: &MaterialDef) -> Self {
        Self {
            pos,
            material: def.kind,
            kind: def.block_kind,
            color: def.color,
            faces: def.faces,
            neighbors: [None; 6],
        }
    }

    #[inline]
    pub fn neighbor(&self, face: Face) -> Option<&NeighborRef> {
        self.neighbors[face.slot()].as_ref()
    }

    #[inline]
    pub fn neighbors(&self) -> &[Option<NeighborRef>; 6] {
        &self.neighbors
    }

    /// A face is drawn when nothing is behind it or the neighbour does not occlude.
    #[inline]
    pub fn is_exposed(&self, face: Face) -> bool {
        self.neighbor(face).is_none_or(|n| !n.kind.occludes())
    }

    #[inline]
    pub fn above(&self) -> Option<&NeighborRef> {
        self.neighbor(Face::PosY)
    }
    #[inline]
    pub fn below(&self) -> Option<&NeighborRef> {
        self.neighbor(Face::NegY)
    }
    #[inline]
    pub fn front(&self) -> Option<&NeighborRef> {
        self.neighbor(Face::NegZ)
    }
    #[inline]
    pub fn back(&self) -> Option<&NeighborRef> {
        self.neighbor(Face::PosZ)
    }
    #[inline]
    pub fn right(&self) -> Option<&NeighborRef> {
        self.neighbor(Face::NegX)
    }
    #[inline]
    pub fn left(&self) -> Option<&NeighborRef> {
        self.neighbor(Face::PosX)
    }

    #[inline]
    pub fn uvs(&self, face: Face) -> &[f32; 8] {
        &self.faces[face.slot()]
    }
}
