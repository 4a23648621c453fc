use hashbrown::HashMap;

use blocky_blocks::MaterialDef;
use blocky_world::{BlockPos, ChunkCoord, ChunkDims, Face};

use crate::block::{Block, NeighborRef};

/// Read access to sibling chunks while neighbour links are resolved.
pub trait ChunkLookup {
    fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk>;
}

impl<S: std::hash::BuildHasher> ChunkLookup for HashMap<ChunkCoord, Chunk, S> {
    fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.get(&coord)
    }
}

/// Lookup with no loaded siblings; every cross-chunk face resolves to absent.
pub struct NoNeighbors;

impl ChunkLookup for NoNeighbors {
    fn chunk(&self, _coord: ChunkCoord) -> Option<&Chunk> {
        None
    }
}

/// Sparse grid of blocks for one chunk column.
#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    dims: ChunkDims,
    blocks: HashMap<BlockPos, Block>,
}

impl Chunk {
    pub fn new(coord: ChunkCoord, dims: ChunkDims) -> Self {
        Self {
            coord,
            dims,
            blocks: HashMap::new(),
        }
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn dims(&self) -> ChunkDims {
        self.dims
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    pub fn get(&self, pos: BlockPos) -> Option<&Block> {
        self.blocks.get(&pos)
    }

    #[inline]
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.blocks.contains_key(&pos)
    }

    /// Places a block. Returns false when the cell is outside the chunk or
    /// already occupied. Neighbour links are not touched.
    pub fn add(&mut self, pos: BlockPos, def: &MaterialDef) -> bool {
        if !self.dims.contains(pos) || self.blocks.contains_key(&pos) {
            return false;
        }
        self.blocks.insert(pos, Block::new(pos, def));
        true
    }

    /// Removes a block. Returns false when the cell was empty.
    pub fn remove(&mut self, pos: BlockPos) -> bool {
        self.blocks.remove(&pos).is_some()
    }

    /// Recomputes every block's six neighbour links. In-chunk neighbours come
    /// from this chunk; faces on the horizontal boundary consult `lookup`, and
    /// faces past the top or bottom of the column are absent.
    pub fn rebuild_neighbors<L: ChunkLookup + ?Sized>(&mut self, lookup: &L) {
        let resolved: Vec<(BlockPos, [Option<NeighborRef>; 6])> = self
            .blocks
            .keys()
            .map(|&pos| (pos, Face::ALL.map(|f| self.resolve(pos, f, lookup))))
            .collect();
        for (pos, links) in resolved {
            if let Some(block) = self.blocks.get_mut(&pos) {
                block.neighbors = links;
            }
        }
    }

    /// The block across `face` from `pos`, following into adjacent chunks.
    pub fn resolve<L: ChunkLookup + ?Sized>(
        &self,
        pos: BlockPos,
        face: Face,
        lookup: &L,
    ) -> Option<NeighborRef> {
        let n = pos.offset(face.delta());
        if n.y < 0 || n.y >= self.dims.sy {
            return None;
        }
        if self.dims.contains_xz(n) {
            return self.blocks.get(&n).map(|b| NeighborRef {
                chunk: self.coord,
                pos: n,
                kind: b.kind,
            });
        }
        let coord = self
            .coord
            .offset(n.x.div_euclid(self.dims.sx), n.z.div_euclid(self.dims.sz));
        let local = BlockPos::new(n.x.rem_euclid(self.dims.sx), n.y, n.z.rem_euclid(self.dims.sz));
        let other = lookup.chunk(coord)?;
        other.get(local).map(|b| NeighborRef {
            chunk: coord,
            pos: local,
            kind: b.kind,
        })
    }

    /// Positions in emission order: y, then z, then x.
    pub fn sorted_positions(&self) -> Vec<BlockPos> {
        let mut keys: Vec<BlockPos> = self.blocks.keys().copied().collect();
        keys.sort_unstable_by_key(|p| (p.y, p.z, p.x));
        keys
    }

    /// Visits every block once, in emission order, with its visit index.
    pub fn iterate<F: FnMut(usize, &Block)>(&self, mut f: F) {
        for (n, pos) in self.sorted_positions().into_iter().enumerate() {
            if let Some(block) = self.blocks.get(&pos) {
                f(n, block);
            }
        }
    }

    /// Unordered view of the blocks.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }
}
