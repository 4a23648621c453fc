use blocky_geom::Vec3;
use blocky_world::{BlockPos, ChunkCoord, Face};

/// Offset applied along the face normal to outline points so highlights do
/// not z-fight with the face itself.
pub const OUTLINE_NUDGE: f32 = 1e-4;

/// Reverse-mapping record for one emitted quad.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceLookup {
    pub chunk: ChunkCoord,
    /// Chunk-local cell that owns the face.
    pub location: BlockPos,
    /// Cell one step beyond the face; may lie outside the chunk.
    pub add_location: BlockPos,
    pub face: Face,
    /// Closed loop of the face corners in world space.
    pub outline: [Vec3; 5],
    /// The quad's two triangles in world space.
    pub triangles: [[Vec3; 3]; 2],
}

/// Per-band table indexed by quad; triangles `2k` and `2k + 1` share record `k`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshLookup {
    records: Vec<FaceLookup>,
}

impl MeshLookup {
    pub(crate) fn push(&mut self, rec: FaceLookup) {
        self.records.push(rec);
    }

    #[inline]
    pub fn from_triangle(&self, tri: u32) -> Option<&FaceLookup> {
        self.records.get(tri as usize / 2)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FaceLookup> {
        self.records.iter()
    }
}
