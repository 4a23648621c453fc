use blocky_geom::Vec3;
use blocky_world::ChunkCoord;

/// Names one band's render object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle {
    pub chunk: ChunkCoord,
    pub band: u32,
}

/// Result of a ray query against the published meshes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub target: MeshHandle,
    pub triangle: Option<u32>,
    pub distance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePart {
    pub handle: MeshHandle,
    /// World-space translation for the part's chunk-local vertices.
    pub offset: Vec3,
    pub visible: bool,
    pub triangles: usize,
}

/// Aggregate of every built band, regenerated only after a change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneGroup {
    pub parts: Vec<ScenePart>,
}

impl SceneGroup {
    pub fn visible(&self) -> impl Iterator<Item = &ScenePart> {
        self.parts.iter().filter(|p| p.visible)
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.triangles).sum()
    }
}
