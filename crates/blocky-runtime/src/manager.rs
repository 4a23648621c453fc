use std::sync::Arc;

use blocky_blocks::{MaterialSelection, Palette};
use blocky_chunk::{Chunk, ChunkLookup, populate_chunk};
use blocky_geom::{Aabb, Vec3};
use blocky_mesh_cpu::{ChunkMeshCPU, DoorGeometry, FaceLookup, MeshBuild, build_chunk_mesh};
use blocky_world::{BlockPos, ChunkCoord, World};
use hashbrown::HashMap;

use crate::config::ManagerConfig;
use crate::error::EditRejected;
use crate::overlap::EntityOverlap;
use crate::raycast::{nearest_triangle, ray_aabb};
use crate::scene::{MeshHandle, RayHit, ScenePart, SceneGroup};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkState {
    Unbuilt,
    Built,
}

/// A chunk and the meshes derived from it. The registry owns the association;
/// chunks never point at their meshes.
#[derive(Clone, Debug)]
pub struct ChunkEntry {
    pub chunk: Chunk,
    pub mesh: Option<ChunkMeshCPU>,
    pub visible: bool,
}

impl ChunkEntry {
    pub fn state(&self) -> ChunkState {
        if self.mesh.is_some() {
            ChunkState::Built
        } else {
            ChunkState::Unbuilt
        }
    }
}

/// A committed edit and the chunks whose meshes were regenerated for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    pub chunk: ChunkCoord,
    pub pos: BlockPos,
    pub rebuilt: Vec<ChunkCoord>,
}

struct ChunkTable(HashMap<ChunkCoord, ChunkEntry>);

impl ChunkLookup for ChunkTable {
    fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.0.get(&coord).map(|e| &e.chunk)
    }
}

pub struct ChunkManager {
    world: World,
    palette: Arc<Palette>,
    config: ManagerConfig,
    chunks: ChunkTable,
    viewer: Option<ChunkCoord>,
    dirty: bool,
    scene: SceneGroup,
    collision_scene: SceneGroup,
    scene_generation: u64,
}

impl ChunkManager {
    pub fn new(world: World, palette: Arc<Palette>, config: ManagerConfig) -> Self {
        Self {
            world,
            palette,
            config,
            chunks: ChunkTable(HashMap::new()),
            viewer: None,
            dirty: true,
            scene: SceneGroup::default(),
            collision_scene: SceneGroup::default(),
            scene_generation: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Populates chunks `-r..r` on both axes. Meshes are built on first read.
    pub fn initialize(&mut self, grid_radius: i32) {
        self.chunks.0.clear();
        for cz in -grid_radius..grid_radius {
            for cx in -grid_radius..grid_radius {
                let coord = ChunkCoord::new(cx, cz);
                let chunk = populate_chunk(&self.world, &self.palette, coord);
                let visible = self.is_in_view(coord);
                self.chunks.0.insert(
                    coord,
                    ChunkEntry {
                        chunk,
                        mesh: None,
                        visible,
                    },
                );
            }
        }
        self.dirty = true;
        log::info!(
            "initialized {} chunks (radius {}, seed {})",
            self.chunks.0.len(),
            grid_radius,
            self.world.seed
        );
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.0.is_empty()
    }

    pub fn get_chunk(&self, cx: i32, cz: i32) -> Option<&ChunkEntry> {
        self.chunks.0.get(&ChunkCoord::new(cx, cz))
    }

    /// Every loaded chunk coordinate, sorted.
    pub fn chunk_coords(&self) -> Vec<ChunkCoord> {
        let mut v: Vec<ChunkCoord> = self.chunks.0.keys().copied().collect();
        v.sort_unstable();
        v
    }

    pub fn block_count(&self) -> usize {
        self.chunks.0.values().map(|e| e.chunk.len()).sum()
    }

    fn is_in_view(&self, coord: ChunkCoord) -> bool {
        self.viewer
            .is_none_or(|v| v.chebyshev(coord) <= self.config.view_radius)
    }

    /// Chunk containing a world-space point.
    pub fn chunk_at(&self, pos: Vec3) -> ChunkCoord {
        let s = self.config.mesh.scale;
        self.world
            .chunk_of((pos.x / s).floor() as i32, (pos.z / s).floor() as i32)
    }

    /// Re-derives visibility from the viewer's chunk.
    pub fn set_viewer_location(&mut self, pos: Vec3) {
        let viewer = self.chunk_at(pos);
        if self.viewer == Some(viewer) {
            return;
        }
        self.viewer = Some(viewer);
        let radius = self.config.view_radius;
        for (coord, entry) in self.chunks.0.iter_mut() {
            entry.visible = viewer.chebyshev(*coord) <= radius;
        }
        self.dirty = true;
        log::debug!("viewer moved to chunk ({}, {})", viewer.cx, viewer.cz);
    }

    fn chunk_bounds(&self, coord: ChunkCoord) -> Aabb {
        let dims = self.world.dims;
        let s = self.config.mesh.scale;
        let (x, z) = coord.world_origin(dims);
        let min = Vec3::new(x as f32, 0.0, z as f32) * s;
        Aabb::new(min, min + Vec3::new(dims.sx as f32, dims.sy as f32, dims.sz as f32) * s)
    }

    /// Handles of built bands in chunks overlapping the square of half-width
    /// `selection_radius` centred on `pos` in xz.
    pub fn selection_meshes(&mut self, pos: Vec3) -> Vec<MeshHandle> {
        self.ensure_built();
        let r = self.config.selection_radius;
        let lo = self.chunk_at(pos - Vec3::new(r, 0.0, r));
        let hi = self.chunk_at(pos + Vec3::new(r, 0.0, r));
        let mut out = Vec::new();
        for coord in self.chunk_coords() {
            if coord.cx < lo.cx || coord.cx > hi.cx || coord.cz < lo.cz || coord.cz > hi.cz {
                continue;
            }
            if let Some(mesh) = self.chunks.0.get(&coord).and_then(|e| e.mesh.as_ref()) {
                out.extend(mesh.bands.iter().map(|band| MeshHandle {
                    chunk: coord,
                    band: band.band,
                }));
            }
        }
        out
    }

    /// Nearest hit against the visual meshes of visible chunks.
    pub fn raycast(&mut self, origin: Vec3, dir: Vec3, max_dist: f32) -> Option<RayHit> {
        let len = dir.length();
        if len < 1e-6 {
            return None;
        }
        let dir = dir / len;
        self.ensure_built();
        let mut best: Option<RayHit> = None;
        for coord in self.chunk_coords() {
            let Some(entry) = self.chunks.0.get(&coord) else {
                continue;
            };
            let Some(mesh) = entry.mesh.as_ref().filter(|_| entry.visible) else {
                continue;
            };
            let limit = best.map_or(max_dist, |b| b.distance);
            if ray_aabb(origin, dir, &self.chunk_bounds(coord), limit).is_none() {
                continue;
            }
            for band in &mesh.bands {
                let limit = best.map_or(max_dist, |b| b.distance);
                if let Some((tri, t)) = nearest_triangle(&band.visual, mesh.offset, origin, dir, limit) {
                    best = Some(RayHit {
                        target: MeshHandle {
                            chunk: coord,
                            band: band.band,
                        },
                        triangle: Some(tri),
                        distance: t,
                    });
                }
            }
        }
        best
    }

    /// Lookup record for the hit triangle, if the hit names a live band.
    pub fn resolve_pick(&self, hit: &RayHit) -> Option<&FaceLookup> {
        let entry = self.chunks.0.get(&hit.target.chunk)?;
        let band = entry.mesh.as_ref()?.band(hit.target.band)?;
        band.lookup.from_triangle(hit.triangle?)
    }

    fn pick(&self, hit: &RayHit) -> Result<FaceLookup, EditRejected> {
        if !self.chunks.0.contains_key(&hit.target.chunk) {
            return Err(EditRejected::NoChunk {
                chunk: hit.target.chunk,
            });
        }
        self.resolve_pick(hit).cloned().ok_or(EditRejected::NoLookup)
    }

    /// Maps a chunk-local position that may sit one step past the horizontal
    /// edge into the chunk that owns it.
    pub fn adjust_chunk(
        &self,
        coord: ChunkCoord,
        pos: BlockPos,
    ) -> Result<(ChunkCoord, BlockPos), EditRejected> {
        let dims = self.world.dims;
        if pos.y < 0 || pos.y >= dims.sy {
            return Err(EditRejected::OutOfHeight { y: pos.y });
        }
        let step = |v: i32, size: i32| -> Option<i32> {
            match v {
                -1 => Some(-1),
                v if (0..size).contains(&v) => Some(0),
                v if v == size => Some(1),
                _ => None,
            }
        };
        let (Some(dx), Some(dz)) = (step(pos.x, dims.sx), step(pos.z, dims.sz)) else {
            return Err(EditRejected::DiagonalCrossing { pos });
        };
        if dx != 0 && dz != 0 {
            return Err(EditRejected::DiagonalCrossing { pos });
        }
        Ok((
            coord.offset(dx, dz),
            BlockPos::new(pos.x - dx * dims.sx, pos.y, pos.z - dz * dims.sz),
        ))
    }

    /// The edited chunk followed by every loaded chunk sharing the edited
    /// cell's boundary edge.
    pub fn affected_neighbors(&self, coord: ChunkCoord, pos: BlockPos) -> Vec<ChunkCoord> {
        let dims = self.world.dims;
        let mut out = vec![coord];
        let mut push = |dx: i32, dz: i32| {
            let n = coord.offset(dx, dz);
            if self.chunks.0.contains_key(&n) && !out.contains(&n) {
                out.push(n);
            }
        };
        if pos.x == dims.sx - 1 {
            push(1, 0);
        }
        if pos.x == 0 {
            push(-1, 0);
        }
        if pos.z == dims.sz - 1 {
            push(0, 1);
        }
        if pos.z == 0 {
            push(0, -1);
        }
        out
    }

    fn relink(&mut self, coord: ChunkCoord) {
        if let Some(mut entry) = self.chunks.0.remove(&coord) {
            entry.chunk.rebuild_neighbors(&self.chunks);
            self.chunks.0.insert(coord, entry);
        }
    }

    /// Re-derives neighbour links for every listed chunk, then regenerates
    /// their meshes. Links for the whole set settle before any mesh is read.
    pub fn rebuild_meshes(&mut self, coords: &[ChunkCoord]) {
        for &coord in coords {
            self.relink(coord);
        }
        let params = self.config.mesh;
        for coord in coords {
            if let Some(entry) = self.chunks.0.get_mut(coord) {
                entry.mesh = Some(build_chunk_mesh(&entry.chunk, &params));
            }
        }
        self.dirty = true;
    }

    fn ensure_built(&mut self) {
        let unbuilt: Vec<ChunkCoord> = self
            .chunk_coords()
            .into_iter()
            .filter(|c| self.chunks.0.get(c).is_some_and(|e| e.mesh.is_none()))
            .collect();
        if !unbuilt.is_empty() {
            log::debug!("building {} chunk meshes", unbuilt.len());
            self.rebuild_meshes(&unbuilt);
        }
    }

    /// Places a block against the picked face.
    pub fn add_block_at(
        &mut self,
        hit: &RayHit,
        selection: &MaterialSelection,
        entities: &dyn EntityOverlap,
    ) -> Result<EditOutcome, EditRejected> {
        let res = self.try_add(hit, selection, entities);
        log_outcome("add", &res);
        res
    }

    fn try_add(
        &mut self,
        hit: &RayHit,
        selection: &MaterialSelection,
        entities: &dyn EntityOverlap,
    ) -> Result<EditOutcome, EditRejected> {
        let kind = selection.kind().ok_or(EditRejected::UnknownMaterial {
            code: selection.code,
        })?;
        let rec = self.pick(hit)?;
        let (coord, pos) = self.adjust_chunk(rec.chunk, rec.add_location)?;
        let Some(entry) = self.chunks.0.get(&coord) else {
            return Err(EditRejected::OutsideWorld { chunk: coord });
        };
        if entry.chunk.contains(pos) {
            return Err(EditRejected::Occupied { chunk: coord, pos });
        }
        let s = self.config.mesh.scale;
        let (ox, oz) = coord.world_origin(self.world.dims);
        let min = Vec3::new((ox + pos.x) as f32, pos.y as f32, (oz + pos.z) as f32) * s;
        let blockers = entities.overlapping(&Aabb::new(min, min + Vec3::splat(s)));
        if !blockers.is_empty() {
            return Err(EditRejected::EntityOverlap {
                count: blockers.len(),
            });
        }
        let def = self.palette.get(kind);
        let Some(entry) = self.chunks.0.get_mut(&coord) else {
            return Err(EditRejected::OutsideWorld { chunk: coord });
        };
        if !entry.chunk.add(pos, def) {
            return Err(EditRejected::Occupied { chunk: coord, pos });
        }
        let rebuilt = self.affected_neighbors(coord, pos);
        self.rebuild_meshes(&rebuilt);
        Ok(EditOutcome {
            chunk: coord,
            pos,
            rebuilt,
        })
    }

    /// Removes the block that owns the picked face.
    pub fn remove_block_at(&mut self, hit: &RayHit) -> Result<EditOutcome, EditRejected> {
        let res = self.try_remove(hit);
        log_outcome("remove", &res);
        res
    }

    fn try_remove(&mut self, hit: &RayHit) -> Result<EditOutcome, EditRejected> {
        let rec = self.pick(hit)?;
        let (coord, pos) = (rec.chunk, rec.location);
        let Some(entry) = self.chunks.0.get_mut(&coord) else {
            return Err(EditRejected::NoChunk { chunk: coord });
        };
        entry.chunk.remove(pos);
        let rebuilt = self.affected_neighbors(coord, pos);
        self.rebuild_meshes(&rebuilt);
        Ok(EditOutcome {
            chunk: coord,
            pos,
            rebuilt,
        })
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of times the aggregate groups have been regenerated.
    #[inline]
    pub fn scene_generation(&self) -> u64 {
        self.scene_generation
    }

    fn refresh_scene(&mut self) {
        if !self.dirty {
            return;
        }
        self.ensure_built();
        let mut visual = Vec::new();
        let mut collision = Vec::new();
        for coord in self.chunk_coords() {
            let Some(entry) = self.chunks.0.get(&coord) else {
                continue;
            };
            let Some(mesh) = entry.mesh.as_ref() else {
                continue;
            };
            for band in &mesh.bands {
                let handle = MeshHandle {
                    chunk: coord,
                    band: band.band,
                };
                visual.push(ScenePart {
                    handle,
                    offset: mesh.offset,
                    visible: entry.visible,
                    triangles: band.visual.triangle_count(),
                });
                collision.push(ScenePart {
                    handle,
                    offset: mesh.offset,
                    visible: entry.visible,
                    triangles: band.collision.triangle_count(),
                });
            }
        }
        self.scene = SceneGroup { parts: visual };
        self.collision_scene = SceneGroup { parts: collision };
        self.dirty = false;
        self.scene_generation += 1;
        log::debug!(
            "scene regenerated: {} parts, {} triangles",
            self.scene.parts.len(),
            self.scene.triangle_count()
        );
    }

    /// Aggregate visual group, regenerated on read when stale.
    pub fn mesh(&mut self) -> &SceneGroup {
        self.refresh_scene();
        &self.scene
    }

    /// Aggregate collision group, regenerated on read when stale.
    pub fn collision_mesh(&mut self) -> &SceneGroup {
        self.refresh_scene();
        &self.collision_scene
    }

    pub fn geometry(&self, handle: MeshHandle) -> Option<&MeshBuild> {
        let entry = self.chunks.0.get(&handle.chunk)?;
        Some(&entry.mesh.as_ref()?.band(handle.band)?.visual)
    }

    pub fn collision_geometry(&self, handle: MeshHandle) -> Option<&MeshBuild> {
        let entry = self.chunks.0.get(&handle.chunk)?;
        Some(&entry.mesh.as_ref()?.band(handle.band)?.collision)
    }

    /// World offset of a built chunk's meshes.
    pub fn mesh_offset(&self, coord: ChunkCoord) -> Option<Vec3> {
        self.chunks.0.get(&coord)?.mesh.as_ref().map(|m| m.offset)
    }

    /// Door hand-offs from every built chunk.
    pub fn doors(&self) -> impl Iterator<Item = &DoorGeometry> {
        self.chunks
            .0
            .values()
            .filter_map(|e| e.mesh.as_ref())
            .flat_map(|m| m.doors.iter())
    }
}

fn log_outcome(op: &str, res: &Result<EditOutcome, EditRejected>) {
    match res {
        Ok(o) => log::info!(
            target: "edits",
            "{op} ({}, {}, {}) in chunk ({}, {}); rebuilt {}",
            o.pos.x,
            o.pos.y,
            o.pos.z,
            o.chunk.cx,
            o.chunk.cz,
            o.rebuilt.len()
        ),
        Err(e) => log::debug!(target: "edits", "{op} ignored: {e}"),
    }
}
