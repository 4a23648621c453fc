use blocky_blocks::BlockKind;
use blocky_chunk::{Block, Chunk, ChunkLookup};
use blocky_geom::Vec3;
use blocky_world::{ChunkCoord, Face};

use crate::door::{DoorGeometry, build_door};
use crate::face::face_quad;
use crate::lookup::{FaceLookup, MeshLookup, OUTLINE_NUDGE};
use crate::mesh_build::MeshBuild;
use crate::params::MeshParams;

/// Geometry for one vertical band of a chunk.
#[derive(Clone, Debug, Default)]
pub struct BandMesh {
    pub band: u32,
    pub visual: MeshBuild,
    pub collision: MeshBuild,
    pub lookup: MeshLookup,
}

/// Everything derived from one chunk. Mesh positions are chunk-local;
/// `offset` places them in the world.
#[derive(Clone, Debug, Default)]
pub struct ChunkMeshCPU {
    pub coord: ChunkCoord,
    pub offset: Vec3,
    pub bands: Vec<BandMesh>,
    pub doors: Vec<DoorGeometry>,
}

impl ChunkMeshCPU {
    pub fn band(&self, band: u32) -> Option<&BandMesh> {
        self.bands.iter().find(|b| b.band == band)
    }

    pub fn quad_count(&self) -> usize {
        self.bands.iter().map(|b| b.visual.quad_count()).sum()
    }
}

/// World-space origin of a chunk's meshes.
#[inline]
pub fn chunk_offset(chunk: &Chunk, scale: f32) -> Vec3 {
    let (x, z) = chunk.coord().world_origin(chunk.dims());
    Vec3::new(x as f32, 0.0, z as f32) * scale
}

/// True when `block` should draw `face`: nothing behind it, or a neighbour
/// that does not occlude.
#[inline]
pub fn emits_face(block: &Block, face: Face) -> bool {
    block.kind == BlockKind::Normal && block.is_exposed(face)
}

/// Builds banded visual and collision meshes plus door hand-offs from the
/// chunk's current neighbour links. Callers must rebuild links first.
pub fn build_chunk_mesh(chunk: &Chunk, params: &MeshParams) -> ChunkMeshCPU {
    let coord = chunk.coord();
    let scale = params.scale;
    let offset = chunk_offset(chunk, scale);
    let band_h = params.band_height.max(1);
    let band_count = chunk.dims().band_count(band_h).max(0) as usize;
    let mut bands: Vec<BandMesh> = (0..band_count)
        .map(|b| BandMesh {
            band: b as u32,
            ..Default::default()
        })
        .collect();
    let mut doors = Vec::new();

    let vis_half = Vec3::splat(0.5 * scale);
    let col_half = Vec3::splat((0.5 - params.collision_inset / 2.0) * scale);

    chunk.iterate(|_, block| {
        let p = block.pos;
        let local_min = Vec3::from((p.x, p.y, p.z)) * scale;
        if block.kind != BlockKind::Normal {
            doors.push(build_door(coord, p, local_min + offset, &block.faces, scale));
            return;
        }
        let Some(band) = bands.get_mut((p.y / band_h) as usize) else {
            return;
        };
        let center = local_min + vis_half;
        for face in Face::ALL {
            if !emits_face(block, face) {
                continue;
            }
            let n = face.normal();
            let quad = face_quad(face, center, vis_half);
            band.visual.add_quad(quad, n, Some(block.uvs(face)));
            band.collision
                .add_quad(face_quad(face, center, col_half), n, None);

            let world = quad.map(|v| v + offset);
            let nudge = n * OUTLINE_NUDGE;
            band.lookup.push(FaceLookup {
                chunk: coord,
                location: p,
                add_location: p.offset(face.delta()),
                face,
                outline: [
                    world[0] + nudge,
                    world[1] + nudge,
                    world[2] + nudge,
                    world[3] + nudge,
                    world[0] + nudge,
                ],
                triangles: [[world[0], world[1], world[2]], [world[0], world[2], world[3]]],
            });
        }
    });

    bands.retain(|b| !b.visual.is_empty());
    log::trace!(
        "meshed chunk ({}, {}): {} bands, {} quads, {} doors",
        coord.cx,
        coord.cz,
        bands.len(),
        bands.iter().map(|b| b.visual.quad_count()).sum::<usize>(),
        doors.len()
    );
    ChunkMeshCPU {
        coord,
        offset,
        bands,
        doors,
    }
}

/// Reference face count resolved directly from occupancy, ignoring cached links.
pub fn count_exposed_faces<L: ChunkLookup + ?Sized>(chunk: &Chunk, lookup: &L) -> usize {
    let mut n = 0;
    for block in chunk.blocks() {
        if block.kind != BlockKind::Normal {
            continue;
        }
        for face in Face::ALL {
            let exposed = chunk
                .resolve(block.pos, face, lookup)
                .is_none_or(|nb| !nb.kind.occludes());
            if exposed {
                n += 1;
            }
        }
    }
    n
}
