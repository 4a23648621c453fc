use blocky_blocks::FaceUvs;
use blocky_geom::Vec3;
use blocky_world::{BlockPos, ChunkCoord, Face};

use crate::face::face_quad;
use crate::mesh_build::MeshBuild;

pub const DOOR_WIDTH: f32 = 1.0;
pub const DOOR_HEIGHT: f32 = 2.0;
pub const DOOR_THICKNESS: f32 = 0.0625;

/// Standalone hinged panel for one passthrough block, handed to whatever
/// animates doors. Geometry spans `[0, width] × [0, height] × [0, thickness]`
/// around the hinge.
#[derive(Clone, Debug, PartialEq)]
pub struct DoorGeometry {
    pub chunk: ChunkCoord,
    pub pos: BlockPos,
    /// World-space hinge point (the block's minimum corner).
    pub hinge: Vec3,
    pub mesh: MeshBuild,
}

pub(crate) fn build_door(
    chunk: ChunkCoord,
    pos: BlockPos,
    hinge: Vec3,
    faces: &FaceUvs,
    scale: f32,
) -> DoorGeometry {
    let half = Vec3::new(DOOR_WIDTH, DOOR_HEIGHT, DOOR_THICKNESS) * (0.5 * scale);
    let mut mesh = MeshBuild::default();
    mesh.reserve_quads(6, true);
    for face in Face::ALL {
        mesh.add_quad(face_quad(face, half, half), face.normal(), Some(&faces[face.slot()]));
    }
    DoorGeometry {
        chunk,
        pos,
        hinge,
        mesh,
    }
}
