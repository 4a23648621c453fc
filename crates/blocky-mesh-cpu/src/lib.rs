//! CPU meshing: banded edge meshes, collision meshes and pick lookup tables.
#![forbid(unsafe_code)]

mod door;
mod edge;
mod face;
mod lookup;
mod mesh_build;
mod params;

pub use door::{DOOR_HEIGHT, DOOR_THICKNESS, DOOR_WIDTH, DoorGeometry};
pub use edge::{
    BandMesh, ChunkMeshCPU, build_chunk_mesh, chunk_offset, count_exposed_faces, emits_face,
};
pub use face::{CUBE_CORNERS, face_corners, face_quad};
pub use lookup::{FaceLookup, MeshLookup, OUTLINE_NUDGE};
pub use mesh_build::MeshBuild;
pub use params::MeshParams;
