//! Chunk registry: owns chunks and their meshes, resolves picks into edits
//! and republishes aggregate scene groups lazily.
#![forbid(unsafe_code)]

mod config;
mod error;
mod manager;
mod overlap;
mod raycast;
mod scene;

pub use config::ManagerConfig;
pub use error::EditRejected;
pub use manager::{ChunkEntry, ChunkManager, ChunkState, EditOutcome};
pub use overlap::{EntityId, EntityOverlap, NoEntities};
pub use scene::{MeshHandle, RayHit, SceneGroup, ScenePart};
