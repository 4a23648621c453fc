//! Entities that share space with the block grid: overlap checks for edits
//! and collision-corrected movement against the collision meshes.
#![forbid(unsafe_code)]

mod collide;
mod entity;
mod manager;

pub use collide::{SKIN, adjust_position_update, distance_to};
pub use entity::{ENTITY_SIZE, GameEntity};
pub use manager::EntityManager;
