use blocky_geom::{Aabb, Vec3};
use blocky_runtime::{ChunkManager, EntityId, EntityOverlap};

use crate::collide::adjust_position_update;
use crate::entity::GameEntity;

/// Owns every entity; the first one spawned is the player.
#[derive(Debug, Default)]
pub struct EntityManager {
    entities: Vec<GameEntity>,
    next_id: u32,
}

impl EntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, position: Vec3) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(GameEntity::new(id, position));
        log::debug!("spawned entity {} at {:?}", id.0, position);
        id
    }

    pub fn player(&self) -> Option<&GameEntity> {
        self.entities.first()
    }

    pub fn get(&self, id: EntityId) -> Option<&GameEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut GameEntity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEntity> {
        self.entities.iter()
    }

    /// Moves an entity toward `next`, stopping at collision faces. Returns
    /// the position actually reached.
    pub fn move_entity(&mut self, id: EntityId, next: Vec3, chunks: &ChunkManager) -> Option<Vec3> {
        let entity = self.get_mut(id)?;
        let reached = adjust_position_update(entity, next, chunks);
        let moved = reached - entity.position;
        let flat = Vec3::new(moved.x, 0.0, moved.z);
        if flat.length() > 1e-6 {
            entity.heading = flat.normalized();
        }
        entity.position = reached;
        Some(reached)
    }
}

impl EntityOverlap for EntityManager {
    fn overlapping(&self, aabb: &Aabb) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.aabb().intersects(aabb))
            .map(|e| e.id)
            .collect()
    }
}
