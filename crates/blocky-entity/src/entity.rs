use blocky_geom::{Aabb, Vec3};
use blocky_runtime::EntityId;

/// Edge length of the default entity box.
pub const ENTITY_SIZE: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameEntity {
    pub id: EntityId,
    pub size: Vec3,
    /// Box centre.
    pub position: Vec3,
    pub heading: Vec3,
}

impl GameEntity {
    pub fn new(id: EntityId, position: Vec3) -> Self {
        Self {
            id,
            size: Vec3::splat(ENTITY_SIZE),
            position,
            heading: Vec3::new(0.0, 0.0, -1.0),
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.aabb_at(self.position)
    }

    #[inline]
    pub fn aabb_at(&self, pos: Vec3) -> Aabb {
        Aabb::from_center_size(pos, self.size)
    }
}
