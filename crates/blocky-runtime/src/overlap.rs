use blocky_geom::Aabb;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Asked before a block is committed; any returned entity vetoes the add.
pub trait EntityOverlap {
    fn overlapping(&self, aabb: &Aabb) -> Vec<EntityId>;
}

pub struct NoEntities;

impl EntityOverlap for NoEntities {
    fn overlapping(&self, _aabb: &Aabb) -> Vec<EntityId> {
        Vec::new()
    }
}
