use blocky_geom::{Aabb, Vec3, ray_triangle};
use blocky_mesh_cpu::MeshBuild;
use blocky_runtime::ChunkManager;

use crate::entity::GameEntity;

/// Gap kept between an entity box and any face it is stopped against.
pub const SKIN: f32 = 1e-3;

/// Axis-aligned collision quad in world space.
#[derive(Clone, Copy, Debug)]
struct Quad {
    axis: usize,
    plane: f32,
    min: [f32; 3],
    max: [f32; 3],
}

fn collect_quads(mesh: &MeshBuild, offset: Vec3, out: &mut Vec<Quad>) {
    for q in 0..mesh.quad_count() {
        let base = (q * 4) as u32;
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for v in base..base + 4 {
            let p = (mesh.vertex(v) + offset).to_array();
            for a in 0..3 {
                min[a] = min[a].min(p[a]);
                max[a] = max[a].max(p[a]);
            }
        }
        let n = &mesh.norm[q * 12..q * 12 + 3];
        let Some(axis) = (0..3).find(|&a| n[a].abs() > 0.5) else {
            continue;
        };
        out.push(Quad {
            axis,
            plane: min[axis],
            min,
            max,
        });
    }
}

/// Collision quads of every built chunk touched by `region`.
fn quads_near(chunks: &ChunkManager, region: &Aabb) -> Vec<Quad> {
    let lo = chunks.chunk_at(region.min);
    let hi = chunks.chunk_at(region.max);
    let mut out = Vec::new();
    for cz in lo.cz..=hi.cz {
        for cx in lo.cx..=hi.cx {
            let Some(mesh) = chunks.get_chunk(cx, cz).and_then(|e| e.mesh.as_ref()) else {
                continue;
            };
            for band in &mesh.bands {
                collect_quads(&band.collision, mesh.offset, &mut out);
            }
        }
    }
    out
}

fn sweep_axis(quads: &[Quad], aabb: &Aabb, axis: usize, amt: f32) -> f32 {
    if amt == 0.0 {
        return 0.0;
    }
    let lo = aabb.min.to_array();
    let hi = aabb.max.to_array();
    let mut allowed = amt;
    for q in quads.iter().filter(|q| q.axis == axis) {
        let overlaps = (0..3)
            .filter(|&a| a != axis)
            .all(|a| lo[a] < q.max[a] && hi[a] > q.min[a]);
        if !overlaps {
            continue;
        }
        if allowed > 0.0 && hi[axis] <= q.plane + SKIN && hi[axis] + allowed > q.plane - SKIN {
            allowed = (q.plane - SKIN - hi[axis]).max(0.0);
        } else if allowed < 0.0 && lo[axis] >= q.plane - SKIN && lo[axis] + allowed < q.plane + SKIN {
            allowed = (q.plane + SKIN - lo[axis]).min(0.0);
        }
    }
    allowed
}

/// Moves `entity`'s box from its current position toward `next` one axis at a
/// time (vertical first), clamping each axis just short of any collision quad
/// the box would cross. The entity itself is not modified.
pub fn adjust_position_update(entity: &GameEntity, next: Vec3, chunks: &ChunkManager) -> Vec3 {
    let start = entity.aabb();
    let end = entity.aabb_at(next);
    let region = Aabb::new(
        Vec3::new(
            start.min.x.min(end.min.x),
            start.min.y.min(end.min.y),
            start.min.z.min(end.min.z),
        ),
        Vec3::new(
            start.max.x.max(end.max.x),
            start.max.y.max(end.max.y),
            start.max.z.max(end.max.z),
        ),
    );
    let quads = quads_near(chunks, &region);
    let delta = (next - entity.position).to_array();
    let mut pos = entity.position.to_array();
    for axis in [1, 0, 2] {
        let aabb = entity.aabb_at(Vec3::from(pos));
        pos[axis] += sweep_axis(&quads, &aabb, axis, delta[axis]);
    }
    let out = Vec3::from(pos);
    if (out - next).length() > 1e-6 {
        log::trace!("entity {} blocked: wanted {:?}, reached {:?}", entity.id.0, next, out);
    }
    out
}

/// Shortest distance along `direction` from any corner of the entity box to
/// a collision face, looking no further than `max_dist`.
pub fn distance_to(
    entity: &GameEntity,
    chunks: &ChunkManager,
    direction: Vec3,
    max_dist: f32,
) -> Option<f32> {
    let len = direction.length();
    if len < 1e-6 {
        return None;
    }
    let dir = direction / len;
    let aabb = entity.aabb();
    let reach = aabb.translated(dir * max_dist);
    let region = Aabb::new(
        Vec3::new(
            aabb.min.x.min(reach.min.x),
            aabb.min.y.min(reach.min.y),
            aabb.min.z.min(reach.min.z),
        ),
        Vec3::new(
            aabb.max.x.max(reach.max.x),
            aabb.max.y.max(reach.max.y),
            aabb.max.z.max(reach.max.z),
        ),
    );
    let lo = chunks.chunk_at(region.min);
    let hi = chunks.chunk_at(region.max);
    let corners = aabb.corners();
    let mut best: Option<f32> = None;
    for cz in lo.cz..=hi.cz {
        for cx in lo.cx..=hi.cx {
            let Some(mesh) = chunks.get_chunk(cx, cz).and_then(|e| e.mesh.as_ref()) else {
                continue;
            };
            for band in &mesh.bands {
                for tri in 0..band.collision.triangle_count() {
                    let Some([a, b, c]) = band.collision.triangle(tri, mesh.offset) else {
                        continue;
                    };
                    for &o in &corners {
                        if let Some(t) = ray_triangle(o, dir, a, b, c) {
                            if t <= max_dist && best.is_none_or(|bt| t < bt) {
                                best = Some(t);
                            }
                        }
                    }
                }
            }
        }
    }
    best
}
