use blocky_geom::{Aabb, Vec3, ray_triangle};
use blocky_mesh_cpu::MeshBuild;

/// Slab test; returns the entry distance when the ray meets the box within `max_t`.
pub(crate) fn ray_aabb(origin: Vec3, dir: Vec3, aabb: &Aabb, max_t: f32) -> Option<f32> {
    let o = origin.to_array();
    let d = dir.to_array();
    let lo = aabb.min.to_array();
    let hi = aabb.max.to_array();
    let mut t0 = 0.0f32;
    let mut t1 = max_t;
    for a in 0..3 {
        if d[a].abs() < 1e-8 {
            if o[a] < lo[a] || o[a] > hi[a] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d[a];
        let (mut near, mut far) = ((lo[a] - o[a]) * inv, (hi[a] - o[a]) * inv);
        if near > far {
            std::mem::swap(&mut near, &mut far);
        }
        t0 = t0.max(near);
        t1 = t1.min(far);
        if t0 > t1 {
            return None;
        }
    }
    Some(t0)
}

/// Nearest triangle of `mesh` hit by the ray, as `(triangle, t)`.
pub(crate) fn nearest_triangle(
    mesh: &MeshBuild,
    offset: Vec3,
    origin: Vec3,
    dir: Vec3,
    max_t: f32,
) -> Option<(u32, f32)> {
    let mut best: Option<(u32, f32)> = None;
    for tri in 0..mesh.triangle_count() {
        let Some([a, b, c]) = mesh.triangle(tri, offset) else {
            continue;
        };
        if let Some(t) = ray_triangle(origin, dir, a, b, c) {
            if t <= max_t && best.is_none_or(|(_, bt)| t < bt) {
                best = Some((tri as u32, t));
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slab_hits_and_misses() {
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let t = ray_aabb(Vec3::new(0.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0), &b, 10.0);
        assert!((t.unwrap() - 1.0).abs() < 1e-6);
        assert!(ray_aabb(Vec3::new(0.0, 2.0, 0.5), Vec3::new(1.0, 0.0, 0.0), &b, 10.0).is_none());
        assert!(ray_aabb(Vec3::new(0.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0), &b, 0.5).is_none());
        assert_eq!(ray_aabb(Vec3::new(1.5, 0.5, 0.5), Vec3::new(0.0, 1.0, 0.0), &b, 1.0), Some(0.0));
    }
}
