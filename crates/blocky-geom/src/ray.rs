use crate::Vec3;

/// Hits closer than this are treated as self-intersections and ignored.
pub const RAY_EPSILON: f32 = 1e-6;

/// Möller–Trumbore ray/triangle test. Returns the distance along `dir`
/// (in units of `dir`'s length) for hits on either side of the triangle.
pub fn ray_triangle(origin: Vec3, dir: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let e1 = b - a;
    let e2 = c - a;
    let p = dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < RAY_EPSILON {
        return None;
    }
    let inv = 1.0 / det;
    let s = origin - a;
    let u = s.dot(p) * inv;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = dir.dot(q) * inv;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv;
    if t > RAY_EPSILON { Some(t) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_triangle_in_front() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 0.0, 1.0);
        let t = ray_triangle(Vec3::new(0.25, 2.0, 0.25), Vec3::new(0.0, -1.0, 0.0), a, b, c);
        assert!(matches!(t, Some(d) if (d - 2.0).abs() < 1e-5));
    }

    #[test]
    fn misses_behind_and_outside() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 0.0, 1.0);
        // Pointing away.
        assert!(ray_triangle(Vec3::new(0.25, 2.0, 0.25), Vec3::UP, a, b, c).is_none());
        // Past the hypotenuse.
        assert!(
            ray_triangle(Vec3::new(0.9, 2.0, 0.9), Vec3::new(0.0, -1.0, 0.0), a, b, c).is_none()
        );
        // Parallel to the plane.
        assert!(
            ray_triangle(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0), a, b, c).is_none()
        );
    }
}
