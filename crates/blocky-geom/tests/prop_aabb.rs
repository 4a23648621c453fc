use blocky_geom::{Aabb, Vec3};
use proptest::prelude::*;

fn small_f32() -> impl Strategy<Value = f32> {
    -1_000.0f32..1_000.0
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (small_f32(), small_f32(), small_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_box() -> impl Strategy<Value = Aabb> {
    (arb_vec3(), 0.01f32..10.0, 0.01f32..10.0, 0.01f32..10.0)
        .prop_map(|(c, sx, sy, sz)| Aabb::from_center_size(c, Vec3::new(sx, sy, sz)))
}

proptest! {
    // Overlap is symmetric
    #[test]
    fn intersects_is_symmetric(a in arb_box(), b in arb_box()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    // Every non-degenerate box overlaps itself and its slightly shifted copy
    #[test]
    fn intersects_self_and_nudged(a in arb_box(), d in arb_vec3()) {
        prop_assert!(a.intersects(&a));
        let size = a.size();
        let nudge = Vec3::new(
            (d.x / 1_000.0) * size.x * 0.49,
            (d.y / 1_000.0) * size.y * 0.49,
            (d.z / 1_000.0) * size.z * 0.49,
        );
        prop_assert!(a.intersects(&a.translated(nudge)));
    }
}
