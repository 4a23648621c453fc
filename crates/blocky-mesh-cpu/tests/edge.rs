use hashbrown::HashMap;

use blocky_blocks::{MaterialKind, Palette};
use blocky_chunk::{Chunk, NoNeighbors};
use blocky_geom::Vec3;
use blocky_mesh_cpu::{
    DOOR_HEIGHT, MeshParams, OUTLINE_NUDGE, build_chunk_mesh, count_exposed_faces,
};
use blocky_world::{BlockPos, ChunkCoord, ChunkDims, Face};

fn palette() -> Palette {
    Palette::builtin().unwrap()
}

fn chunk_with(coord: ChunkCoord, dims: ChunkDims, cells: &[(i32, i32, i32, MaterialKind)]) -> Chunk {
    let palette = palette();
    let mut c = Chunk::new(coord, dims);
    for &(x, y, z, kind) in cells {
        assert!(c.add(BlockPos::new(x, y, z), palette.get(kind)));
    }
    c.rebuild_neighbors(&NoNeighbors);
    c
}

fn cube(n: i32) -> Vec<(i32, i32, i32, MaterialKind)> {
    let mut v = Vec::new();
    for y in 0..n {
        for z in 0..n {
            for x in 0..n {
                v.push((x, y, z, MaterialKind::Stone));
            }
        }
    }
    v
}

#[test]
fn solid_cube_emits_only_boundary_faces() {
    let c = chunk_with(ChunkCoord::new(0, 0), ChunkDims::new(4, 4, 4), &cube(2));
    let mesh = build_chunk_mesh(&c, &MeshParams::default());
    assert_eq!(mesh.bands.len(), 1);
    let band = &mesh.bands[0];
    assert_eq!(band.visual.quad_count(), 24);
    assert_eq!(band.visual.triangle_count(), 48);
    assert_eq!(band.collision.quad_count(), 24);
    assert_eq!(band.lookup.len(), 24);
    assert_eq!(count_exposed_faces(&c, &NoNeighbors), 24);
    assert!(band.collision.uv.is_empty());
    assert_eq!(band.visual.uv.len(), 24 * 8);
}

#[test]
fn both_triangles_of_a_quad_share_one_record() {
    let c = chunk_with(ChunkCoord::new(0, 0), ChunkDims::new(4, 4, 4), &cube(1));
    let mesh = build_chunk_mesh(&c, &MeshParams::default());
    let lookup = &mesh.bands[0].lookup;
    for k in 0..6u32 {
        let a = lookup.from_triangle(2 * k).unwrap();
        let b = lookup.from_triangle(2 * k + 1).unwrap();
        assert_eq!(a, b);
        let (dx, dy, dz) = a.face.delta();
        assert_eq!(a.add_location, BlockPos::new(dx, dy, dz));
        assert_eq!(a.location, BlockPos::new(0, 0, 0));
    }
    assert!(lookup.from_triangle(12).is_none());
}

#[test]
fn outline_is_closed_and_nudged_in_world_space() {
    let dims = ChunkDims::new(4, 4, 4);
    let c = chunk_with(ChunkCoord::new(2, -1), dims, &[(1, 0, 1, MaterialKind::Dirt)]);
    let mesh = build_chunk_mesh(&c, &MeshParams::default());
    assert_eq!(mesh.offset, Vec3::new(8.0, 0.0, -4.0));
    for rec in mesh.bands[0].lookup.iter() {
        assert_eq!(rec.outline[0], rec.outline[4]);
        let n = rec.face.normal();
        let plane = (Vec3::new(9.5, 0.5, -2.5) + n * 0.5).dot(n) + OUTLINE_NUDGE;
        for p in rec.outline {
            assert!((p.dot(n) - plane).abs() < 1e-4);
        }
    }
}

#[test]
fn vertical_extent_faces_are_always_emitted() {
    let dims = ChunkDims::new(2, 2, 2);
    let cells = cube(2);
    let c = chunk_with(ChunkCoord::new(0, 0), dims, &cells);
    let mesh = build_chunk_mesh(&c, &MeshParams::default());
    let tops = mesh.bands[0]
        .lookup
        .iter()
        .filter(|r| r.face == Face::PosY)
        .count();
    assert_eq!(tops, 4);
}

#[test]
fn shared_boundary_faces_are_culled_across_chunks() {
    let dims = ChunkDims::new(4, 4, 4);
    let palette = palette();
    let mut map: HashMap<ChunkCoord, Chunk> = HashMap::new();
    let a = ChunkCoord::new(0, 0);
    let b = ChunkCoord::new(1, 0);
    let mut ca = Chunk::new(a, dims);
    ca.add(BlockPos::new(3, 1, 2), palette.get(MaterialKind::Stone));
    let mut cb = Chunk::new(b, dims);
    cb.add(BlockPos::new(0, 1, 2), palette.get(MaterialKind::Stone));
    map.insert(a, ca);
    map.insert(b, cb);
    for coord in [a, b] {
        let mut c = map.remove(&coord).unwrap();
        c.rebuild_neighbors(&map);
        map.insert(coord, c);
    }
    let ma = build_chunk_mesh(&map[&a], &MeshParams::default());
    let mb = build_chunk_mesh(&map[&b], &MeshParams::default());
    assert_eq!(ma.quad_count(), 5);
    assert_eq!(mb.quad_count(), 5);
    assert!(ma.bands[0].lookup.iter().all(|r| r.face != Face::PosX));
    assert!(mb.bands[0].lookup.iter().all(|r| r.face != Face::NegX));
    assert_eq!(count_exposed_faces(&map[&a], &map), 5);
}

#[test]
fn doors_do_not_occlude_and_are_handed_off() {
    let dims = ChunkDims::new(4, 4, 4);
    let c = chunk_with(
        ChunkCoord::new(0, 0),
        dims,
        &[(1, 0, 1, MaterialKind::Stone), (2, 0, 1, MaterialKind::Door)],
    );
    let mesh = build_chunk_mesh(&c, &MeshParams::default());
    assert_eq!(mesh.quad_count(), 6);
    assert_eq!(mesh.doors.len(), 1);
    let door = &mesh.doors[0];
    assert_eq!(door.pos, BlockPos::new(2, 0, 1));
    assert_eq!(door.hinge, Vec3::new(2.0, 0.0, 1.0));
    assert_eq!(door.mesh.quad_count(), 6);
    let max_y = door
        .mesh
        .pos
        .chunks(3)
        .map(|v| v[1])
        .fold(f32::MIN, f32::max);
    assert!((max_y - DOOR_HEIGHT).abs() < 1e-6);
}

#[test]
fn blocks_split_into_vertical_bands() {
    let dims = ChunkDims::new(2, 32, 2);
    let c = chunk_with(
        ChunkCoord::new(0, 0),
        dims,
        &[(0, 0, 0, MaterialKind::Grass), (0, 17, 0, MaterialKind::Coal)],
    );
    let mesh = build_chunk_mesh(&c, &MeshParams::default());
    let bands: Vec<u32> = mesh.bands.iter().map(|b| b.band).collect();
    assert_eq!(bands, vec![0, 2]);
    assert_eq!(mesh.band(2).unwrap().lookup.from_triangle(0).unwrap().location.y, 17);
}

#[test]
fn collision_faces_sit_inside_visual_faces() {
    let c = chunk_with(ChunkCoord::new(0, 0), ChunkDims::new(2, 2, 2), &cube(1));
    let params = MeshParams::default();
    let mesh = build_chunk_mesh(&c, &params);
    let band = &mesh.bands[0];
    let half = 0.5 - params.collision_inset / 2.0;
    for v in band.collision.pos.chunks(3) {
        for &x in v {
            assert!(((x - 0.5).abs() - half).abs() < 1e-6);
        }
    }
}

#[test]
fn face_uvs_come_from_the_palette() {
    let palette = palette();
    let c = chunk_with(ChunkCoord::new(0, 0), ChunkDims::new(2, 2, 2), &[(0, 0, 0, MaterialKind::Grass)]);
    let mesh = build_chunk_mesh(&c, &MeshParams::default());
    let band = &mesh.bands[0];
    let grass = palette.get(MaterialKind::Grass);
    for (k, rec) in band.lookup.iter().enumerate() {
        assert_eq!(&band.visual.uv[k * 8..k * 8 + 8], &grass.faces[rec.face.slot()][..]);
    }
}
