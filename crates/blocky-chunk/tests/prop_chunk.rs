use blocky_blocks::{MaterialKind, Palette};
use blocky_chunk::{Chunk, ChunkLookup, populate_chunk};
use blocky_world::worldgen::WorldGenConfig;
use blocky_world::{BlockPos, ChunkCoord, ChunkDims, Face, World};
use hashbrown::HashMap;
use proptest::prelude::*;

const DIMS: ChunkDims = ChunkDims::new(3, 3, 3);

fn cells() -> impl Strategy<Value = Vec<(bool, bool)>> {
    // (occupied, is_door) per cell of two 3x3x3 chunks side by side on x
    proptest::collection::vec((any::<bool>(), 0u8..6), 54)
        .prop_map(|v| v.into_iter().map(|(o, d)| (o, d == 0)).collect())
}

fn build(cells: &[(bool, bool)], palette: &Palette) -> HashMap<ChunkCoord, Chunk> {
    let mut map = HashMap::new();
    for cx in 0..2 {
        let coord = ChunkCoord::new(cx, 0);
        let mut chunk = Chunk::new(coord, DIMS);
        for y in 0..3 {
            for z in 0..3 {
                for x in 0..3 {
                    let i = (cx * 27 + y * 9 + z * 3 + x) as usize;
                    let (occupied, door) = cells[i];
                    if occupied {
                        let kind = if door { MaterialKind::Door } else { MaterialKind::Stone };
                        chunk.add(BlockPos::new(x, y, z), palette.get(kind));
                    }
                }
            }
        }
        map.insert(coord, chunk);
    }
    relink(&mut map);
    map
}

fn relink(map: &mut HashMap<ChunkCoord, Chunk>) {
    let coords: Vec<ChunkCoord> = map.keys().copied().collect();
    for coord in coords {
        if let Some(mut chunk) = map.remove(&coord) {
            chunk.rebuild_neighbors(&*map);
            map.insert(coord, chunk);
        }
    }
}

proptest! {
    // A links to B through face f exactly when B links back to A through the opposite face.
    #[test]
    fn neighbour_links_are_symmetric(cells in cells()) {
        let palette = Palette::builtin().unwrap();
        let map = build(&cells, &palette);
        for (coord, chunk) in &map {
            for block in chunk.blocks() {
                for face in Face::ALL {
                    if let Some(n) = block.neighbor(face) {
                        let other = map.chunk(n.chunk).expect("linked chunk is loaded");
                        let back = other.get(n.pos).expect("linked cell is occupied");
                        prop_assert_eq!(back.kind, n.kind);
                        let rev = back.neighbor(face.opposite()).expect("reverse link");
                        prop_assert_eq!(rev.chunk, *coord);
                        prop_assert_eq!(rev.pos, block.pos);
                        prop_assert_eq!(rev.kind, block.kind);
                    }
                }
            }
        }
    }

    // Links agree with a brute-force scan of the combined 6x3x3 grid.
    #[test]
    fn links_match_global_occupancy(cells in cells()) {
        let palette = Palette::builtin().unwrap();
        let map = build(&cells, &palette);
        let occupied = |wx: i32, y: i32, z: i32| -> bool {
            if !(0..6).contains(&wx) || !(0..3).contains(&y) || !(0..3).contains(&z) {
                return false;
            }
            let cx = wx / 3;
            let i = (cx * 27 + y * 9 + z * 3 + wx % 3) as usize;
            cells[i].0
        };
        for (coord, chunk) in &map {
            for block in chunk.blocks() {
                let wx = coord.cx * 3 + block.pos.x;
                for face in Face::ALL {
                    let (dx, dy, dz) = face.delta();
                    let expect = occupied(wx + dx, block.pos.y + dy, block.pos.z + dz);
                    prop_assert_eq!(block.neighbor(face).is_some(), expect);
                }
            }
        }
    }
}

#[test]
fn cross_chunk_link_names_sibling_cell() {
    let palette = Palette::builtin().unwrap();
    let mut cells = vec![(false, false); 54];
    // (2,0,1) in chunk 0 and (0,0,1) in chunk 1
    cells[2 + 3] = (true, false);
    cells[27 + 3] = (true, false);
    let map = build(&cells, &palette);
    let a = map[&ChunkCoord::new(0, 0)].get(BlockPos::new(2, 0, 1)).unwrap();
    let link = a.left().unwrap();
    assert_eq!(link.chunk, ChunkCoord::new(1, 0));
    assert_eq!(link.pos, BlockPos::new(0, 0, 1));
    let b = map[&ChunkCoord::new(1, 0)].get(BlockPos::new(0, 0, 1)).unwrap();
    assert_eq!(b.right().unwrap().chunk, ChunkCoord::new(0, 0));
}

#[test]
fn missing_sibling_resolves_to_absent() {
    let palette = Palette::builtin().unwrap();
    let mut chunk = Chunk::new(ChunkCoord::new(4, -2), DIMS);
    chunk.add(BlockPos::new(0, 0, 0), palette.get(MaterialKind::Dirt));
    let empty: HashMap<ChunkCoord, Chunk> = HashMap::new();
    chunk.rebuild_neighbors(&empty);
    let b = chunk.get(BlockPos::new(0, 0, 0)).unwrap();
    assert!(Face::ALL.iter().all(|&f| b.neighbor(f).is_none()));
}

#[test]
fn population_is_deterministic_per_seed() {
    let palette = Palette::builtin().unwrap();
    let world = World::new(1234, WorldGenConfig::default());
    let coord = ChunkCoord::new(-1, 2);
    let a = populate_chunk(&world, &palette, coord);
    let b = populate_chunk(&world, &palette, coord);
    assert!(!a.is_empty());
    assert_eq!(a.sorted_positions(), b.sorted_positions());
    for pos in a.sorted_positions() {
        assert_eq!(a.get(pos).map(|x| x.material), b.get(pos).map(|x| x.material));
    }
}

#[test]
fn flat_population_fills_bottom_layers() {
    let palette = Palette::builtin().unwrap();
    let world = World::flat(ChunkDims::new(4, 8, 4), 3);
    let chunk = populate_chunk(&world, &palette, ChunkCoord::new(0, 0));
    assert_eq!(chunk.len(), 4 * 4 * 3);
    assert!(chunk.sorted_positions().iter().all(|p| p.y < 3));
}
