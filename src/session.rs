use blocky_blocks::{MaterialKind, MaterialSelection};
use blocky_entity::{EntityManager, distance_to};
use blocky_geom::Vec3;
use blocky_runtime::ChunkManager;

const DOWN: Vec3 = Vec3::new(0.0, -1.0, 0.0);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub added: usize,
    pub removed: usize,
    pub rejected: usize,
}

/// Walks a diagonal of columns from the origin: drops the player above the
/// first one, then for each column places a stone on the surface and digs it
/// back out.
pub fn run_edits(chunks: &mut ChunkManager, edits: usize) -> SessionReport {
    let mut report = SessionReport::default();
    let top = chunks.world().dims.sy as f32 * chunks.config().mesh.scale + 4.0;
    let mut entities = EntityManager::new();
    let player = entities.spawn(Vec3::new(0.5, top, 0.5));
    chunks.set_viewer_location(Vec3::new(0.5, top, 0.5));
    chunks.mesh();
    if let Some(reached) = entities.move_entity(player, Vec3::new(0.5, 0.0, 0.5), chunks) {
        log::info!("player landed at {reached:?}");
    }

    let stone = MaterialSelection::of(MaterialKind::Stone);
    for i in 0..edits {
        let origin = Vec3::new(2.0 + i as f32 + 0.3, top, 2.0 + i as f32 + 0.6);
        let Some(hit) = chunks.raycast(origin, DOWN, top * 2.0) else {
            log::warn!("no surface under {origin:?}");
            report.rejected += 1;
            continue;
        };
        match chunks.add_block_at(&hit, &stone, &entities) {
            Ok(_) => report.added += 1,
            Err(_) => {
                report.rejected += 1;
                continue;
            }
        }
        if let Some(e) = entities.player() {
            if let Some(d) = distance_to(e, chunks, DOWN, top) {
                log::debug!("player is {d:.3} above ground");
            }
        }
        let Some(hit) = chunks.raycast(origin, DOWN, top * 2.0) else {
            continue;
        };
        match chunks.remove_block_at(&hit) {
            Ok(_) => report.removed += 1,
            Err(_) => report.rejected += 1,
        }
    }
    report
}
