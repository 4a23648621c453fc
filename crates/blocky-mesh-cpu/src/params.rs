use serde::{Deserialize, Serialize};

/// Mesher tuning. Every field has a default so partial TOML tables load.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshParams {
    /// Height of a vertical band in cells.
    #[serde(default = "default_band_height")]
    pub band_height: i32,
    /// World units per cell.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Collision faces are shrunk by this fraction of a cell.
    #[serde(default = "default_collision_inset")]
    pub collision_inset: f32,
}

fn default_band_height() -> i32 {
    8
}
fn default_scale() -> f32 {
    1.0
}
fn default_collision_inset() -> f32 {
    0.004
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            band_height: default_band_height(),
            scale: default_scale(),
            collision_inset: default_collision_inset(),
        }
    }
}
