use std::error::Error;
use std::path::Path;

use blocky_mesh_cpu::MeshParams;
use serde::{Deserialize, Serialize};

/// Registry tuning, usually the `[runtime]` table of `blocky.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Chunks `-r..r` are populated on both axes.
    #[serde(default = "default_grid_radius")]
    pub grid_radius: i32,
    /// Chebyshev radius, in chunks, of the visible window around the viewer.
    #[serde(default = "default_view_radius")]
    pub view_radius: i32,
    /// World-unit radius used to collect pickable meshes around a point.
    #[serde(default = "default_selection_radius")]
    pub selection_radius: f32,
    #[serde(default)]
    pub mesh: MeshParams,
}

fn default_grid_radius() -> i32 {
    5
}
fn default_view_radius() -> i32 {
    2
}
fn default_selection_radius() -> f32 {
    5.0
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            grid_radius: default_grid_radius(),
            view_radius: default_view_radius(),
            selection_radius: default_selection_radius(),
            mesh: MeshParams::default(),
        }
    }
}

impl ManagerConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = std::fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
