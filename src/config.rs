use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use blocky_runtime::ManagerConfig;
use blocky_world::worldgen::WorldGenConfig;
use serde::Deserialize;

/// Contents of `blocky.toml`.
#[derive(Clone, Debug, Deserialize)]
pub struct BlockyConfig {
    #[serde(default = "default_seed")]
    pub seed: i32,
    /// Palette file replacing the builtin one.
    #[serde(default)]
    pub palette: Option<PathBuf>,
    #[serde(default)]
    pub world: WorldGenConfig,
    #[serde(default)]
    pub runtime: ManagerConfig,
}

fn default_seed() -> i32 {
    1337
}

impl BlockyConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: Self = toml::from_str(toml_str)?;
        cfg.world.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
