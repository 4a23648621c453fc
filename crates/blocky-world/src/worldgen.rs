use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::ChunkDims;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct WorldGenConfig {
    #[serde(default = "default_mode")]
    pub mode: Mode,
    #[serde(default)]
    pub chunk: ChunkDims,
    #[serde(default)]
    pub flat: Flat,
    #[serde(default)]
    pub height: Height,
    #[serde(default)]
    pub surface: Surface,
    #[serde(default)]
    pub ores: Ores,
}

impl WorldGenConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: Self = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects chunk sizes that cannot hold a block.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        let ChunkDims { sx, sy, sz } = self.chunk;
        if sx <= 0 || sy <= 0 || sz <= 0 {
            return Err(format!("chunk dimensions must be positive, got {sx}x{sy}x{sz}").into());
        }
        Ok(())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Normal,
    Flat,
}

fn default_mode() -> Mode {
    Mode::Normal
}

#[derive(Clone, Debug, Deserialize)]
pub struct Flat {
    #[serde(default = "default_flat_thickness")]
    pub thickness: i32,
}
fn default_flat_thickness() -> i32 {
    4
}
impl Default for Flat {
    fn default() -> Self {
        Self {
            thickness: default_flat_thickness(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Height {
    #[serde(default = "default_height_freq")]
    pub frequency: f32,
    /// Lowest terrain surface, in blocks above y = 0.
    #[serde(default = "default_min_y")]
    pub min_y: i32,
    #[serde(default = "default_max_y")]
    pub max_y: i32,
}
fn default_height_freq() -> f32 {
    0.04
}
fn default_min_y() -> i32 {
    3
}
fn default_max_y() -> i32 {
    12
}
impl Default for Height {
    fn default() -> Self {
        Self {
            frequency: default_height_freq(),
            min_y: default_min_y(),
            max_y: default_max_y(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Surface {
    /// Dirt layers under the grass cap.
    #[serde(default = "default_dirt_depth")]
    pub dirt_depth: i32,
}
fn default_dirt_depth() -> i32 {
    2
}
impl Default for Surface {
    fn default() -> Self {
        Self {
            dirt_depth: default_dirt_depth(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Ores {
    /// Chance that a stone cell becomes coal.
    #[serde(default = "default_coal_chance")]
    pub coal_chance: f32,
}
fn default_coal_chance() -> f32 {
    0.06
}
impl Default for Ores {
    fn default() -> Self {
        Self {
            coal_chance: default_coal_chance(),
        }
    }
}
