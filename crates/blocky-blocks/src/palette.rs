use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::atlas::{AtlasLayout, FaceUvs};
use crate::types::{BlockKind, FaceRole, MaterialKind};

const BUILTIN_PALETTE: &str = include_str!("../assets/palette.toml");

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("failed to read palette: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse palette: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown material `{0}` in palette")]
    UnknownMaterial(String),
    #[error("material `{}` has no palette entry", .0.name())]
    Unmapped(MaterialKind),
    #[error("material `{}` has no texture for {role:?} faces", .material.name())]
    MissingFace {
        material: MaterialKind,
        role: FaceRole,
    },
    #[error("atlas cell ({col}, {row}) of `{}` lies outside the atlas", .material.name())]
    CellOutOfRange {
        material: MaterialKind,
        col: u16,
        row: u16,
    },
}

/// Everything a chunk needs to stamp a block of one material.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDef {
    pub kind: MaterialKind,
    pub block_kind: BlockKind,
    pub color: u32,
    pub faces: FaceUvs,
}

/// Material table keyed by [`MaterialKind`]. Every kind is mapped; a palette
/// missing one fails to load.
#[derive(Clone, Debug)]
pub struct Palette {
    pub atlas: AtlasLayout,
    defs: Vec<MaterialDef>,
}

impl Palette {
    /// The palette shipped with the crate.
    pub fn builtin() -> Result<Self, PaletteError> {
        Self::from_toml_str(BUILTIN_PALETTE)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, PaletteError> {
        let cfg: PaletteConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: PaletteConfig) -> Result<Self, PaletteError> {
        let mut by_kind: HashMap<MaterialKind, MaterialEntry> = HashMap::new();
        for (name, entry) in cfg.materials {
            let kind = MaterialKind::from_name(&name)
                .ok_or_else(|| PaletteError::UnknownMaterial(name.clone()))?;
            by_kind.insert(kind, entry);
        }
        let atlas = cfg.atlas;
        let mut defs = Vec::with_capacity(MaterialKind::ALL.len());
        for kind in MaterialKind::ALL {
            let entry = by_kind.get(&kind).ok_or(PaletteError::Unmapped(kind))?;
            defs.push(compile_entry(&atlas, kind, entry)?);
        }
        log::debug!("palette loaded: {} materials", defs.len());
        Ok(Self { atlas, defs })
    }

    #[inline]
    pub fn get(&self, kind: MaterialKind) -> &MaterialDef {
        &self.defs[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialDef> {
        self.defs.iter()
    }
}

fn compile_entry(
    atlas: &AtlasLayout,
    kind: MaterialKind,
    entry: &MaterialEntry,
) -> Result<MaterialDef, PaletteError> {
    let cell_for = |role: FaceRole| -> Result<[u16; 2], PaletteError> {
        let pick = match role {
            FaceRole::Top => entry.top.or(entry.all),
            FaceRole::Bottom => entry.bottom.or(entry.all),
            FaceRole::Side => entry.side.or(entry.all),
        };
        let [col, row] = pick.ok_or(PaletteError::MissingFace {
            material: kind,
            role,
        })?;
        if !atlas.contains(col, row) {
            return Err(PaletteError::CellOutOfRange {
                material: kind,
                col,
                row,
            });
        }
        Ok([col, row])
    };
    let mut faces: FaceUvs = [[0.0; 8]; 6];
    for (slot, uv) in faces.iter_mut().enumerate() {
        let [col, row] = cell_for(FaceRole::for_slot(slot))?;
        *uv = atlas.uv_rect(col, row);
    }
    Ok(MaterialDef {
        kind,
        block_kind: kind.block_kind(),
        color: entry.color.unwrap_or(0xffffff),
        faces,
    })
}

// --- Config ---

#[derive(Deserialize)]
pub struct PaletteConfig {
    #[serde(default)]
    pub atlas: AtlasLayout,
    pub materials: HashMap<String, MaterialEntry>,
}

/// `all` is the fallback for any role without its own cell.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MaterialEntry {
    pub color: Option<u32>,
    pub all: Option<[u16; 2]>,
    pub top: Option<[u16; 2]>,
    pub bottom: Option<[u16; 2]>,
    pub side: Option<[u16; 2]>,
}
