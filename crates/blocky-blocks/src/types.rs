use serde::{Deserialize, Serialize};

/// Material of a placed block. The numeric codes are the type numbers the
/// block palette UI sends along with a selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Grass,
    Dirt,
    Stone,
    Coal,
    Door,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 5] = [
        MaterialKind::Grass,
        MaterialKind::Dirt,
        MaterialKind::Stone,
        MaterialKind::Coal,
        MaterialKind::Door,
    ];

    #[inline]
    pub const fn code(self) -> u16 {
        match self {
            MaterialKind::Grass => 0,
            MaterialKind::Dirt => 1,
            MaterialKind::Stone => 2,
            MaterialKind::Coal => 3,
            MaterialKind::Door => 100,
        }
    }

    pub fn from_code(code: u16) -> Option<MaterialKind> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }

    /// Dense `[0..ALL.len())` index, used by the palette table.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            MaterialKind::Grass => 0,
            MaterialKind::Dirt => 1,
            MaterialKind::Stone => 2,
            MaterialKind::Coal => 3,
            MaterialKind::Door => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MaterialKind::Grass => "grass",
            MaterialKind::Dirt => "dirt",
            MaterialKind::Stone => "stone",
            MaterialKind::Coal => "coal",
            MaterialKind::Door => "door",
        }
    }

    pub fn from_name(name: &str) -> Option<MaterialKind> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    #[inline]
    pub const fn block_kind(self) -> BlockKind {
        match self {
            MaterialKind::Door => BlockKind::Passthrough,
            _ => BlockKind::Normal,
        }
    }
}

/// Whether a block hides the faces of the blocks next to it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockKind {
    #[default]
    Normal,
    /// Occupies its cell without occluding neighbours (doors).
    Passthrough,
}

impl BlockKind {
    #[inline]
    pub fn occludes(self) -> bool {
        matches!(self, BlockKind::Normal)
    }
}

/// Texture role of a face when resolving palette entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaceRole {
    Top,
    Bottom,
    Side,
}

impl FaceRole {
    /// Role of a face slot (0 top, 1 bottom, 2..6 sides).
    #[inline]
    pub fn for_slot(slot: usize) -> FaceRole {
        match slot {
            0 => FaceRole::Top,
            1 => FaceRole::Bottom,
            _ => FaceRole::Side,
        }
    }
}

const ASSET_BASE_URL: &str = "/assets/kennynl/voxel_pack";

/// A palette pick coming from the UI: raw type code plus the preview asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialSelection {
    pub code: u16,
    pub asset: String,
}

impl MaterialSelection {
    pub fn new(code: u16, asset: impl Into<String>) -> Self {
        Self {
            code,
            asset: asset.into(),
        }
    }

    pub fn of(kind: MaterialKind) -> Self {
        let file = match kind {
            MaterialKind::Grass => "grass_top.png",
            MaterialKind::Dirt => "dirt.png",
            MaterialKind::Stone => "stone.png",
            MaterialKind::Coal => "stone_coal.png",
            MaterialKind::Door => "trunk_side.png",
        };
        Self::new(kind.code(), format!("{ASSET_BASE_URL}/{file}"))
    }

    /// Default selection list shown by the block palette.
    pub fn palette_list() -> Vec<MaterialSelection> {
        MaterialKind::ALL.into_iter().map(Self::of).collect()
    }

    /// `None` when the code does not name a known material.
    #[inline]
    pub fn kind(&self) -> Option<MaterialKind> {
        MaterialKind::from_code(self.code)
    }
}
