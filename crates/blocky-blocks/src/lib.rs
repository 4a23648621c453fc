//! Materials, block kinds, texture atlas and the palette lookup table.
#![forbid(unsafe_code)]

pub mod atlas;
pub mod palette;
pub mod types;

pub use atlas::{AtlasLayout, FaceUvs, UvRect};
pub use palette::{MaterialDef, Palette, PaletteError};
pub use types::{BlockKind, FaceRole, MaterialKind, MaterialSelection};
