use serde::Deserialize;

/// Four UV pairs for one quad, ordered `(u1,v1) (u0,v1) (u0,v0) (u1,v0)`.
pub type UvRect = [f32; 8];

/// Per-face UVs indexed by face slot: top, bottom, front (-Z), back (+Z),
/// right (-X), left (+X).
pub type FaceUvs = [UvRect; 6];

/// Grid layout of the block sprite sheet.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct AtlasLayout {
    #[serde(default = "default_columns")]
    pub columns: u16,
    #[serde(default = "default_rows")]
    pub rows: u16,
    #[serde(default = "default_cell_px")]
    pub cell_px: u16,
    /// Horizontal inset in texels, keeps samples off the neighbouring cell.
    #[serde(default = "default_inset_u")]
    pub inset_u_px: f32,
    #[serde(default = "default_inset_v")]
    pub inset_v_px: f32,
}

fn default_columns() -> u16 {
    9
}
fn default_rows() -> u16 {
    10
}
fn default_cell_px() -> u16 {
    128
}
fn default_inset_u() -> f32 {
    1.0
}
fn default_inset_v() -> f32 {
    1.5
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
            cell_px: default_cell_px(),
            inset_u_px: default_inset_u(),
            inset_v_px: default_inset_v(),
        }
    }
}

impl AtlasLayout {
    #[inline]
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col < self.columns && row < self.rows
    }

    /// Normalized, inset UV rectangle of atlas cell `(col, row)`.
    pub fn uv_rect(&self, col: u16, row: u16) -> UvRect {
        let cols = f32::from(self.columns);
        let rows = f32::from(self.rows);
        let cell = f32::from(self.cell_px);
        let du = self.inset_u_px / (cols * cell);
        let dv = self.inset_v_px / (rows * cell);
        let (col, row) = (f32::from(col), f32::from(row));
        let (u0, u1) = (col / cols + du, (col + 1.0) / cols - du);
        let (v0, v1) = (row / rows + dv, (row + 1.0) / rows - dv);
        [u1, v1, u0, v1, u0, v0, u1, v0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn door_cell_matches_sprite_sheet_math() {
        let atlas = AtlasLayout::default();
        let uv = atlas.uv_rect(1, 9);
        let u0 = 1.0 / 9.0 + 1.0 / (9.0 * 128.0);
        let u1 = 2.0 / 9.0 - 1.0 / (9.0 * 128.0);
        let v0 = 9.0 / 10.0 + 1.5 / (10.0 * 128.0);
        let v1 = 1.0 - 1.5 / (10.0 * 128.0);
        let expect = [u1, v1, u0, v1, u0, v0, u1, v0];
        for (a, b) in uv.iter().zip(expect.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} != {b}");
        }
    }

    #[test]
    fn inset_stays_inside_cell() {
        let atlas = AtlasLayout::default();
        for col in 0..atlas.columns {
            for row in 0..atlas.rows {
                let uv = atlas.uv_rect(col, row);
                let (u0, u1, v0, v1) = (uv[2], uv[0], uv[5], uv[1]);
                assert!(u0 > f32::from(col) / 9.0 && u1 < f32::from(col + 1) / 9.0);
                assert!(v0 > f32::from(row) / 10.0 && v1 < f32::from(row + 1) / 10.0);
            }
        }
        assert!(!atlas.contains(9, 0));
        assert!(!atlas.contains(0, 10));
    }

    #[test]
    fn last_cell_index_does_not_overflow() {
        let uv = AtlasLayout::default().uv_rect(u16::MAX, u16::MAX);
        assert!(uv.iter().all(|c| c.is_finite()));
        assert!(uv[0] > uv[2] && uv[1] > uv[5]);
    }
}
