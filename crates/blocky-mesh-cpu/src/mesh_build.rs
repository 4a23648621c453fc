use blocky_geom::Vec3;

/// Flat vertex/index arrays for one mesh. Collision meshes leave `uv` empty.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize, with_uv: bool) {
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        if with_uv {
            self.uv.reserve(n_quads * 4 * 2);
        }
        self.idx.reserve(n_quads * 6);
    }

    /// Appends a quad as two triangles `(0,1,2)` and `(0,2,3)`. `uvs` holds the
    /// four UV pairs in vertex order.
    pub fn add_quad(&mut self, corners: [Vec3; 4], n: Vec3, uvs: Option<&[f32; 8]>) {
        let base = self.vertex_count() as u32;
        for v in corners {
            self.pos.extend_from_slice(&[v.x, v.y, v.z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
        }
        if let Some(uvs) = uvs {
            self.uv.extend_from_slice(uvs);
        }
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / 6
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    #[inline]
    pub fn vertex(&self, i: u32) -> Vec3 {
        let i = i as usize * 3;
        Vec3::new(self.pos[i], self.pos[i + 1], self.pos[i + 2])
    }

    /// Corners of triangle `tri`, translated by `offset`.
    pub fn triangle(&self, tri: usize, offset: Vec3) -> Option<[Vec3; 3]> {
        let i = self.idx.get(tri * 3..tri * 3 + 3)?;
        Some([
            self.vertex(i[0]) + offset,
            self.vertex(i[1]) + offset,
            self.vertex(i[2]) + offset,
        ])
    }
}
