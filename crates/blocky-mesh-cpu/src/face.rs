use blocky_geom::Vec3;
use blocky_world::Face;

/// Unit-cube corners as signed half-extent multipliers around the cell centre.
pub const CUBE_CORNERS: [[f32; 3]; 8] = [
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
];

/// Indices into [`CUBE_CORNERS`] for one face, counter-clockwise seen from outside.
#[inline]
pub fn face_corners(face: Face) -> [usize; 4] {
    match face {
        Face::PosY => [1, 2, 3, 0],
        Face::NegY => [4, 7, 6, 5],
        Face::NegZ => [0, 3, 7, 4],
        Face::PosZ => [2, 1, 5, 6],
        Face::NegX => [1, 0, 4, 5],
        Face::PosX => [3, 2, 6, 7],
    }
}

/// The four corners of `face` on a box centred at `center` with the given half extents.
#[inline]
pub fn face_quad(face: Face, center: Vec3, half: Vec3) -> [Vec3; 4] {
    face_corners(face).map(|i| {
        let c = CUBE_CORNERS[i];
        Vec3::new(
            center.x + c[0] * half.x,
            center.y + c[1] * half.y,
            center.z + c[2] * half.z,
        )
    })
}
