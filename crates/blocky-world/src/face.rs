use blocky_geom::Vec3;

/// The six block faces, numbered in face-slot order (the index used by
/// per-face texture maps and neighbour tables).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    /// Top.
    PosY = 0,
    /// Bottom.
    NegY = 1,
    /// Front.
    NegZ = 2,
    /// Back.
    PosZ = 3,
    /// Right.
    NegX = 4,
    /// Left.
    PosX = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::NegZ,
        Face::PosZ,
        Face::NegX,
        Face::PosX,
    ];

    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_slot(i: usize) -> Option<Face> {
        Self::ALL.get(i).copied()
    }

    /// Integer grid step taken when leaving the block through this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::NegZ => (0, 0, -1),
            Face::PosZ => (0, 0, 1),
            Face::NegX => (-1, 0, 0),
            Face::PosX => (1, 0, 0),
        }
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        Vec3::from(self.delta())
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::NegZ => Face::PosZ,
            Face::PosZ => Face::NegZ,
            Face::NegX => Face::PosX,
            Face::PosX => Face::NegX,
        }
    }

    /// Face whose normal matches an integer step, if the step is a unit axis.
    pub fn from_delta(d: (i32, i32, i32)) -> Option<Face> {
        Self::ALL.into_iter().find(|f| f.delta() == d)
    }
}
