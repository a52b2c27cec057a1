use serde::{Deserialize, Serialize};

/// Identifies one of the six faces of the cube.
/// Used both as a position (which face a sticker sits on) and, via its
/// canonical color, as a notation alphabet symbol.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Face {
    /// Up face (white when solved)
    U,
    /// Down face (yellow when solved)
    D,
    /// Left face (red when solved)
    L,
    /// Right face (orange when solved)
    R,
    /// Front face (green when solved)
    F,
    /// Back face (blue when solved)
    B,
}

impl Face {
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
            Face::F => 'F',
            Face::B => 'B',
        }
    }

    pub fn from_letter(ch: char) -> Option<Face> {
        match ch {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// The canonical color owning this face when the cube is solved.
    pub fn color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::L => Color::Red,
            Face::R => Color::Orange,
            Face::F => Color::Green,
            Face::B => Color::Blue,
        }
    }
}

/// One of the six canonical sticker colors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl Color {
    /// The notation letter for this color: the letter of the face it owns
    /// when solved, not the letter of wherever the sticker currently sits.
    pub fn letter(self) -> char {
        self.home_face().letter()
    }

    /// The face this color owns when the cube is solved.
    pub fn home_face(self) -> Face {
        match self {
            Color::White => Face::U,
            Color::Yellow => Face::D,
            Color::Red => Face::L,
            Color::Orange => Face::R,
            Color::Green => Face::F,
            Color::Blue => Face::B,
        }
    }

    pub fn from_letter(ch: char) -> Option<Color> {
        Face::from_letter(ch).map(Face::color)
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }

    /// Parse a lowercase color name as reported by the external detector.
    pub fn from_name(name: &str) -> Option<Color> {
        match name {
            "white" => Some(Color::White),
            "yellow" => Some(Color::Yellow),
            "red" => Some(Color::Red),
            "orange" => Some(Color::Orange),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            _ => None,
        }
    }
}

pub fn all_faces() -> [Face; 6] {
    [Face::U, Face::D, Face::L, Face::R, Face::F, Face::B]
}

pub fn all_colors() -> [Color; 6] {
    [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Blue,
    ]
}

/// A 3x3 grid of stickers, row-major.
pub type FaceGrid = [[Color; 3]; 3];

/// The full visible state of a cube: six 3x3 sticker grids.
///
/// A `CubeState` is a plain value. Mutators take `&mut` access; callers that
/// want to keep the previous state clone first and state that intent
/// explicitly rather than relying on hidden copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeState {
    #[serde(rename = "U")]
    pub up: FaceGrid,
    #[serde(rename = "D")]
    pub down: FaceGrid,
    #[serde(rename = "L")]
    pub left: FaceGrid,
    #[serde(rename = "R")]
    pub right: FaceGrid,
    #[serde(rename = "F")]
    pub front: FaceGrid,
    #[serde(rename = "B")]
    pub back: FaceGrid,
}

impl CubeState {
    /// Construct a solved cube: every sticker of each face set to that face's
    /// canonical color. The only constructor guaranteed to produce a valid
    /// state from nothing.
    pub fn solved() -> Self {
        let grid = |face: Face| [[face.color(); 3]; 3];
        Self {
            up: grid(Face::U),
            down: grid(Face::D),
            left: grid(Face::L),
            right: grid(Face::R),
            front: grid(Face::F),
            back: grid(Face::B),
        }
    }

    pub fn face(&self, face: Face) -> &FaceGrid {
        match face {
            Face::U => &self.up,
            Face::D => &self.down,
            Face::L => &self.left,
            Face::R => &self.right,
            Face::F => &self.front,
            Face::B => &self.back,
        }
    }

    pub fn face_mut(&mut self, face: Face) -> &mut FaceGrid {
        match face {
            Face::U => &mut self.up,
            Face::D => &mut self.down,
            Face::L => &mut self.left,
            Face::R => &mut self.right,
            Face::F => &mut self.front,
            Face::B => &mut self.back,
        }
    }

    /// True iff every face is monochrome in its canonical color. O(54).
    pub fn is_solved(&self) -> bool {
        all_faces().iter().all(|&face| {
            self.face(face)
                .iter()
                .all(|row| row.iter().all(|&cell| cell == face.color()))
        })
    }
}
