//! The 54-character facelet-string codec.
//!
//! The notation string is the sole wire format this engine defines: faces in
//! `U, R, F, D, L, B` order, row-major within each face, one canonical face
//! letter per sticker. The letter encodes the sticker's color identity, not
//! its position.

use crate::errors::CubeError;
use crate::facelet::{Color, CubeState, Face};

pub const NOTATION_LENGTH: usize = 54;

/// Face order of the notation string. Note this differs from the camera
/// capture order used by the scan pipeline.
pub const NOTATION_FACE_ORDER: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

/// Encode a cube state as its 54-character notation string.
///
/// Infallible: with typed colors, a sticker outside the canonical six-color
/// alphabet is unrepresentable. The defensive color check belongs at the
/// boundary where raw color names enter (the scan pipeline).
pub fn encode(cube: &CubeState) -> String {
    let mut out = String::with_capacity(NOTATION_LENGTH);
    for face in NOTATION_FACE_ORDER {
        for row in cube.face(face) {
            for color in row {
                out.push(color.letter());
            }
        }
    }
    out
}

/// Decode a 54-character notation string into a cube state.
///
/// Fails with [`CubeError::DecodeLength`] unless the input is exactly 54
/// characters and with [`CubeError::DecodeChar`] on any character outside
/// `{U, R, F, D, L, B}`. Exactly inverts [`encode`].
pub fn decode(notation: &str) -> Result<CubeState, CubeError> {
    let length = notation.chars().count();
    if length != NOTATION_LENGTH {
        return Err(CubeError::DecodeLength(length));
    }

    let mut cube = CubeState::solved();
    for (index, ch) in notation.chars().enumerate() {
        let color = Color::from_letter(ch).ok_or(CubeError::DecodeChar { index, ch })?;
        let face = NOTATION_FACE_ORDER[index / 9];
        let sticker = index % 9;
        cube.face_mut(face)[sticker / 3][sticker % 3] = color;
    }
    Ok(cube)
}
