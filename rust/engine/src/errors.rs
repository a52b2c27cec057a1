use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid move token: `{0}`")]
    InvalidMove(String),
    #[error("Invalid notation length: {0}, expected 54")]
    DecodeLength(usize),
    #[error("Invalid notation character `{ch}` at position {index}")]
    DecodeChar { index: usize, ch: char },
}
