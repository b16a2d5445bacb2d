use crate::core::{Move, Orientation};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DominoError {
    #[error("invalid board dimensions: {rows}x{cols}")]
    InvalidDimension { rows: i64, cols: i64 },
    #[error("invalid search depth: {0}")]
    InvalidDepth(i32),
    #[error("no legal {0} moves")]
    NoLegalMoves(Orientation),
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    #[error("malformed layout: {0}")]
    MalformedLayout(String),
}

pub type Result<T> = std::result::Result<T, DominoError>;
