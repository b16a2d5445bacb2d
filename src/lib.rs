// Motor de Domineering - busca minimax com poda alpha-beta

pub mod core;
pub mod engine;
pub mod error;
pub mod logging;
pub mod moves;
pub mod search;

pub use crate::core::*;
pub use engine::DominoesGame;
pub use error::{DominoError, Result};
