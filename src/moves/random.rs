// Escolha aleatória uniforme entre os lances legais.

use crate::core::*;
use crate::error::{DominoError, Result};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Lance legal ao acaso, usando o gerador da thread.
pub fn random_move(board: &Board, orientation: Orientation) -> Result<Move> {
    random_move_with(&mut thread_rng(), board, orientation)
}

/// Como [`random_move`], com um gerador explícito (útil para reproduzir jogos).
pub fn random_move_with<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    orientation: Orientation,
) -> Result<Move> {
    let moves: Vec<(usize, usize)> = board.legal_moves(orientation).collect();
    moves
        .choose(rng)
        .map(|&(row, col)| Move::new(row, col, orientation))
        .ok_or(DominoError::NoLegalMoves(orientation))
}
