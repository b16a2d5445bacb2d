use crate::core::*;

/// Avaliação por mobilidade: lances próprios menos lances do adversário.
///
/// As duas contagens são recalculadas do zero a cada chamada. A mobilidade não
/// é simétrica entre orientações, por isso `evaluate(b, o)` não é em geral o
/// simétrico de `evaluate(b, !o)` visto de outra posição da árvore.
pub fn evaluate_position(board: &Board, orientation: Orientation) -> Score {
    let own = board.count_legal_moves(orientation) as Score;
    let opponent = board.count_legal_moves(!orientation) as Score;
    own - opponent
}

/// Verifica se a posição é terminal para o jogador a mover.
pub fn is_terminal_position(board: &Board, to_move: Orientation) -> bool {
    board.game_over(to_move)
}
