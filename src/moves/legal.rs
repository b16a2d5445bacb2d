// Geração lazy de lances legais e sucessores.

use crate::core::*;

/// Iterador sobre as casas (row, col) onde cabe um dominó da orientação dada.
///
/// A ordem é row-major: fila exterior, coluna interior. Para verticais a última
/// fila nunca é origem; para horizontais a última coluna nunca é origem. Esta
/// ordem é a fonte do desempate na busca.
pub struct LegalMoves<'a> {
    board: &'a Board,
    orientation: Orientation,
    row_limit: usize,
    col_limit: usize,
    row: usize,
    col: usize,
}

impl<'a> LegalMoves<'a> {
    pub fn new(board: &'a Board, orientation: Orientation) -> Self {
        let (dr, dc) = orientation.offset();
        LegalMoves {
            board,
            orientation,
            row_limit: board.rows().saturating_sub(dr),
            col_limit: board.cols().saturating_sub(dc),
            row: 0,
            col: 0,
        }
    }
}

impl Iterator for LegalMoves<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.col_limit == 0 {
            return None;
        }
        while self.row < self.row_limit {
            let (r, c) = (self.row, self.col);
            self.col += 1;
            if self.col == self.col_limit {
                self.col = 0;
                self.row += 1;
            }
            if self.board.is_legal_move(r, c, self.orientation) {
                return Some((r, c));
            }
        }
        None
    }
}

/// Iterador de pares (lance, tabuleiro resultante). Cada tabuleiro é uma cópia
/// própria, por isso ramos irmãos nunca se vêem.
pub struct Successors<'a> {
    board: &'a Board,
    moves: LegalMoves<'a>,
}

impl<'a> Successors<'a> {
    pub fn new(board: &'a Board, orientation: Orientation) -> Self {
        Successors {
            board,
            moves: LegalMoves::new(board, orientation),
        }
    }
}

impl Iterator for Successors<'_> {
    type Item = (Move, Board);

    fn next(&mut self) -> Option<Self::Item> {
        let (row, col) = self.moves.next()?;
        let orientation = self.moves.orientation;
        let mut child = self.board.copy();
        // Origem já validada por LegalMoves
        child.perform_move(row, col, orientation).ok()?;
        Some((Move::new(row, col, orientation), child))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Orientation::*;

    #[test]
    fn test_two_by_two_order() {
        let board = Board::new(2, 2).unwrap();
        assert_eq!(board.legal_moves(Vertical).collect::<Vec<_>>(), vec![(0, 0), (0, 1)]);
        assert_eq!(board.legal_moves(Horizontal).collect::<Vec<_>>(), vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn test_row_major_order_skips_blocked() {
        let board = Board::from_layout("...\n.#.\n...").unwrap();
        assert_eq!(
            board.legal_moves(Vertical).collect::<Vec<_>>(),
            vec![(0, 0), (0, 2), (1, 0), (1, 2)]
        );
        assert_eq!(
            board.legal_moves(Horizontal).collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn test_enumeration_is_restartable() {
        let board = Board::new(3, 4).unwrap();
        let first: Vec<_> = board.legal_moves(Horizontal).collect();
        let second: Vec<_> = board.legal_moves(Horizontal).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 9);
        assert_eq!(board.count_legal_moves(Vertical), 8);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::from_layout("###\n###").unwrap();
        assert_eq!(board.legal_moves(Vertical).count(), 0);
        assert_eq!(board.legal_moves(Horizontal).count(), 0);
    }

    #[test]
    fn test_game_over_matches_empty_enumeration() {
        let layouts = ["", "#", "..", ".\n.", "#.\n.#", "##.\n#..\n.#.", "....\n####"];
        for layout in layouts {
            let board = Board::from_layout(layout).unwrap();
            for o in [Vertical, Horizontal] {
                assert_eq!(board.legal_moves(o).count() == 0, board.game_over(o), "{:?} {}", layout, o);
            }
        }
    }

    #[test]
    fn test_successors_are_isolated() {
        let board = Board::new(2, 3).unwrap();
        let children: Vec<_> = board.successors(Vertical).collect();
        assert_eq!(children.len(), 3);
        for (mv, child) in &children {
            assert_eq!(mv.orientation, Vertical);
            assert_eq!(child.occupied_count(), 2);
            for (r, c) in mv.cells() {
                assert_eq!(child.cell(r, c), Some(true));
            }
        }
        assert_eq!(board.occupied_count(), 0);
        assert_ne!(children[0].1, children[1].1);
    }
}
