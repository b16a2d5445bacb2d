// Fachada do jogo: guarda o tabuleiro atual e expõe as operações do motor a
// quem conduz a partida (interface, alternância de turnos, etc.).

use crate::core::*;
use crate::error::Result;
use crate::moves::{random_move_with, LegalMoves, Successors};
use crate::search::{perft, AlphaBetaSearcher, SearchConfig, SearchResult};
use rand::Rng;

pub struct DominoesGame {
    board: Board,
    searcher: AlphaBetaSearcher,
}

impl DominoesGame {
    /// Jogo novo com tabuleiro vazio.
    pub fn new(rows: i32, cols: i32) -> Result<Self> {
        Ok(Self::from_board(Board::new(rows, cols)?))
    }

    /// Jogo a partir de um tabuleiro já existente.
    pub fn from_board(board: Board) -> Self {
        DominoesGame {
            board,
            searcher: AlphaBetaSearcher::new(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.searcher = AlphaBetaSearcher::with_config(config);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.searcher.config
    }

    pub fn get_board(&self) -> &Board {
        &self.board
    }

    /// Volta a um tabuleiro vazio com as mesmas dimensões.
    pub fn reset(&mut self) {
        self.board = self.board.cleared();
    }

    pub fn is_legal_move(&self, row: usize, col: usize, orientation: Orientation) -> bool {
        self.board.is_legal_move(row, col, orientation)
    }

    pub fn legal_moves(&self, orientation: Orientation) -> LegalMoves<'_> {
        self.board.legal_moves(orientation)
    }

    pub fn perform_move(&mut self, row: usize, col: usize, orientation: Orientation) -> Result<()> {
        self.board.perform_move(row, col, orientation)
    }

    pub fn game_over(&self, orientation: Orientation) -> bool {
        self.board.game_over(orientation)
    }

    /// Cópia independente do jogo (tabuleiro e configuração).
    pub fn copy(&self) -> DominoesGame {
        DominoesGame::from_board(self.board.copy()).with_config(self.searcher.config.clone())
    }

    pub fn successors(&self, orientation: Orientation) -> Successors<'_> {
        self.board.successors(orientation)
    }

    pub fn random_move(&self, orientation: Orientation) -> Result<Move> {
        self.board.random_move(orientation)
    }

    pub fn random_move_with<R: Rng + ?Sized>(&self, rng: &mut R, orientation: Orientation) -> Result<Move> {
        random_move_with(rng, &self.board, orientation)
    }

    /// Melhor lance para `orientation` com busca até `depth`.
    pub fn get_best_move(&self, orientation: Orientation, depth: i32) -> Result<SearchResult> {
        self.searcher.search_depth(&self.board, orientation, depth)
    }

    pub fn perft(&self, orientation: Orientation, depth: i32) -> Result<u64> {
        perft(&self.board, orientation, depth, self.searcher.config.threads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DominoError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use Orientation::*;

    #[test]
    fn test_new_game() {
        let game = DominoesGame::new(3, 5).unwrap();
        assert_eq!(game.get_board().rows(), 3);
        assert_eq!(game.get_board().cols(), 5);
        assert_eq!(game.get_board().occupied_count(), 0);
        assert!(matches!(
            DominoesGame::new(-3, 5),
            Err(DominoError::InvalidDimension { rows: -3, cols: 5 })
        ));
    }

    #[test]
    fn test_reset_keeps_dimensions() {
        let mut game = DominoesGame::new(3, 3).unwrap();
        game.perform_move(0, 0, Vertical).unwrap();
        game.perform_move(2, 1, Horizontal).unwrap();
        assert_eq!(game.get_board().occupied_count(), 4);

        game.reset();
        assert_eq!(game.get_board(), &Board::new(3, 3).unwrap());
    }

    #[test]
    fn test_copy_is_independent() {
        let game = DominoesGame::new(2, 2).unwrap();
        let mut copy = game.copy();
        copy.perform_move(0, 0, Horizontal).unwrap();
        assert_eq!(game.get_board().occupied_count(), 0);
        assert!(!copy.is_legal_move(0, 0, Vertical));
        assert!(game.is_legal_move(0, 0, Vertical));
    }

    #[test]
    fn test_play_out_with_best_moves() {
        let mut game = DominoesGame::new(4, 4).unwrap();
        let mut to_move = Vertical;
        let mut plies = 0;
        while !game.game_over(to_move) {
            let result = game.get_best_move(to_move, 2).unwrap();
            let mv = result.best_move.unwrap();
            game.perform_move(mv.row, mv.col, mv.orientation).unwrap();
            to_move = !to_move;
            plies += 1;
        }
        assert!(plies > 0);
        assert_eq!(game.get_board().occupied_count(), plies * 2);
        assert_eq!(game.legal_moves(to_move).count(), 0);
    }

    #[test]
    fn test_random_play_fills_until_stuck() {
        let mut game = DominoesGame::new(3, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut to_move = Horizontal;
        while !game.game_over(to_move) {
            let mv = game.random_move_with(&mut rng, to_move).unwrap();
            game.perform_move(mv.row, mv.col, mv.orientation).unwrap();
            to_move = !to_move;
        }
        assert_eq!(
            game.random_move_with(&mut rng, to_move),
            Err(DominoError::NoLegalMoves(to_move))
        );
    }

    #[test]
    fn test_successors_and_perft() {
        let game = DominoesGame::new(2, 3).unwrap().with_config(SearchConfig {
            threads: 1,
            ..SearchConfig::default()
        });
        assert_eq!(game.successors(Horizontal).count(), 4);
        assert_eq!(game.perft(Horizontal, 1).unwrap(), 4);
        assert_eq!(game.config().threads, 1);
    }
}
