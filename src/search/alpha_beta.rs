use crate::core::*;
use crate::error::{DominoError, Result};
use crate::search::evaluation::{evaluate_position, is_terminal_position};
use crate::search::SearchConfig;
use log::{debug, trace};
use std::time::{Duration, Instant};

/// Resultado da busca Alpha-Beta
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub value: Score,
    pub leaf_count: u64,
    pub depth: u32,
    pub time_elapsed: Duration,
}

/// Papel do jogador num nó da árvore. O maximizador joga com a orientação da
/// raiz; o minimizador com a oposta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    fn other(self) -> Role {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }
}

/// Valores devolvidos por cada nó: lance escolhido, valor e folhas avaliadas.
type NodeValue = (Option<Move>, Score, u64);

/// Motor Alpha-Beta minimax
pub struct AlphaBetaSearcher {
    pub config: SearchConfig,
}

impl AlphaBetaSearcher {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        AlphaBetaSearcher { config }
    }

    /// Busca com a profundidade da configuração
    pub fn search(&self, board: &Board, orientation: Orientation) -> Result<SearchResult> {
        self.search_depth(board, orientation, self.config.max_depth)
    }

    /// Busca com limite de profundidade explícito
    pub fn search_depth(&self, board: &Board, orientation: Orientation, depth: i32) -> Result<SearchResult> {
        if depth < 0 {
            return Err(DominoError::InvalidDepth(depth));
        }
        let depth = depth as u32;
        let start_time = Instant::now();

        let (best_move, value, leaf_count) = self.alpha_beta(
            board,
            orientation,
            Role::Maximizer,
            depth,
            SCORE_MIN,
            SCORE_MAX,
            None,
            0,
        );

        let result = SearchResult {
            best_move,
            value,
            leaf_count,
            depth,
            time_elapsed: start_time.elapsed(),
        };

        debug!(
            "search {} depth {} pruning {} -> best {} value {} leaves {} time {}us",
            orientation,
            depth,
            self.config.pruning,
            result.best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
            result.value,
            result.leaf_count,
            result.time_elapsed.as_micros()
        );

        Ok(result)
    }

    /// Minimax com poda alpha-beta. Um só procedimento para os dois papéis:
    /// o maximizador só troca de lance com `>` e o minimizador com `<`, por
    /// isso em empate fica sempre o primeiro lance da enumeração.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &self,
        board: &Board,
        maximizer: Orientation,
        role: Role,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        incoming: Option<Move>,
        ply: u32,
    ) -> NodeValue {
        let to_move = match role {
            Role::Maximizer => maximizer,
            Role::Minimizer => !maximizer,
        };

        // Folhas são sempre avaliadas do ponto de vista do maximizador
        if depth == 0 || is_terminal_position(board, to_move) {
            return (incoming, evaluate_position(board, maximizer), 1);
        }

        let mut leaf_count = 0u64;
        let mut best_move = incoming;
        let mut best_score = match role {
            Role::Maximizer => SCORE_MIN,
            Role::Minimizer => SCORE_MAX,
        };

        for (mv, child) in board.successors(to_move) {
            let (_, score, leaves) = self.alpha_beta(
                &child,
                maximizer,
                role.other(),
                depth - 1,
                alpha,
                beta,
                Some(mv),
                ply + 1,
            );
            leaf_count += leaves;

            if ply == 0 {
                trace!("root {} -> {} ({} leaves)", mv, score, leaves);
            }

            match role {
                Role::Maximizer => {
                    if score > best_score {
                        best_score = score;
                        best_move = Some(mv);
                    }
                    alpha = alpha.max(best_score);
                }
                Role::Minimizer => {
                    if score < best_score {
                        best_score = score;
                        best_move = Some(mv);
                    }
                    beta = beta.min(best_score);
                }
            }

            if self.config.pruning && alpha >= beta {
                break; // Alpha-beta cutoff
            }
        }

        (best_move, best_score, leaf_count)
    }
}

impl Default for AlphaBetaSearcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Atalho: melhor lance para `orientation` com poda e profundidade `depth`.
pub fn get_best_move(board: &Board, orientation: Orientation, depth: i32) -> Result<SearchResult> {
    AlphaBetaSearcher::new().search_depth(board, orientation, depth)
}
