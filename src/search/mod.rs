pub mod alpha_beta;
pub mod evaluation;
pub mod perft;

pub use alpha_beta::*;
pub use evaluation::*;
pub use perft::*;

/// Configuração da busca
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: i32,
    /// Desligar a poda explora a árvore inteira até `max_depth`; o lance e o
    /// valor devolvidos são os mesmos, só muda o número de folhas.
    pub pruning: bool,
    /// Threads usadas pelo perft na raiz
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 4,
            pruning: true,
            threads: num_cpus::get().max(1),
        }
    }
}
