// Hashing Zobrist das casas ocupadas, usado pela cache de perft.
//
// As dimensões do tabuleiro variam, por isso as chaves são derivadas do índice
// da casa em vez de uma tabela fixa.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Chave pseudo-aleatória determinística para a casa `index` (row-major).
#[inline]
pub fn cell_key(index: usize) -> u64 {
    hash_value(index as u64)
}

fn hash_value(seed: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    hasher.finish()
}

/// Hash completo de uma grelha, calculado do zero.
pub fn hash_cells(cells: &[bool]) -> u64 {
    cells
        .iter()
        .enumerate()
        .filter(|(_, &occupied)| occupied)
        .fold(0, |acc, (i, _)| acc ^ cell_key(i))
}
