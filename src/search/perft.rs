// Contagem de folhas da árvore completa (sem poda), com paralelismo na raiz.

use crate::core::*;
use crate::engine::PerftCache;
use crate::error::{DominoError, Result};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Folhas e consultas à cache: (folhas, hits, misses).
type Tally = (u64, u64, u64);

fn add(a: Tally, b: Tally) -> Tally {
    (a.0 + b.0, a.1 + b.1, a.2 + b.2)
}

/// Número de folhas da árvore minimax completa até `depth`, com a mesma
/// definição de folha da busca: profundidade esgotada ou jogador sem lances.
/// Igual ao `leaf_count` de uma busca sem poda.
///
/// Com `threads > 1` os filhos da raiz são repartidos pelo pool global do
/// rayon, com uma cache por tarefa; senão uma única cache serve todos os
/// filhos da raiz.
pub fn perft(board: &Board, orientation: Orientation, depth: i32, threads: usize) -> Result<u64> {
    if depth < 0 {
        return Err(DominoError::InvalidDepth(depth));
    }
    let depth = depth as u32;
    let start_time = Instant::now();

    if depth == 0 || board.game_over(orientation) {
        return Ok(1);
    }

    let children: Vec<(Move, Board)> = board.successors(orientation).collect();
    let to_move = !orientation;

    let (nodes, hits, misses) = if threads <= 1 {
        let mut cache = PerftCache::new();
        count_children(&children, to_move, depth - 1, &mut cache)
    } else {
        children
            .par_iter()
            .map_init(PerftCache::new, |cache: &mut PerftCache, (_, child): &(Move, Board)| {
                count_child(child, to_move, depth - 1, cache)
            })
            .reduce(|| (0, 0, 0), add)
    };

    let lookups = hits + misses;
    let hit_rate = if lookups == 0 { 0.0 } else { hits as f64 * 100.0 / lookups as f64 };
    debug!(
        "perft {} depth {} threads {} -> {} leaves in {}ms (cache hits {:.1}%)",
        orientation,
        depth,
        threads,
        nodes,
        start_time.elapsed().as_millis(),
        hit_rate
    );

    Ok(nodes)
}

fn count_children(children: &[(Move, Board)], to_move: Orientation, depth: u32, cache: &mut PerftCache) -> Tally {
    children
        .iter()
        .map(|(_, child)| count_child(child, to_move, depth, cache))
        .fold((0, 0, 0), add)
}

fn count_child(child: &Board, to_move: Orientation, depth: u32, cache: &mut PerftCache) -> Tally {
    let (hits, misses) = (cache.hits(), cache.misses());
    let nodes = perft_cached(child, to_move, depth, cache);
    (nodes, cache.hits() - hits, cache.misses() - misses)
}

fn perft_cached(board: &Board, to_move: Orientation, depth: u32, cache: &mut PerftCache) -> u64 {
    if depth == 0 || board.game_over(to_move) {
        return 1;
    }
    if let Some(nodes) = cache.get(board.hash(), to_move, depth) {
        return nodes;
    }

    let nodes: u64 = board
        .successors(to_move)
        .map(|(_, child)| perft_cached(&child, !to_move, depth - 1, cache))
        .sum();

    cache.insert(board.hash(), to_move, depth, nodes);
    nodes
}
