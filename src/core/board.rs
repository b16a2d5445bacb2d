// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos principais.

use super::types::*;
use super::zobrist::{cell_key, hash_cells};
use crate::error::{DominoError, Result};
use crate::moves::{self, LegalMoves, Successors};

// O tabuleiro: grelha retangular de casas livres (false) ou ocupadas (true),
// guardada em ordem row-major. As dimensões nunca mudam depois da construção.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    // XOR das chaves das casas ocupadas, mantido a cada lance.
    hash: u64,
}

impl Board {
    /// Cria um tabuleiro vazio com as dimensões dadas.
    pub fn new(rows: i32, cols: i32) -> Result<Self> {
        let invalid = DominoError::InvalidDimension {
            rows: rows as i64,
            cols: cols as i64,
        };
        if rows < 0 || cols < 0 {
            return Err(invalid);
        }
        let (rows, cols) = (rows as usize, cols as usize);

        // Grelhas impossíveis de alocar são rejeitadas em vez de abortar
        let len = rows.checked_mul(cols).ok_or_else(|| invalid.clone())?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, false);

        Ok(Board { rows, cols, cells, hash: 0 })
    }

    /// Tabuleiro vazio com as dimensões de `self`.
    pub fn cleared(&self) -> Self {
        Board {
            rows: self.rows,
            cols: self.cols,
            cells: vec![false; self.cells.len()],
            hash: 0,
        }
    }

    /// Constrói um tabuleiro a partir de uma grelha fornecida externamente.
    pub fn from_cells(grid: Vec<Vec<bool>>) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |row| row.len());

        if let Some(bad) = grid.iter().find(|row| row.len() != cols) {
            return Err(DominoError::InvalidDimension {
                rows: rows as i64,
                cols: bad.len() as i64,
            });
        }

        let cells: Vec<bool> = grid.into_iter().flatten().collect();
        let hash = hash_cells(&cells);
        Ok(Board { rows, cols, cells, hash })
    }

    /// Lê um tabuleiro em texto: uma linha por fila, `#` ou `x` para casas
    /// ocupadas e `.` para casas livres. Linhas podem ser separadas por
    /// quebras de linha ou espaços.
    pub fn from_layout(layout: &str) -> Result<Self> {
        let mut grid = Vec::new();
        for line in layout.split_whitespace() {
            let mut row = Vec::with_capacity(line.len());
            for ch in line.chars() {
                match ch {
                    '#' | 'x' | 'X' => row.push(true),
                    '.' => row.push(false),
                    _ => return Err(DominoError::MalformedLayout(format!("invalid cell '{}'", ch))),
                }
            }
            grid.push(row);
        }
        Self::from_cells(grid)
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Estado de uma casa, ou `None` fora do tabuleiro.
    pub fn cell(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Número de casas ocupadas.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c)
    }

    /// Cópia da grelha como linhas de booleanos.
    pub fn to_grid(&self) -> Vec<Vec<bool>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    /// Verifica se um dominó cabe em (row, col). Coordenadas fora do
    /// tabuleiro devolvem `false`.
    pub fn is_legal_move(&self, row: usize, col: usize, orientation: Orientation) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        let (dr, dc) = orientation.offset();
        let (row2, col2) = (row + dr, col + dc);
        if row2 >= self.rows || col2 >= self.cols {
            return false;
        }
        !self.cells[self.index(row, col)] && !self.cells[self.index(row2, col2)]
    }

    /// Enumera os lances legais em ordem row-major. Cada chamada devolve um
    /// iterador novo, que começa do início.
    pub fn legal_moves(&self, orientation: Orientation) -> LegalMoves<'_> {
        LegalMoves::new(self, orientation)
    }

    pub fn count_legal_moves(&self, orientation: Orientation) -> usize {
        self.legal_moves(orientation).count()
    }

    /// Executa um lance, ocupando as duas casas. Lances ilegais deixam o
    /// tabuleiro intacto.
    pub fn perform_move(&mut self, row: usize, col: usize, orientation: Orientation) -> Result<()> {
        let mv = Move::new(row, col, orientation);
        if !self.is_legal_move(row, col, orientation) {
            return Err(DominoError::IllegalMove(mv));
        }
        for (r, c) in mv.cells() {
            let idx = self.index(r, c);
            self.cells[idx] = true;
            self.hash ^= cell_key(idx);
        }
        Ok(())
    }

    /// `true` se o jogador com esta orientação não tem lances.
    pub fn game_over(&self, orientation: Orientation) -> bool {
        self.legal_moves(orientation).next().is_none()
    }

    /// Cópia profunda e independente do tabuleiro.
    pub fn copy(&self) -> Board {
        self.clone()
    }

    /// Pares (lance, tabuleiro resultante) para cada lance legal.
    pub fn successors(&self, orientation: Orientation) -> Successors<'_> {
        Successors::new(self, orientation)
    }

    /// Escolhe um lance legal ao acaso.
    pub fn random_move(&self, orientation: Orientation) -> Result<Move> {
        moves::random_move(self, orientation)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let ch = if self.cells[self.index(r, c)] { '#' } else { '.' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
