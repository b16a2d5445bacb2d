// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

/// Pontuação heurística. Nunca é negada durante a busca, por isso os extremos
/// de `i32` servem como -infinito/+infinito.
pub type Score = i32;

pub const SCORE_MIN: Score = i32::MIN;
pub const SCORE_MAX: Score = i32::MAX;

// Orientação do dominó. Cada jogador joga sempre com a mesma orientação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl std::ops::Not for Orientation {
    type Output = Orientation;

    fn not(self) -> Self::Output {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

impl Orientation {
    /// Deslocamento (linha, coluna) da segunda casa coberta pelo dominó.
    #[inline(always)]
    pub fn offset(self) -> (usize, usize) {
        match self {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
        }
    }

    fn tag(self) -> char {
        match self {
            Orientation::Vertical => 'V',
            Orientation::Horizontal => 'H',
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

// Um lance: a casa de canto superior-esquerdo e a orientação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Move {
    pub fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Move { row, col, orientation }
    }

    /// As duas casas ocupadas por este lance.
    pub fn cells(&self) -> [(usize, usize); 2] {
        let (dr, dc) = self.orientation.offset();
        [(self.row, self.col), (self.row + dr, self.col + dc)]
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({},{})", self.orientation.tag(), self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_not() {
        assert_eq!(!Orientation::Vertical, Orientation::Horizontal);
        assert_eq!(!Orientation::Horizontal, Orientation::Vertical);
    }

    #[test]
    fn test_move_cells() {
        assert_eq!(Move::new(1, 2, Orientation::Vertical).cells(), [(1, 2), (2, 2)]);
        assert_eq!(Move::new(1, 2, Orientation::Horizontal).cells(), [(1, 2), (1, 3)]);
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(0, 3, Orientation::Vertical).to_string(), "V(0,3)");
        assert_eq!(Move::new(2, 0, Orientation::Horizontal).to_string(), "H(2,0)");
    }
}
