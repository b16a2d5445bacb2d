// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos para a geração de lances.

pub mod legal;
pub mod random;

pub use legal::*;
pub use random::*;
