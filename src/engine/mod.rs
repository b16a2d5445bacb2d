pub mod game;
pub mod perft_cache;

pub use game::*;
pub use perft_cache::*;
