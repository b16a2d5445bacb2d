// Motor de Domineering - análise de uma posição pela linha de comandos

use clap::{Parser, ValueEnum};
use domineering::search::{AlphaBetaSearcher, SearchConfig};
use domineering::{logging, moves, search, Board, Orientation, Result};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    Vertical,
    Horizontal,
}

impl From<Side> for Orientation {
    fn from(side: Side) -> Self {
        match side {
            Side::Vertical => Orientation::Vertical,
            Side::Horizontal => Orientation::Horizontal,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "domineering", about = "Best-move search for the domino tiling game")]
struct Args {
    /// Board rows (ignored with --layout)
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    rows: i32,
    /// Board columns (ignored with --layout)
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    cols: i32,
    /// Board as text rows separated by '/' or spaces, '#' occupied and '.' free
    #[arg(long)]
    layout: Option<String>,
    /// Orientation of the player to move
    #[arg(long, value_enum, default_value_t = Side::Vertical)]
    orientation: Side,
    /// Search depth in plies
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    depth: i32,
    /// Explore every branch (same move and value, more leaves)
    #[arg(long)]
    no_pruning: bool,
    /// Pick a random legal move instead of searching
    #[arg(long)]
    random: bool,
    /// Seed for --random
    #[arg(long)]
    seed: Option<u64>,
    /// Also count the leaves of the full tree to --depth
    #[arg(long)]
    perft: bool,
    /// Worker threads for --perft
    #[arg(long)]
    threads: Option<usize>,
    /// Print debug and trace records
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(report) => {
            for line in report {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Analisa a posição pedida e devolve as linhas do relatório.
fn run(args: &Args) -> Result<Vec<String>> {
    let board = match &args.layout {
        Some(layout) => Board::from_layout(&layout.replace('/', "\n"))?,
        None => Board::new(args.rows, args.cols)?,
    };
    let orientation: Orientation = args.orientation.into();

    let mut config = SearchConfig {
        max_depth: args.depth,
        pruning: !args.no_pruning,
        ..SearchConfig::default()
    };
    if let Some(threads) = args.threads {
        config.threads = threads.max(1);
    }
    if args.perft && config.threads > 1 {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(config.threads).build_global() {
            warn!("perft thread pool not resized ({})", e);
        }
    }

    let mut report: Vec<String> = board.to_string().lines().map(str::to_string).collect();
    info!(
        "{}x{} board, {} to move, {} vertical / {} horizontal moves",
        board.rows(),
        board.cols(),
        orientation,
        board.count_legal_moves(Orientation::Vertical),
        board.count_legal_moves(Orientation::Horizontal)
    );

    if board.game_over(orientation) {
        report.push(format!("game over: no {} moves", orientation));
    } else if args.random {
        let mv = match args.seed {
            Some(seed) => moves::random_move_with(&mut StdRng::seed_from_u64(seed), &board, orientation)?,
            None => board.random_move(orientation)?,
        };
        report.push(format!("random move {}", mv));
    } else {
        let searcher = AlphaBetaSearcher::with_config(config.clone());
        let result = searcher.search(&board, orientation)?;

        if let Some(mv) = result.best_move {
            report.push(format!("best move {}", mv));
        }
        report.push(format!(
            "depth {} value {} leaves {} time {}ms",
            result.depth,
            result.value,
            result.leaf_count,
            result.time_elapsed.as_millis()
        ));
    }

    if args.perft {
        let nodes = search::perft(&board, orientation, args.depth, config.threads)?;
        report.push(format!("perft {} leaves", nodes));
    }

    Ok(report)
}
