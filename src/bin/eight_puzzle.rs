use clap::Parser;
use eight_puzzle_solver::engine::START_BOARD;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::Solver;
use eight_puzzle_solver::utils::{read_selector, write_fatal, write_menu};
use std::io::{self, BufWriter, Write};
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Heuristic selector: 1 Manhattan, 2 misplaced tiles, 3 Nilsson; anything else scores 0.
    /// Prompts on stdin when omitted.
    #[clap(short = 'H', long, allow_hyphen_values = true)]
    heuristic: Option<i64>,
}

fn main() {
    let args = Args::parse();

    let selector = match args.heuristic {
        Some(selector) => selector,
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let menu = write_menu(&mut out).and_then(|_| read_selector(&mut io::stdin().lock()));
            match menu {
                Ok(selector) => selector,
                Err(e) => {
                    eprintln!("Error reading heuristic choice: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    let heuristic = Heuristic::from_selector(selector);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut solver = Solver::new(START_BOARD, heuristic);

    let result = solver.solve(&mut out);
    if let Err(e) = result {
        if write_fatal(&mut out, &e).is_err() {
            eprintln!("Fatal: {}", e);
        }
        process::exit(1);
    }
    if let Err(e) = out.flush() {
        eprintln!("Fatal: failed to write search output: {}", e);
        process::exit(1);
    }
}
