use clap::Parser;
use eight_puzzle_solver::engine::{Board, START_BOARD};
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{Solution, Solver};
use std::io;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compares the heuristics over a batch of boards", long_about = None)]
struct Args {
    /// Number of seeded scrambled boards to evaluate besides the start board
    #[clap(short, long, default_value_t = 10)]
    boards: usize,

    /// Length of the random walk from the goal used to scramble each board
    #[clap(short, long, default_value_t = 8)]
    scramble: usize,

    /// Seed of the first scrambled board; later boards use consecutive seeds
    #[clap(long, default_value_t = 0)]
    seed: u64,
}

fn print_row(label: &str, solution: &Solution) {
    println!(
        "  {:<20} depth {:<3} fringe {:<7} generated {:<8} dequeued {:<8} {:>6} ms",
        label,
        solution.depth,
        solution.fringe_len,
        solution.nodes_generated,
        solution.nodes_dequeued,
        solution.elapsed.as_millis()
    );
}

fn main() {
    let args = Args::parse();

    let mut boards: Vec<(String, Board)> = vec![("start".to_string(), START_BOARD)];
    for offset in 0..args.boards as u64 {
        let seed = args.seed + offset;
        boards.push((
            format!("seed {}", seed),
            Board::scrambled_with_seed(seed, args.scramble),
        ));
    }

    println!("Evaluating {} boards (scramble length {})...", boards.len(), args.scramble);

    let mut totals = vec![(0usize, 0usize); Heuristic::MENU.len()];

    for (label, board) in &boards {
        println!("\nBoard {}:\n{}", label, board);
        if !board.is_solvable_from_goal() {
            eprintln!("Skipping board {}: goal not reachable.", label);
            continue;
        }
        for (idx, (_, heuristic)) in Heuristic::MENU.iter().enumerate() {
            let mut solver = Solver::new(*board, *heuristic);
            match solver.solve(&mut io::sink()) {
                Ok(solution) => {
                    print_row(heuristic.name(), &solution);
                    totals[idx].0 += solution.nodes_generated;
                    totals[idx].1 += solution.depth;
                }
                Err(e) => eprintln!("  {}: {}", heuristic.name(), e),
            }
        }
    }

    println!("\n--- Totals ---");
    for ((_, heuristic), (generated, depth)) in Heuristic::MENU.iter().zip(&totals) {
        println!(
            "{:<20}: nodes generated = {:<10} summed depth = {}",
            heuristic.name(),
            generated,
            depth
        );
    }
}
