use grid_astar::{AstarSolver, Grid, PathOverlay};
use std::error::Error;
use std::fs;

// Solves a maze read from a text file, one row per line using the symbols S, E, 0 and 1:
//
//   cargo run --example solve_file -- maze.txt
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let file = std::env::args()
        .nth(1)
        .ok_or("usage: solve_file <maze file>")?;
    let grid: Grid = fs::read_to_string(&file)?.parse()?;
    println!("{}", grid);
    match AstarSolver::new().solve(&grid)? {
        Some(path) => {
            println!("A path has been found:");
            print!("{}", PathOverlay::new(&grid, &path));
            for p in path {
                println!("{}", p);
            }
        }
        None => println!("No path from start to end"),
    }
    Ok(())
}
