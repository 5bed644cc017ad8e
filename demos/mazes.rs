use grid_astar::{AstarSolver, Grid, GridError, PathOverlay};

// Runs A* on three small mazes and prints each maze before and after. Symbols:
// - S marks the start
// - E marks the end
// - 1 marks a wall, 0 a free cell
// - * marks free cells on the shortest path
//
// Set RUST_LOG=debug to see search statistics.

const MAZES: [(&str, &str); 3] = [
    (
        "Example 1: simple maze",
        "S 0 1 0 0
         0 0 1 0 1
         1 0 1 0 0
         1 0 0 E 1",
    ),
    (
        "Example 2: maze without solution",
        "S 1 0 0 0
         1 1 1 0 1
         0 0 1 0 0
         1 1 1 E 1",
    ),
    (
        "Example 3: maze with multiple paths",
        "S 0 0 0 0
         1 1 0 1 0
         0 0 0 0 0
         0 1 1 1 E",
    ),
];

fn main() -> Result<(), GridError> {
    env_logger::init();
    let solver = AstarSolver::new();
    for (title, text) in MAZES {
        let grid: Grid = text.parse()?;
        println!("\n=== {} ===", title);
        println!("\nMaze:\n{}", grid);
        match solver.solve(&grid) {
            Ok(Some(path)) => {
                println!("Shortest path ({} steps):", path.len() - 1);
                print!("{}", PathOverlay::new(&grid, &path));
            }
            Ok(None) => println!("No solution."),
            Err(e) => println!("Invalid maze: {}", e),
        }
    }
    Ok(())
}
