/// Fuzzes the solver on many random grids: a path is found exactly when start and goal share a
/// connected component, and its length always equals the breadth-first distance.
mod common;

use common::{assert_valid_path, bfs_distance, visualize_grid};
use grid_astar::{AstarSolver, Cell, Coord, Grid, NoHeuristic};
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> Grid {
    let rows = (0..h)
        .map(|_| {
            (0..w)
                .map(|_| if rng.gen_bool(0.4) { Cell::Wall } else { Cell::Free })
                .collect()
        })
        .collect();
    Grid::new(rows).unwrap()
}

fn with_endpoints(w: usize, h: usize, rng: &mut StdRng) -> Grid {
    let grid = random_grid(w, h, rng);
    // Rebuild with the markers in opposite corners.
    let rows = (0..h)
        .map(|row| {
            (0..w)
                .map(|col| match (row, col) {
                    (0, 0) => Cell::Start,
                    (r, c) if r == h - 1 && c == w - 1 => Cell::Goal,
                    _ => grid.get(Coord::new(row, col)).unwrap(),
                })
                .collect()
        })
        .collect();
    Grid::new(rows).unwrap()
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Coord::new(0, 0);
    let end = Coord::new(N - 1, N - 1);
    for check_components in [true, false] {
        let mut solver = AstarSolver::new();
        solver.check_components = check_components;
        for _ in 0..N_GRIDS {
            let grid = with_endpoints(N, N, &mut rng);
            let reachable = grid.reachable(&start, &end);
            let path = solver.solve(&grid).unwrap();
            // Show the grid if a path is not found
            if path.is_some() != reachable {
                visualize_grid(&grid, &start, &end);
            }
            assert_eq!(path.is_some(), reachable);
            assert_eq!(
                path.as_ref().map(|p| p.len() - 1),
                bfs_distance(&grid, start, end)
            );
            if let Some(path) = path {
                assert_valid_path(&grid, &path, start, end);
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let astar_solver = AstarSolver::new();
    let dijkstra_solver = AstarSolver::with_heuristic(NoHeuristic);
    for _ in 0..N_GRIDS {
        let (w, h) = (rng.gen_range(1..8), rng.gen_range(1..8));
        let grid = random_grid(w, h, &mut rng);
        let start = Coord::new(rng.gen_range(0..h), rng.gen_range(0..w));
        let end = Coord::new(rng.gen_range(0..h), rng.gen_range(0..w));
        if !grid.is_passable(start) || !grid.is_passable(end) {
            continue;
        }
        let astar_path = astar_solver.find_path(&grid, start, end).unwrap();
        let dijkstra_path = dijkstra_solver.find_path(&grid, start, end).unwrap();
        let expected = bfs_distance(&grid, start, end);
        if astar_path.as_ref().map(|p| p.len() - 1) != expected {
            println!("Astar path: {astar_path:?}");
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(astar_path.as_ref().map(|p| p.len() - 1), expected);
        assert_eq!(dijkstra_path.map(|p| p.len() - 1), expected);
    }
}

/// Repeated searches on the same grid return the same path.
#[test]
fn fuzz_idempotent() {
    const N: usize = 12;
    let mut rng = StdRng::seed_from_u64(2);
    let solver = AstarSolver::new();
    for _ in 0..200 {
        let grid = with_endpoints(N, N, &mut rng);
        assert_eq!(solver.solve(&grid), solver.solve(&grid));
    }
}
