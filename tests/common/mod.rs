#![allow(dead_code)]

use std::collections::VecDeque;

use fxhash::FxHashMap;
use grid_astar::{Coord, Grid};
use itertools::Itertools;

/// Breadth-first shortest path length in steps, independent of the A* implementation.
pub fn bfs_distance(grid: &Grid, start: Coord, goal: Coord) -> Option<usize> {
    let mut dist: FxHashMap<Coord, usize> = FxHashMap::default();
    let mut queue = VecDeque::from([start]);
    dist.insert(start, 0);
    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        if current == goal {
            return Some(d);
        }
        for n in grid.neighbours(current) {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

/// Checks that `path` starts and ends at the endpoints, stays on passable cells and only
/// takes single orthogonal steps.
pub fn assert_valid_path(grid: &Grid, path: &[Coord], start: Coord, goal: Coord) {
    assert_eq!(path.first(), Some(&start), "path does not start at {start}");
    assert_eq!(path.last(), Some(&goal), "path does not end at {goal}");
    for p in path {
        assert!(grid.in_bounds(*p), "{p} is outside the grid");
        assert!(grid.is_passable(*p), "{p} is a wall");
    }
    for (a, b) in path.iter().tuple_windows() {
        assert!(a.is_adjacent(b), "{a} -> {b} is not a single step");
    }
}

pub fn visualize_grid(grid: &Grid, start: &Coord, end: &Coord) {
    for (coord, cell) in grid.iter() {
        if *start == coord {
            print!("S");
        } else if *end == coord {
            print!("G");
        } else if cell.is_passable() {
            print!(".");
        } else {
            print!("#");
        }
        if coord.col + 1 == grid.width() {
            println!();
        }
    }
}
