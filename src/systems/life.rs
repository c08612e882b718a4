// MIT License

/* Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE. */

use crate::models::constants::{ALIVE_THRESHOLD, DEAD_ZONE_END, DEAD_ZONE_START};
use ndarray::{s, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Rows forced dead at initialization for a grid of the given height.
pub fn dead_zone_rows(height: usize) -> Range<usize> {
    let start = height * DEAD_ZONE_START.0 / DEAD_ZONE_START.1;
    let end = height * DEAD_ZONE_END.0 / DEAD_ZONE_END.1;
    start..end
}

/// Conway's Game of Life (B3/S23) on a torus. Cells are indexed `[[y, x]]`.
#[derive(Clone, Debug)]
pub struct GameOfLife {
    width: usize,
    height: usize,
    cells: Array2<bool>,
    generation: usize,
}

impl GameOfLife {
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut fill = Vec::with_capacity(width * height);
        for _ in 0..width * height {
            fill.push(rng.gen::<f64>() > ALIVE_THRESHOLD);
        }
        let mut cells = Array2::from_shape_vec((height, width), fill)
            .unwrap_or_else(|_| Array2::from_elem((height, width), false));

        // One-time mask; cells in the band may come back to life later.
        let band = dead_zone_rows(height);
        cells.slice_mut(s![band.start..band.end, ..]).fill(false);

        Self {
            width,
            height,
            cells,
            generation: 0,
        }
    }

    #[cfg(test)]
    pub fn from_cells(cells: Array2<bool>) -> Self {
        let (height, width) = cells.dim();
        Self {
            width,
            height,
            cells,
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn dead_zone(&self) -> Range<usize> {
        dead_zone_rows(self.height)
    }

    #[cfg(test)]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[[y % self.height, x % self.width]]
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live cells among the 8 neighbors, wrapping each axis independently.
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x as isize + dx).rem_euclid(self.width as isize) as usize;
                let ny = (y as isize + dy).rem_euclid(self.height as isize) as usize;
                if self.cells[[ny, nx]] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance one generation. Every count reads the pre-step grid; the new
    /// grid replaces it only once it is complete.
    pub fn step(&mut self) {
        let mut next = Array2::from_elem((self.height, self.width), false);
        for y in 0..self.height {
            for x in 0..self.width {
                let neighbors = self.count_neighbors(x, y);
                next[[y, x]] = matches!(
                    (self.cells[[y, x]], neighbors),
                    (true, 2) | (true, 3) | (false, 3)
                );
            }
        }
        self.cells = next;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> GameOfLife {
        let mut cells = Array2::from_elem((height, width), false);
        for &(x, y) in alive {
            cells[[y, x]] = true;
        }
        GameOfLife::from_cells(cells)
    }

    #[test]
    fn same_seed_gives_same_grid_and_trajectory() {
        let mut a = GameOfLife::new(40, 30, 42);
        let mut b = GameOfLife::new(40, 30, 42);
        assert_eq!(a.cells(), b.cells());
        for _ in 0..10 {
            a.step();
            b.step();
            assert_eq!(a.cells(), b.cells());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = GameOfLife::new(40, 30, 1);
        let b = GameOfLife::new(40, 30, 2);
        assert_ne!(a.cells(), b.cells());
    }

    #[test]
    fn dead_zone_is_cleared_after_init() {
        let game = GameOfLife::new(100, 60, 42);
        assert_eq!(game.dead_zone(), 24..52);
        for y in game.dead_zone() {
            for x in 0..game.width() {
                assert!(!game.is_alive(x, y), "cell ({}, {}) alive in dead zone", x, y);
            }
        }
        // Random fill still happened elsewhere.
        assert!(game.population() > 0);
    }

    #[test]
    fn dead_zone_rows_truncate() {
        assert_eq!(dead_zone_rows(6), 2..5);
        assert_eq!(dead_zone_rows(10), 4..8);
        assert_eq!(dead_zone_rows(1), 0..0);
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut game = grid_with(8, 8, &[]);
        game.step();
        assert_eq!(game.population(), 0);
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn neighbors_wrap_across_edges() {
        let game = grid_with(10, 6, &[(9, 0), (0, 5), (9, 5), (1, 1)]);
        // (0,0) sees (9,0) on the left, (0,5) above, (9,5) diagonally and (1,1).
        assert_eq!(game.count_neighbors(0, 0), 4);
        // (9,5) sees (0,5) to the right and (9,0) below.
        assert_eq!(game.count_neighbors(9, 5), 2);
    }

    #[test]
    fn one_column_grid_counts_both_wrapped_sides() {
        // Left and right both wrap onto the cell's own column.
        let mut game = grid_with(1, 5, &[(0, 2)]);
        assert_eq!(game.count_neighbors(0, 2), 2);
        assert_eq!(game.count_neighbors(0, 1), 3);

        game.step();
        assert!(game.is_alive(0, 2));
        assert!(game.is_alive(0, 1));
        assert!(game.is_alive(0, 3));
        assert_eq!(game.population(), 3);
    }

    #[test]
    fn one_row_grid_counts_both_wrapped_sides() {
        let game = grid_with(5, 1, &[(2, 0), (3, 0)]);
        // Above and below wrap onto the same row: (3, 0) counts three times, (2, 0) twice.
        assert_eq!(game.count_neighbors(2, 0), 5);
        let single = GameOfLife::from_cells(Array2::from_elem((1, 1), true));
        assert_eq!(single.count_neighbors(0, 0), 8);
    }

    #[test]
    fn cell_does_not_count_itself() {
        let game = grid_with(5, 5, &[(2, 2)]);
        assert_eq!(game.count_neighbors(2, 2), 0);
        assert_eq!(game.count_neighbors(1, 1), 1);
    }

    #[test]
    fn full_neighborhood_counts_eight() {
        let alive: Vec<(usize, usize)> = (0..3)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .collect();
        let game = grid_with(6, 6, &alive);
        assert_eq!(game.count_neighbors(1, 1), 8);
    }

    #[test]
    fn survival_and_death_follow_b3_s23() {
        // Lonely cell dies.
        let mut game = grid_with(6, 6, &[(2, 2)]);
        game.step();
        assert!(!game.is_alive(2, 2));

        // Block is stable: each cell has exactly 3 neighbors.
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut game = grid_with(6, 6, &block);
        game.step();
        assert_eq!(game.population(), 4);
        for &(x, y) in &block {
            assert!(game.is_alive(x, y));
        }

        // Center of a plus shape has 4 neighbors and dies.
        let mut game = grid_with(7, 7, &[(3, 3), (3, 2), (3, 4), (2, 3), (4, 3)]);
        game.step();
        assert!(!game.is_alive(3, 3));
    }

    #[test]
    fn blinker_oscillates_with_birth_on_three() {
        let mut game = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        game.step();
        assert!(game.is_alive(2, 1));
        assert!(game.is_alive(2, 2));
        assert!(game.is_alive(2, 3));
        assert!(!game.is_alive(1, 2));
        assert!(!game.is_alive(3, 2));
        game.step();
        assert!(game.is_alive(1, 2));
        assert!(game.is_alive(3, 2));
        assert_eq!(game.population(), 3);
    }

    #[test]
    fn blinker_wraps_around_the_torus() {
        // Horizontal blinker straddling the left/right edge.
        let mut game = grid_with(6, 6, &[(5, 3), (0, 3), (1, 3)]);
        game.step();
        assert!(game.is_alive(0, 2));
        assert!(game.is_alive(0, 3));
        assert!(game.is_alive(0, 4));
        assert_eq!(game.population(), 3);
    }

    #[test]
    fn glider_returns_to_shape_shifted_after_four_steps() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut game = grid_with(8, 8, &glider);
        for _ in 0..4 {
            game.step();
        }
        for &(x, y) in &glider {
            assert!(game.is_alive(x + 1, y + 1));
        }
        assert_eq!(game.population(), 5);
    }
}
