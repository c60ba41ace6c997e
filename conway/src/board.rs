// board.rs - Flat toroidal board
//
// Cells live in a single row-major Vec<bool>: index = row * size + col.
// Every edge wraps onto the opposite one, so a neighbor lookup can never
// leave the board.

use rand::Rng;

use crate::error::ConfigError;
use crate::rules::Rule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<bool>,
}

impl Board {
    /// An all-dead board of `size * size` cells.
    pub fn dead(size: usize) -> Self {
        Self { size, cells: vec![false; size * size] }
    }

    /// Every cell independently alive with probability one half.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        let cells = (0..size * size).map(|_| rng.gen_bool(0.5)).collect();
        Self { size, cells }
    }

    pub fn from_cells(size: usize, cells: Vec<bool>) -> Result<Self, ConfigError> {
        if cells.len() != size * size {
            return Err(ConfigError::BoardLength { expected: size * size, got: cells.len() });
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_alive(&self, index: usize) -> bool {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, alive: bool) {
        self.cells[index] = alive;
    }

    pub fn toggle(&mut self, index: usize) {
        self.cells[index] = !self.cells[index];
    }

    pub fn row(&self, index: usize) -> usize {
        index / self.size
    }

    pub fn col(&self, index: usize) -> usize {
        index % self.size
    }

    /// Row-major index of (row, col), both taken modulo the size.
    pub fn index(&self, row: usize, col: usize) -> usize {
        (row % self.size) * self.size + col % self.size
    }

    fn prev(&self, n: usize) -> usize {
        if n == 0 { self.size - 1 } else { n - 1 }
    }

    fn next(&self, n: usize) -> usize {
        if n == self.size - 1 { 0 } else { n + 1 }
    }

    /// The eight wrapped neighbors: NW, N, NE, W, E, SW, S, SE.
    pub fn neighbor_indices(&self, index: usize) -> [usize; 8] {
        let (row, col) = (self.row(index), self.col(index));
        let (up, down) = (self.prev(row), self.next(row));
        let (left, right) = (self.prev(col), self.next(col));
        let at = |r: usize, c: usize| r * self.size + c;
        [
            at(up, left),   at(up, col),   at(up, right),
            at(row, left),                 at(row, right),
            at(down, left), at(down, col), at(down, right),
        ]
    }

    pub fn live_neighbors(&self, index: usize) -> u8 {
        self.neighbor_indices(index)
            .iter()
            .filter(|&&n| self.cells[n])
            .count() as u8
    }

    pub fn next_state(&self, index: usize, rule: Rule) -> bool {
        rule.next_state(self.cells[index], self.live_neighbors(index))
    }

    /// Computes the following generation from this snapshot into a new board.
    pub fn next_generation(&self, rule: Rule) -> Board {
        let cells = (0..self.cells.len())
            .map(|i| self.next_state(i, rule))
            .collect();
        Board { size: self.size, cells }
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.contains(&true)
    }
}
