// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::fmt;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// Width and height of the classic grid.
pub const GRID_SIZE: usize = 10;

/// The coordinates of a [`Tile`][crate::grid::Tile] in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Vertical position of the cell, counting down from the top.
    pub row: usize,
    /// Horizontal position of the cell, counting right from the left edge.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies on the grid.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Convert to an index into row-major tile storage. Returns `None` if out of bounds.
    pub(crate) fn linearize(&self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row * GRID_SIZE + self.col)
        } else {
            None
        }
    }

    /// Get back a coordinate from a row-major index.
    pub(crate) fn un_linearize(idx: usize) -> Self {
        Self::new(idx / GRID_SIZE, idx % GRID_SIZE)
    }

    /// Move one cell in the given heading. Returns `None` if that leaves the grid.
    pub fn step(self, heading: Heading) -> Option<Self> {
        let next = match heading {
            Heading::Up => Self::new(self.row.checked_sub(1)?, self.col),
            Heading::Down => Self::new(self.row.checked_add(1)?, self.col),
            Heading::Left => Self::new(self.row, self.col.checked_sub(1)?),
            Heading::Right => Self::new(self.row, self.col.checked_add(1)?),
        };
        if next.in_bounds() {
            Some(next)
        } else {
            None
        }
    }

    /// Iterate the in-bounds orthogonal neighbors of this coordinate, in the default
    /// up, down, left, right order.
    pub fn neighbors(self) -> Neighbors {
        self.neighbors_in(Heading::DEFAULT_ORDER)
    }

    /// Iterate the in-bounds orthogonal neighbors of this coordinate, in the given order.
    pub fn neighbors_in(self, order: [Heading; 4]) -> Neighbors {
        Neighbors {
            coord: self,
            order,
            next: if self.in_bounds() { 0 } else { order.len() },
        }
    }

    /// Iterate every coordinate of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE * GRID_SIZE).map(Self::un_linearize)
    }

    /// The direction of the line through both coordinates, if they share a row or
    /// column and are distinct.
    pub fn line_to(&self, other: &Coordinate) -> Option<Direction> {
        match (self.row == other.row, self.col == other.col) {
            (true, false) => Some(Direction::Horizontal),
            (false, true) => Some(Direction::Vertical),
            _ => None,
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orientation of a deployed ship. Ships extend right from their origin when
/// horizontal and down when vertical.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Both orientations.
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// The heading a ship extends in from its origin.
    pub fn heading(self) -> Heading {
        match self {
            Direction::Horizontal => Heading::Right,
            Direction::Vertical => Heading::Down,
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        if rng.gen() {
            Direction::Horizontal
        } else {
            Direction::Vertical
        }
    }
}

/// A single orthogonal step on the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Order used to search around a hit unless a strategy is configured otherwise.
    pub const DEFAULT_ORDER: [Heading; 4] =
        [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// The line this heading moves along.
    pub fn direction(self) -> Direction {
        match self {
            Heading::Up | Heading::Down => Direction::Vertical,
            Heading::Left | Heading::Right => Direction::Horizontal,
        }
    }
}

/// Iterator over the neighbors of a coordinate.
#[derive(Debug, Clone)]
pub struct Neighbors {
    coord: Coordinate,
    order: [Heading; 4],
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while self.next < self.order.len() {
            let heading = self.order[self.next];
            self.next += 1;
            if let Some(coord) = self.coord.step(heading) {
                return Some(coord);
            }
        }
        None
    }
}
