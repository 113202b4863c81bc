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
use enumflags2::BitFlags;

use crate::{
    grid::{CellView, Coordinate, Grid},
    ships::ShipKind,
};

/// Read-only window onto an opponent's grid. Exposes which cells were shot and whether
/// they hit, plus the ships already announced sunk, but never where an undamaged ship
/// lies.
#[derive(Debug, Copy, Clone)]
pub struct OpponentView<'a> {
    grid: &'a Grid,
}

impl<'a> OpponentView<'a> {
    pub(super) fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// What is known about the cell. Returns `None` if out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellView> {
        self.grid.tile(coord).map(|tile| tile.view())
    }

    /// True if the cell is on the grid and has not been shot yet.
    pub fn is_open(&self, coord: Coordinate) -> bool {
        self.cell(coord) == Some(CellView::Unshot)
    }

    /// Iterate the cells not shot yet, in row-major order.
    pub fn open_cells(&self) -> impl 'a + Iterator<Item = Coordinate> {
        let grid = self.grid;
        grid.tiles
            .iter()
            .filter(|tile| !tile.is_shot())
            .map(|tile| tile.coord())
    }

    /// Iterate the rows of the grid as the opponent sees them.
    pub fn rows(&self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellView>> {
        let grid = self.grid;
        grid.rows().map(|row| row.iter().map(|tile| tile.view()))
    }

    /// Ships that have been announced sunk.
    pub fn destroyed_ships(&self) -> BitFlags<ShipKind> {
        self.grid.destroyed_ships()
    }

    /// True if every deployed ship has been sunk.
    pub fn is_destroyed(&self) -> bool {
        self.grid.is_destroyed()
    }

    /// Number of shots this grid has received.
    pub fn shots(&self) -> usize {
        self.grid.shots()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Direction;

    use super::*;

    #[test]
    fn view_only_reveals_shots() {
        let mut grid = Grid::new();
        grid.add_ship(ShipKind::Submarine, Coordinate::new(1, 1), Direction::Horizontal)
            .unwrap();
        grid.shoot(Coordinate::new(1, 1)).unwrap();
        grid.shoot(Coordinate::new(5, 5)).unwrap();

        let view = grid.view();
        assert_eq!(view.cell(Coordinate::new(1, 1)), Some(CellView::Hit));
        assert_eq!(view.cell(Coordinate::new(1, 2)), Some(CellView::Unshot));
        assert_eq!(view.cell(Coordinate::new(5, 5)), Some(CellView::Miss));
        assert_eq!(view.cell(Coordinate::new(10, 0)), None);
        assert!(!view.is_open(Coordinate::new(1, 1)));
        assert!(view.is_open(Coordinate::new(1, 2)));
        assert_eq!(view.open_cells().count(), 98);
        assert!(view.destroyed_ships().is_empty());
        assert_eq!(view.rows().flatten().filter(|c| *c == CellView::Hit).count(), 1);
    }
}
