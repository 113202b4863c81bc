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
use crate::{grid::Coordinate, ships::ShipKind};

/// A single cell in a player's grid.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tile {
    /// Where this tile sits in the grid. Fixed at construction.
    coord: Coordinate,

    /// The ship that occupies this cell, if any. This is a handle into the grid's fleet,
    /// the tile never owns the ship.
    ship: Option<ShipKind>,

    /// Whether this cell has been fired upon.
    shot: bool,
}

impl Tile {
    pub(super) fn new(coord: Coordinate) -> Self {
        Self {
            coord,
            ship: None,
            shot: false,
        }
    }

    /// The grid coordinate of this tile.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn row(&self) -> usize {
        self.coord.row
    }

    pub fn col(&self) -> usize {
        self.coord.col
    }

    /// The ship occupying this tile, if any.
    pub fn ship(&self) -> Option<ShipKind> {
        self.ship
    }

    /// True if no ship occupies this tile.
    pub fn is_sea(&self) -> bool {
        self.ship.is_none()
    }

    /// Whether this tile has been shot previously.
    pub fn is_shot(&self) -> bool {
        self.shot
    }

    /// What an opponent is allowed to know about this tile.
    pub fn view(&self) -> CellView {
        match (self.shot, self.ship) {
            (false, _) => CellView::Unshot,
            (true, None) => CellView::Miss,
            (true, Some(_)) => CellView::Hit,
        }
    }

    pub(super) fn set_ship(&mut self, ship: ShipKind) {
        self.ship = Some(ship);
    }

    pub(super) fn clear_ship(&mut self) {
        self.ship = None;
    }

    /// Mark this tile shot and report what was there.
    pub(super) fn shoot(&mut self) -> Option<ShipKind> {
        self.shot = true;
        self.ship
    }
}

/// A tile as seen from across the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellView {
    /// Not fired upon yet.
    Unshot,
    /// Fired upon, nothing there.
    Miss,
    /// Fired upon, hit a ship.
    Hit,
}
