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

//! Result of a single shot.
use std::fmt;

use crate::{grid::Coordinate, ships::ShipKind};

/// Outcome of a successfully-fired shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// Nothing was hit.
    Miss,
    /// A ship was hit but not sunk. Which ship stays hidden.
    Hit,
    /// The given ship was hit and sunk but the grid still has other ships afloat.
    Destroyed(ShipKind),
    /// The given ship was hit and sunk, and no ships remain afloat.
    GameOver(ShipKind),
}

impl Outcome {
    /// The ship revealed by this shot, if it sank one.
    pub fn ship(&self) -> Option<ShipKind> {
        match self {
            Outcome::Miss | Outcome::Hit => None,
            Outcome::Destroyed(ship) | Outcome::GameOver(ship) => Some(*ship),
        }
    }

    /// True if the shot struck a ship.
    pub fn is_hit(&self) -> bool {
        !matches!(self, Outcome::Miss)
    }

    /// True if the shooter gets to fire again this turn.
    pub fn keeps_turn(&self) -> bool {
        matches!(self, Outcome::Hit | Outcome::Destroyed(_))
    }
}

/// A shot and what it did.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AttackResult {
    outcome: Outcome,
    coord: Coordinate,
}

impl AttackResult {
    pub(crate) fn new(outcome: Outcome, coord: Coordinate) -> Self {
        Self { outcome, coord }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The cell that was fired at.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn row(&self) -> usize {
        self.coord.row
    }

    pub fn col(&self) -> usize {
        self.coord.col
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.outcome {
            Outcome::Miss => write!(f, "missed"),
            Outcome::Hit => write!(f, "hit something!"),
            Outcome::Destroyed(ship) => write!(f, "destroyed the enemy's {}", ship),
            Outcome::GameOver(ship) => write!(f, "destroyed the enemy's {}, game over", ship),
        }
    }
}
