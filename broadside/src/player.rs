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

//! One side of the match.
//!
//! A [`Player`] owns its [`Grid`]. The opponent's grid is not stored but lent for the
//! duration of each attack, so no two players ever hold a mutable path to the same grid.

use crate::{
    attack::{AttackResult, Outcome},
    grid::{Coordinate, Grid},
};

pub use self::errors::{AttackError, IllegalState};

mod errors;

/// Points awarded per hit.
const HIT_POINTS: i32 = 12;
/// Points deducted per ship of our own that was lost.
const LOST_SHIP_PENALTY: i32 = 20;

/// A player: their fleet and their record of shots fired.
#[derive(Debug, Clone, Default)]
pub struct Player {
    grid: Grid,
    shots: u32,
    hits: u32,
    misses: u32,
}

impl Player {
    /// Create a player with an empty grid and the fleet undeployed.
    pub fn new() -> Self {
        Self::with_grid(Grid::new())
    }

    /// Create a player owning the given grid.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            shots: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// The player's own grid, in full detail.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the player's own grid, for deployment.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Fire at `coord` on the opponent's grid.
    pub fn attack(
        &mut self,
        target: &mut Grid,
        coord: Coordinate,
    ) -> Result<AttackResult, AttackError> {
        self.check_can_attack(target)?;
        let result = target.shoot(coord)?;
        self.record(&result);
        Ok(result)
    }

    /// Neither side may be defeated already.
    pub(crate) fn check_can_attack(&self, target: &Grid) -> Result<(), IllegalState> {
        if self.is_destroyed() {
            Err(IllegalState::AttackerDefeated)
        } else if target.is_destroyed() {
            Err(IllegalState::TargetDefeated)
        } else {
            Ok(())
        }
    }

    fn record(&mut self, result: &AttackResult) {
        self.shots += 1;
        match result.outcome() {
            Outcome::Miss => self.misses += 1,
            _ => self.hits += 1,
        }
    }

    /// True once every one of the player's ships has been sunk.
    pub fn is_destroyed(&self) -> bool {
        self.grid.is_destroyed()
    }

    /// Number of shots fired.
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Number of shots that struck a ship.
    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Number of shots that struck nothing.
    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Running score: twelve points per hit, one lost per shot and twenty lost per ship
    /// of ours sunk. A defeated player scores nothing.
    pub fn score(&self) -> i32 {
        if self.is_destroyed() {
            0
        } else {
            self.hits as i32 * HIT_POINTS
                - self.shots as i32
                - self.grid.ships_destroyed() as i32 * LOST_SHIP_PENALTY
        }
    }
}
