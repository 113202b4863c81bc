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
use thiserror::Error;

use crate::grid::{ErrorClass, ShotError};

/// Operations refused because of where the game stands rather than what was asked.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum IllegalState {
    /// The attacking player has no ships left.
    #[error("the attacking player is already defeated")]
    AttackerDefeated,
    /// The target grid has no ships left.
    #[error("the target player is already defeated")]
    TargetDefeated,
    /// Every cell of the target grid was shot but the game did not end.
    #[error("no unshot cells remain to target")]
    NoTargetsLeft,
    /// Ships may only be moved before the game starts.
    #[error("ships can only be deployed before the game starts")]
    NotDeploying,
    /// The game cannot start until the whole fleet is deployed.
    #[error("not every ship has been deployed")]
    FleetNotDeployed,
    /// The other side is to move.
    #[error("it is not this player's turn")]
    NotYourTurn,
    /// The game already has a winner.
    #[error("the game is already over")]
    GameOver,
}

/// Error returned when a player's attack is refused.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum AttackError {
    #[error(transparent)]
    InvalidShot(#[from] ShotError),
    #[error(transparent)]
    IllegalState(#[from] IllegalState),
}

impl AttackError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AttackError::InvalidShot(err) => err.class(),
            AttackError::IllegalState(_) => ErrorClass::IllegalState,
        }
    }
}
