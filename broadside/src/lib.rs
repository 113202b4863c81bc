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

//! Game-state and targeting engine for the classic game of Battleships, played by one
//! human against a computer opponent on a pair of 10x10 grids.
//!
//! The crate performs no I/O. A presentation layer drives it through the [`game::Game`]
//! session, or directly through [`grid::Grid`], [`player::Player`] and [`ai::AiPlayer`]:
//!
//! - [`grid`] holds the tiles and the fleet and resolves shots.
//! - [`ships`] defines the fleet's vessels.
//! - [`attack`] defines the outcome of a single shot.
//! - [`player`] and [`ai`] represent the two sides of the match, with the computer's
//!   targeting policy selected by [`ai::Difficulty`].
//! - [`game`] enforces deployment, turn order and end-of-game detection.

pub mod ai;
pub mod attack;
pub mod game;
pub mod grid;
pub mod player;
pub mod ships;

pub use crate::{
    ai::{AiPlayer, Difficulty, Turn, TurnEnd, TurnHost},
    attack::{AttackResult, Outcome},
    game::{Game, GameError, Phase, Side, Summary},
    grid::{Coordinate, Direction, ErrorClass, Grid, Heading, PlaceError, ShotError, GRID_SIZE},
    player::{AttackError, IllegalState, Player},
    ships::{Ship, ShipKind},
};
