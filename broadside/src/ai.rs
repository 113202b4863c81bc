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

//! The computer opponent.
//!
//! [`AiPlayer`] runs the shot loop shared by every difficulty: pause, pick a cell, fire,
//! learn from the result, and go again for as long as it keeps hitting. Choosing the
//! cell and learning from the result are delegated to a [`Strategy`], one per
//! [`Difficulty`].
use std::{fmt, str::FromStr};

use log::{debug, warn};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use thiserror::Error;

use crate::{
    attack::{AttackResult, Outcome},
    grid::{Coordinate, Grid, OpponentView, PlaceError},
    player::{AttackError, IllegalState, Player},
};

pub use self::{
    easy::Easy,
    hard::Hard,
    host::{AbortFlag, Immediate, TurnHost},
    medium::Medium,
};

mod easy;
mod hard;
mod host;
mod medium;

/// Targeting policy of the computer player.
pub trait Strategy: fmt::Debug + Send {
    /// The difficulty this strategy implements.
    fn difficulty(&self) -> Difficulty;

    /// Choose the next cell to fire at. Must only return cells that are open in `view`.
    /// Returns `None` only if no open cell remains.
    fn generate_coords(
        &mut self,
        view: &OpponentView,
        rng: &mut dyn RngCore,
    ) -> Option<Coordinate>;

    /// Learn from the result of the last shot.
    fn process_shot(&mut self, result: &AttackResult);
}

/// How hard the computer plays.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Difficulty {
    /// Fires at random.
    Easy,
    /// Fires at random until it hits, then searches around the hit.
    Medium,
    /// Like medium, but once it has two hits in a line it follows the line.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Build the default strategy for this difficulty.
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(Easy::new()),
            Difficulty::Medium => Box::new(Medium::new()),
            Difficulty::Hard => Box::new(Hard::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown difficulty {0:?}, choose easy, medium or hard")]
pub struct UnknownDifficulty(String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDifficulty(s.to_owned()))
    }
}

/// Number of cooperative pause ticks before each computer shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ThinkDelay {
    ticks: u32,
}

impl ThinkDelay {
    /// The classic pause of 150 ticks.
    pub const CLASSIC: ThinkDelay = ThinkDelay { ticks: 150 };

    pub fn new(ticks: u32) -> Self {
        Self { ticks }
    }

    /// Fire without pausing. The host is still polled for cancellation.
    pub fn none() -> Self {
        Self::new(0)
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

impl Default for ThinkDelay {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Why the computer's turn ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TurnEnd {
    /// The last shot missed; the opponent moves next.
    Missed,
    /// The last shot sank the final ship.
    GameOver,
    /// The host asked to stop. The turn may be resumed by attacking again.
    Cancelled,
}

/// Every shot fired during one computer turn, in order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Turn {
    shots: Vec<AttackResult>,
    end: TurnEnd,
}

impl Turn {
    fn new(shots: Vec<AttackResult>, end: TurnEnd) -> Self {
        Self { shots, end }
    }

    pub fn shots(&self) -> &[AttackResult] {
        &self.shots
    }

    pub fn end(&self) -> TurnEnd {
        self.end
    }

    /// The result of the final shot, if any shot was fired before the turn ended.
    pub fn last(&self) -> Option<&AttackResult> {
        self.shots.last()
    }
}

/// A player whose shots are chosen by a [`Strategy`].
#[derive(Debug)]
pub struct AiPlayer {
    player: Player,
    strategy: Box<dyn Strategy>,
    rng: StdRng,
    think: ThinkDelay,
}

impl AiPlayer {
    /// Create a computer player of the given difficulty, seeded from the OS.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_entropy())
    }

    /// Create a computer player of the given difficulty using the provided rng.
    pub fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        Self::with_strategy(difficulty.strategy(), rng)
    }

    /// Create a computer player with a custom strategy.
    pub fn with_strategy(strategy: Box<dyn Strategy>, rng: StdRng) -> Self {
        Self {
            player: Player::new(),
            strategy,
            rng,
            think: ThinkDelay::default(),
        }
    }

    /// Set the pause before each shot.
    pub fn think_delay(mut self, think: ThinkDelay) -> Self {
        self.think = think;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.strategy.difficulty()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn grid(&self) -> &Grid {
        self.player.grid()
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        self.player.grid_mut()
    }

    pub fn is_destroyed(&self) -> bool {
        self.player.is_destroyed()
    }

    /// Randomly deploy whatever part of the fleet is not yet deployed.
    pub fn deploy_fleet(&mut self) -> Result<(), PlaceError> {
        self.player.grid_mut().randomize(&mut self.rng)
    }

    /// Take a full turn against `target`: keep firing while shots hit, stopping on a
    /// miss, on the end of the game, or when `host` asks to abort.
    ///
    /// Before each shot the host is paused for the configured number of ticks. The
    /// host is polled for an abort before and after every tick; no state changes while
    /// paused.
    pub fn attack(
        &mut self,
        target: &mut Grid,
        host: &mut dyn TurnHost,
    ) -> Result<Turn, AttackError> {
        self.player.check_can_attack(target)?;
        let mut shots = Vec::new();
        loop {
            if !self.think(host) {
                debug!("{} turn cancelled after {} shots", self.difficulty(), shots.len());
                return Ok(Turn::new(shots, TurnEnd::Cancelled));
            }
            let coord = match self.strategy.generate_coords(&target.view(), &mut self.rng) {
                Some(coord) => coord,
                None => {
                    warn!("no open cells left but the game did not end");
                    return Err(IllegalState::NoTargetsLeft.into());
                }
            };
            let result = self.player.attack(target, coord).map_err(|err| {
                warn!("{} strategy chose a bad shot: {}", self.difficulty(), err);
                err
            })?;
            debug!("{} fired at {}: {:?}", self.difficulty(), coord, result.outcome());
            self.strategy.process_shot(&result);
            shots.push(result);
            match result.outcome() {
                Outcome::Miss => return Ok(Turn::new(shots, TurnEnd::Missed)),
                Outcome::GameOver(_) => return Ok(Turn::new(shots, TurnEnd::GameOver)),
                Outcome::Hit | Outcome::Destroyed(_) => {}
            }
        }
    }

    /// Pause before a shot. Returns false if the host asked to abort.
    fn think(&self, host: &mut dyn TurnHost) -> bool {
        if host.abort_requested() {
            return false;
        }
        for _ in 0..self.think.ticks() {
            host.pause();
            if host.abort_requested() {
                return false;
            }
        }
        true
    }
}
