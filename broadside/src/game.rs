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

//! A full match between a human and the computer.
//!
//! [`Game`] owns both sides and enforces the order of play: the human deploys their
//! fleet, then the two sides alternate turns, each keeping the turn for as long as their
//! shots hit, until one fleet is sunk or the human surrenders.

use std::fmt;

use log::info;
use rand::{rngs::StdRng, Rng};

use crate::{
    ai::{AiPlayer, Difficulty, Turn, TurnEnd, TurnHost},
    attack::{AttackResult, Outcome},
    grid::{Coordinate, Direction, Grid, OpponentView},
    player::{IllegalState, Player},
    ships::{Deployment, ShipKind},
};

pub use self::errors::GameError;

mod errors;

/// One side of the match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::Human => "human",
            Side::Computer => "computer",
        })
    }
}

/// Where the match stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// The human is placing their fleet.
    Deploying,
    /// The human is to fire.
    HumanTurn,
    /// The computer is to fire.
    ComputerTurn,
    /// The match is decided.
    Over(Side),
}

impl Phase {
    /// The phase in which the given side is to fire.
    fn turn(side: Side) -> Self {
        match side {
            Side::Human => Phase::HumanTurn,
            Side::Computer => Phase::ComputerTurn,
        }
    }
}

/// Final state of one ship, for the end-of-game summary.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShipStatus {
    pub kind: ShipKind,
    pub destroyed: bool,
}

/// What is reported once the match is decided.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Summary {
    pub winner: Side,
    pub human_fleet: Vec<ShipStatus>,
    pub computer_fleet: Vec<ShipStatus>,
    pub human_score: i32,
    pub human_shots: u32,
    pub computer_shots: u32,
}

fn fleet_status(player: &Player) -> Vec<ShipStatus> {
    player
        .grid()
        .ships()
        .map(|ship| ShipStatus {
            kind: ship.kind(),
            destroyed: ship.is_destroyed(),
        })
        .collect()
}

/// A match between a human and the computer.
#[derive(Debug)]
pub struct Game {
    human: Player,
    computer: AiPlayer,
    phase: Phase,
}

impl Game {
    /// Start setting up a match against a computer of the given difficulty, seeded from
    /// the OS.
    pub fn new(difficulty: Difficulty) -> Result<Self, GameError> {
        Self::with_computer(AiPlayer::new(difficulty))
    }

    /// Start setting up a match using the given rng for the computer.
    pub fn with_rng(difficulty: Difficulty, rng: StdRng) -> Result<Self, GameError> {
        Self::with_computer(AiPlayer::with_rng(difficulty, rng))
    }

    /// Start setting up a match against the given computer player. Any part of its fleet
    /// not yet deployed is deployed at random.
    pub fn with_computer(mut computer: AiPlayer) -> Result<Self, GameError> {
        computer.deploy_fleet()?;
        info!("new {} game, deploy your fleet", computer.difficulty());
        Ok(Self {
            human: Player::new(),
            computer,
            phase: Phase::Deploying,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The winner, once the match is decided.
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Over(side) => Some(side),
            _ => None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.computer.difficulty()
    }

    /// The human player, including their grid in full detail.
    pub fn human(&self) -> &Player {
        &self.human
    }

    /// The computer's grid in full detail. `None` until the match is decided; use
    /// [`enemy_view`][Game::enemy_view] while playing.
    pub fn computer_grid(&self) -> Option<&Grid> {
        match self.phase {
            Phase::Over(_) => Some(self.computer.grid()),
            _ => None,
        }
    }

    /// Shots the computer has fired so far.
    pub fn computer_shots(&self) -> u32 {
        self.computer.player().shots()
    }

    /// What the human is allowed to know about the computer's grid.
    pub fn enemy_view(&self) -> OpponentView {
        self.computer.grid().view()
    }

    fn check_deploying(&self) -> Result<(), IllegalState> {
        match self.phase {
            Phase::Deploying => Ok(()),
            Phase::Over(_) => Err(IllegalState::GameOver),
            _ => Err(IllegalState::NotDeploying),
        }
    }

    /// Deploy one of the human's ships.
    pub fn deploy(
        &mut self,
        kind: ShipKind,
        origin: Coordinate,
        direction: Direction,
    ) -> Result<(), GameError> {
        self.check_deploying()?;
        self.human.grid_mut().add_ship(kind, origin, direction)?;
        Ok(())
    }

    /// Take one of the human's ships off the grid, returning where it was.
    pub fn remove(&mut self, kind: ShipKind) -> Result<Option<Deployment>, GameError> {
        self.check_deploying()?;
        Ok(self.human.grid_mut().remove_ship(kind))
    }

    /// Deploy the rest of the human's fleet at random.
    pub fn randomize_deployment<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.check_deploying()?;
        self.human.grid_mut().randomize(rng)?;
        Ok(())
    }

    /// Take every one of the human's ships off the grid.
    pub fn clear_deployment(&mut self) -> Result<(), GameError> {
        self.check_deploying()?;
        self.human.grid_mut().clear();
        Ok(())
    }

    /// Finish deployment. The human fires first.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.check_deploying()?;
        if !self.human.grid().fleet_deployed() {
            return Err(IllegalState::FleetNotDeployed.into());
        }
        self.phase = Phase::HumanTurn;
        info!("fleet deployed, battle begins");
        Ok(())
    }

    fn check_turn(&self, side: Side) -> Result<(), IllegalState> {
        match self.phase {
            Phase::Over(_) => Err(IllegalState::GameOver),
            Phase::Deploying => Err(IllegalState::FleetNotDeployed),
            phase if phase == Phase::turn(side) => Ok(()),
            _ => Err(IllegalState::NotYourTurn),
        }
    }

    /// Fire the human's shot at the computer's grid. A hit keeps the turn; a miss hands
    /// it to the computer.
    pub fn fire(&mut self, coord: Coordinate) -> Result<AttackResult, GameError> {
        self.check_turn(Side::Human)?;
        let result = self.human.attack(self.computer.grid_mut(), coord)?;
        match result.outcome() {
            Outcome::Miss => self.hand_over(Side::Computer),
            Outcome::GameOver(_) => self.finish(Side::Human),
            Outcome::Hit | Outcome::Destroyed(_) => {}
        }
        Ok(result)
    }

    /// Let the computer take its turn. If `host` aborts, the phase is left unchanged and
    /// the turn can be resumed by calling this again.
    pub fn computer_turn(&mut self, host: &mut dyn TurnHost) -> Result<Turn, GameError> {
        self.check_turn(Side::Computer)?;
        let turn = self.computer.attack(self.human.grid_mut(), host)?;
        match turn.end() {
            TurnEnd::Missed => self.hand_over(Side::Human),
            TurnEnd::GameOver => self.finish(Side::Computer),
            TurnEnd::Cancelled => {}
        }
        Ok(turn)
    }

    /// Give up. The computer wins.
    pub fn surrender(&mut self) -> Result<(), GameError> {
        if let Phase::Over(_) = self.phase {
            return Err(IllegalState::GameOver.into());
        }
        info!("human surrendered");
        self.finish(Side::Computer);
        Ok(())
    }

    fn hand_over(&mut self, side: Side) {
        self.phase = Phase::turn(side);
        info!("{} to fire", side);
    }

    fn finish(&mut self, winner: Side) {
        self.phase = Phase::Over(winner);
        info!("game over, {} wins", winner);
    }

    /// Summary of the match. `None` until the match is decided.
    pub fn summary(&self) -> Option<Summary> {
        let winner = self.winner()?;
        Some(Summary {
            winner,
            human_fleet: fleet_status(&self.human),
            computer_fleet: fleet_status(self.computer.player()),
            human_score: self.human.score(),
            human_shots: self.human.shots(),
            computer_shots: self.computer_shots(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::{
        ai::{AbortFlag, Immediate, ThinkDelay},
        grid::{CannotPlaceReason, CellView, ErrorClass},
    };

    fn game(seed: u64) -> Game {
        let computer = AiPlayer::with_rng(Difficulty::Easy, StdRng::seed_from_u64(seed))
            .think_delay(ThinkDelay::none());
        Game::with_computer(computer).unwrap()
    }

    fn started(seed: u64) -> Game {
        let mut game = game(seed);
        game.randomize_deployment(&mut StdRng::seed_from_u64(seed + 100))
            .unwrap();
        game.start().unwrap();
        game
    }

    fn enemy_ship_cells(game: &Game) -> Vec<Coordinate> {
        game.computer
            .grid()
            .ships()
            .flat_map(|ship| ship.tiles().iter().copied())
            .collect()
    }

    fn enemy_sea_cell(game: &Game) -> Coordinate {
        Coordinate::all()
            .find(|&c| game.computer.grid().tile(c).map_or(false, |t| t.is_sea()))
            .unwrap()
    }

    #[test]
    fn computer_fleet_is_ready_immediately() {
        let game = game(1);
        assert!(game.computer.grid().fleet_deployed());
        assert_eq!(game.phase(), Phase::Deploying);
        assert_eq!(game.enemy_view().shots(), 0);
    }

    #[test]
    fn cannot_start_with_partial_fleet() {
        let mut game = game(2);
        game.deploy(ShipKind::Tug, Coordinate::new(0, 0), Direction::Horizontal)
            .unwrap();
        assert_eq!(
            game.start().unwrap_err(),
            GameError::IllegalState(IllegalState::FleetNotDeployed)
        );
        assert_eq!(
            game.fire(Coordinate::new(0, 0)).unwrap_err(),
            GameError::IllegalState(IllegalState::FleetNotDeployed)
        );
        assert_eq!(game.phase(), Phase::Deploying);
    }

    #[test]
    fn deployment_errors_are_placement_errors() {
        let mut game = game(3);
        let err = game
            .deploy(ShipKind::AircraftCarrier, Coordinate::new(0, 8), Direction::Horizontal)
            .unwrap_err();
        assert_eq!(err.class(), ErrorClass::InvalidPlacement);
        match err {
            GameError::Placement(err) => assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds),
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(game.remove(ShipKind::AircraftCarrier).unwrap(), None);
    }

    #[test]
    fn deployment_is_locked_after_start() {
        let mut game = started(4);
        assert_eq!(
            game.remove(ShipKind::Tug).unwrap_err(),
            GameError::IllegalState(IllegalState::NotDeploying)
        );
        assert_eq!(
            game.clear_deployment().unwrap_err().class(),
            ErrorClass::IllegalState
        );
        assert!(game.human().grid().fleet_deployed());
    }

    #[test]
    fn turns_follow_the_streak_rule() {
        let mut game = started(5);
        assert_eq!(game.phase(), Phase::HumanTurn);

        let target = enemy_ship_cells(&game)[0];
        assert!(game.fire(target).unwrap().outcome().is_hit());
        assert_eq!(game.phase(), Phase::HumanTurn);

        let sea = enemy_sea_cell(&game);
        assert_eq!(game.fire(sea).unwrap().outcome(), Outcome::Miss);
        assert_eq!(game.phase(), Phase::ComputerTurn);
        assert_eq!(
            game.fire(Coordinate::new(9, 9)).unwrap_err(),
            GameError::IllegalState(IllegalState::NotYourTurn)
        );

        let turn = game.computer_turn(&mut Immediate).unwrap();
        assert_eq!(turn.end(), TurnEnd::Missed);
        assert_eq!(game.phase(), Phase::HumanTurn);
        assert_eq!(game.human().grid().shots(), turn.shots().len());
    }

    #[test]
    fn cancelled_computer_turn_can_resume() {
        let mut game = started(6);
        let sea = enemy_sea_cell(&game);
        game.fire(sea).unwrap();

        let mut host = AbortFlag::new();
        host.request_abort();
        let turn = game.computer_turn(&mut host).unwrap();
        assert_eq!(turn.end(), TurnEnd::Cancelled);
        assert_eq!(game.phase(), Phase::ComputerTurn);
        assert_eq!(game.human().grid().shots(), 0);

        host.reset();
        let turn = game.computer_turn(&mut host).unwrap();
        assert_ne!(turn.end(), TurnEnd::Cancelled);
        assert!(game.human().grid().shots() > 0);
    }

    #[test]
    fn sinking_every_ship_wins() {
        let mut game = started(7);
        let cells = enemy_ship_cells(&game);
        let (last, rest) = cells.split_last().unwrap();
        for &cell in rest {
            assert!(game.fire(cell).unwrap().outcome().keeps_turn());
        }
        assert!(matches!(
            game.fire(*last).unwrap().outcome(),
            Outcome::GameOver(_)
        ));
        assert_eq!(game.winner(), Some(Side::Human));
        assert_eq!(
            game.fire(enemy_sea_cell(&game)).unwrap_err(),
            GameError::IllegalState(IllegalState::GameOver)
        );

        let summary = game.summary().unwrap();
        assert_eq!(summary.winner, Side::Human);
        assert!(summary.computer_fleet.iter().all(|s| s.destroyed));
        assert!(summary.human_fleet.iter().all(|s| !s.destroyed));
        assert_eq!(summary.human_shots, 15);
        assert_eq!(summary.computer_shots, 0);
        assert_eq!(summary.human_score, 15 * 12 - 15);
    }

    #[test]
    fn surrender_hands_the_win_to_the_computer() {
        let mut game = started(8);
        assert!(game.summary().is_none());
        game.surrender().unwrap();
        assert_eq!(game.phase(), Phase::Over(Side::Computer));
        assert_eq!(
            game.surrender().unwrap_err(),
            GameError::IllegalState(IllegalState::GameOver)
        );
        assert_eq!(game.summary().unwrap().winner, Side::Computer);
    }

    #[test]
    fn computer_fleet_stays_hidden_until_the_end() {
        let mut game = game(9);
        assert!(game.computer_grid().is_none());
        game.randomize_deployment(&mut StdRng::seed_from_u64(9))
            .unwrap();
        game.start().unwrap();
        assert!(game.computer_grid().is_none());

        let view = game.enemy_view();
        assert_eq!(view.open_cells().count(), 100);
        assert!(Coordinate::all().all(|c| view.cell(c) == Some(CellView::Unshot)));

        game.fire(enemy_sea_cell(&game)).unwrap();
        assert!(game.computer_grid().is_none());
        game.surrender().unwrap();
        let grid = game.computer_grid().unwrap();
        assert!(grid.fleet_deployed());
        assert_eq!(grid.shots(), 1);
    }
}
