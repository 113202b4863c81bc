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

//! The grid: one player's tiles and fleet, and the authority on placement and damage.

use enumflags2::BitFlags;
use log::trace;
use rand::{seq::SliceRandom, Rng};

use crate::{
    attack::{AttackResult, Outcome},
    ships::{Deployment, Ship, ShipKind},
};

pub use self::{
    coordinate::{Coordinate, Direction, Heading, Neighbors, GRID_SIZE},
    errors::{CannotPlaceReason, CannotShootReason, ErrorClass, PlaceError, ShotError},
    tile::{CellView, Tile},
    view::OpponentView,
};

mod coordinate;
mod errors;
mod tile;
mod view;

/// Represents a single player's grid, including their ships and their side of the ocean.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Tiles in row-major order.
    tiles: Box<[Tile]>,

    /// One of each ship, indexed by [`ShipKind::index`].
    fleet: Vec<Ship>,

    /// Ships sunk so far.
    destroyed: BitFlags<ShipKind>,

    /// Number of shots that struck a ship.
    tiles_hit: usize,

    /// Number of shots received.
    shots: usize,
}

impl Grid {
    /// Create an empty grid with the classic fleet undeployed.
    pub fn new() -> Self {
        Self {
            tiles: Coordinate::all().map(Tile::new).collect(),
            fleet: ShipKind::ALL.iter().map(|&kind| Ship::new(kind)).collect(),
            destroyed: BitFlags::empty(),
            tiles_hit: 0,
            shots: 0,
        }
    }

    /// Get the tile at the given coordinate. Returns `None` if out of bounds.
    pub fn tile(&self, coord: Coordinate) -> Option<&Tile> {
        coord.linearize().and_then(|i| self.tiles.get(i))
    }

    fn tile_mut(&mut self, coord: Coordinate) -> Option<&mut Tile> {
        coord.linearize().and_then(move |i| self.tiles.get_mut(i))
    }

    /// Iterate the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(GRID_SIZE)
    }

    /// Get the ship of the given kind.
    pub fn ship(&self, kind: ShipKind) -> &Ship {
        &self.fleet[kind.index()]
    }

    /// Iterate the fleet in fleet order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.fleet.iter()
    }

    /// True once every ship of the fleet is deployed.
    pub fn fleet_deployed(&self) -> bool {
        self.fleet.iter().all(Ship::is_deployed)
    }

    /// True if at least one ship is deployed and every deployed ship has been sunk.
    /// Undeployed ships cannot be shot at, so they do not keep the grid alive.
    pub fn is_destroyed(&self) -> bool {
        let deployed = self.deployed();
        !deployed.is_empty() && self.destroyed == deployed
    }

    fn deployed(&self) -> BitFlags<ShipKind> {
        let mut deployed = BitFlags::empty();
        for ship in self.fleet.iter().filter(|ship| ship.is_deployed()) {
            deployed.insert(ship.kind());
        }
        deployed
    }

    /// The ships sunk so far.
    pub fn destroyed_ships(&self) -> BitFlags<ShipKind> {
        self.destroyed
    }

    /// Number of ships sunk so far.
    pub fn ships_destroyed(&self) -> usize {
        self.destroyed.bits().count_ones() as usize
    }

    /// Number of shots received that struck a ship.
    pub fn tiles_hit(&self) -> usize {
        self.tiles_hit
    }

    /// Number of shots received.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Restricted view for the opponent: shot status only.
    pub fn view(&self) -> OpponentView {
        OpponentView::new(self)
    }

    /// Check whether the ship could be deployed at the given position, returning the
    /// tiles it would cover.
    pub fn check_placement(
        &self,
        kind: ShipKind,
        origin: Coordinate,
        direction: Direction,
    ) -> Result<Vec<Coordinate>, PlaceError> {
        let placement = Deployment { origin, direction };
        let err = |reason| PlaceError::new(reason, kind, Some(placement));
        if self.ship(kind).is_deployed() {
            return Err(err(CannotPlaceReason::AlreadyPlaced));
        }
        let cells = project(origin, direction, kind.size())
            .ok_or_else(|| err(CannotPlaceReason::OutOfBounds))?;
        for &coord in cells.iter() {
            match self.tile(coord) {
                // project only yields in-bounds cells, but don't trust it.
                None => return Err(err(CannotPlaceReason::OutOfBounds)),
                Some(tile) if !tile.is_sea() => {
                    return Err(err(CannotPlaceReason::AlreadyOccupied))
                }
                // A ship under a shot tile could never sink.
                Some(tile) if tile.is_shot() => {
                    return Err(err(CannotPlaceReason::AlreadyShot))
                }
                _ => {}
            }
        }
        Ok(cells)
    }

    /// Deploy the ship at the given position. Placement is all-or-nothing: if any cell
    /// is out of bounds or occupied, or the ship is already deployed, nothing changes.
    pub fn add_ship(
        &mut self,
        kind: ShipKind,
        origin: Coordinate,
        direction: Direction,
    ) -> Result<(), PlaceError> {
        let cells = self.check_placement(kind, origin, direction)?;
        // Already ensured that every position is valid and not occupied.
        for &coord in cells.iter() {
            if let Some(tile) = self.tile_mut(coord) {
                tile.set_ship(kind);
            }
        }
        self.fleet[kind.index()].deploy(cells, Deployment { origin, direction });
        trace!("deployed {} at {} {:?}", kind, origin, direction);
        Ok(())
    }

    /// Clear the deployment of the ship so it can be placed again. Returns the previous
    /// deployment, or `None` if the ship was not deployed.
    pub fn remove_ship(&mut self, kind: ShipKind) -> Option<Deployment> {
        let ship = &mut self.fleet[kind.index()];
        let cells = ship.tiles().to_vec();
        let previous = ship.undeploy();
        self.destroyed.remove(kind);
        for coord in cells {
            if let Some(tile) = self.tile_mut(coord) {
                tile.clear_ship();
            }
        }
        previous
    }

    /// Undeploy every ship.
    pub fn clear(&mut self) {
        for &kind in ShipKind::ALL.iter() {
            self.remove_ship(kind);
        }
    }

    /// Deploy every ship that isn't yet deployed at a uniformly random valid position.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlaceError> {
        for &kind in ShipKind::ALL.iter() {
            if self.ship(kind).is_deployed() {
                continue;
            }
            let mut options = Vec::new();
            for origin in Coordinate::all() {
                for &dir in Direction::ALL.iter() {
                    if self.check_placement(kind, origin, dir).is_ok() {
                        options.push((origin, dir));
                    }
                }
            }
            let &(origin, dir) = options
                .choose(rng)
                .ok_or_else(|| PlaceError::new(CannotPlaceReason::NoRoom, kind, None))?;
            self.add_ship(kind, origin, dir)?;
        }
        Ok(())
    }

    /// Fire a shot at this grid. Fails if the coordinate is off the grid or was already
    /// shot; otherwise the tile and any ship on it are updated together.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<AttackResult, ShotError> {
        let occupant = match self.tile_mut(coord) {
            None => return Err(ShotError::new(CannotShootReason::OutOfBounds, coord)),
            Some(tile) if tile.is_shot() => {
                return Err(ShotError::new(CannotShootReason::AlreadyShot, coord))
            }
            Some(tile) => tile.shoot(),
        };
        self.shots += 1;
        let outcome = match occupant {
            None => Outcome::Miss,
            Some(kind) => {
                self.tiles_hit += 1;
                let ship = &mut self.fleet[kind.index()];
                ship.hit();
                if ship.is_destroyed() {
                    self.destroyed.insert(kind);
                    if self.is_destroyed() {
                        Outcome::GameOver(kind)
                    } else {
                        Outcome::Destroyed(kind)
                    }
                } else {
                    Outcome::Hit
                }
            }
        };
        trace!("shot at {}: {:?}", coord, outcome);
        Ok(AttackResult::new(outcome, coord))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the cells a ship of length `len` covers from `origin`. Returns `None` if any
/// of them falls off the grid.
fn project(origin: Coordinate, direction: Direction, len: usize) -> Option<Vec<Coordinate>> {
    if !origin.in_bounds() {
        return None;
    }
    let heading = direction.heading();
    let mut cells = Vec::with_capacity(len);
    let mut last = origin;
    cells.push(last);
    while cells.len() < len {
        last = last.step(heading)?;
        cells.push(last);
    }
    Some(cells)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn destroyer_scenario() {
        let mut grid = Grid::new();
        grid.add_ship(ShipKind::Destroyer, Coordinate::new(0, 0), Direction::Horizontal)
            .unwrap();

        let first = grid.shoot(Coordinate::new(0, 0)).unwrap();
        assert_eq!(first.outcome(), Outcome::Hit);

        let again = grid.shoot(Coordinate::new(0, 0)).unwrap_err();
        assert_eq!(again.reason(), CannotShootReason::AlreadyShot);
        assert_eq!(again.class(), ErrorClass::InvalidShot);

        assert_eq!(grid.shoot(Coordinate::new(0, 1)).unwrap().outcome(), Outcome::Hit);
        // The destroyer is the only ship deployed, so sinking it ends the game.
        assert_eq!(
            grid.shoot(Coordinate::new(0, 2)).unwrap().outcome(),
            Outcome::GameOver(ShipKind::Destroyer)
        );
        assert!(grid.is_destroyed());
        assert_eq!(grid.tiles_hit(), 3);
        assert_eq!(grid.shots(), 3);
        assert_eq!(grid.ships_destroyed(), 1);
    }

    #[test]
    fn destroyed_before_game_over() {
        let mut grid = Grid::new();
        grid.add_ship(ShipKind::Tug, Coordinate::new(5, 5), Direction::Vertical)
            .unwrap();
        grid.add_ship(ShipKind::Submarine, Coordinate::new(0, 0), Direction::Vertical)
            .unwrap();
        assert_eq!(
            grid.shoot(Coordinate::new(5, 5)).unwrap().outcome(),
            Outcome::Destroyed(ShipKind::Tug)
        );
        assert_eq!(grid.shoot(Coordinate::new(9, 9)).unwrap().outcome(), Outcome::Miss);
        assert_eq!(grid.shoot(Coordinate::new(0, 0)).unwrap().outcome(), Outcome::Hit);
        assert!(!grid.is_destroyed());
        assert_eq!(
            grid.shoot(Coordinate::new(1, 0)).unwrap().outcome(),
            Outcome::GameOver(ShipKind::Submarine)
        );
    }

    #[test]
    fn carrier_off_bottom_edge_is_rejected() {
        let mut grid = Grid::new();
        let before = grid.clone();
        let err = grid
            .add_ship(ShipKind::AircraftCarrier, Coordinate::new(8, 0), Direction::Vertical)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert_eq!(err.class(), ErrorClass::InvalidPlacement);
        assert_eq!(grid.tiles, before.tiles);
        assert_eq!(grid.fleet, before.fleet);
    }

    #[test]
    fn overlap_is_rejected_without_partial_placement() {
        let mut grid = Grid::new();
        grid.add_ship(ShipKind::Battleship, Coordinate::new(2, 0), Direction::Horizontal)
            .unwrap();
        let before = grid.clone();
        let err = grid
            .add_ship(ShipKind::Destroyer, Coordinate::new(0, 3), Direction::Vertical)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(grid.tiles, before.tiles);
        assert!(!grid.ship(ShipKind::Destroyer).is_deployed());
        // The cells above the overlap must not have been claimed.
        assert!(grid.tile(Coordinate::new(0, 3)).unwrap().is_sea());
    }

    #[test]
    fn placing_twice_needs_removal() {
        let mut grid = Grid::new();
        grid.add_ship(ShipKind::Tug, Coordinate::new(0, 0), Direction::Horizontal)
            .unwrap();
        let err = grid
            .add_ship(ShipKind::Tug, Coordinate::new(4, 4), Direction::Horizontal)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyPlaced);
        assert_eq!(err.class(), ErrorClass::IllegalState);

        let previous = grid.remove_ship(ShipKind::Tug).unwrap();
        assert_eq!(previous.origin, Coordinate::new(0, 0));
        assert!(grid.tile(Coordinate::new(0, 0)).unwrap().is_sea());
        assert_eq!(grid.remove_ship(ShipKind::Tug), None);
        grid.add_ship(ShipKind::Tug, Coordinate::new(4, 4), Direction::Horizontal)
            .unwrap();
        assert_eq!(
            grid.tile(Coordinate::new(4, 4)).unwrap().ship(),
            Some(ShipKind::Tug)
        );
    }

    #[test]
    fn cannot_place_over_shot_tiles() {
        let mut grid = Grid::new();
        grid.add_ship(ShipKind::Submarine, Coordinate::new(3, 3), Direction::Horizontal)
            .unwrap();
        assert_eq!(grid.shoot(Coordinate::new(3, 4)).unwrap().outcome(), Outcome::Hit);
        grid.remove_ship(ShipKind::Submarine);
        assert!(grid.tile(Coordinate::new(3, 4)).unwrap().is_sea());

        let before = grid.clone();
        let err = grid
            .add_ship(ShipKind::Submarine, Coordinate::new(3, 4), Direction::Vertical)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyShot);
        assert_eq!(err.class(), ErrorClass::InvalidPlacement);
        assert_eq!(grid.tiles, before.tiles);
        assert!(!grid.ship(ShipKind::Submarine).is_deployed());

        // Untouched water is still fine, and random deployment steers clear.
        grid.add_ship(ShipKind::Submarine, Coordinate::new(5, 5), Direction::Vertical)
            .unwrap();
        grid.randomize(&mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(grid.tile(Coordinate::new(3, 4)).unwrap().ship(), None);
    }

    #[test]
    fn shooting_off_grid_fails() {
        let mut grid = Grid::new();
        let err = grid.shoot(Coordinate::new(3, 10)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        assert_eq!(grid.shots(), 0);
    }

    #[test]
    fn randomize_deploys_whole_fleet_without_overlap() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new();
        grid.add_ship(ShipKind::AircraftCarrier, Coordinate::new(0, 0), Direction::Vertical)
            .unwrap();
        grid.randomize(&mut rng).unwrap();
        assert!(grid.fleet_deployed());
        assert_eq!(
            grid.ship(ShipKind::AircraftCarrier).deployment().unwrap().origin,
            Coordinate::new(0, 0)
        );
        let occupied = grid.rows().flatten().filter(|t| !t.is_sea()).count();
        assert_eq!(occupied, 1 + 2 + 3 + 4 + 5);

        grid.clear();
        assert!(grid.ships().all(|s| !s.is_deployed()));
        assert!(grid.rows().flatten().all(Tile::is_sea));
    }

    #[test]
    fn empty_grid_is_not_destroyed() {
        assert!(!Grid::new().is_destroyed());
    }
}
