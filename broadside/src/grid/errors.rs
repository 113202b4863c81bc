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

//! Errors used by the [`Grid`][crate::grid::Grid].

use thiserror::Error;

use crate::{
    grid::Coordinate,
    ships::{Deployment, ShipKind},
};

/// Broad category of a rejected operation. None of these are fatal to the game: the
/// operation is refused and state is left unchanged.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorClass {
    /// A ship placement was out of bounds or overlapped another ship.
    InvalidPlacement,
    /// A shot was out of bounds or at a cell already fired upon.
    InvalidShot,
    /// The operation is not allowed in the current state of the game.
    IllegalState,
}

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The ship was already deployed and must be removed first.
    #[error("ship was already placed")]
    AlreadyPlaced,
    /// Part of the ship would lie outside the grid.
    #[error("the ship does not fit on the grid at that position")]
    OutOfBounds,
    /// One or more of the cells is occupied by another ship.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
    /// One or more of the cells was already fired upon.
    #[error("the requested position was already fired upon")]
    AlreadyShot,
    /// No free position anywhere on the grid fits the ship.
    #[error("no room left on the grid for the ship")]
    NoRoom,
}

impl CannotPlaceReason {
    pub fn class(self) -> ErrorClass {
        match self {
            CannotPlaceReason::AlreadyPlaced => ErrorClass::IllegalState,
            _ => ErrorClass::InvalidPlacement,
        }
    }
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place {ship}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: ShipKind,
    placement: Option<Deployment>,
}

impl PlaceError {
    pub(crate) fn new(
        reason: CannotPlaceReason,
        ship: ShipKind,
        placement: Option<Deployment>,
    ) -> Self {
        Self {
            reason,
            ship,
            placement,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    pub fn class(&self) -> ErrorClass {
        self.reason.class()
    }

    /// The ship that could not be placed.
    pub fn ship(&self) -> ShipKind {
        self.ship
    }

    /// The placement that was attempted. `None` for random placement.
    pub fn placement(&self) -> Option<Deployment> {
        self.placement
    }
}

/// Reason why a particular tile could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the grid.
    #[error("the target coordinate is out of bounds")]
    OutOfBounds,

    /// A shot has already been fired at that cell.
    #[error("the target cell was already shot")]
    AlreadyShot,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    #[source]
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    pub(crate) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    pub fn class(&self) -> ErrorClass {
        ErrorClass::InvalidShot
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
