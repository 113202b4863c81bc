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

//! The vessels that make up a fleet.
use std::fmt;

use enumflags2::BitFlags;

use crate::grid::{Coordinate, Direction};

/// Identity of a ship in the classic fleet. Each grid has exactly one of each.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ShipKind {
    /// Tug: length 1.
    Tug = 0b00001,
    /// Submarine: length 2.
    Submarine = 0b00010,
    /// Destroyer: length 3.
    Destroyer = 0b00100,
    /// Battleship: length 4.
    Battleship = 0b01000,
    /// Aircraft carrier: length 5.
    AircraftCarrier = 0b10000,
}

/// Number of ships in a fleet.
pub const FLEET_SIZE: usize = 5;

impl ShipKind {
    /// Every ship of the fleet, in fleet order.
    pub const ALL: [ShipKind; FLEET_SIZE] = [
        ShipKind::Tug,
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::Battleship,
        ShipKind::AircraftCarrier,
    ];

    /// Number of tiles this ship occupies.
    pub fn size(self) -> usize {
        match self {
            ShipKind::Tug => 1,
            ShipKind::Submarine => 2,
            ShipKind::Destroyer => 3,
            ShipKind::Battleship => 4,
            ShipKind::AircraftCarrier => 5,
        }
    }

    /// Display name of the ship.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Tug => "Tug",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Battleship => "Battleship",
            ShipKind::AircraftCarrier => "Aircraft Carrier",
        }
    }

    /// Slot of this ship in a fleet array.
    pub(crate) fn index(self) -> usize {
        self.size() - 1
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Where and how a ship was deployed. Kept so the ship can be drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Deployment {
    /// Top-left cell of the ship.
    pub origin: Coordinate,
    pub direction: Direction,
}

/// A fleet vessel: its identity, the tiles it occupies and the damage it has taken.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    kind: ShipKind,
    hits: usize,
    tiles: Vec<Coordinate>,
    deployment: Option<Deployment>,
}

impl Ship {
    /// Construct an undeployed, undamaged ship.
    pub fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            hits: 0,
            tiles: Vec::with_capacity(kind.size()),
            deployment: None,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn size(&self) -> usize {
        self.kind.size()
    }

    /// Number of hits the ship has taken. When this equals [`size`][Ship::size] the ship
    /// is sunk.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Coordinates of the tiles this ship occupies, from its origin outward. Empty if
    /// not deployed.
    pub fn tiles(&self) -> &[Coordinate] {
        &self.tiles
    }

    /// Where the ship was deployed, if it has been.
    pub fn deployment(&self) -> Option<Deployment> {
        self.deployment
    }

    /// A ship is deployed once it occupies at least one tile.
    pub fn is_deployed(&self) -> bool {
        !self.tiles.is_empty()
    }

    /// A ship is destroyed once every one of its tiles has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.hits == self.size()
    }

    /// Record a hit. The grid calls this at most once per occupied tile.
    pub(crate) fn hit(&mut self) {
        debug_assert!(self.hits < self.size(), "{} hit after sinking", self.kind);
        self.hits += 1;
    }

    pub(crate) fn deploy(&mut self, tiles: Vec<Coordinate>, deployment: Deployment) {
        debug_assert_eq!(tiles.len(), self.size());
        self.tiles = tiles;
        self.deployment = Some(deployment);
    }

    /// Forget the ship's tiles. Returns the previous deployment, if any.
    pub(crate) fn undeploy(&mut self) -> Option<Deployment> {
        self.tiles.clear();
        self.hits = 0;
        self.deployment.take()
    }
}
