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
use log::debug;
use rand::RngCore;

use crate::{
    ai::{easy::random_open_cell, Difficulty, Strategy},
    attack::{AttackResult, Outcome},
    grid::{Coordinate, Heading, OpponentView},
};

/// Fires at random until it hits a ship, then tries the cells around the latest hit
/// until the ship sinks or none of them are left.
#[derive(Debug, Clone)]
pub struct Medium {
    /// Order in which the neighbors of a hit are tried.
    order: [Heading; 4],

    /// Most recent hit on a ship that has not sunk yet.
    last_hit: Option<Coordinate>,
}

impl Medium {
    pub fn new() -> Self {
        Self::with_order(Heading::DEFAULT_ORDER)
    }

    /// Try the neighbors of a hit in the given order.
    pub fn with_order(order: [Heading; 4]) -> Self {
        Self {
            order,
            last_hit: None,
        }
    }

    /// The hit currently being searched around, if any.
    pub fn target(&self) -> Option<Coordinate> {
        self.last_hit
    }
}

impl Default for Medium {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Medium {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }

    fn generate_coords(
        &mut self,
        view: &OpponentView,
        rng: &mut dyn RngCore,
    ) -> Option<Coordinate> {
        if let Some(hit) = self.last_hit {
            if let Some(next) = hit.neighbors_in(self.order).find(|&c| view.is_open(c)) {
                return Some(next);
            }
            debug!("nothing left to try around {}, searching", hit);
            self.last_hit = None;
        }
        random_open_cell(view, rng)
    }

    fn process_shot(&mut self, result: &AttackResult) {
        match result.outcome() {
            Outcome::Hit => self.last_hit = Some(result.coord()),
            Outcome::Destroyed(_) | Outcome::GameOver(_) => self.last_hit = None,
            Outcome::Miss => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        grid::{Direction, Grid},
        ships::ShipKind,
    };

    #[test]
    fn tries_neighbors_of_a_hit() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new();
        grid.add_ship(ShipKind::Battleship, Coordinate::new(4, 4), Direction::Horizontal)
            .unwrap();
        let mut medium = Medium::new();

        let hit = grid.shoot(Coordinate::new(4, 5)).unwrap();
        medium.process_shot(&hit);
        assert_eq!(medium.target(), Some(Coordinate::new(4, 5)));

        // Up first, then down, left, right.
        let mut expected = vec![
            Coordinate::new(3, 5),
            Coordinate::new(5, 5),
            Coordinate::new(4, 4),
        ];
        expected.reverse();
        while let Some(want) = expected.pop() {
            let next = medium.generate_coords(&grid.view(), &mut rng).unwrap();
            assert_eq!(next, want);
            let result = grid.shoot(next).unwrap();
            medium.process_shot(&result);
        }
        // The hit at (4, 4) became the new focus.
        assert_eq!(medium.target(), Some(Coordinate::new(4, 4)));
    }

    #[test]
    fn custom_order_tries_right_first() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new();
        grid.add_ship(ShipKind::Battleship, Coordinate::new(4, 4), Direction::Horizontal)
            .unwrap();
        let mut medium =
            Medium::with_order([Heading::Right, Heading::Left, Heading::Down, Heading::Up]);
        medium.process_shot(&grid.shoot(Coordinate::new(4, 5)).unwrap());
        assert_eq!(
            medium.generate_coords(&grid.view(), &mut rng),
            Some(Coordinate::new(4, 6))
        );

        // With the right already shot, left comes next.
        grid.shoot(Coordinate::new(4, 6)).unwrap();
        assert_eq!(
            medium.generate_coords(&grid.view(), &mut rng),
            Some(Coordinate::new(4, 4))
        );
    }

    #[test]
    fn skips_edges_and_shot_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new();
        grid.add_ship(ShipKind::Submarine, Coordinate::new(0, 0), Direction::Horizontal)
            .unwrap();
        grid.shoot(Coordinate::new(1, 0)).unwrap();
        let mut medium = Medium::new();
        medium.process_shot(&grid.shoot(Coordinate::new(0, 0)).unwrap());
        assert_eq!(
            medium.generate_coords(&grid.view(), &mut rng),
            Some(Coordinate::new(0, 1))
        );
    }

    #[test]
    fn sinking_returns_to_search() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut grid = Grid::new();
        grid.add_ship(ShipKind::Tug, Coordinate::new(2, 2), Direction::Horizontal)
            .unwrap();
        grid.add_ship(ShipKind::Submarine, Coordinate::new(8, 0), Direction::Horizontal)
            .unwrap();
        let mut medium = Medium::new();
        medium.process_shot(&grid.shoot(Coordinate::new(8, 0)).unwrap());
        assert!(medium.target().is_some());
        medium.process_shot(&grid.shoot(Coordinate::new(8, 1)).unwrap());
        assert_eq!(medium.target(), None);
        let next = medium.generate_coords(&grid.view(), &mut rng).unwrap();
        assert!(grid.view().is_open(next));
    }

    #[test]
    fn exhausted_neighbors_fall_back_to_random() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = Grid::new();
        for &c in [(3, 3), (5, 3), (4, 2), (4, 4)].iter() {
            grid.shoot(Coordinate::from(c)).unwrap();
        }
        let mut medium = Medium::new();
        medium.last_hit = Some(Coordinate::new(4, 3));
        let next = medium.generate_coords(&grid.view(), &mut rng).unwrap();
        assert!(grid.view().is_open(next));
        assert_eq!(medium.target(), None);
    }
}
