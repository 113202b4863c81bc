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
    grid::{Coordinate, Direction, Heading, OpponentView},
};

/// Hunts like [`Medium`][super::Medium], but once two adjacent hits give away a ship's
/// orientation it only fires along that line, extending outward from the hit cluster in
/// both directions.
///
/// Candidates on the line are ranked by distance from the most recent hit, then by the
/// configured heading order, so the newest hit's immediate neighbor is tried before the
/// line is extended further. A miss or the edge of the grid closes that end of the
/// line. Once no line has an open end, the plain neighbors of every hit in the cluster
/// are tried, newest first, before returning to random search.
#[derive(Debug, Clone)]
pub struct Hard {
    order: [Heading; 4],

    /// Hits on ships that have not sunk yet, oldest first.
    hits: Vec<Coordinate>,
}

impl Hard {
    pub fn new() -> Self {
        Self::with_order(Heading::DEFAULT_ORDER)
    }

    /// Search around hits and break ties between line ends in the given order.
    pub fn with_order(order: [Heading; 4]) -> Self {
        Self {
            order,
            hits: Vec::new(),
        }
    }

    /// Hits on the ships currently being hunted, oldest first.
    pub fn hits(&self) -> &[Coordinate] {
        &self.hits
    }

    /// Open cell extending a line of adjacent hits.
    fn follow_line(&self, view: &OpponentView) -> Option<Coordinate> {
        let latest = *self.hits.last()?;
        for &anchor in self.hits.iter().rev() {
            let lines = self
                .hits
                .iter()
                .filter(|&&other| distance(anchor, other) == 1)
                .filter_map(|other| anchor.line_to(other));
            for direction in lines {
                if let Some(next) = self.line_end(view, anchor, direction, latest) {
                    return Some(next);
                }
            }
        }
        None
    }

    /// Best open cell just past either end of the run of hits through `anchor`.
    fn line_end(
        &self,
        view: &OpponentView,
        anchor: Coordinate,
        direction: Direction,
        latest: Coordinate,
    ) -> Option<Coordinate> {
        self.order
            .iter()
            .enumerate()
            .filter(|(_, heading)| heading.direction() == direction)
            .filter_map(|(rank, &heading)| {
                let mut end = anchor;
                while let Some(next) = end.step(heading) {
                    if !self.hits.contains(&next) {
                        return if view.is_open(next) {
                            Some((next, rank))
                        } else {
                            None
                        };
                    }
                    end = next;
                }
                None
            })
            .min_by_key(|&(cell, rank)| (distance(cell, latest), rank))
            .map(|(cell, _)| cell)
    }

    /// First open neighbor of any hit, newest hit first.
    fn open_neighbor(&self, view: &OpponentView) -> Option<Coordinate> {
        self.hits
            .iter()
            .rev()
            .flat_map(|hit| hit.neighbors_in(self.order))
            .find(|&cell| view.is_open(cell))
    }
}

impl Default for Hard {
    fn default() -> Self {
        Self::new()
    }
}

fn distance(a: Coordinate, b: Coordinate) -> usize {
    let rows = if a.row > b.row { a.row - b.row } else { b.row - a.row };
    let cols = if a.col > b.col { a.col - b.col } else { b.col - a.col };
    rows + cols
}

impl Strategy for Hard {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }

    fn generate_coords(
        &mut self,
        view: &OpponentView,
        rng: &mut dyn RngCore,
    ) -> Option<Coordinate> {
        if let Some(next) = self.follow_line(view) {
            return Some(next);
        }
        if let Some(next) = self.open_neighbor(view) {
            return Some(next);
        }
        if !self.hits.is_empty() {
            debug!("hunt around {} hits exhausted, searching", self.hits.len());
            self.hits.clear();
        }
        random_open_cell(view, rng)
    }

    fn process_shot(&mut self, result: &AttackResult) {
        match result.outcome() {
            Outcome::Hit => self.hits.push(result.coord()),
            Outcome::Destroyed(_) | Outcome::GameOver(_) => self.hits.clear(),
            Outcome::Miss => {}
        }
    }
}
