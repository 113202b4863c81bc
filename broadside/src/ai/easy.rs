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
use rand::{seq::SliceRandom, RngCore};

use crate::{
    ai::{Difficulty, Strategy},
    attack::AttackResult,
    grid::{Coordinate, OpponentView},
};

/// Pick uniformly among the cells not yet shot.
pub(super) fn random_open_cell(view: &OpponentView, rng: &mut dyn RngCore) -> Option<Coordinate> {
    let open: Vec<_> = view.open_cells().collect();
    open.choose(rng).copied()
}

/// Fires at random and learns nothing.
#[derive(Debug, Default, Clone)]
pub struct Easy;

impl Easy {
    pub fn new() -> Self {
        Easy
    }
}

impl Strategy for Easy {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }

    fn generate_coords(
        &mut self,
        view: &OpponentView,
        rng: &mut dyn RngCore,
    ) -> Option<Coordinate> {
        random_open_cell(view, rng)
    }

    fn process_shot(&mut self, _result: &AttackResult) {}
}
