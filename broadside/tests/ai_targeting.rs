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
use std::collections::HashSet;

use broadside::{
    ai::{Immediate, ThinkDelay},
    AiPlayer, Coordinate, Difficulty, Grid, Outcome, ShipKind, TurnEnd, GRID_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn random_grid(seed: u64) -> Grid {
    let mut grid = Grid::new();
    grid.randomize(&mut StdRng::seed_from_u64(seed)).unwrap();
    grid
}

fn hunting_difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(vec![Difficulty::Medium, Difficulty::Hard])
}

fn any_difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn a_fresh_hit_is_followed_by_a_neighbor(
        seed in any::<u64>(),
        difficulty in hunting_difficulty(),
        ship in 1..ShipKind::ALL.len(),
        part in 0..5usize,
        misses in prop::collection::vec((0..GRID_SIZE, 0..GRID_SIZE), 0..30),
    ) {
        let mut grid = random_grid(seed);
        let kind = ShipKind::ALL[ship];
        let target = grid.ship(kind).tiles()[part % kind.size()];
        for (row, col) in misses {
            let coord = Coordinate::new(row, col);
            if coord != target && grid.tile(coord).unwrap().is_sea() {
                let _ = grid.shoot(coord);
            }
        }

        let mut strategy = difficulty.strategy();
        let result = grid.shoot(target).unwrap();
        prop_assert_eq!(result.outcome(), Outcome::Hit);
        strategy.process_shot(&result);

        let open: Vec<_> = target.neighbors().filter(|&c| grid.view().is_open(c)).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let next = strategy.generate_coords(&grid.view(), &mut rng).unwrap();
        prop_assert!(grid.view().is_open(next));
        if !open.is_empty() {
            prop_assert!(open.contains(&next), "{} is not next to {}", next, target);
        }
    }

    #[test]
    fn easy_always_takes_the_last_open_cell(
        seed in any::<u64>(),
        row in 0..GRID_SIZE,
        col in 0..GRID_SIZE,
    ) {
        let last = Coordinate::new(row, col);
        let mut grid = Grid::new();
        for coord in Coordinate::all().filter(|&c| c != last) {
            grid.shoot(coord).unwrap();
        }
        let mut strategy = Difficulty::Easy.strategy();
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(strategy.generate_coords(&grid.view(), &mut rng), Some(last));
    }

    #[test]
    fn turns_keep_firing_only_while_hitting(
        seed in any::<u64>(),
        difficulty in any_difficulty(),
    ) {
        let mut grid = random_grid(seed);
        let mut ai = AiPlayer::with_rng(difficulty, StdRng::seed_from_u64(seed ^ 0x5eed))
            .think_delay(ThinkDelay::none());
        ai.deploy_fleet().unwrap();

        let mut fired = HashSet::new();
        loop {
            let turn = ai.attack(&mut grid, &mut Immediate).unwrap();
            let (last, streak) = turn.shots().split_last().unwrap();
            for shot in streak {
                prop_assert!(shot.outcome().keeps_turn());
                prop_assert!(fired.insert(shot.coord()));
            }
            prop_assert!(fired.insert(last.coord()));
            match turn.end() {
                TurnEnd::Missed => prop_assert_eq!(last.outcome(), Outcome::Miss),
                TurnEnd::GameOver => {
                    prop_assert!(matches!(last.outcome(), Outcome::GameOver(_)));
                    break;
                }
                TurnEnd::Cancelled => prop_assert!(false, "nothing asked to cancel"),
            }
        }
        prop_assert!(grid.is_destroyed());
        prop_assert_eq!(fired.len(), grid.shots());
        prop_assert_eq!(ai.player().shots() as usize, grid.shots());
    }
}

#[test]
fn hunting_needs_fewer_shots_than_random_fire() {
    let mut totals = [0usize; 3];
    for seed in 0..20 {
        for (i, &difficulty) in Difficulty::ALL.iter().enumerate() {
            let mut grid = random_grid(seed);
            let mut ai = AiPlayer::with_rng(difficulty, StdRng::seed_from_u64(seed + 1000))
                .think_delay(ThinkDelay::none());
            ai.deploy_fleet().unwrap();
            while !grid.is_destroyed() {
                ai.attack(&mut grid, &mut Immediate).unwrap();
            }
            totals[i] += grid.shots();
        }
    }
    let [easy, medium, hard] = totals;
    assert!(medium < easy, "medium {} vs easy {}", medium, easy);
    assert!(hard < easy, "hard {} vs easy {}", hard, easy);
}
