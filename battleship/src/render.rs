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
//! Printing boards and reports to the terminal.
use std::fmt;

use broadside::{
    game::Summary,
    grid::{CellView, OpponentView},
    Grid, ShipKind, GRID_SIZE,
};

/// Display helper that prints the ship's type abbreviation.
#[derive(Debug, Copy, Clone)]
struct ShipAbbreviation(ShipKind);

impl ShipAbbreviation {
    fn abbrev(&self) -> &'static str {
        match self.0 {
            ShipKind::Tug => "tg",
            ShipKind::Submarine => "ss",
            ShipKind::Destroyer => "dd",
            ShipKind::Battleship => "bb",
            ShipKind::AircraftCarrier => "cv",
        }
    }
}

impl fmt::Display for ShipAbbreviation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.abbrev())
    }
}

/// A cell of the player's own board, shown in full.
enum OwnCell {
    Empty,
    Shot,
    NotShot(ShipAbbreviation),
    Hit(ShipAbbreviation),
    Sunk(ShipAbbreviation),
}

impl fmt::Display for OwnCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OwnCell::Empty => f.pad("~~"),
            OwnCell::Shot => f.pad("x"),
            OwnCell::NotShot(ship) => fmt::Display::fmt(ship, f),
            OwnCell::Hit(ship) => f.pad(&format!("x{}", ship)),
            OwnCell::Sunk(ship) => f.pad(&format!("X{}", ship)),
        }
    }
}

/// A cell of the enemy board, as far as it is known.
struct EnemyCell(CellView);

impl fmt::Display for EnemyCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            CellView::Unshot => "~~",
            CellView::Miss => "x",
            CellView::Hit => "##",
        })
    }
}

/// Print the given grid with every ship revealed.
pub fn show_own_board(grid: &Grid) {
    show_board(grid.rows().map(move |row| {
        row.iter().map(move |tile| match tile.ship() {
            None if tile.is_shot() => OwnCell::Shot,
            None => OwnCell::Empty,
            Some(kind) if grid.ship(kind).is_destroyed() => OwnCell::Sunk(ShipAbbreviation(kind)),
            Some(kind) if tile.is_shot() => OwnCell::Hit(ShipAbbreviation(kind)),
            Some(kind) => OwnCell::NotShot(ShipAbbreviation(kind)),
        })
    }))
}

/// Print what is known of the enemy's grid.
pub fn show_enemy_board(view: OpponentView) {
    show_board(view.rows().map(|row| row.map(EnemyCell)));
    let sunk: Vec<_> = view.destroyed_ships().iter().map(|kind| kind.name()).collect();
    if !sunk.is_empty() {
        println!("Sunk: {}", sunk.join(", "));
    }
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items.
fn show_board(rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>) {
    print!("   ");
    for i in 0..GRID_SIZE {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Print the end-of-game report.
pub fn show_summary(summary: &Summary) {
    println!();
    println!("The {} wins!", summary.winner);
    println!(
        "You fired {} shots, the computer fired {}.",
        summary.human_shots, summary.computer_shots
    );
    for (title, fleet) in [
        ("Your fleet", &summary.human_fleet),
        ("Enemy fleet", &summary.computer_fleet),
    ]
    .iter()
    {
        println!("{}:", title);
        for ship in fleet.iter() {
            println!(
                "    {:<18}{}",
                ship.kind.name(),
                if ship.destroyed { "sunk" } else { "afloat" }
            );
        }
    }
    println!("Score: {}", summary.human_score);
}
