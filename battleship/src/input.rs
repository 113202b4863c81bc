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
//! Reading and parsing the player's commands.
use std::io::{self, BufRead, Write};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use broadside::{Coordinate, Direction, ShipKind, GRID_SIZE};

/// Commands available while deploying the fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SetupCommand {
    Done,
    Place(ShipKind, Coordinate, Direction),
    Remove(ShipKind),
    Clear,
    Random,
    Help,
}

/// Commands available during the battle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlayCommand {
    Fire(Coordinate),
    Surrender,
    Help,
}

static PLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:place|put)\s+
        (?P<ship>\w+)\s+
        (?:(?:at|on)\s+)?
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)\s+
        (?P<dir>\w+)$",
    )
    .unwrap()
});

static REMOVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:remove|unplace)\s+
        (?P<ship>\w+)$",
    )
    .unwrap()
});

static FIRE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:(?:fire|shoot)(?:\s+at)?\s+)?
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$",
    )
    .unwrap()
});

const SHIP_CHOICES: &str =
    "choose \"tug\", \"submarine\", \"destroyer\", \"battleship\" or \"carrier\"";

/// Parse a deployment command. Expects lowercase input.
pub fn parse_setup(input: &str) -> Result<SetupCommand, String> {
    match input {
        "?" | "help" | "h" => Ok(SetupCommand::Help),
        "random" | "rand" | "randomize" => Ok(SetupCommand::Random),
        "done" | "start" => Ok(SetupCommand::Done),
        "clear" => Ok(SetupCommand::Clear),
        other => {
            if let Some(captures) = PLACE.captures(other) {
                let ship = parse_ship(&captures["ship"])?;
                let coord = parse_coord(&captures)?;
                let dir = match &captures["dir"] {
                    "h" | "horizontal" | "right" | "r" => Direction::Horizontal,
                    "v" | "vertical" | "down" | "d" => Direction::Vertical,
                    other => {
                        return Err(format!(
                            "invalid direction {}, choose \"h\" or \"v\"",
                            other
                        ))
                    }
                };
                Ok(SetupCommand::Place(ship, coord, dir))
            } else if let Some(captures) = REMOVE.captures(other) {
                match &captures["ship"] {
                    "all" => Ok(SetupCommand::Clear),
                    ship => parse_ship(ship).map(SetupCommand::Remove),
                }
            } else {
                Err(format!(
                    "Invalid ship-placement command \"{}\". Use '?' for help",
                    other
                ))
            }
        }
    }
}

/// Parse a battle command. Expects lowercase input.
pub fn parse_play(input: &str) -> Result<PlayCommand, String> {
    match input {
        "?" | "help" | "h" => Ok(PlayCommand::Help),
        "surrender" | "quit" | "resign" => Ok(PlayCommand::Surrender),
        other => match FIRE.captures(other) {
            Some(captures) => parse_coord(&captures).map(PlayCommand::Fire),
            None => Err(format!("Invalid command \"{}\". Use '?' for help", other)),
        },
    }
}

fn parse_ship(name: &str) -> Result<ShipKind, String> {
    match name {
        "tg" | "tug" => Ok(ShipKind::Tug),
        "ss" | "sub" | "submarine" => Ok(ShipKind::Submarine),
        "dd" | "destroyer" => Ok(ShipKind::Destroyer),
        "bb" | "battleship" => Ok(ShipKind::Battleship),
        "cv" | "carrier" | "aircraftcarrier" => Ok(ShipKind::AircraftCarrier),
        other => Err(format!("invalid ship: {}, {}", other, SHIP_CHOICES)),
    }
}

fn parse_coord(captures: &Captures) -> Result<Coordinate, String> {
    let row = parse_index("row", &captures["row"])?;
    let col = parse_index("column", &captures["col"])?;
    Ok(Coordinate::new(row, col))
}

fn parse_index(what: &str, text: &str) -> Result<usize, String> {
    match text.parse() {
        Ok(val) if val < GRID_SIZE => Ok(val),
        _ => Err(format!(
            "{} must be in range [0,{}], got {}",
            what,
            GRID_SIZE - 1,
            text
        )),
    }
}

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the parser succeeds, printing each error.
    /// Converts to ascii lower before parsing. Returns `None` at end of input.
    pub fn read_input_lower<F, T>(&mut self, prompt: &str, mut parse: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            if !self.read_line(prompt)? {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            match parse(self.buf.trim()) {
                Ok(val) => return Ok(Some(val)),
                Err(msg) => println!("{}", msg),
            }
        }
    }

    /// Print the prompt, clear the buffer and read a line. Returns false at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}
