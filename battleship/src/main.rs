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
use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use clap::{value_t_or_exit, App, Arg};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use broadside::{
    ai::{AbortFlag, ThinkDelay},
    AiPlayer, Difficulty, Game, GameError, Phase, ShipKind, TurnEnd, TurnHost,
};

use crate::input::{parse_play, parse_setup, InputReader, PlayCommand, SetupCommand};

mod input;
mod logging;
mod render;

fn main() -> io::Result<()> {
    logging::init_logging();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line battleship against the computer.")
        .arg(
            Arg::with_name("difficulty")
                .short("d")
                .long("difficulty")
                .value_name("DIFFICULTY")
                .help("how well the computer aims")
                .takes_value(true)
                .possible_values(&["easy", "medium", "hard"])
                .case_insensitive(true)
                .default_value("medium"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for a reproducible game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("think-ms")
                .long("think-ms")
                .value_name("MS")
                .help("milliseconds per tick of the computer's pause before each shot")
                .takes_value(true)
                .default_value("5"),
        )
        .arg(
            Arg::with_name("ticks")
                .long("ticks")
                .value_name("TICKS")
                .help("ticks the computer pauses before each shot")
                .takes_value(true)
                .default_value("150"),
        )
        .get_matches();

    let difficulty = value_t_or_exit!(matches, "difficulty", Difficulty);
    let think_ms = value_t_or_exit!(matches, "think-ms", u64);
    let ticks = value_t_or_exit!(matches, "ticks", u32);
    let mut rng = if matches.is_present("seed") {
        StdRng::seed_from_u64(value_t_or_exit!(matches, "seed", u64))
    } else {
        StdRng::from_entropy()
    };

    let computer = AiPlayer::with_rng(difficulty, StdRng::seed_from_u64(rng.gen()))
        .think_delay(ThinkDelay::new(ticks));
    let mut game = Game::with_computer(computer).map_err(to_io)?;
    let mut host = TerminalHost::new(Duration::from_millis(think_ms));

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    println!("Playing against a {} computer.", game.difficulty());
    if !deploy(&mut game, &mut rng, &mut input)? {
        return Ok(());
    }
    if !battle(&mut game, &mut host, &mut input)? {
        return Ok(());
    }
    if let (Some(summary), Some(enemy)) = (game.summary(), game.computer_grid()) {
        println!();
        println!("Enemy fleet:");
        render::show_own_board(enemy);
        render::show_summary(&summary);
    }
    Ok(())
}

fn to_io(err: GameError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err)
}

/// Let the player deploy their fleet. Returns false if input ended first.
fn deploy(
    game: &mut Game,
    rng: &mut impl Rng,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<bool> {
    println!();
    println!("Place ships. Type help or ? for commands.");
    loop {
        println!();
        let grid = game.human().grid();
        if grid.fleet_deployed() {
            println!("All ships placed, type done to start the game");
        } else {
            let pending: Vec<_> = grid
                .ships()
                .filter(|ship| !ship.is_deployed())
                .map(|ship| ship.name())
                .collect();
            println!("Remaining ships to place: {}", pending.join(", "));
        }
        println!("Your current board setup:");
        render::show_own_board(grid);
        println!();

        let cmd = match input.read_input_lower(">", parse_setup)? {
            Some(cmd) => cmd,
            None => return Ok(false),
        };
        let result = match cmd {
            SetupCommand::Done if !game.human().grid().fleet_deployed() => {
                println!("You must place all your ships first!");
                Ok(())
            }
            SetupCommand::Done => {
                game.start().map_err(to_io)?;
                return Ok(true);
            }
            SetupCommand::Place(kind, origin, dir) => {
                // Placing a ship again moves it.
                let previous = game.remove(kind).map_err(to_io)?;
                game.deploy(kind, origin, dir).or_else(|err| {
                    if let Some(previous) = previous {
                        game.deploy(kind, previous.origin, previous.direction)?;
                    }
                    Err(err)
                })
            }
            SetupCommand::Remove(kind) => game.remove(kind).map(|_| ()),
            SetupCommand::Clear => game.clear_deployment(),
            SetupCommand::Random => game.randomize_deployment(rng),
            SetupCommand::Help => {
                print_setup_help();
                Ok(())
            }
        };
        if let Err(err) = result {
            println!("Invalid placement: {}.", err);
        }
    }
}

fn print_setup_help() {
    println!(
        "Available Commands:
    done                          if all ships are placed, start the game.
    place <ship> <row>,<col> <h|v>
                                  place the ship with its bow at the given cell, extending
                                  right (h) or down (v). Placing a placed ship moves it.
    remove <ship>                 clear the placement of the ship, or \"all\" for every ship.
    clear                         clear all ship placements.
    random                        randomize the placements of the remaining ships.

Available Ships:"
    );
    for &kind in ShipKind::ALL.iter() {
        println!("    {:<18}length {}", kind.name(), kind.size());
    }
}

/// Alternate turns until the game is decided. Returns false if the player quit.
fn battle(
    game: &mut Game,
    host: &mut TerminalHost,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<bool> {
    println!();
    println!("Battle stations! You fire first. Type help or ? for commands.");
    loop {
        match game.phase() {
            Phase::HumanTurn => {
                println!();
                println!("Enemy waters:");
                render::show_enemy_board(game.enemy_view());
                println!();
                println!("Your fleet:");
                render::show_own_board(game.human().grid());
                println!();

                let cmd = match input.read_input_lower("fire>", parse_play)? {
                    Some(cmd) => cmd,
                    None => {
                        host.quit();
                        return Ok(false);
                    }
                };
                match cmd {
                    PlayCommand::Fire(coord) => match game.fire(coord) {
                        Ok(result) => println!("You fire at {} and {}", coord, result),
                        Err(err) => println!("{}", err),
                    },
                    PlayCommand::Surrender => game.surrender().map_err(to_io)?,
                    PlayCommand::Help => print_play_help(),
                }
            }
            Phase::ComputerTurn => {
                print!("The computer is aiming");
                io::stdout().flush()?;
                let turn = game.computer_turn(host).map_err(to_io)?;
                println!();
                for shot in turn.shots() {
                    println!("The computer fires at {} and {}", shot.coord(), shot);
                }
                if turn.end() == TurnEnd::Cancelled {
                    info!("computer turn abandoned");
                    return Ok(false);
                }
            }
            Phase::Over(winner) => {
                debug!("{} won, human fired {} shots", winner, game.human().shots());
                return Ok(true);
            }
            Phase::Deploying => unreachable!("battle started before deployment finished"),
        }
    }
}

fn print_play_help() {
    println!(
        "Available Commands:
    fire <row>,<col>              fire at the given cell of the enemy grid. \"fire\" may be
                                  left out. Hits let you fire again.
    surrender                     give up the game.

Enemy grid: ~~ unknown, x miss, ## hit."
    );
}

/// Paces the computer's shots in real time and stops it once the player has gone.
struct TerminalHost {
    tick: Duration,
    ticks: u32,
    abort: AbortFlag,
}

impl TerminalHost {
    /// Ticks between progress dots.
    const DOT_EVERY: u32 = 50;

    fn new(tick: Duration) -> Self {
        Self {
            tick,
            ticks: 0,
            abort: AbortFlag::new(),
        }
    }

    fn quit(&self) {
        self.abort.request_abort();
    }
}

impl TurnHost for TerminalHost {
    fn abort_requested(&self) -> bool {
        self.abort.abort_requested()
    }

    fn pause(&mut self) {
        thread::sleep(self.tick);
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % Self::DOT_EVERY == 0 {
            print!(".");
            // Nobody is watching anymore.
            if io::stdout().flush().is_err() {
                self.quit();
            }
        }
    }
}
