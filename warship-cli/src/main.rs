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
    sync::PoisonError,
};

use clap::{value_t, App, Arg, ArgMatches};
use log::debug;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;
use tracing_subscriber::EnvFilter;

use warship::{
    BoardId, CannotShootReason, Error, FleetManifest, FleetStatus, Label, PlacementConfig,
    Registry, ShipClass, ShipId, ShotOutcome, MAX_PLACEMENT_ATTEMPTS,
};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let max_attempts = MAX_PLACEMENT_ATTEMPTS.to_string();
    let matches = App::new("Warship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Sink a randomly placed fleet from the command line.")
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("COLUMNS")
                .help("number of columns, at least 8")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("ROWS")
                .help("number of rows, at least 8")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("fleet")
                .long("fleet")
                .value_name("SIZES")
                .help("comma separated ship sizes (1-4) to place instead of the standard fleet")
                .takes_value(true)
                .validator(|sizes| parse_fleet(&sizes).map(|_| ())),
        )
        .arg(
            Arg::with_name("max_attempts")
                .long("max-attempts")
                .value_name("N")
                .help("placement attempts before giving up")
                .takes_value(true)
                .default_value(&max_attempts),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed the random placement for a reproducible board")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("reveal")
                .long("reveal")
                .help("show ships and their safe space on the board"),
        )
        .get_matches();

    let width = value_t!(matches, "width", usize).unwrap_or_else(|e| e.exit());
    let height = value_t!(matches, "height", usize).unwrap_or_else(|e| e.exit());
    let max_attempts = value_t!(matches, "max_attempts", usize).unwrap_or_else(|e| e.exit());
    let manifest = match matches.value_of("fleet") {
        Some(sizes) => parse_fleet(sizes).unwrap_or_else(|e| {
            clap::Error::with_description(&e, clap::ErrorKind::InvalidValue).exit()
        }),
        None => FleetManifest::standard(),
    };
    let mut rng = seeded_rng(&matches);

    let registry = Registry::with_config(PlacementConfig { max_attempts });
    let id = registry
        .create_board(width, height)
        .unwrap_or_else(|err| exit_with(err));
    if let Err(err) = registry.place_fleet(id, &manifest, &mut rng) {
        exit_with(err);
    }

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut game = Session {
        registry: &registry,
        id,
        manifest,
        rng,
        reveal: matches.is_present("reveal"),
    };
    game.play(&mut input)
}

/// Build the RNG from the `--seed` argument, or from entropy if none was given.
fn seeded_rng(matches: &ArgMatches) -> StdRng {
    if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    }
}

/// Parse a comma separated list of ship sizes into a manifest.
fn parse_fleet(sizes: &str) -> Result<FleetManifest, String> {
    sizes
        .split(',')
        .map(|size| {
            let size = size.trim();
            size.parse()
                .ok()
                .and_then(ShipClass::from_len)
                .ok_or_else(|| format!("invalid ship size \"{}\", expected 1 to 4", size))
        })
        .collect()
}

/// Report an error that prevents the game from starting.
fn exit_with(err: Error) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1)
}

/// Wrap a registry error so it can leave `main`.
fn fail(err: Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err)
}

/// Commands available while playing.
#[derive(Debug)]
enum Command {
    Fire(Label),
    Reveal,
    Hide,
    Status,
    History,
    Regenerate,
    Help,
    Quit,
}

/// Parse a line of input into a [`Command`].
fn parse_command(input: &str) -> Option<Command> {
    /// Matcher for shots, `3,4`, `3 4` or `fire 3 4`.
    static FIRE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:(?:fire|shoot|f)\s+)?
        (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$",
        )
        .unwrap()
    });

    match input {
        "?" | "help" | "h" => Some(Command::Help),
        "reveal" | "show" => Some(Command::Reveal),
        "hide" => Some(Command::Hide),
        "status" | "s" => Some(Command::Status),
        "history" | "shots" => Some(Command::History),
        "regenerate" | "reset" | "new" => Some(Command::Regenerate),
        "quit" | "exit" | "q" => Some(Command::Quit),
        other => match FIRE.captures(other) {
            Some(captures) => {
                let x = captures.name("x").unwrap().as_str().parse();
                let y = captures.name("y").unwrap().as_str().parse();
                match (x, y) {
                    (Ok(x), Ok(y)) => Some(Command::Fire(Label::new(x, y))),
                    _ => {
                        println!("Coordinates are too large.");
                        None
                    }
                }
            }
            None => {
                println!("Invalid command \"{}\". Use '?' for help", other);
                None
            }
        },
    }
}

/// A game in progress on one board of the registry.
struct Session<'a> {
    registry: &'a Registry,
    id: BoardId,
    manifest: FleetManifest,
    rng: StdRng,
    reveal: bool,
}

impl Session<'_> {
    fn play(&mut self, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
        println!("Sink the fleet. Type help or ? for commands.");
        loop {
            println!();
            self.show_board()?;
            let cmd = input.read_input_lower("> ", parse_command)?;
            debug!("command: {:?}", cmd);
            match cmd {
                Command::Fire(label) => self.fire(label)?,
                Command::Reveal => self.reveal = true,
                Command::Hide => self.reveal = false,
                Command::Status => {
                    let status = self.registry.status(self.id).map_err(fail)?;
                    show_status(&status);
                }
                Command::History => self.show_history()?,
                Command::Regenerate => self.regenerate()?,
                Command::Help => show_help(),
                Command::Quit => return Ok(()),
            }
        }
    }

    /// Print the board, revealed or masked.
    fn show_board(&self) -> io::Result<()> {
        let view = if self.reveal {
            self.registry.render_full(self.id)
        } else {
            self.registry.render_masked(self.id)
        };
        print!("{}", view.map_err(fail)?);
        Ok(())
    }

    /// Fire at the given cell and report what happened.
    fn fire(&mut self, label: Label) -> io::Result<()> {
        match self.registry.fire_shot(self.id, label.column, label.row) {
            Ok(ShotOutcome::Miss) => println!("Miss at {}.", label),
            Ok(ShotOutcome::Hit(ship)) => {
                let (class, sunk) = self.ship_status(ship)?;
                if sunk {
                    println!("You sank a {}!", class);
                } else {
                    println!("Hit a ship at {}!", label);
                }
                if self.registry.is_game_over(self.id).map_err(fail)? {
                    let status = self.registry.status(self.id).map_err(fail)?;
                    println!(
                        "All ships sunk in {} shots. Type regenerate to play again.",
                        status.shots
                    );
                }
            }
            Err(Error::Shot(err)) => match err.reason() {
                CannotShootReason::OutOfBounds => println!("{} is off the board.", err.coord()),
                CannotShootReason::DuplicateShot => {
                    println!("You already shot at {}.", err.coord())
                }
                CannotShootReason::GameAlreadyOver => {
                    println!("Every ship is already sunk. Type regenerate to play again.")
                }
            },
            Err(err) => return Err(fail(err)),
        }
        Ok(())
    }

    /// Replace the fleet. If no new fleet fits, the current board is kept.
    fn regenerate(&mut self) -> io::Result<()> {
        match self
            .registry
            .reset_board(self.id, &self.manifest, &mut self.rng)
        {
            Ok(()) => println!("A new fleet has been placed."),
            Err(Error::Placement(err)) => {
                println!("Could not place a new fleet ({}). Keeping this board.", err)
            }
            Err(err) => return Err(fail(err)),
        }
        Ok(())
    }

    /// Class of the given ship and whether it is sunk.
    fn ship_status(&self, ship: ShipId) -> io::Result<(ShipClass, bool)> {
        let board = self.registry.board(self.id).map_err(fail)?;
        let board = board.read().unwrap_or_else(PoisonError::into_inner);
        let status = board
            .ship(ship)
            .map(|found| (found.ship().class(), found.sunk()))
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "hit ship is not on the board"));
        status
    }

    /// Print every shot, most recent first.
    fn show_history(&self) -> io::Result<()> {
        let board = self.registry.board(self.id).map_err(fail)?;
        let board = board.read().unwrap_or_else(PoisonError::into_inner);
        if board.last_shot().is_none() {
            println!("No shots fired yet.");
        }
        for shot in board.shots() {
            println!("{}", shot);
        }
        Ok(())
    }
}

fn show_status(status: &FleetStatus) {
    println!(
        "Ships: {} afloat, {} sunk. Shots: {} ({} hits, {} misses).",
        status.afloat(),
        status.sunk,
        status.shots,
        status.hits,
        status.misses()
    );
}

fn show_help() {
    println!(
        "Available Commands:
    <x>,<y>         fire at column x, row y (fire <x> <y> also works).
    status          show how many ships are left and how many shots were fired.
    history         list the shots fired, most recent first.
    reveal / hide   show or hide ships and their safe space.
    regenerate      clear the board and place a new fleet.
    quit            leave the game.

Board symbols:
    ~  water
    O  missed shot
    X  successful shot
    S  ship (revealed only)
    -  ship safe space (revealed only)"
    );
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
