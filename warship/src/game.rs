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
//! Game-state evaluation and the registry that hosts boards.
//!
//! The evaluator is a set of pure functions over a [`Board`]'s current ships and shots;
//! nothing is cached, so the answers always match the recorded shots.
//!
//! [`registry`] keeps many boards addressable by id, each behind its own lock, and
//! exposes the operations a hosting layer calls.

use crate::board::Board;

pub use self::registry::{BoardId, Error, Registry};

pub mod registry;

/// Returns true if the board has at least one ship and every ship is sunk.
pub fn is_game_over(board: &Board) -> bool {
    let mut ships = board.ships().peekable();
    ships.peek().is_some() && ships.all(|ship| ship.sunk())
}

/// Aggregate counts over a board's fleet and shots.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FleetStatus {
    /// Number of ships in the fleet.
    pub ships: usize,
    /// Number of ships sunk.
    pub sunk: usize,
    /// Number of shots fired.
    pub shots: usize,
    /// Number of shots that hit a ship.
    pub hits: usize,
}

impl FleetStatus {
    /// Compute the status of the given board.
    pub fn of(board: &Board) -> Self {
        let (ships, sunk) = board
            .ships()
            .fold((0, 0), |(ships, sunk), ship| {
                (ships + 1, sunk + ship.sunk() as usize)
            });
        let (shots, hits) = board
            .shots()
            .fold((0, 0), |(shots, hits), shot| {
                (shots + 1, hits + shot.successful() as usize)
            });
        Self {
            ships,
            sunk,
            shots,
            hits,
        }
    }

    /// Number of ships not yet sunk.
    pub fn afloat(&self) -> usize {
        self.ships - self.sunk
    }

    /// Number of shots that hit only water.
    pub fn misses(&self) -> usize {
        self.shots - self.hits
    }

    /// Same rule as [`is_game_over`].
    pub fn game_over(&self) -> bool {
        self.ships > 0 && self.sunk == self.ships
    }
}
