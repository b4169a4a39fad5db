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
//! Hosts boards by id. Every board lives behind its own [`RwLock`]: shots, placement
//! and resets take the write lock, renders and status checks take the read lock.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use log::info;
use rand::Rng;
use uuid::Uuid;

use crate::{
    board::{
        projection::{BoardView, Label},
        Board, CannotShootReason, PlacementConfig, ShotError, ShotOutcome,
    },
    game::FleetStatus,
    ships::FleetManifest,
};

pub use self::errors::Error;

mod errors;

/// Identifier of a board in a [`Registry`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BoardId(Uuid);

impl BoardId {
    fn new_random() -> Self {
        BoardId(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for BoardId {
    fn from(uuid: Uuid) -> Self {
        BoardId(uuid)
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Shared handle to a single board.
pub type SharedBoard = Arc<RwLock<Board>>;

/// Lock a board for reading. A poisoned lock is still usable: board operations never
/// leave partial state behind.
fn read(board: &RwLock<Board>) -> RwLockReadGuard<Board> {
    board.read().unwrap_or_else(PoisonError::into_inner)
}

/// Lock a board for writing.
fn write(board: &RwLock<Board>) -> RwLockWriteGuard<Board> {
    board.write().unwrap_or_else(PoisonError::into_inner)
}

/// Boards by id, plus the order they were created in.
#[derive(Debug, Default)]
struct Boards {
    by_id: HashMap<BoardId, SharedBoard>,

    /// Ids in creation order, oldest first.
    created: Vec<BoardId>,
}

/// Collection of boards addressable by [`BoardId`].
#[derive(Debug, Default)]
pub struct Registry {
    /// All boards by id.
    boards: RwLock<Boards>,

    /// Placement settings used for every board.
    config: PlacementConfig,
}

impl Registry {
    /// Construct an empty registry with the default placement settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty registry using the given placement settings.
    pub fn with_config(config: PlacementConfig) -> Self {
        Self {
            boards: RwLock::default(),
            config,
        }
    }

    /// Placement settings used by this registry.
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Create an empty board and return its id.
    pub fn create_board(&self, width: usize, height: usize) -> Result<BoardId, Error> {
        let board = Board::new(width, height)?;
        let id = BoardId::new_random();
        let mut boards = self.boards.write().unwrap_or_else(PoisonError::into_inner);
        boards.by_id.insert(id, Arc::new(RwLock::new(board)));
        boards.created.push(id);
        info!("created {}x{} board {}", width, height, id);
        Ok(id)
    }

    /// Get the shared handle for a board.
    pub fn board(&self, id: BoardId) -> Result<SharedBoard, Error> {
        self.boards
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_id
            .get(&id)
            .cloned()
            .ok_or(Error::UnknownBoard(id))
    }

    /// Remove a board. Handles obtained earlier through [`Registry::board`] stay valid.
    pub fn remove_board(&self, id: BoardId) -> Result<(), Error> {
        let mut boards = self.boards.write().unwrap_or_else(PoisonError::into_inner);
        match boards.by_id.remove(&id) {
            Some(_) => {
                boards.created.retain(|created| *created != id);
                info!("removed board {}", id);
                Ok(())
            }
            None => Err(Error::UnknownBoard(id)),
        }
    }

    /// Ids of every board, most recently created first.
    pub fn board_ids(&self) -> Vec<BoardId> {
        let boards = self.boards.read().unwrap_or_else(PoisonError::into_inner);
        boards.created.iter().rev().copied().collect()
    }

    /// Place a fleet on an empty board.
    pub fn place_fleet<R: Rng>(
        &self,
        id: BoardId,
        manifest: &FleetManifest,
        rng: &mut R,
    ) -> Result<(), Error> {
        let board = self.board(id)?;
        let mut board = write(&board);
        Ok(board.place_fleet(manifest, &self.config, rng)?)
    }

    /// Clear ships and shots and place a new fleet.
    pub fn reset_board<R: Rng>(
        &self,
        id: BoardId,
        manifest: &FleetManifest,
        rng: &mut R,
    ) -> Result<(), Error> {
        let board = self.board(id)?;
        let mut board = write(&board);
        Ok(board.reset(manifest, &self.config, rng)?)
    }

    /// Fire at the cell with the given one-based column and row.
    pub fn fire_shot(&self, id: BoardId, column: usize, row: usize) -> Result<ShotOutcome, Error> {
        let board = self.board(id)?;
        let label = Label::new(column, row);
        let coord = label
            .to_coordinate()
            .ok_or_else(|| ShotError::new(CannotShootReason::OutOfBounds, label))?;
        let mut board = write(&board);
        Ok(board.fire(coord).map_err(|err| err.map_coord(Label::from))?)
    }

    /// Render every cell of a board.
    pub fn render_full(&self, id: BoardId) -> Result<BoardView, Error> {
        let board = self.board(id)?;
        let board = read(&board);
        Ok(board.render_full())
    }

    /// Render a board with ships hidden.
    pub fn render_masked(&self, id: BoardId) -> Result<BoardView, Error> {
        let board = self.board(id)?;
        let board = read(&board);
        Ok(board.render_masked())
    }

    /// Returns true if every ship on the board is sunk.
    pub fn is_game_over(&self, id: BoardId) -> Result<bool, Error> {
        let board = self.board(id)?;
        let board = read(&board);
        Ok(board.is_game_over())
    }

    /// Fleet and shot counts for a board.
    pub fn status(&self, id: BoardId) -> Result<FleetStatus, Error> {
        let board = self.board(id)?;
        let board = read(&board);
        Ok(FleetStatus::of(&board))
    }
}
