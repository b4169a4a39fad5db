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
//! Single-player naval combat engine.
//!
//! A [`Board`] holds a randomly placed fleet. No two ships touch: every ship is
//! surrounded by a ring of safe space that other ships may not enter. The player fires
//! shots one at a time; the board reports hits and misses and rejects shots out of
//! bounds, duplicate shots and shots after the last ship has sunk. Boards render either
//! a full view or a masked view that hides the ships.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use warship::{Board, FleetManifest, PlacementConfig};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut board = Board::new(10, 10).unwrap();
//! board
//!     .place_fleet(&FleetManifest::standard(), &PlacementConfig::default(), &mut rng)
//!     .unwrap();
//! assert_eq!(board.ships().count(), 10);
//! assert!(!board.is_game_over());
//! println!("{}", board.render_masked());
//! ```

pub mod board;
pub mod game;
pub mod ships;

pub use crate::{
    board::{
        placement::place_fleet,
        projection::{BoardView, Label, ViewCell},
        Board, CannotShootReason, Cell, Coordinate, DimensionError, Dimensions,
        InvalidDimensionReason, PlacementConfig, PlacementError, ShipId, ShipRef, ShotError,
        ShotOutcome, MAX_PLACEMENT_ATTEMPTS, MIN_DIMENSION,
    },
    game::{is_game_over, BoardId, Error, FleetStatus, Registry},
    ships::{FleetManifest, Orientation, Ship, ShipClass},
};
