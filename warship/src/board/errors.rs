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
//! Errors used by the [`Board`][crate::board::Board] and its placement engine.

use std::fmt::Debug;

use thiserror::Error;

use crate::{board::MIN_DIMENSION, ships::FleetManifest};

/// Reason why a pair of dimensions was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidDimensionReason {
    /// The width or height is below [`MIN_DIMENSION`].
    #[error("both must be at least {}", MIN_DIMENSION)]
    TooSmall,

    /// The number of cells does not fit in a `usize`.
    #[error("the number of cells overflows")]
    TooLarge,
}

/// Error returned when a board is requested with unusable dimensions.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid dimensions {width}x{height}: {reason}")]
pub struct DimensionError {
    /// Why the dimensions were rejected.
    reason: InvalidDimensionReason,
    /// Width that was requested.
    width: usize,
    /// Height that was requested.
    height: usize,
}

impl DimensionError {
    pub(crate) fn new(reason: InvalidDimensionReason, width: usize, height: usize) -> Self {
        Self {
            reason,
            width,
            height,
        }
    }

    /// Why the dimensions were rejected.
    pub fn reason(&self) -> InvalidDimensionReason {
        self.reason
    }

    /// The width that was rejected.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height that was rejected.
    pub fn height(&self) -> usize {
        self.height
    }
}

/// Error caused when a fleet could not be placed. The board is left unchanged.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PlacementError {
    /// The board already holds a fleet. Use a reset to replace it.
    #[error("the board already holds a fleet")]
    AlreadyPlaced,

    /// Every placement attempt failed: the board is too small for the manifest.
    #[error(
        "could not place {} ships on a {width}x{height} board after {attempts} attempts",
        .manifest.len()
    )]
    Impossible {
        /// Number of attempts made before giving up.
        attempts: usize,
        /// Width of the board.
        width: usize,
        /// Height of the board.
        height: usize,
        /// The fleet that did not fit.
        manifest: FleetManifest,
    },
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("the target coordinate is out of bounds")]
    OutOfBounds,

    /// Every ship on the board is already sunk.
    #[error("the game is already over")]
    GameAlreadyOver,

    /// A shot has already been fired at that cell.
    #[error("the target cell was already shot")]
    DuplicateShot,
}

/// Error returned when trying to shoot a cell. Nothing is recorded when this is returned.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord:?}: {reason}")]
pub struct ShotError<C: Debug> {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: C,
}

impl<C: Debug> ShotError<C> {
    /// Construct a shot error with the given reason for the specified cell.
    pub(crate) fn new(reason: CannotShootReason, coord: C) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> &C {
        &self.coord
    }

    /// Extract the coordinate of the shot cell.
    pub fn into_coord(self) -> C {
        self.coord
    }

    /// Convert the coordinate of this error, keeping the reason.
    pub fn map_coord<D: Debug>(self, f: impl FnOnce(C) -> D) -> ShotError<D> {
        ShotError {
            reason: self.reason,
            coord: f(self.coord),
        }
    }
}
