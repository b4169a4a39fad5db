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
use thiserror::Error;

use crate::{
    board::{projection::Label, DimensionError, PlacementError, ShotError},
    game::BoardId,
};

/// Error returned by [`Registry`][crate::game::Registry] operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No board is registered under the given id.
    #[error("no board with id {0}")]
    UnknownBoard(BoardId),

    /// The requested dimensions were rejected.
    #[error(transparent)]
    Dimensions(#[from] DimensionError),

    /// The fleet could not be placed.
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// The shot was rejected. The coordinate is the one-based label that was fired at.
    #[error(transparent)]
    Shot(#[from] ShotError<Label>),
}
