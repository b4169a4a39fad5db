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
//! Random fleet placement.
//!
//! Each attempt shuffles the fleet and places ships one at a time onto a working grid.
//! A placed ship marks its footprint and the ring of cells around it, so later ships can
//! only land on cells that are still water and can never touch an earlier ship. When a
//! ship runs out of candidate anchors the attempt is abandoned and a new one starts from
//! an empty grid.

use log::{debug, info, warn};
use rand::{distributions::Uniform, seq::SliceRandom, Rng};

use crate::{
    board::{grid::Grid, Cell, Coordinate, Dimensions, PlacementError},
    ships::{FleetManifest, Line, Orientation, Ship, ShipClass},
};

/// Default number of attempts made before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 500;

/// Settings for the placement engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlacementConfig {
    /// Number of full attempts to make before reporting the fleet as impossible to
    /// place.
    pub max_attempts: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Working grid for a single placement attempt.
struct Layout {
    grid: Grid<Cell>,
    ships: Vec<Ship>,
}

impl Layout {
    fn new(dim: Dimensions, capacity: usize) -> Self {
        Self {
            grid: Grid::filled(dim, Cell::Water),
            ships: Vec::with_capacity(capacity),
        }
    }

    /// Coordinates that are still open water.
    fn water(&self) -> Vec<Coordinate> {
        self.grid
            .iter()
            .filter(|(_, cell)| **cell == Cell::Water)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Returns true if the line fits at `start` in the given orientation: every cell is
    /// on the board and still water.
    fn fits(&self, line: &Line, start: Coordinate, orientation: Orientation) -> bool {
        line.project(start, orientation, &self.grid.dim)
            .map_or(false, |proj| {
                proj.iter().all(|coord| self.grid[coord] == Cell::Water)
            })
    }

    /// Draw the ship and its safe space onto the working grid and keep it.
    fn commit(&mut self, ship: Ship) {
        self.grid.stamp(&ship);
        self.ships.push(ship);
    }

    /// Try to place a single ship at a random anchor. Returns `None` once fewer water
    /// cells than the ship's length remain as candidates.
    fn place<R: Rng>(&mut self, class: ShipClass, rng: &mut R) -> Option<Ship> {
        let line = class.shape();
        let mut candidates = self.water();
        while candidates.len() >= line.len() {
            let idx = rng.sample(Uniform::new(0, candidates.len()));
            let start = candidates[idx];
            let mut orientations = Orientation::ALL;
            orientations.shuffle(rng);
            match orientations
                .iter()
                .copied()
                .find(|&orientation| self.fits(&line, start, orientation))
            {
                Some(orientation) => {
                    let ship = Ship::new(class, start, orientation);
                    self.commit(ship);
                    return Some(ship);
                }
                None => {
                    candidates.swap_remove(idx);
                }
            }
        }
        None
    }
}

/// Place every ship of the manifest on a board of the given dimensions. Either the whole
/// fleet is returned or, once `config.max_attempts` attempts have failed,
/// [`PlacementError::Impossible`].
pub fn place_fleet<R: Rng>(
    dim: &Dimensions,
    manifest: &FleetManifest,
    config: &PlacementConfig,
    rng: &mut R,
) -> Result<Vec<Ship>, PlacementError> {
    let mut pending: Vec<ShipClass> = manifest.iter().collect();
    for attempt in 1..=config.max_attempts {
        pending.shuffle(rng);
        let mut layout = Layout::new(*dim, pending.len());
        match pending
            .iter()
            .try_for_each(|&class| layout.place(class, rng).map(|_| ()))
        {
            Some(()) => {
                info!(
                    "placed {} ships on a {}x{} board in {} attempt(s)",
                    layout.ships.len(),
                    dim.width(),
                    dim.height(),
                    attempt
                );
                return Ok(layout.ships);
            }
            None => debug!(
                "placement attempt {}/{} failed after {} ships",
                attempt,
                config.max_attempts,
                layout.ships.len()
            ),
        }
    }
    warn!(
        "gave up placing {} ships on a {}x{} board after {} attempts",
        manifest.len(),
        dim.width(),
        dim.height(),
        config.max_attempts
    );
    Err(PlacementError::Impossible {
        attempts: config.max_attempts,
        width: dim.width(),
        height: dim.height(),
        manifest: manifest.clone(),
    })
}
