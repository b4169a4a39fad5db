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
//! Types that make up the game board.

use std::{collections::HashSet, fmt, time::SystemTime};

use log::{info, trace};
use rand::Rng;

use crate::{
    game,
    ships::{FleetManifest, Ship},
};

use self::projection::{BoardView, Label};
pub use self::{
    coordinate::Coordinate,
    dimensions::{Dimensions, MIN_DIMENSION},
    errors::{
        CannotShootReason, DimensionError, InvalidDimensionReason, PlacementError, ShotError,
    },
    grid::Cell,
    placement::{PlacementConfig, MAX_PLACEMENT_ATTEMPTS},
};

mod coordinate;
mod dimensions;
mod errors;
pub(crate) mod grid;
pub mod placement;
pub mod projection;

/// Identifies a ship within a single board's fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ShipId(usize);

impl ShipId {
    /// Position of the ship in the fleet.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to a ship that allows getting information about its status.
#[derive(Debug, Copy, Clone)]
pub struct ShipRef<'a> {
    /// ID of the ship.
    id: ShipId,

    /// The ship itself.
    ship: &'a Ship,

    /// Cells shot so far on the board.
    shot_cells: &'a HashSet<Coordinate>,
}

impl<'a> ShipRef<'a> {
    /// Get the ID of the ship.
    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Get the placed ship.
    pub fn ship(&self) -> &'a Ship {
        self.ship
    }

    /// Check if this ship has been sunk: every cell of its footprint has been shot.
    pub fn sunk(&self) -> bool {
        self.ship
            .footprint()
            .all(|coord| self.shot_cells.contains(&coord))
    }

    /// Get an iterator over the coordinates of this ship and whether those coords have
    /// been hit.
    pub fn hits(&self) -> impl 'a + Iterator<Item = (Coordinate, bool)> {
        let shot_cells = self.shot_cells;
        self.ship
            .footprint()
            .map(move |coord| (coord, shot_cells.contains(&coord)))
    }
}

/// A shot fired at the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Shot {
    /// Cell that was shot.
    coord: Coordinate,

    /// When the shot was fired.
    fired_at: SystemTime,
}

impl Shot {
    /// Cell that was shot.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// When the shot was fired.
    pub fn fired_at(&self) -> SystemTime {
        self.fired_at
    }
}

/// Handle to a shot together with the fleet it was fired at.
#[derive(Debug, Copy, Clone)]
pub struct ShotRef<'a> {
    shot: &'a Shot,
    ships: &'a [Ship],
}

impl<'a> ShotRef<'a> {
    /// The recorded shot.
    pub fn shot(&self) -> &'a Shot {
        self.shot
    }

    /// Cell that was shot.
    pub fn coord(&self) -> Coordinate {
        self.shot.coord
    }

    /// Returns true if the shot hit a ship.
    pub fn successful(&self) -> bool {
        self.ships.iter().any(|ship| ship.occupies(&self.shot.coord))
    }
}

impl fmt::Display for ShotRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = Label::from(self.shot.coord);
        if self.successful() {
            write!(f, "Successful shot {}", label)
        } else {
            write!(f, "Missed shot {}", label)
        }
    }
}

/// Result of a shot that was accepted by the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the ship with the given ID.
    Hit(ShipId),
}

impl ShotOutcome {
    /// Get the id of the ship that was hit.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(id) => Some(id),
        }
    }

    /// Returns true if the shot hit a ship.
    pub fn is_hit(&self) -> bool {
        self.ship().is_some()
    }
}

/// A single board: its dimensions, the fleet placed on it and the shots fired at it.
#[derive(Debug, Clone)]
pub struct Board {
    /// Dimensions of this board.
    dim: Dimensions,

    /// Placed ships. Empty until the fleet is placed.
    ships: Vec<Ship>,

    /// Shots in the order they were fired.
    shots: Vec<Shot>,

    /// Cells that have been shot, for duplicate checks and sunk checks.
    shot_cells: HashSet<Coordinate>,

    /// When the board was created.
    created_at: SystemTime,
}

impl Board {
    /// Create an empty board of the given size. Both sides must be at least
    /// [`MIN_DIMENSION`].
    pub fn new(width: usize, height: usize) -> Result<Self, DimensionError> {
        Dimensions::try_new(width, height).map(Self::with_dimensions)
    }

    /// Create an empty board with the given [`Dimensions`].
    pub fn with_dimensions(dim: Dimensions) -> Self {
        Self {
            dim,
            ships: Vec::new(),
            shots: Vec::new(),
            shot_cells: HashSet::new(),
            created_at: SystemTime::now(),
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    /// When the board was created.
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Randomly place the fleet described by `manifest`. Fails without touching the
    /// board if a fleet is already placed or if placement is impossible.
    pub fn place_fleet<R: Rng>(
        &mut self,
        manifest: &FleetManifest,
        config: &PlacementConfig,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        if !self.ships.is_empty() {
            return Err(PlacementError::AlreadyPlaced);
        }
        self.ships = placement::place_fleet(&self.dim, manifest, config, rng)?;
        Ok(())
    }

    /// Replace the fleet with a freshly placed one and clear every shot. If placement
    /// fails the previous fleet and shots are kept.
    pub fn reset<R: Rng>(
        &mut self,
        manifest: &FleetManifest,
        config: &PlacementConfig,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        let ships = placement::place_fleet(&self.dim, manifest, config, rng)?;
        info!(
            "reset board: cleared {} ships and {} shots",
            self.ships.len(),
            self.shots.len()
        );
        self.ships = ships;
        self.shots.clear();
        self.shot_cells.clear();
        Ok(())
    }

    /// Get an iterator over all ships on this board.
    pub fn ships(&self) -> impl Iterator<Item = ShipRef> {
        let shot_cells = &self.shot_cells;
        self.ships
            .iter()
            .enumerate()
            .map(move |(i, ship)| ShipRef {
                id: ShipId(i),
                ship,
                shot_cells,
            })
    }

    /// Get the ship with the specified ID if it exists.
    pub fn ship(&self, id: ShipId) -> Option<ShipRef> {
        self.ships.get(id.0).map(|ship| ShipRef {
            id,
            ship,
            shot_cells: &self.shot_cells,
        })
    }

    /// Get the ship occupying the given cell, if any.
    pub fn ship_at(&self, coord: &Coordinate) -> Option<ShipRef> {
        self.ships().find(|ship| ship.ship().occupies(coord))
    }

    /// Get an iterator over the shots fired at this board, most recent first.
    pub fn shots(&self) -> impl Iterator<Item = ShotRef> {
        let ships = &self.ships[..];
        self.shots.iter().rev().map(move |shot| ShotRef { shot, ships })
    }

    /// The most recent shot, if any.
    pub fn last_shot(&self) -> Option<ShotRef> {
        self.shots().next()
    }

    /// Returns true if the cell has already been shot.
    pub fn is_shot(&self, coord: &Coordinate) -> bool {
        self.shot_cells.contains(coord)
    }

    /// Returns true if the fleet is non-empty and every ship is sunk.
    pub fn is_game_over(&self) -> bool {
        game::is_game_over(self)
    }

    /// Fire a shot at the given cell, returning a result indicating why the shot was
    /// rejected or what it hit. Rejected shots are not recorded.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError<Coordinate>> {
        if !self.dim.contains(&coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        if self.shot_cells.contains(&coord) {
            return Err(ShotError::new(CannotShootReason::DuplicateShot, coord));
        }
        if self.is_game_over() {
            return Err(ShotError::new(CannotShootReason::GameAlreadyOver, coord));
        }
        self.shot_cells.insert(coord);
        self.shots.push(Shot {
            coord,
            fired_at: SystemTime::now(),
        });
        let outcome = match self.ship_at(&coord) {
            Some(ship) => ShotOutcome::Hit(ship.id()),
            None => ShotOutcome::Miss,
        };
        trace!("shot at {:?}: {:?}", coord, outcome);
        Ok(outcome)
    }

    /// Render every cell, including ships and their safe space.
    pub fn render_full(&self) -> BoardView {
        projection::full(self)
    }

    /// Render the board as seen by the player: ships and safe space are drawn as water.
    pub fn render_masked(&self) -> BoardView {
        projection::masked(self)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::ships::ShipClass;

    fn submarine_board() -> Board {
        let mut board = Board::new(8, 8).unwrap();
        board
            .place_fleet(
                &FleetManifest::single(ShipClass::Submarine),
                &PlacementConfig::default(),
                &mut StdRng::seed_from_u64(11),
            )
            .unwrap();
        board
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(10, 12).unwrap();
        assert_eq!(board.dimensions().width(), 10);
        assert_eq!(board.dimensions().height(), 12);
        assert_eq!(board.ships().count(), 0);
        assert_eq!(board.shots().count(), 0);
        assert!(!board.is_game_over());
    }

    #[test]
    fn rejects_small_board() {
        assert_eq!(
            Board::new(8, 7).unwrap_err(),
            DimensionError::new(InvalidDimensionReason::TooSmall, 8, 7)
        );
    }

    #[test]
    fn placing_twice_is_rejected() {
        let mut board = submarine_board();
        let before: Vec<Ship> = board.ships().map(|s| *s.ship()).collect();
        assert_eq!(
            board.place_fleet(
                &FleetManifest::standard(),
                &PlacementConfig::default(),
                &mut StdRng::seed_from_u64(12),
            ),
            Err(PlacementError::AlreadyPlaced)
        );
        let after: Vec<Ship> = board.ships().map(|s| *s.ship()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn sinking_only_ship_ends_game() {
        let mut board = submarine_board();
        let anchor = board.ships().next().unwrap().ship().anchor();
        assert_eq!(board.fire(anchor).unwrap(), ShotOutcome::Hit(ShipId(0)));
        let ship = board.ship(ShipId(0)).unwrap();
        assert!(ship.sunk());
        assert!(ship.hits().all(|(_, hit)| hit));
        assert!(board.is_game_over());
    }

    #[test]
    fn rejected_shots_are_not_recorded() {
        let mut board = submarine_board();
        let err = board.fire(Coordinate::new(8, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        assert_eq!(board.shots().count(), 0);

        let anchor = board.ships().next().unwrap().ship().anchor();
        let water = board
            .dimensions()
            .iter_coordinates()
            .flatten()
            .find(|c| *c != anchor)
            .unwrap();
        assert_eq!(board.fire(water).unwrap(), ShotOutcome::Miss);
        let err = board.fire(water).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::DuplicateShot);
        assert_eq!(*err.coord(), water);
        assert_eq!(board.shots().count(), 1);
    }

    #[test]
    fn shots_after_game_over_are_rejected() {
        let mut board = submarine_board();
        let anchor = board.ships().next().unwrap().ship().anchor();
        board.fire(anchor).unwrap();
        let other = Coordinate::new((anchor.x + 4) % 8, anchor.y);
        assert_eq!(
            board.fire(other).unwrap_err().reason(),
            CannotShootReason::GameAlreadyOver
        );
        assert_eq!(
            board.fire(anchor).unwrap_err().reason(),
            CannotShootReason::DuplicateShot
        );
        assert_eq!(board.shots().count(), 1);
    }

    #[test]
    fn shots_are_listed_most_recent_first() {
        let mut board = submarine_board();
        let anchor = board.ships().next().unwrap().ship().anchor();
        let first = Coordinate::new((anchor.x + 2) % 8, anchor.y);
        let second = Coordinate::new(anchor.x, (anchor.y + 2) % 8);
        board.fire(first).unwrap();
        board.fire(second).unwrap();
        let shots: Vec<_> = board.shots().map(|s| s.coord()).collect();
        assert_eq!(shots, vec![second, first]);
        let last = board.last_shot().unwrap();
        assert!(!last.successful());
        assert_eq!(
            last.to_string(),
            format!("Missed shot ({}, {})", second.x + 1, second.y + 1)
        );
    }

    #[test]
    fn reset_clears_shots_and_replaces_fleet() {
        let mut board = submarine_board();
        let anchor = board.ships().next().unwrap().ship().anchor();
        board.fire(anchor).unwrap();
        assert!(board.is_game_over());
        board
            .reset(
                &FleetManifest::standard(),
                &PlacementConfig::default(),
                &mut StdRng::seed_from_u64(5),
            )
            .unwrap();
        assert_eq!(board.ships().count(), 10);
        assert_eq!(board.shots().count(), 0);
        assert!(!board.is_shot(&anchor));
        assert!(!board.is_game_over());
    }

    #[test]
    fn failed_reset_keeps_previous_state() {
        let mut board = submarine_board();
        let anchor = board.ships().next().unwrap().ship().anchor();
        let miss = Coordinate::new((anchor.x + 3) % 8, anchor.y);
        board.fire(miss).unwrap();
        let err = board
            .reset(
                &FleetManifest::empty().with(ShipClass::Cruiser, 17),
                &PlacementConfig { max_attempts: 3 },
                &mut StdRng::seed_from_u64(5),
            )
            .unwrap_err();
        assert!(matches!(err, PlacementError::Impossible { attempts: 3, .. }));
        assert_eq!(board.ships().count(), 1);
        assert_eq!(board.shots().count(), 1);
    }
}
