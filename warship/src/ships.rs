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
//! Types used for defining ships and their shapes.
use std::fmt;

use crate::board::{Cell, Coordinate, Dimensions};

pub use self::{
    linear::{Line, ShapeProjection},
    manifest::{FleetManifest, NB_CRUISER, NB_ESCORTSHIP, NB_SUBMARINE, NB_TORPEDOBOAT},
};

mod linear;
mod manifest;

/// Class of a ship. The class determines the ship's length.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ShipClass {
    /// Submarine: length 1.
    Submarine,
    /// Torpedoboat: length 2.
    Torpedoboat,
    /// Escortship: length 3.
    Escortship,
    /// Cruiser: length 4.
    Cruiser,
}

impl ShipClass {
    /// All ship classes, from largest to smallest.
    pub const ALL: &'static [ShipClass] = &[
        ShipClass::Cruiser,
        ShipClass::Escortship,
        ShipClass::Torpedoboat,
        ShipClass::Submarine,
    ];

    /// Get the shape cooresponding to this ship class.
    pub fn shape(self) -> Line {
        Line::new(self.len())
    }

    /// Get the length of this ship class.
    pub fn len(self) -> usize {
        match self {
            ShipClass::Submarine => 1,
            ShipClass::Torpedoboat => 2,
            ShipClass::Escortship => 3,
            ShipClass::Cruiser => 4,
        }
    }

    /// Get the ship class with the given length, if any.
    pub fn from_len(len: usize) -> Option<Self> {
        ShipClass::ALL.iter().copied().find(|class| class.len() == len)
    }

    /// Name of the class.
    pub fn name(self) -> &'static str {
        match self {
            ShipClass::Submarine => "Submarine",
            ShipClass::Torpedoboat => "Torpedoboat",
            ShipClass::Escortship => "Escortship",
            ShipClass::Cruiser => "Cruiser",
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Placement orientation of a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship extends to the right of its anchor.
    Horizontal,
    /// The ship extends downward from its anchor.
    Vertical,
}

impl Orientation {
    /// Both orientations.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// A ship on the board: a straight line of cells starting at its top-left anchor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ship {
    class: ShipClass,
    anchor: Coordinate,
    orientation: Orientation,
}

impl Ship {
    /// Construct a ship of the given class anchored at `anchor`.
    pub fn new(class: ShipClass, anchor: Coordinate, orientation: Orientation) -> Self {
        Self {
            class,
            anchor,
            orientation,
        }
    }

    /// Class of this ship.
    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Top-left cell of this ship.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Orientation of this ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells this ship occupies.
    pub fn len(&self) -> usize {
        self.class.len()
    }

    /// Iterate the cells occupied by this ship.
    pub fn footprint(&self) -> impl Iterator<Item = Coordinate> {
        self.class.shape().cells(self.anchor, self.orientation)
    }

    /// Returns true if the ship occupies the given cell.
    pub fn occupies(&self, coord: &Coordinate) -> bool {
        self.class
            .shape()
            .contains(self.anchor, self.orientation, coord)
    }

    /// Iterate the cells drawn for this ship: its footprint as [`Cell::Ship`] and the
    /// surrounding ring, clipped to the board, as [`Cell::ShipSafeSpace`].
    pub fn tiles(&self, dim: &Dimensions) -> impl Iterator<Item = (Coordinate, Cell)> {
        let ship = *self;
        let (width, height) = self.class.shape().extent(self.orientation);
        dim.surrounding(self.anchor, width, height).map(move |coord| {
            if ship.occupies(&coord) {
                (coord, Cell::Ship)
            } else {
                (coord, Cell::ShipSafeSpace)
            }
        })
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.class, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_lengths() {
        let lens: Vec<_> = ShipClass::ALL.iter().map(|c| c.len()).collect();
        assert_eq!(lens, vec![4, 3, 2, 1]);
        assert_eq!(ShipClass::from_len(3), Some(ShipClass::Escortship));
        assert_eq!(ShipClass::from_len(5), None);
    }

    #[test]
    fn vertical_footprint() {
        let ship = Ship::new(
            ShipClass::Escortship,
            Coordinate::new(2, 4),
            Orientation::Vertical,
        );
        let cells: Vec<_> = ship.footprint().collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(2, 4),
                Coordinate::new(2, 5),
                Coordinate::new(2, 6)
            ]
        );
        assert!(ship.occupies(&Coordinate::new(2, 6)));
        assert!(!ship.occupies(&Coordinate::new(2, 7)));
        assert!(!ship.occupies(&Coordinate::new(3, 4)));
    }

    #[test]
    fn tiles_surround_ship_with_safe_space() {
        let dim = Dimensions::new(10, 10);
        let ship = Ship::new(
            ShipClass::Torpedoboat,
            Coordinate::new(4, 4),
            Orientation::Horizontal,
        );
        let tiles: Vec<_> = ship.tiles(&dim).collect();
        assert_eq!(tiles.len(), 4 * 3);
        assert_eq!(
            tiles.iter().filter(|(_, cell)| *cell == Cell::Ship).count(),
            2
        );
        assert!(tiles.contains(&(Coordinate::new(3, 3), Cell::ShipSafeSpace)));
        assert!(tiles.contains(&(Coordinate::new(6, 5), Cell::ShipSafeSpace)));
    }

    #[test]
    fn displays_class_name() {
        let ship = Ship::new(
            ShipClass::Cruiser,
            Coordinate::new(0, 0),
            Orientation::Horizontal,
        );
        assert_eq!(ship.to_string(), "Cruiser");
    }
}
