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
//! The multiset of ship classes that make up a fleet.
use std::iter::FromIterator;

use crate::ships::ShipClass;

/// Number of cruisers in the standard fleet.
pub const NB_CRUISER: usize = 1;
/// Number of escortships in the standard fleet.
pub const NB_ESCORTSHIP: usize = 2;
/// Number of torpedoboats in the standard fleet.
pub const NB_TORPEDOBOAT: usize = 3;
/// Number of submarines in the standard fleet.
pub const NB_SUBMARINE: usize = 4;

/// List of ship classes to place on a board. Acts as a builder.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FleetManifest {
    ships: Vec<ShipClass>,
}

impl FleetManifest {
    /// A manifest with no ships.
    pub fn empty() -> Self {
        Self { ships: Vec::new() }
    }

    /// The standard fleet: 1 cruiser, 2 escortships, 3 torpedoboats and 4 submarines.
    pub fn standard() -> Self {
        Self::empty()
            .with(ShipClass::Cruiser, NB_CRUISER)
            .with(ShipClass::Escortship, NB_ESCORTSHIP)
            .with(ShipClass::Torpedoboat, NB_TORPEDOBOAT)
            .with(ShipClass::Submarine, NB_SUBMARINE)
    }

    /// A fleet made of one ship of the given class.
    pub fn single(class: ShipClass) -> Self {
        Self::empty().with(class, 1)
    }

    /// Add `count` ships of the given class.
    pub fn with(mut self, class: ShipClass, count: usize) -> Self {
        self.ships.extend(std::iter::repeat(class).take(count));
        self
    }

    /// Total number of ships.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Returns true if the manifest lists no ships.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Number of ships of the given class.
    pub fn count(&self, class: ShipClass) -> usize {
        self.ships.iter().filter(|&&c| c == class).count()
    }

    /// Total number of cells the fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(|class| class.len()).sum()
    }

    /// Iterate the ship classes in the manifest.
    pub fn iter(&self) -> impl Iterator<Item = ShipClass> + '_ {
        self.ships.iter().copied()
    }
}

impl Default for FleetManifest {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<ShipClass> for FleetManifest {
    fn from_iter<T: IntoIterator<Item = ShipClass>>(iter: T) -> Self {
        Self {
            ships: iter.into_iter().collect(),
        }
    }
}
