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
//! Defines the cell vocabulary and the grid that placement and projection draw onto.

use std::{
    borrow::Borrow,
    fmt,
    ops::{Index, IndexMut},
};

use enumflags2::BitFlags;

use crate::{
    board::{Coordinate, Dimensions},
    ships::Ship,
};

/// Content of a single cell as drawn by placement and projection.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Cell {
    /// Open water.
    Water = 0b00001,
    /// Part of a ship.
    Ship = 0b00010,
    /// The ring of water around a ship that no other ship may enter.
    ShipSafeSpace = 0b00100,
    /// A shot that hit a ship.
    ShotSuccess = 0b01000,
    /// A shot that hit only water.
    ShotMiss = 0b10000,
}

impl Cell {
    /// Cells which give away the position of a ship and are drawn as water in the masked
    /// view.
    pub fn concealed() -> BitFlags<Cell> {
        Cell::Ship | Cell::ShipSafeSpace
    }

    /// Single character used when printing this cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Water => "~",
            Cell::Ship => "S",
            Cell::ShipSafeSpace => "-",
            Cell::ShotSuccess => "X",
            Cell::ShotMiss => "O",
        }
    }

    /// Human readable name of this cell kind.
    pub fn name(self) -> &'static str {
        match self {
            Cell::Water => "Water",
            Cell::Ship => "Ship",
            Cell::ShipSafeSpace => "Ship safe space",
            Cell::ShotSuccess => "Success shot",
            Cell::ShotMiss => "Miss shot",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// Dense row-major grid over a board's [`Dimensions`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Grid<T> {
    /// Dimensions of this grid.
    pub(crate) dim: Dimensions,
    /// Cells that make up this grid.
    cells: Box<[T]>,
}

impl<T: Clone> Grid<T> {
    /// Construct a grid with every cell set to `value`.
    pub(crate) fn filled(dim: Dimensions, value: T) -> Self {
        let cells = vec![value; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }
}

impl<T> Grid<T> {
    /// Get a reference to the cell at the given [`Coordinate`].
    pub(crate) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&T> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(crate) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut T> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate every coordinate paired with its cell, row by row.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (dim.un_linearize(i), cell))
    }

    /// Iterate the rows of the grid.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.dim.width())
    }

    /// Apply `f` to every cell.
    pub(crate) fn update_all(&mut self, mut f: impl FnMut(&mut T)) {
        self.cells.iter_mut().for_each(|cell| f(cell));
    }
}

impl Grid<Cell> {
    /// Draw a ship and its safe space. Safe space never covers another ship's cells.
    pub(crate) fn stamp(&mut self, ship: &Ship) {
        for (coord, tile) in ship.tiles(&self.dim) {
            if tile == Cell::Ship || self[coord] == Cell::Water {
                self[coord] = tile;
            }
        }
    }
}

impl<T, B: Borrow<Coordinate>> Index<B> for Grid<T> {
    type Output = T;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<T, B: Borrow<Coordinate>> IndexMut<B> for Grid<T> {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
