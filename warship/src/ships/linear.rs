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
use crate::{
    board::{Coordinate, Dimensions},
    ships::Orientation,
};

/// Projection of a shape onto the board, listing the cells it covers in order from its
/// anchor.
pub type ShapeProjection = Vec<Coordinate>;

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Width and height of the line's bounding box in the given orientation.
    pub fn extent(&self, orientation: Orientation) -> (usize, usize) {
        match orientation {
            Orientation::Horizontal => (self.0, 1),
            Orientation::Vertical => (1, self.0),
        }
    }

    /// Iterate the cells of the line starting at `start`. Does not check bounds.
    pub fn cells(
        &self,
        start: Coordinate,
        orientation: Orientation,
    ) -> impl Iterator<Item = Coordinate> {
        (0..self.0).map(move |i| match orientation {
            Orientation::Horizontal => start.offset(i, 0),
            Orientation::Vertical => start.offset(0, i),
        })
    }

    /// Returns true if `coord` is one of the cells of the line starting at `start`.
    pub fn contains(
        &self,
        start: Coordinate,
        orientation: Orientation,
        coord: &Coordinate,
    ) -> bool {
        match orientation {
            Orientation::Horizontal => {
                coord.y == start.y && start.x <= coord.x && coord.x < start.x + self.0
            }
            Orientation::Vertical => {
                coord.x == start.x && start.y <= coord.y && coord.y < start.y + self.0
            }
        }
    }

    /// Project the line onto the board from `start`. Returns `None` if any cell of the
    /// line falls outside the board. Does not account for whether cells are occupied.
    pub fn project(
        &self,
        start: Coordinate,
        orientation: Orientation,
        dim: &Dimensions,
    ) -> Option<ShapeProjection> {
        let mut route = Vec::with_capacity(self.0);
        for coord in self.cells(start, orientation) {
            if !dim.contains(&coord) {
                return None;
            }
            route.push(coord);
        }
        Some(route)
    }
}
