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
//! Rectangular board dimensions.
use crate::board::{Coordinate, DimensionError, InvalidDimensionReason};

/// Smallest allowed width or height of a board.
pub const MIN_DIMENSION: usize = 8;

/// Dimensions of a rectangular board. Both `width` and `height` are at least
/// [`MIN_DIMENSION`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    /// Width of the board. This cooresponds to the `x` [`Coordinate`].
    width: usize,
    /// Height of the board. This cooresponds to the `y` [`Coordinate`].
    height: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified width and height.
    /// Panics if either is below [`MIN_DIMENSION`] or if `width * height` exceeds
    /// `usize::max_value()`.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(dim) => dim,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create new [`Dimensions`] with the specified width and height. Returns an error if
    /// either is below [`MIN_DIMENSION`] or if `width * height` exceeds
    /// `usize::max_value()`.
    pub fn try_new(width: usize, height: usize) -> Result<Self, DimensionError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(DimensionError::new(
                InvalidDimensionReason::TooSmall,
                width,
                height,
            ));
        }
        width
            .checked_mul(height)
            .map(|_| Self { width, height })
            .ok_or_else(|| DimensionError::new(InvalidDimensionReason::TooLarge, width, height))
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Convert a coordinate to a linear index. Returns `None` if the coordinate is out of
    /// bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y * self.width + coord.x)
        } else {
            None
        }
    }

    /// Convert a linear index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate::new(idx % self.width, idx / self.width)
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (0..self.height).map(move |y| (0..width).map(move |x| Coordinate::new(x, y)))
    }

    /// Iterate the rectangle of `width` by `height` cells starting at `top_left`, grown by
    /// one cell in every direction and clipped to the board.
    pub fn surrounding(
        &self,
        top_left: Coordinate,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = Coordinate> {
        let x0 = top_left.x.saturating_sub(1);
        let y0 = top_left.y.saturating_sub(1);
        let x1 = (top_left.x + width + 1).min(self.width);
        let y1 = (top_left.y + height + 1).min(self.height);
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| Coordinate::new(x, y)))
    }
}

impl Default for Dimensions {
    /// Construct the default dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_small_boards() {
        assert_eq!(
            Dimensions::try_new(7, 10),
            Err(DimensionError::new(InvalidDimensionReason::TooSmall, 7, 10))
        );
        assert_eq!(
            Dimensions::try_new(10, 0),
            Err(DimensionError::new(InvalidDimensionReason::TooSmall, 10, 0))
        );
        assert!(Dimensions::try_new(8, 8).is_ok());
    }

    #[test]
    fn rejects_overflowing_boards() {
        let err = Dimensions::try_new(usize::max_value(), 8).unwrap_err();
        assert_eq!(err.reason(), InvalidDimensionReason::TooLarge);
        assert!(err.to_string().ends_with("the number of cells overflows"));
        assert_eq!(
            Dimensions::try_new(usize::max_value(), 7).unwrap_err().reason(),
            InvalidDimensionReason::TooSmall
        );
    }

    #[test]
    fn linearize_round_trips() {
        let dim = Dimensions::new(9, 8);
        assert_eq!(dim.try_linearize(&Coordinate::new(3, 2)), Some(21));
        assert_eq!(dim.un_linearize(21), Coordinate::new(3, 2));
        assert_eq!(dim.try_linearize(&Coordinate::new(9, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 8)), None);
    }

    #[test]
    fn surrounding_is_clipped_at_edges() {
        let dim = Dimensions::new(8, 8);
        let corner: Vec<_> = dim.surrounding(Coordinate::new(0, 0), 2, 1).collect();
        assert_eq!(corner.len(), 3 * 2);
        assert!(corner.iter().all(|c| dim.contains(c)));

        let middle: Vec<_> = dim.surrounding(Coordinate::new(3, 3), 1, 3).collect();
        assert_eq!(middle.len(), 3 * 5);

        let far: Vec<_> = dim.surrounding(Coordinate::new(7, 4), 1, 4).collect();
        assert_eq!(far.len(), 2 * 5);
    }
}
