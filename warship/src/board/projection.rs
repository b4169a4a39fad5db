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
//! Renders a board for display.
//!
//! This is the only place where one-based labels exist. Everything else in the crate
//! works with zero-based [`Coordinate`]s; [`Label`] converts in both directions.

use std::fmt;

use crate::board::{grid::Grid, Board, Cell, Coordinate};

/// One-based position of a cell as printed in the view headers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Label {
    /// Column number, starting at 1.
    pub column: usize,
    /// Row number, starting at 1.
    pub row: usize,
}

impl Label {
    /// Construct a [`Label`] from a one-based column and row.
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Convert to the zero-based coordinate of the same cell. Returns `None` if either
    /// number is zero. Does not check the upper bound of any board.
    pub fn to_coordinate(self) -> Option<Coordinate> {
        Some(Coordinate::new(
            self.column.checked_sub(1)?,
            self.row.checked_sub(1)?,
        ))
    }
}

impl From<Coordinate> for Label {
    fn from(coord: Coordinate) -> Self {
        Self::new(coord.x + 1, coord.y + 1)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// A single entry of a rendered view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ViewCell {
    /// The blank top-left corner.
    Corner,
    /// Header above a column, holding the one-based column number.
    ColumnHeader(usize),
    /// Header left of a row, holding the one-based row number.
    RowHeader(usize),
    /// A playable cell.
    Cell(Cell),
}

impl ViewCell {
    /// The playable cell, or `None` for header decoration.
    pub fn cell(self) -> Option<Cell> {
        match self {
            ViewCell::Cell(cell) => Some(cell),
            _ => None,
        }
    }
}

impl fmt::Display for ViewCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViewCell::Corner => f.pad(""),
            ViewCell::ColumnHeader(i) | ViewCell::RowHeader(i) => fmt::Display::fmt(i, f),
            ViewCell::Cell(cell) => fmt::Display::fmt(cell, f),
        }
    }
}

/// Rendered board with a header row and a header column. Row 0 holds the column
/// headers and column 0 holds the row headers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardView {
    rows: Vec<Vec<ViewCell>>,
}

impl BoardView {
    /// Add headers around the grid.
    fn decorate(grid: &Grid<Cell>) -> Self {
        let width = grid.dim.width();
        let mut rows = Vec::with_capacity(grid.dim.height() + 1);
        rows.push(
            std::iter::once(ViewCell::Corner)
                .chain((1..=width).map(ViewCell::ColumnHeader))
                .collect(),
        );
        for (y, row) in grid.rows().enumerate() {
            rows.push(
                std::iter::once(ViewCell::RowHeader(y + 1))
                    .chain(row.iter().copied().map(ViewCell::Cell))
                    .collect(),
            );
        }
        Self { rows }
    }

    /// All rows, headers included.
    pub fn rows(&self) -> &[Vec<ViewCell>] {
        &self.rows
    }

    /// Number of playable columns.
    pub fn width(&self) -> usize {
        self.rows[0].len() - 1
    }

    /// Number of playable rows.
    pub fn height(&self) -> usize {
        self.rows.len() - 1
    }

    /// The playable cell at the given zero-based coordinate.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.get(Label::from(coord))
    }

    /// The playable cell at the given one-based label. Header positions return `None`.
    pub fn get(&self, label: Label) -> Option<Cell> {
        self.rows
            .get(label.row)
            .and_then(|row| row.get(label.column))
            .and_then(|view| view.cell())
    }

    /// Iterate the playable cells with their zero-based coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        self.rows.iter().skip(1).enumerate().flat_map(|(y, row)| {
            row.iter().skip(1).enumerate().filter_map(move |(x, view)| {
                view.cell().map(|cell| (Coordinate::new(x, y), cell))
            })
        })
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            for (i, view) in row.iter().enumerate() {
                if i == 0 {
                    write!(f, "{:>3}", view)?;
                } else {
                    write!(f, "{:^4}", view)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Draw the ships with their safe space, then the shots on top.
fn reveal(board: &Board) -> Grid<Cell> {
    let mut grid = Grid::filled(*board.dimensions(), Cell::Water);
    for ship in board.ships() {
        grid.stamp(ship.ship());
    }
    for shot in board.shots() {
        grid[shot.coord()] = if shot.successful() {
            Cell::ShotSuccess
        } else {
            Cell::ShotMiss
        };
    }
    grid
}

/// Render every cell of the board.
pub fn full(board: &Board) -> BoardView {
    BoardView::decorate(&reveal(board))
}

/// Render the board with every ship and safe-space cell drawn as water.
pub fn masked(board: &Board) -> BoardView {
    let mut grid = reveal(board);
    let hidden = Cell::concealed();
    grid.update_all(|cell| {
        if hidden.contains(*cell) {
            *cell = Cell::Water;
        }
    });
    BoardView::decorate(&grid)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        board::PlacementConfig,
        ships::{FleetManifest, ShipClass},
    };

    fn placed_board(manifest: &FleetManifest, seed: u64) -> Board {
        let mut board = Board::new(10, 9).unwrap();
        board
            .place_fleet(
                manifest,
                &PlacementConfig::default(),
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();
        board
    }

    #[test]
    fn labels_are_one_based() {
        assert_eq!(Label::from(Coordinate::new(0, 4)), Label::new(1, 5));
        assert_eq!(Label::new(3, 1).to_coordinate(), Some(Coordinate::new(2, 0)));
        assert_eq!(Label::new(0, 1).to_coordinate(), None);
        assert_eq!(Label::new(1, 0).to_coordinate(), None);
        assert_eq!(Label::new(2, 7).to_string(), "(2, 7)");
    }

    #[test]
    fn headers_surround_the_grid() {
        let board = Board::new(10, 9).unwrap();
        let view = board.render_full();
        assert_eq!(view.rows().len(), 10);
        assert!(view.rows().iter().all(|row| row.len() == 11));
        assert_eq!(view.rows()[0][0], ViewCell::Corner);
        assert_eq!(view.rows()[0][1], ViewCell::ColumnHeader(1));
        assert_eq!(view.rows()[0][10], ViewCell::ColumnHeader(10));
        assert_eq!(view.rows()[9][0], ViewCell::RowHeader(9));
        assert_eq!((view.width(), view.height()), (10, 9));
        assert_eq!(view.get(Label::new(0, 3)), None);
        assert!(view.cells().all(|(_, cell)| cell == Cell::Water));
    }

    #[test]
    fn full_view_shows_ships_and_safe_space() {
        let board = placed_board(&FleetManifest::single(ShipClass::Escortship), 2);
        let view = board.render_full();
        let ship = *board.ships().next().unwrap().ship();
        for coord in ship.footprint() {
            assert_eq!(view.cell(coord), Some(Cell::Ship));
        }
        let safe = view
            .cells()
            .filter(|(_, cell)| *cell == Cell::ShipSafeSpace)
            .count();
        let ring = ship.tiles(board.dimensions()).count() - ship.len();
        assert_eq!(safe, ring);
    }

    #[test]
    fn shots_override_ship_cells() {
        let mut board = placed_board(&FleetManifest::single(ShipClass::Cruiser), 4);
        let ship = *board.ships().next().unwrap().ship();
        let hit = ship.footprint().next().unwrap();
        let miss = board
            .dimensions()
            .iter_coordinates()
            .flatten()
            .find(|c| board.ship_at(c).is_none())
            .unwrap();
        board.fire(hit).unwrap();
        board.fire(miss).unwrap();

        let full = board.render_full();
        assert_eq!(full.cell(hit), Some(Cell::ShotSuccess));
        assert_eq!(full.cell(miss), Some(Cell::ShotMiss));

        let masked = board.render_masked();
        assert_eq!(masked.cell(hit), Some(Cell::ShotSuccess));
        assert_eq!(masked.cell(miss), Some(Cell::ShotMiss));
        assert!(masked
            .cells()
            .all(|(_, cell)| !Cell::concealed().contains(cell)));
    }

    #[test]
    fn display_prints_symbols() {
        let board = placed_board(&FleetManifest::single(ShipClass::Submarine), 8);
        let text = board.render_full().to_string();
        assert_eq!(text.lines().count(), 10);
        assert!(text.contains('S'));
        assert!(!board.render_masked().to_string().contains('S'));
    }
}
