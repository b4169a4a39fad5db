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
use rand::{rngs::StdRng, SeedableRng};
use warship::{
    Board, CannotShootReason, Cell, Coordinate, Error, FleetManifest, FleetStatus,
    PlacementConfig, Registry, ShipClass, ShotOutcome,
};

fn placed_board(width: usize, height: usize, manifest: &FleetManifest, seed: u64) -> Board {
    let mut board = Board::new(width, height).unwrap();
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
fn single_submarine_game() {
    let registry = Registry::new();
    let id = registry.create_board(8, 8).unwrap();
    registry
        .place_fleet(
            id,
            &FleetManifest::single(ShipClass::Submarine),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();
    let anchor = {
        let board = registry.board(id).unwrap();
        let board = board.read().unwrap();
        let anchor = board.ships().next().unwrap().ship().anchor();
        anchor
    };

    let outcome = registry.fire_shot(id, anchor.x + 1, anchor.y + 1).unwrap();
    assert!(matches!(outcome, ShotOutcome::Hit(_)));
    assert!(registry.is_game_over(id).unwrap());

    match registry.fire_shot(id, anchor.x + 1, anchor.y + 1) {
        Err(Error::Shot(err)) => assert_eq!(err.reason(), CannotShootReason::DuplicateShot),
        other => panic!("unexpected result {:?}", other),
    }
    let column = (anchor.x + 4) % 8;
    match registry.fire_shot(id, column + 1, anchor.y + 1) {
        Err(Error::Shot(err)) => assert_eq!(err.reason(), CannotShootReason::GameAlreadyOver),
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(registry.status(id).unwrap().shots, 1);
}

#[test]
fn duplicate_shot_leaves_count_unchanged() {
    let mut board = placed_board(8, 8, &FleetManifest::single(ShipClass::Cruiser), 6);
    let cruiser: Vec<_> = board.ships().next().unwrap().ship().footprint().collect();
    let first = cruiser[0];
    assert!(board.fire(first).unwrap().is_hit());
    let err = board.fire(first).unwrap_err();
    assert_eq!(err.reason(), CannotShootReason::DuplicateShot);
    assert_eq!(board.shots().count(), 1);
    assert!(!board.is_game_over());
}

#[test]
fn out_of_bounds_records_nothing() {
    let mut board = placed_board(9, 8, &FleetManifest::standard(), 3);
    for coord in &[
        Coordinate::new(9, 0),
        Coordinate::new(0, 8),
        Coordinate::new(100, 100),
    ] {
        assert_eq!(
            board.fire(*coord).unwrap_err().reason(),
            CannotShootReason::OutOfBounds
        );
    }
    assert_eq!(board.shots().count(), 0);
}

#[test]
fn fresh_board_is_not_over() {
    let registry = Registry::new();
    let id = registry.create_board(10, 10).unwrap();
    assert!(!registry.is_game_over(id).unwrap());
    registry
        .place_fleet(id, &FleetManifest::standard(), &mut StdRng::seed_from_u64(2))
        .unwrap();
    assert!(!registry.is_game_over(id).unwrap());
    assert_eq!(
        registry.status(id).unwrap(),
        FleetStatus {
            ships: 10,
            sunk: 0,
            shots: 0,
            hits: 0,
        }
    );
}

#[test]
fn game_over_requires_every_ship_sunk() {
    let mut board = placed_board(10, 10, &FleetManifest::standard(), 8);
    let fleet: Vec<Vec<Coordinate>> = board
        .ships()
        .map(|ship| ship.ship().footprint().collect())
        .collect();

    let (last_ship, others) = fleet.split_last().unwrap();
    for footprint in others {
        let (last, rest) = footprint.split_last().unwrap();
        for coord in rest {
            assert!(board.fire(*coord).unwrap().is_hit());
        }
        let id = board.ship_at(last).unwrap().id();
        assert!(!board.ship(id).unwrap().sunk());
        assert_eq!(board.fire(*last).unwrap(), ShotOutcome::Hit(id));
        assert!(board.ship(id).unwrap().sunk());
        assert!(!board.is_game_over());
    }

    let (last, rest) = last_ship.split_last().unwrap();
    for coord in rest {
        board.fire(*coord).unwrap();
    }
    assert!(!board.is_game_over());
    board.fire(*last).unwrap();
    assert!(board.is_game_over());

    let status = FleetStatus::of(&board);
    assert_eq!(status.sunk, 10);
    assert_eq!(status.hits, 20);
    assert_eq!(status.misses(), 0);
    assert!(status.game_over());

    let masked = board.render_masked();
    assert_eq!(
        masked
            .cells()
            .filter(|(_, cell)| *cell == Cell::ShotSuccess)
            .count(),
        20
    );
}

#[test]
fn misses_never_hit_ships() {
    let mut board = placed_board(8, 8, &FleetManifest::standard(), 12);
    let water: Vec<Coordinate> = board
        .dimensions()
        .iter_coordinates()
        .flatten()
        .filter(|c| board.ship_at(c).is_none())
        .collect();
    assert_eq!(water.len(), 64 - 20);
    for coord in water {
        assert_eq!(board.fire(coord).unwrap(), ShotOutcome::Miss);
    }
    assert!(!board.is_game_over());
    assert!(board.shots().all(|shot| !shot.successful()));
}
