use battleship_lobby::{
    Cell, Coord, Game, GameError, GameState, Orientation, PlayerId, ShotResult, FLEET,
};

fn c(s: &str) -> Coord {
    s.parse().unwrap()
}

/// Places every ship of `player` horizontally, one per row starting at row 1.
fn place_stacked(game: &mut Game, player: &PlayerId) {
    let mut row = 1;
    while game.get_ship_to_place(player).unwrap().is_some() {
        game.place_ship(player, Coord::from_letter('A', row).unwrap(), Orientation::Horizontal)
            .unwrap();
        row += 1;
    }
}

fn placed_game() -> (Game, PlayerId, PlayerId) {
    let p1 = PlayerId::from("p1");
    let p2 = PlayerId::from("p2");
    let mut game = Game::new(p1.clone(), p2.clone());
    place_stacked(&mut game, &p1);
    place_stacked(&mut game, &p2);
    (game, p1, p2)
}

#[test]
fn test_placement_queue_follows_fleet_order() {
    let p1 = PlayerId::from("p1");
    let mut game = Game::new(p1.clone(), PlayerId::from("p2"));
    let mut names = Vec::new();
    let mut row = 1;
    while let Some(ship) = game.get_ship_to_place(&p1).unwrap() {
        names.push(ship.name().to_string());
        game.place_ship(&p1, Coord::from_letter('A', row).unwrap(), Orientation::Horizontal)
            .unwrap();
        row += 1;
    }
    let expected: Vec<String> = FLEET
        .iter()
        .flat_map(|(t, n)| std::iter::repeat(t.name().to_string()).take(*n))
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_horizontal_battleship_at_a1_sinks_on_fourth_hit() {
    let p1 = PlayerId::from("p1");
    let p2 = PlayerId::from("p2");
    let mut game = Game::new(p1.clone(), p2.clone());
    assert_eq!(game.get_ship_to_place(&p1).unwrap().unwrap().size(), 4);
    game.place_ship(&p1, c("A1"), Orientation::Horizontal).unwrap();
    for cell in ["A1", "B1", "C1", "D1"] {
        assert!(matches!(game.grid(&p1).unwrap().read(c(cell)).unwrap(), Cell::Ship(_)));
    }
    assert!(game.grid(&p1).unwrap().read(c("E1")).unwrap().is_empty());
    // rest of p1's fleet goes on rows 2..4, p2's on rows 1..4
    for row in 2..=4 {
        game.place_ship(&p1, Coord::from_letter('A', row).unwrap(), Orientation::Horizontal)
            .unwrap();
    }
    place_stacked(&mut game, &p2);

    let p1_misses = ["A6", "B6", "C6", "D6", "E6"];
    let expected = [
        ShotResult::Hit,
        ShotResult::Hit,
        ShotResult::Hit,
        ShotResult::Sunk,
    ];
    for (i, target) in ["A1", "B1", "C1", "D1"].iter().enumerate() {
        assert_eq!(game.shoot_field(&p1, c(p1_misses[i])).unwrap(), ShotResult::Miss);
        assert_eq!(game.shoot_field(&p2, c(target)).unwrap(), expected[i]);
    }
    let battleship = &game.roster(&p1).unwrap().ships()[0];
    assert_eq!(battleship.fields_intact(), 0);

    assert_eq!(game.shoot_field(&p1, c(p1_misses[4])).unwrap(), ShotResult::Miss);
    assert_eq!(game.whose_turn(), &p2);
    assert_eq!(game.shoot_field(&p2, c("A1")).unwrap(), ShotResult::AlreadyShot);
    assert_eq!(game.whose_turn(), &p2);
    assert_eq!(game.get_game_state(&p2).unwrap(), GameState::CanPlay);
}

#[test]
fn test_placement_past_grid_edge_is_out_of_range() {
    let p1 = PlayerId::from("p1");
    let mut game = Game::new(p1.clone(), PlayerId::from("p2"));
    let err = game
        .place_ship(&p1, c("D1"), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, GameError::OutOfRange(c("G1")));
    // queue untouched and grid still empty
    assert_eq!(game.get_ship_to_place(&p1).unwrap().unwrap().name(), "Battleship");
    assert!(game.grid(&p1).unwrap().iter().all(|(_, cell)| cell.is_empty()));
}

#[test]
fn test_far_off_grid_errors_still_format() {
    let p1 = PlayerId::from("p1");
    let mut game = Game::new(p1.clone(), PlayerId::from("p2"));
    let err = game
        .place_ship(&p1, Coord::new(0, usize::MAX), Orientation::Horizontal)
        .unwrap_err();
    assert!(matches!(err, GameError::OutOfRange(_)));
    assert!(err.to_string().ends_with("is outside the grid"));

    let err = GameError::OutOfRange(Coord::new(0, usize::MAX));
    assert_eq!(
        err.to_string(),
        format!("Coordinate [0,{}] is outside the grid", usize::MAX)
    );
}

#[test]
fn test_overlapping_placement_lists_every_conflict() {
    let p1 = PlayerId::from("p1");
    let mut game = Game::new(p1.clone(), PlayerId::from("p2"));
    game.place_ship(&p1, c("A1"), Orientation::Horizontal).unwrap();
    let err = game
        .place_ship(&p1, c("B1"), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, GameError::OccupiedCells(vec![c("B1"), c("C1"), c("D1")]));
    assert_eq!(err.to_string(), "Fields B1, C1 and D1 are already occupied");
    assert_eq!(game.get_ship_to_place(&p1).unwrap().unwrap().name(), "Destroyer");
    game.place_ship(&p1, c("A2"), Orientation::Vertical).unwrap();
}

#[test]
fn test_first_player_moves_first_and_turns_alternate() {
    let (mut game, p1, p2) = placed_game();
    assert_eq!(game.get_game_state(&p1).unwrap(), GameState::CanPlay);
    assert_eq!(game.get_game_state(&p2).unwrap(), GameState::Wait);
    assert_eq!(game.shoot_field(&p2, c("F6")), Err(GameError::TurnViolation));
    game.shoot_field(&p1, c("F6")).unwrap();
    assert_eq!(game.whose_turn(), &p2);
    assert_eq!(game.get_last_opponent_move(&p2).unwrap(), (Some(c("F6")), None));
    assert_eq!(game.get_last_opponent_move(&p1).unwrap(), (None, None));
}

#[test]
fn test_sinking_whole_fleet_wins() {
    let (mut game, p1, p2) = placed_game();
    let ship_cells = |game: &Game, player: &PlayerId| -> Vec<Coord> {
        game.grid(player)
            .unwrap()
            .iter()
            .filter(|(_, cell)| matches!(cell, Cell::Ship(_)))
            .map(|(coord, _)| coord)
            .collect()
    };
    let targets = ship_cells(&game, &p2);
    let spares: Vec<Coord> = game
        .grid(&p1)
        .unwrap()
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(coord, _)| coord)
        .collect();
    assert!(spares.len() >= targets.len());

    for (i, target) in targets.iter().enumerate() {
        let result = game.shoot_field(&p1, *target).unwrap();
        assert_ne!(result, ShotResult::Miss);
        if i + 1 < targets.len() {
            assert_eq!(game.shoot_field(&p2, spares[i]).unwrap(), ShotResult::Miss);
        }
    }
    assert_eq!(game.roster(&p2).unwrap().fields_intact(), 0);
    assert!(ship_cells(&game, &p2).is_empty());
    assert_eq!(game.get_game_state(&p1).unwrap(), GameState::Won);
    assert_eq!(game.get_game_state(&p2).unwrap(), GameState::Lost);
    assert_eq!(game.shoot_field(&p1, c("F5")), Err(GameError::TurnViolation));
}
