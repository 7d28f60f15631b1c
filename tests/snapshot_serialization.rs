use battleship_lobby::{
    CellView, Coord, Game, GameState, Orientation, PlayerId, PlayerSnapshot, ShotResult,
};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = Coord> {
    (0..6usize, 0..6usize).prop_map(|(x, y)| Coord::new(x, y))
}

fn played_game(shots: &[Coord]) -> (Game, PlayerId, PlayerId) {
    let p1 = PlayerId::from("p1");
    let p2 = PlayerId::from("p2");
    let mut game = Game::new(p1.clone(), p2.clone());
    for player in [&p1, &p2] {
        let mut x = 0;
        while game.get_ship_to_place(player).unwrap().is_some() {
            game.place_ship(player, Coord::new(x, 0), Orientation::Vertical)
                .unwrap();
            x += 1;
        }
    }
    for target in shots {
        let shooter = game.whose_turn().clone();
        if game.get_game_state(&shooter).unwrap() != GameState::CanPlay {
            break;
        }
        game.shoot_field(&shooter, *target).unwrap();
    }
    (game, p1, p2)
}

#[test]
fn test_snapshot_marks_hits_and_misses() {
    let (mut game, p1, p2) = played_game(&[]);
    assert_eq!(game.shoot_field(&p1, Coord::new(0, 0)).unwrap(), ShotResult::Hit);
    assert_eq!(game.shoot_field(&p2, Coord::new(5, 5)).unwrap(), ShotResult::Miss);

    let mine = PlayerSnapshot::capture(&game, &p1).unwrap();
    assert_eq!(mine.state, GameState::CanPlay);
    assert_eq!(mine.opponent, p2);
    assert_eq!(mine.target_cell(Coord::new(0, 0)), Some(CellView::Hit));
    assert_eq!(mine.target_cell(Coord::new(1, 0)), Some(CellView::Unknown));
    assert_eq!(mine.own_cell(Coord::new(5, 5)), Some(CellView::Miss));
    assert_eq!(mine.own_cell(Coord::new(0, 0)), Some(CellView::Ship));
    assert_eq!(mine.own_cell(Coord::new(4, 4)), Some(CellView::Water));
    assert_eq!(mine.own_cell(Coord::new(6, 0)), None);
    assert!(mine.ship_to_place.is_none());

    let theirs = PlayerSnapshot::capture(&game, &p2).unwrap();
    assert_eq!(theirs.own_cell(Coord::new(0, 0)), Some(CellView::Hit));
    assert_eq!(theirs.last_opponent_move, Some(Coord::new(0, 0)));
    assert_eq!(theirs.ships[0].fields_intact(), 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn snapshot_roundtrip(shots in prop::collection::vec(coord(), 0..30)) {
        let (game, p1, _) = played_game(&shots);
        let snapshot = PlayerSnapshot::capture(&game, &p1).unwrap();
        let bytes = bincode::serialize(&snapshot).unwrap();
        let decoded: PlayerSnapshot = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(snapshot, decoded);
    }
}
