use std::sync::Arc;

use battleship_lobby::{
    Autoplayer, GameState, Matchmaker, PlayerId, Rules, ShipType, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::time::Duration;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_scripted_players_finish_a_game() {
    let matchmaker = Arc::new(Matchmaker::new());
    let mut handles = Vec::new();
    for (n, name) in ["alice", "bob"].into_iter().enumerate() {
        let matchmaker = matchmaker.clone();
        handles.push(tokio::spawn(async move {
            let view = matchmaker
                .request_timeout(name, Duration::from_secs(5))
                .await
                .unwrap()
                .ready()
                .unwrap();
            let mut rng = SmallRng::seed_from_u64(7 + n as u64);
            let mut bot = Autoplayer::stacked(&Rules::default())
                .unwrap()
                .shuffled(&mut rng)
                .with_polling(Duration::from_millis(200), 25);
            bot.play(&view).await.unwrap()
        }));
    }
    let mut reports = Vec::new();
    for handle in handles {
        reports.push(handle.await.unwrap());
    }

    let winners = reports.iter().filter(|r| r.state == GameState::Won).count();
    let losers = reports.iter().filter(|r| r.state == GameState::Lost).count();
    assert_eq!((winners, losers), (1, 1));
    let winner = reports.iter().find(|r| r.state == GameState::Won).unwrap();
    assert_eq!(winner.hits, TOTAL_SHIP_CELLS);
    assert_eq!(winner.sunk, 4);
    assert!(matchmaker
        .player_view(&PlayerId::from("alice"))
        .await
        .unwrap()
        .is_some());
}

#[test]
fn test_fleet_that_does_not_stack_is_rejected() {
    let rules = Rules::new(2, vec![(ShipType::new("Long", 3), 1)]).unwrap();
    assert!(Autoplayer::stacked(&rules).is_err());
}
