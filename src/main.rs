#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::sync::Arc;

#[cfg(feature = "std")]
use battleship_lobby::{
    init_logging, Autoplayer, GameError, GameReport, GameState, Matchmaker, PlayerId, Rules,
    WaitOutcome,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use tokio::task::JoinSet;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Run scripted players through one matchmaker and print a JSON summary.
    Sim {
        #[arg(long, default_value_t = 1, help = "Number of games to run concurrently")]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible shot order (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 250, help = "Turn/match wait timeout in milliseconds")]
        poll_ms: u64,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim {
            games,
            seed,
            poll_ms,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            log::info!("running {} game(s) with seed {}", games, seed);
            let results = simulate(games, seed, Duration::from_millis(poll_ms)).await?;
            let players: Vec<_> = results
                .iter()
                .map(|(player, report)| json!({ "player": player, "report": report }))
                .collect();
            let summary = json!({
                "seed": seed,
                "games": games,
                "won": results.iter().filter(|(_, r)| r.state == GameState::Won).count(),
                "players": players,
            });
            println!("{}", serde_json::to_string(&summary)?);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn simulate(
    games: usize,
    seed: u64,
    poll: Duration,
) -> anyhow::Result<Vec<(PlayerId, GameReport)>> {
    let rules = Rules::default();
    let matchmaker = Arc::new(Matchmaker::with_rules(rules.clone()));
    let mut tasks = JoinSet::new();

    for n in 0..games * 2 {
        let matchmaker = matchmaker.clone();
        let rules = rules.clone();
        let player = PlayerId::new(format!("player-{}", n));
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(n as u64));
        tasks.spawn(async move {
            let view = loop {
                match matchmaker.request_timeout(player.clone(), poll).await? {
                    WaitOutcome::Ready(view) => break view,
                    WaitOutcome::TimedOut => log::debug!("{} still waiting", player),
                }
            };
            let mut bot = Autoplayer::stacked(&rules)?
                .shuffled(&mut rng)
                .with_polling(poll, 40);
            let report = bot.play(&view).await?;
            match matchmaker.release(&player).await {
                // the opponent may have released both of us already
                Ok(()) | Err(GameError::UnknownIdentity(_)) => {}
                Err(e) => return Err(e.into()),
            }
            Ok::<_, anyhow::Error>((player, report))
        });
    }

    let mut results = Vec::with_capacity(games * 2);
    while let Some(joined) = tasks.join_next().await {
        results.push(joined??);
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}
