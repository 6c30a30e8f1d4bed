use rand::seq::IteratorRandom as _;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use whist::{Error, Match, Partnerships, Seat};

fn play_match(deals: usize) -> Result<Partnerships<u32>, Error> {
    let mut rng = rand::thread_rng();
    let mut game = Match::new(["Alice", "Bob", "Carol", "Dave"])?;

    for _ in 0..deals {
        let id = game.start_game(None, &mut rng)?;
        let round = game.game_mut(id)?;
        println!("{} in {}", round.deal().display(Seat::North), round.trump());

        while !round.is_complete() {
            let player = round.expected_player().to_owned();
            let Some(card) = round.legal_cards(&player)?.iter().choose(&mut rng) else {
                break;
            };
            round.play(&player, card)?;
        }

        let points = game.record_game(id)?;
        let total = game.total_score();
        println!(
            "NS +{} EW +{} (total {}-{})",
            points.north_south, points.east_west, total.north_south, total.east_west
        );
    }

    Ok(game.total_score())
}

#[doc = include_str!("README.md")]
fn main() -> Result<ExitCode, Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match std::env::args().nth(1) {
        Some(string) => {
            if let Ok(n) = string.parse::<usize>() {
                play_match(n)
            } else {
                eprintln!("{}", include_str!("README.md"));
                return Ok(ExitCode::FAILURE);
            }
        }
        None => play_match(1),
    }?;
    Ok(ExitCode::SUCCESS)
}
