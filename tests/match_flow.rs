use rand::rngs::StdRng;
use rand::seq::IteratorRandom as _;
use rand::SeedableRng as _;
use std::collections::{HashMap, HashSet};
use whist::{
    Card, Deck, Error, Match, Partnerships, Phase, Round, Scoreboard, Seat, SmallSet as _, Strain,
    Table, TrumpPolicy,
};

fn players() -> [&'static str; 4] {
    ["north", "east", "south", "west"]
}

fn play_randomly(round: &mut Round, rng: &mut StdRng) -> Result<(), Error> {
    while !round.is_complete() {
        let player = round.expected_player().to_owned();
        let card = round
            .legal_cards(&player)?
            .iter()
            .choose(rng)
            .expect("a legal card");
        round.play(&player, card)?;
    }
    Ok(())
}

#[test]
fn seeded_match_is_reproducible() -> Result<(), Error> {
    let run = || -> Result<Partnerships<u32>, Error> {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut game = Match::new(players())?;
        for _ in 0..3 {
            let id = game.start_game(None, &mut rng)?;
            play_randomly(game.game_mut(id)?, &mut rng)?;
            game.record_game(id)?;
        }
        Ok(game.total_score())
    };
    assert_eq!(run()?, run()?);
    Ok(())
}

#[test]
fn every_card_is_played_once() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(17);
    let mut round = Round::new(Table::new(players())?, TrumpPolicy::LastCardDealt, &mut rng)?;
    let mut seen = HashSet::new();

    while !round.is_complete() {
        let player = round.expected_player().to_owned();
        let card = round
            .legal_cards(&player)?
            .iter()
            .choose(&mut rng)
            .expect("a legal card");
        round.play(&player, card)?;
        assert!(seen.insert(card));
    }

    assert_eq!(seen.len(), 52);
    assert!(Seat::ALL.iter().all(|&seat| round.deal()[seat].is_empty()));
    assert_eq!(round.state().phase, Phase::Complete);

    let tricks = round.deal().scoreboard().partnership_tricks();
    assert_eq!(tricks.north_south + tricks.east_west, 13);
    Ok(())
}

#[test]
fn whole_tricks_from_a_sorted_deck() -> Result<(), Error> {
    // Dealing a sorted deck gives each seat every fourth card, so north
    // holds 2, 6, 10 and A of clubs and trump is spades.
    let mut game = Match::new(players())?;
    let id = game.start_game_with_deck(Deck::standard_52(), Some(Strain::Notrump))?;
    let round = game.game_mut(id)?;
    assert_eq!(round.trump(), Strain::Notrump);
    assert_eq!(round.deal().trump_card(), "AS".parse::<Card>().expect("card"));

    let trick: HashMap<String, Card> = [
        ("north", "2C"),
        ("east", "3C"),
        ("south", "4C"),
        ("west", "5C"),
    ]
    .into_iter()
    .map(|(player, card)| (player.to_owned(), card.parse().expect("card")))
    .collect();
    assert_eq!(round.play_trick(&trick)?, "west");
    assert_eq!(round.expected_player(), "west");

    assert!(matches!(
        game.record_game(id),
        Err(Error::RoundNotComplete { tricks_played: 1 })
    ));
    Ok(())
}

#[test]
fn scoreboard_counts_odd_tricks() -> Result<(), Error> {
    let mut scoreboard = Scoreboard::new(Table::new(players())?);
    for _ in 0..6 {
        scoreboard.record_trick("north")?;
    }
    for _ in 0..7 {
        scoreboard.record_trick("east")?;
    }
    assert_eq!(scoreboard.partnership_points(), Partnerships::new(0, 1));
    assert_eq!(
        scoreboard.record_trick("nobody"),
        Err(Error::UnregisteredWinner("nobody".to_owned()))
    );
    Ok(())
}

#[test]
fn errors_are_classified() {
    assert!(Error::OutOfTurn {
        player: "east".to_owned(),
        expected: "north".to_owned(),
    }
    .kind()
    .is_recoverable());
    assert!(!Error::GameNotTracked.kind().is_recoverable());
    assert!(Error::NoTrickWinner.is_fatal());
    assert!(!Error::RoundAlreadyComplete.is_fatal());
}
