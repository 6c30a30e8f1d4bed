use super::*;
use crate::error::ErrorKind;
use crate::test::{ladder_hands, stacked_deck};
use rand::rngs::StdRng;
use rand::SeedableRng as _;

fn new_match() -> Match {
    Match::new(["A", "B", "C", "D"]).expect("four distinct players")
}

/// Play a game with each player choosing its lowest legal card
fn play_out(round: &mut Round) -> Result<(), Error> {
    while !round.is_complete() {
        let player = round.expected_player().to_owned();
        let card = round
            .legal_cards(&player)?
            .iter()
            .next()
            .expect("a legal card");
        round.play(&player, card)?;
    }
    Ok(())
}

#[test]
fn test_setup_errors() {
    assert_eq!(
        Match::new(["A", "B", "C"]).map(|m| m.total_score()),
        Err(Error::InvalidPlayerCount(3))
    );
    let error = Match::new(["A", "B", "A", "D"]).expect_err("duplicate name");
    assert_eq!(error, Error::DuplicatePlayerName("A".to_owned()));
    assert_eq!(error.kind(), ErrorKind::Setup);
}

#[test]
fn test_start_game() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = new_match();
    let first = game.start_game(None, &mut rng)?;
    let second = game.start_game(Some(Strain::Notrump), &mut rng)?;

    assert_eq!(first.index(), 0);
    assert_eq!(second.index(), 1);
    assert_eq!(
        game.game(first)?.trump(),
        Strain::from(game.game(first)?.deal().trump_suit())
    );
    assert_eq!(game.game(second)?.trump(), Strain::Notrump);
    assert_eq!(game.games().map(|(id, _)| id).collect::<Vec<_>>(), [first, second]);
    assert_eq!(game.total_score(), Partnerships::new(0, 0));
    Ok(())
}

#[test]
fn test_foreign_game_is_not_tracked() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut ours = new_match();
    let mut theirs = new_match();
    ours.start_game(None, &mut rng)?;
    let foreign = theirs.start_game(None, &mut rng)?;

    assert_eq!(foreign.index(), 0);
    assert!(matches!(ours.game(foreign), Err(Error::GameNotTracked)));
    assert!(matches!(ours.game_mut(foreign), Err(Error::GameNotTracked)));
    assert_eq!(ours.record_game(foreign), Err(Error::GameNotTracked));
    assert_eq!(ours.is_recorded(foreign), Err(Error::GameNotTracked));
    Ok(())
}

#[test]
fn test_record_game() -> Result<(), Error> {
    let mut game = new_match();
    let id = game.start_game_with_deck(stacked_deck(ladder_hands()), None)?;

    assert_eq!(
        game.record_game(id),
        Err(Error::RoundNotComplete { tricks_played: 0 })
    );
    assert_eq!(game.total_score(), Partnerships::new(0, 0));

    play_out(game.game_mut(id)?)?;
    assert!(!game.is_recorded(id)?);
    assert_eq!(game.record_game(id)?, Partnerships::new(7, 0));
    assert!(game.is_recorded(id)?);
    assert_eq!(game.total_score(), Partnerships::new(7, 0));

    assert_eq!(game.record_game(id), Err(Error::GameAlreadyRecorded));
    assert_eq!(game.total_score(), Partnerships::new(7, 0));
    Ok(())
}

#[test]
fn test_totals_accumulate() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut game = new_match();
    let mut expected = Partnerships::<u32>::default();

    for _ in 0..5 {
        let id = game.start_game(None, &mut rng)?;
        play_out(game.game_mut(id)?)?;
        expected += game.record_game(id)?.map(u32::from);
    }

    let total = game.total_score();
    assert_eq!(total, expected);
    assert!(total.north_south + total.east_west <= 5 * 7);
    assert!(game.games().all(|(_, round)| round.is_complete()));
    Ok(())
}

#[test]
fn test_total_score_is_a_snapshot() -> Result<(), Error> {
    let mut game = new_match();
    let mut snapshot = game.total_score();
    snapshot.north_south += 100;
    assert_eq!(game.total_score(), Partnerships::new(0, 0));

    let id = game.start_game_with_deck(stacked_deck(ladder_hands()), Some(Strain::Notrump))?;
    play_out(game.game_mut(id)?)?;
    game.record_game(id)?;
    assert_eq!(game.total_score(), Partnerships::new(7, 0));
    Ok(())
}

#[test]
fn test_game_id_display() -> Result<(), Error> {
    let mut game = new_match();
    let id = game.start_game_with_deck(Deck::standard_52(), None)?;
    assert!(id.to_string().starts_with("game 0 of match "));
    Ok(())
}
