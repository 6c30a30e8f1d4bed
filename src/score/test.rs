use super::*;

macro_rules! static_assert {
    ($cond:expr) => {
        const _: () = [()][!$cond as usize];
    };
}

static_assert!(points(0) == 0);
static_assert!(points(6) == 0);
static_assert!(points(7) == 1);
static_assert!(points(13) == 7);

const _: () = {
    let mut tricks = 0;
    while tricks <= 13 {
        let odd = if tricks > BOOK { tricks - BOOK } else { 0 };
        assert!(points(tricks) == odd);
        assert!(points(tricks) + points(13 - tricks) <= 7);
        tricks += 1;
    }
};

fn table() -> Table {
    Table::new(["A", "B", "C", "D"]).expect("four distinct players")
}

#[test]
fn test_record_trick_counts_per_player() -> Result<(), Error> {
    let mut board = Scoreboard::new(table());
    assert_eq!(board.record_trick("C")?, Seat::South);
    board.record_trick("C")?;
    board.record_trick("B")?;
    assert_eq!(board.tricks_won("A"), Some(0));
    assert_eq!(board.tricks_won("B"), Some(1));
    assert_eq!(board.tricks_won("C"), Some(2));
    assert_eq!(board.tricks_won("Z"), None);
    assert_eq!(board.total(), 3);
    Ok(())
}

#[test]
fn test_unregistered_winner_is_rejected() {
    let mut board = Scoreboard::new(table());
    assert_eq!(
        board.record_trick("Z"),
        Err(Error::UnregisteredWinner("Z".to_owned()))
    );
    assert_eq!(board.total(), 0);
}

#[test]
fn test_six_against_seven() {
    let mut board = Scoreboard::new(table());
    (0..6).for_each(|_| board.record_seat(Seat::North));
    (0..4).for_each(|_| board.record_seat(Seat::East));
    (0..3).for_each(|_| board.record_seat(Seat::West));

    assert_eq!(board.partnership_tricks(), Partnerships::new(6, 7));
    assert_eq!(
        board.partnership_points(),
        Partnerships {
            north_south: 0,
            east_west: 1
        }
    );
}

#[test]
fn test_partners_pool_their_tricks() {
    let mut board = Scoreboard::new(table());
    (0..5).for_each(|_| board.record_seat(Seat::North));
    (0..5).for_each(|_| board.record_seat(Seat::South));
    (0..3).for_each(|_| board.record_seat(Seat::West));

    assert_eq!(board.partnership_tricks(), Partnerships::new(10, 3));
    assert_eq!(board.partnership_points(), Partnerships::new(4, 0));
}

#[test]
fn test_counters_go_past_a_byte() -> Result<(), Error> {
    let mut board = Scoreboard::new(table());
    for _ in 0..256 {
        board.record_trick("A")?;
    }
    assert_eq!(board.tricks_won("A"), Some(256));
    assert_eq!(board.total(), 256);

    (0..200).for_each(|_| board.record_seat(Seat::South));
    (0..7).for_each(|_| board.record_seat(Seat::East));
    assert_eq!(board.partnership_tricks(), Partnerships::new(456, 7));
    assert_eq!(board.partnership_points(), Partnerships::new(u8::MAX - BOOK, 1));
    Ok(())
}
