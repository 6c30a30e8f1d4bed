use super::*;

const _: () = {
    let mut i = 1;
    while i < Rank::ASC.len() {
        assert!(Rank::ASC[i].beats(Rank::ASC[i - 1]));
        assert!(Rank::ASC[i].strength() == Rank::ASC[i - 1].strength() + 1);
        i += 1;
    }
};

const _: () = {
    let mut s = 0;
    while s < 4 {
        let mut r = 0;
        while r < 13 {
            let card = Card::new(Suit::ASC[s], Rank::ASC[r]);
            assert!(card.suit() as u8 == Suit::ASC[s] as u8);
            assert!(card.rank() as u8 == Rank::ASC[r] as u8);
            r += 1;
        }
        s += 1;
    }
};

#[test]
fn test_rank_order_is_total() {
    assert!(Rank::Ace > Rank::King);
    assert!(Rank::Ten > Rank::Nine);
    assert!(Rank::Two < Rank::Three);
    assert_eq!(Rank::ASC.iter().max(), Some(&Rank::Ace));
    assert_eq!(Rank::ASC.iter().min(), Some(&Rank::Two));
}

#[test]
fn test_suit_orders() {
    let mut asc = Suit::DESC;
    asc.reverse();
    assert_eq!(asc, Suit::ASC);
    assert!(Suit::ASC.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_rank_from_value() {
    assert_eq!(Rank::from_value(2), Some(Rank::Two));
    assert_eq!(Rank::from_value(10), Some(Rank::Ten));
    assert_eq!(Rank::from_value(14), Some(Rank::Ace));
    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);
}

#[test]
fn test_cards_equal_iff_rank_and_suit_match() {
    let ace = Card::new(Suit::Spades, Rank::Ace);
    assert_eq!(ace, Card::new(Suit::Spades, Rank::Ace));
    assert_ne!(ace, Card::new(Suit::Hearts, Rank::Ace));
    assert_ne!(ace, Card::new(Suit::Spades, Rank::King));
}

#[test]
fn test_card_display() {
    assert_eq!(Card::new(Suit::Clubs, Rank::Ten).to_string(), "TC");
    assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "AS");
    assert_eq!(Card::new(Suit::Diamonds, Rank::Two).to_string(), "2D");
}

#[test]
fn test_card_parser() {
    let king_of_clubs = Card::new(Suit::Clubs, Rank::King);
    assert_eq!("KC".parse::<Card>(), Ok(king_of_clubs));
    assert_eq!("kc".parse::<Card>(), Ok(king_of_clubs));
    assert_eq!("K♣".parse::<Card>(), Ok(king_of_clubs));
    assert_eq!(" KC ".parse::<Card>(), Ok(king_of_clubs));
    assert_eq!("10H".parse::<Card>(), Ok(Card::new(Suit::Hearts, Rank::Ten)));
    assert_eq!("T♥".parse::<Card>(), Ok(Card::new(Suit::Hearts, Rank::Ten)));

    assert!("1H".parse::<Card>().is_err());
    assert!("KX".parse::<Card>().is_err());
    assert!("KCC".parse::<Card>().is_err());
    assert!("".parse::<Card>().is_err());
}

#[test]
fn test_card_text_round_trip() {
    Suit::ASC.into_iter().for_each(|suit| {
        Rank::ASC.into_iter().for_each(|rank| {
            let card = Card::new(suit, rank);
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        });
    });
}

#[test]
fn test_strain_suit_conversions() {
    assert_eq!(Strain::from(Suit::Hearts), Strain::Hearts);
    assert_eq!(Suit::try_from(Strain::Spades), Ok(Suit::Spades));
    assert_eq!(Suit::try_from(Strain::Notrump), Err(SuitFromNotrumpError));
    assert!(Strain::Notrump.is_notrump());
    assert!(Strain::ALL[..4].iter().all(|strain| strain.is_suit()));
}

#[test]
fn test_card_serde() -> Result<(), serde_json::Error> {
    let card = Card::new(Suit::Diamonds, Rank::Queen);
    assert_eq!(serde_json::to_string(&card)?, "\"QD\"");
    assert_eq!(serde_json::from_str::<Card>("\"QD\"")?, card);
    assert!(serde_json::from_str::<Card>("\"ZZ\"").is_err());
    Ok(())
}
