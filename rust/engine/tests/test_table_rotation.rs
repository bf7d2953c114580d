use cardroom_engine::deck::Deck;
use cardroom_engine::errors::GameError;
use cardroom_engine::game::Table;
use cardroom_engine::player::{PlayerAction as A, SeatedPlayer};
use cardroom_engine::rules::Blinds;

mod common;
use common::{blinds, seats};

fn play_out(table: &mut Table, action: A) {
    while let Some(seat) = table.snapshot().and_then(|h| h.acting()) {
        table
            .apply_action(seat, action)
            .or_else(|_| table.apply_action(seat, A::Call))
            .unwrap();
    }
}

#[test]
fn button_moves_one_seat_per_hand() {
    let mut table = Table::new(seats(&[1000, 1000, 1000]), blinds());
    let mut buttons = Vec::new();
    for seed in 0..4 {
        let hand = table.start_hand(Deck::new_with_seed(seed)).unwrap();
        buttons.push(hand.dealer());
        play_out(&mut table, A::Fold);
    }
    assert_eq!(buttons, vec![0, 1, 2, 0]);
}

#[test]
fn chips_are_conserved_across_hands() {
    let mut table = Table::new(seats(&[300, 300, 300, 300]), blinds());
    for seed in 0..20 {
        if table.funded_seats() < 2 {
            break;
        }
        table.start_hand(Deck::new_with_seed(seed)).unwrap();
        play_out(&mut table, A::AllIn);
        let total: u32 = table.seats().iter().map(|s| s.stack).sum();
        assert_eq!(total, 1200);
    }
}

#[test]
fn busted_seats_lose_the_button() {
    let mut table = Table::new(seats(&[1000, 1000, 1000]), blinds());
    table.start_hand(Deck::new_with_seed(1)).unwrap();
    play_out(&mut table, A::Fold);

    let mut table = Table::new(
        vec![
            table.seats()[0].clone(),
            SeatedPlayer::new("broke", 0),
            table.seats()[2].clone(),
        ],
        blinds(),
    );
    let first = table.start_hand(Deck::new_with_seed(2)).unwrap();
    assert_eq!(first.dealer(), 0);
    play_out(&mut table, A::Fold);
    let second = table.start_hand(Deck::new_with_seed(3)).unwrap();
    assert_eq!(second.dealer(), 2);
    assert!(second.players()[1].hole_cards().is_empty());
}

#[test]
fn table_stops_when_one_seat_has_chips() {
    let mut table = Table::new(seats(&[1000, 0]), blinds());
    assert_eq!(
        table.start_hand(Deck::new_with_seed(1)).unwrap_err(),
        GameError::NotEnoughPlayers { available: 1 }
    );
}

#[test]
fn blinds_change_between_hands() {
    let mut table = Table::new(seats(&[1000, 1000]), blinds());
    table.start_hand(Deck::new_with_seed(1)).unwrap();
    play_out(&mut table, A::Fold);
    table.set_blinds(Blinds::new(25, 50).unwrap()).unwrap();
    let hand = table.start_hand(Deck::new_with_seed(2)).unwrap();
    assert_eq!(hand.pot(), 75);
    let view = table.view(Some(0)).unwrap();
    assert_eq!(view.current_bet, 50);
}

#[test]
fn oversized_table_never_deals() {
    let mut table = Table::new(seats(&[1000; 23]), blinds());
    let err = table.start_hand(Deck::new_with_seed(1)).unwrap_err();
    assert_eq!(err, GameError::TooManySeats { seats: 23, max: 10 });
    assert!(table.snapshot().is_none());
    assert_eq!(table.hands_played(), 0);
}
