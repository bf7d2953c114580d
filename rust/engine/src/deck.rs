use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck consumed from the end: [`Deck::draw`] pops the top card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Fisher-Yates shuffle of all 52 cards using the supplied RNG.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn new_random() -> Self {
        Self::shuffled(&mut rand::rng())
    }

    /// Full deck whose first draws are `top`, in order. The rest of the deck
    /// follows in canonical order.
    pub fn stacked(top: &[Card]) -> Result<Self, GameError> {
        for (i, c) in top.iter().enumerate() {
            if top[..i].contains(c) {
                return Err(GameError::DuplicateCard(*c));
            }
        }
        let mut cards: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| !top.contains(c))
            .collect();
        cards.extend(top.iter().rev().copied());
        Ok(Self { cards })
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::EmptyDeck);
        }
        (0..n).map(|_| self.draw()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn stacked_deck_draws_top_cards_first() {
        let top = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Clubs),
        ];
        let mut deck = Deck::stacked(&top).unwrap();
        assert_eq!(deck.remaining(), 52);
        assert_eq!(deck.draw().unwrap(), top[0]);
        assert_eq!(deck.draw().unwrap(), top[1]);
        assert!(!deck.contains(&top[0]));
    }

    #[test]
    fn stacked_deck_rejects_duplicates() {
        let c = Card::new(Rank::King, Suit::Hearts);
        assert_eq!(Deck::stacked(&[c, c]), Err(GameError::DuplicateCard(c)));
    }

    #[test]
    fn draw_n_fails_without_partial_draw() {
        let mut deck = Deck::new_with_seed(3);
        deck.draw_n(50).unwrap();
        assert_eq!(deck.draw_n(3), Err(GameError::EmptyDeck));
        assert_eq!(deck.remaining(), 2);
    }
}
