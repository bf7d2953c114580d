use std::sync::Arc;

use tracing::info;

use crate::deck::Deck;
use crate::engine::HandState;
use crate::errors::{GameError, IllegalAction};
use crate::player::{PlayerAction, SeatedPlayer};
use crate::rules::Blinds;
use crate::view::PublicHandState;

/// Runs a sequence of hands over a fixed set of seats.
/// Manages button rotation and carries stacks from one hand into the next.
#[derive(Debug, Clone)]
pub struct Table {
    seats: Vec<SeatedPlayer>,
    blinds: Blinds,
    /// Button of the most recent hand
    dealer: Option<usize>,
    hand: Option<Arc<HandState>>,
    hands_played: u64,
}

impl Table {
    pub fn new(seats: Vec<SeatedPlayer>, blinds: Blinds) -> Self {
        Self {
            seats,
            blinds,
            dealer: None,
            hand: None,
            hands_played: 0,
        }
    }

    pub fn seats(&self) -> &[SeatedPlayer] {
        &self.seats
    }
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }
    pub fn dealer(&self) -> Option<usize> {
        self.dealer
    }
    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    /// Seats that can be dealt into the next hand.
    pub fn funded_seats(&self) -> usize {
        self.seats.iter().filter(|s| s.stack > 0).count()
    }

    pub fn hand_in_progress(&self) -> bool {
        self.hand.as_ref().is_some_and(|h| !h.is_complete())
    }

    /// Moves the button to the next seat with chips and deals a new hand.
    pub fn start_hand(&mut self, deck: Deck) -> Result<Arc<HandState>, GameError> {
        if self.hand_in_progress() {
            return Err(GameError::HandInProgress);
        }
        let dealer = self.next_dealer().ok_or(GameError::NotEnoughPlayers {
            available: self.funded_seats(),
        })?;
        let hand = Arc::new(HandState::start(&self.seats, dealer, self.blinds, deck)?);
        self.dealer = Some(dealer);
        self.hand = Some(Arc::clone(&hand));
        self.hands_played += 1;
        Ok(hand)
    }

    /// Applies an action to the live hand. Once the hand completes the final
    /// stacks are written back to the seats.
    pub fn apply_action(
        &mut self,
        seat: usize,
        action: PlayerAction,
    ) -> Result<Arc<HandState>, GameError> {
        let current = self
            .hand
            .as_ref()
            .ok_or(IllegalAction::HandComplete)?;
        let next = Arc::new(current.apply_action(seat, action)?);
        if next.is_complete() {
            self.seats = next.final_stacks();
            info!(
                hand = self.hands_played,
                funded = self.funded_seats(),
                "stacks carried to table"
            );
        }
        self.hand = Some(Arc::clone(&next));
        Ok(next)
    }

    /// Latest immutable state of the current (or last finished) hand.
    pub fn snapshot(&self) -> Option<Arc<HandState>> {
        self.hand.clone()
    }

    pub fn view(&self, viewer: Option<usize>) -> Option<PublicHandState> {
        self.hand.as_ref().map(|h| h.public_view(viewer))
    }

    pub fn set_blinds(&mut self, blinds: Blinds) -> Result<(), GameError> {
        if self.hand_in_progress() {
            return Err(GameError::HandInProgress);
        }
        self.blinds = blinds;
        Ok(())
    }

    fn next_dealer(&self) -> Option<usize> {
        if self.funded_seats() < 2 {
            return None;
        }
        let n = self.seats.len();
        let start = match self.dealer {
            Some(prev) => prev + 1,
            None => 0,
        };
        (0..n)
            .map(|k| (start + k) % n)
            .find(|&seat| self.seats[seat].stack > 0)
    }
}
