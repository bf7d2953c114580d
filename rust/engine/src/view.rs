//! Per-viewer projection of a hand. Hole cards are hidden from everyone but
//! their owner until showdown, and the deck order is never exposed.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::{HandOutcome, HandState, Street};
use crate::player::PlayerStatus;
use crate::rules::ActionChoices;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPlayer {
    pub seat: usize,
    pub name: String,
    pub stack: u32,
    pub street_bet: u32,
    pub total_contributed: u32,
    pub status: PlayerStatus,
    /// `None` when the viewer is not allowed to see them
    pub hole_cards: Option<Vec<Card>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHandState {
    pub viewer: Option<usize>,
    pub players: Vec<PublicPlayer>,
    pub dealer: usize,
    pub small_blind_seat: usize,
    pub big_blind_seat: usize,
    pub board: Vec<Card>,
    pub pot: u32,
    pub street: Street,
    pub acting: Option<usize>,
    pub current_bet: u32,
    /// Present only when the viewer is the seat due to act
    pub legal_actions: Option<ActionChoices>,
    pub deck_remaining: usize,
    pub outcome: Option<HandOutcome>,
}

impl HandState {
    /// What `viewer` may see of this hand. `None` is a spectator.
    pub fn public_view(&self, viewer: Option<usize>) -> PublicHandState {
        let revealed = self.street() == Street::Showdown;
        let players = self
            .players()
            .iter()
            .enumerate()
            .map(|(seat, p)| {
                let visible = viewer == Some(seat) || (revealed && p.in_hand());
                PublicPlayer {
                    seat,
                    name: p.name().to_string(),
                    stack: p.stack(),
                    street_bet: p.street_bet(),
                    total_contributed: p.total_contributed(),
                    status: p.status(),
                    hole_cards: (visible && !p.hole_cards().is_empty())
                        .then(|| p.hole_cards().to_vec()),
                }
            })
            .collect();

        let legal_actions = match (viewer, self.acting()) {
            (Some(v), Some(a)) if v == a => self.legal_actions(),
            _ => None,
        };

        PublicHandState {
            viewer,
            players,
            dealer: self.dealer(),
            small_blind_seat: self.small_blind_seat(),
            big_blind_seat: self.big_blind_seat(),
            board: self.board().to_vec(),
            pot: self.pot(),
            street: self.street(),
            acting: self.acting(),
            current_bet: self.current_bet(),
            legal_actions,
            deck_remaining: self.deck_remaining(),
            outcome: self.outcome().cloned(),
        }
    }
}
