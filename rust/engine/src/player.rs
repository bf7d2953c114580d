use std::fmt;

use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Where a player stands in the current hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Still in the hand and able to bet
    Active,
    /// Out of the hand; never acts again and is excluded from showdown
    Folded,
    /// No chips left to wager; still eligible at showdown
    AllIn,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            PlayerStatus::Active => "active",
            PlayerStatus::Folded => "folded",
            PlayerStatus::AllIn => "all-in",
        };
        f.write_str(repr)
    }
}

/// Represents a player action during a betting round.
/// Actions can involve betting amounts or no-cost moves like check/fold.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if nothing is owed)
    Check,
    /// Call the current bet, or as much of it as the stack allows
    Call,
    /// Raise this street's bet to the given total
    Raise(u32),
    /// Commit the whole remaining stack
    AllIn,
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Fold => f.write_str("fold"),
            PlayerAction::Check => f.write_str("check"),
            PlayerAction::Call => f.write_str("call"),
            PlayerAction::Raise(to) => write!(f, "raise to {}", to),
            PlayerAction::AllIn => f.write_str("all-in"),
        }
    }
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// A seat as supplied by the room layer before a hand starts.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatedPlayer {
    pub name: String,
    pub stack: u32,
}

impl SeatedPlayer {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
        }
    }
}

/// Represents a poker player with their chip stack and hole cards, plus the
/// betting bookkeeping for the hand in progress.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    /// Chips behind (not yet committed to the pot)
    stack: u32,
    /// Hole cards (0 or 2)
    hole: Vec<Card>,
    /// Chips committed on the current street
    street_bet: u32,
    /// Chips committed over the whole hand
    total_contributed: u32,
    status: PlayerStatus,
    /// Whether the player has acted since the street began or the last raise
    acted: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
            hole: Vec::with_capacity(2),
            street_bet: 0,
            total_contributed: 0,
            status: PlayerStatus::Active,
            acted: false,
        }
    }

    /// A seat with no chips; it is dealt out of the hand.
    pub(crate) fn sitting_out(name: impl Into<String>) -> Self {
        Self {
            status: PlayerStatus::Folded,
            ..Self::new(name, 0)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }
    pub fn street_bet(&self) -> u32 {
        self.street_bet
    }
    pub fn total_contributed(&self) -> u32 {
        self.total_contributed
    }
    pub fn status(&self) -> PlayerStatus {
        self.status
    }
    pub fn has_acted(&self) -> bool {
        self.acted
    }

    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Not folded: active or all-in.
    pub fn in_hand(&self) -> bool {
        self.status != PlayerStatus::Folded
    }

    pub(crate) fn give_card(&mut self, c: Card) {
        self.hole.push(c);
    }

    /// Moves up to `amount` from the stack into this street's bet and returns
    /// the chips actually moved. Going to zero marks the player all-in.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let amount = amount.min(self.stack);
        self.stack -= amount;
        self.street_bet += amount;
        self.total_contributed += amount;
        if self.stack == 0 && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }
        amount
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    pub(crate) fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
        self.acted = true;
    }

    pub(crate) fn mark_acted(&mut self) {
        self.acted = true;
    }

    pub(crate) fn reopen(&mut self) {
        self.acted = false;
    }

    pub(crate) fn reset_street(&mut self) {
        self.street_bet = 0;
        self.acted = false;
    }
}
