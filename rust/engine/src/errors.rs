use thiserror::Error;

use crate::cards::Card;
use crate::player::PlayerStatus;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Hand evaluation needs 5 to 7 cards, got {count}")]
    InvalidHandSize { count: usize },
    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("Illegal action: {0}")]
    IllegalAction(#[from] IllegalAction),
    #[error("Need at least 2 players with chips, found {available}")]
    NotEnoughPlayers { available: usize },
    #[error("Invalid blinds: small {small}, big {big}")]
    InvalidBlinds { small: u32, big: u32 },
    #[error("Seat {seat} does not exist")]
    InvalidSeat { seat: usize },
    #[error("Hand already in progress")]
    HandInProgress,
    #[error("At most {max} seats per table, got {seats}")]
    TooManySeats { seats: usize, max: usize },
    #[error("Deck has {remaining} cards but the hand needs {needed}")]
    NotEnoughCards { needed: usize, remaining: usize },
    #[error("Chips at the table exceed {max}")]
    ChipOverflow { max: u32 },
}

/// Reason an action was rejected. The hand state is never modified when one
/// of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IllegalAction {
    #[error("hand already complete")]
    HandComplete,
    #[error("seat {seat} does not exist")]
    UnknownSeat { seat: usize },
    #[error("it's not seat {actual}'s turn (expected seat {expected})")]
    NotYourTurn { expected: usize, actual: usize },
    #[error("seat {seat} is {status} and cannot act")]
    PlayerNotActive { seat: usize, status: PlayerStatus },
    #[error("cannot check facing {to_call} to call")]
    CannotCheck { to_call: u32 },
    #[error("raise to {to} must exceed the current bet of {current}")]
    RaiseTooSmall { to: u32, current: u32 },
    #[error("raise to {to} needs {needed} chips but only {stack} remain")]
    InsufficientChips { to: u32, needed: u32, stack: u32 },
}
