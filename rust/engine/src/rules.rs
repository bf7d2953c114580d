use serde::{Deserialize, Serialize};

use crate::errors::{GameError, IllegalAction};
use crate::player::{Player, PlayerAction as A};

/// Forced bets posted before any cards are seen.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Blinds {
    pub fn new(small: u32, big: u32) -> Result<Self, GameError> {
        if big == 0 || small > big {
            return Err(GameError::InvalidBlinds { small, big });
        }
        Ok(Self { small, big })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips moved into the pot; less than the amount owed when the caller is short
    Call(u32),
    /// New street bet total and the chips it takes from the stack
    Raise { to: u32, added: u32 },
}

/// Validates a player action against the player's stack and the highest bet
/// on the current street.
///
/// Converts a [`crate::player::PlayerAction`] into a [`ValidatedAction`]
/// describing the chips that will move. Nothing is clamped: a raise the
/// player cannot cover is rejected rather than shrunk to fit.
///
/// # Errors
///
/// - [`IllegalAction::CannotCheck`] - checking while chips are owed
/// - [`IllegalAction::RaiseTooSmall`] - raise target not above the current bet
/// - [`IllegalAction::InsufficientChips`] - raise target beyond the stack
///
/// # Examples
///
/// ```
/// use cardroom_engine::player::{Player, PlayerAction};
/// use cardroom_engine::rules::{validate_action, ValidatedAction};
///
/// let player = Player::new("alice", 1000);
/// // Facing a bet of 50 with nothing in yet
/// let result = validate_action(&player, 50, PlayerAction::Call);
/// assert_eq!(result, Ok(ValidatedAction::Call(50)));
///
/// let result = validate_action(&player, 50, PlayerAction::Raise(150));
/// assert_eq!(result, Ok(ValidatedAction::Raise { to: 150, added: 150 }));
/// ```
///
/// ```
/// use cardroom_engine::errors::IllegalAction;
/// use cardroom_engine::player::{Player, PlayerAction};
/// use cardroom_engine::rules::validate_action;
///
/// let player = Player::new("bob", 100);
/// let result = validate_action(&player, 50, PlayerAction::Check);
/// assert!(matches!(result, Err(IllegalAction::CannotCheck { to_call: 50 })));
///
/// let result = validate_action(&player, 50, PlayerAction::Raise(500));
/// assert!(matches!(result, Err(IllegalAction::InsufficientChips { .. })));
/// ```
pub fn validate_action(
    player: &Player,
    max_bet: u32,
    action: A,
) -> Result<ValidatedAction, IllegalAction> {
    let to_call = max_bet.saturating_sub(player.street_bet());
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(IllegalAction::CannotCheck { to_call })
            }
        }
        A::Call => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Ok(ValidatedAction::Call(to_call.min(player.stack())))
            }
        }
        A::Raise(to) => validate_raise(player, max_bet, to),
        A::AllIn => {
            let to = player.street_bet() + player.stack();
            if to > max_bet {
                Ok(ValidatedAction::Raise {
                    to,
                    added: player.stack(),
                })
            } else if player.stack() == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Ok(ValidatedAction::Call(player.stack()))
            }
        }
    }
}

fn validate_raise(
    player: &Player,
    max_bet: u32,
    to: u32,
) -> Result<ValidatedAction, IllegalAction> {
    if to <= max_bet {
        return Err(IllegalAction::RaiseTooSmall {
            to,
            current: max_bet,
        });
    }
    let needed = to - player.street_bet();
    if needed > player.stack() {
        return Err(IllegalAction::InsufficientChips {
            to,
            needed,
            stack: player.stack(),
        });
    }
    Ok(ValidatedAction::Raise { to, added: needed })
}

/// Menu of legal actions for the seat that is due to act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionChoices {
    pub can_check: bool,
    /// Chips a call would move (already capped at the stack)
    pub call_amount: Option<u32>,
    /// Smallest legal raise target, when the stack can exceed the current bet
    pub min_raise_to: Option<u32>,
    /// Largest raise target (all-in)
    pub max_raise_to: Option<u32>,
}

pub fn legal_actions(player: &Player, max_bet: u32) -> ActionChoices {
    let to_call = max_bet.saturating_sub(player.street_bet());
    let ceiling = player.street_bet() + player.stack();
    let can_raise = ceiling > max_bet;
    ActionChoices {
        can_check: to_call == 0,
        call_amount: (to_call > 0).then(|| to_call.min(player.stack())),
        min_raise_to: can_raise.then_some(max_bet + 1),
        max_raise_to: can_raise.then_some(ceiling),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with_bet(stack: u32, bet: u32) -> Player {
        let mut p = Player::new("p", stack + bet);
        p.commit(bet);
        p
    }

    #[test]
    fn blinds_must_be_ordered_and_positive() {
        assert!(Blinds::new(5, 10).is_ok());
        assert!(Blinds::new(10, 10).is_ok());
        assert_eq!(
            Blinds::new(20, 10),
            Err(GameError::InvalidBlinds { small: 20, big: 10 })
        );
        assert!(Blinds::new(0, 0).is_err());
    }

    #[test]
    fn short_call_is_capped_at_stack() {
        let p = player_with_bet(30, 10);
        assert_eq!(
            validate_action(&p, 100, A::Call),
            Ok(ValidatedAction::Call(30))
        );
    }

    #[test]
    fn call_with_nothing_owed_is_a_check() {
        let p = player_with_bet(90, 10);
        assert_eq!(validate_action(&p, 10, A::Call), Ok(ValidatedAction::Check));
    }

    #[test]
    fn raise_counts_chips_already_in() {
        let p = player_with_bet(90, 10);
        assert_eq!(
            validate_action(&p, 10, A::Raise(100)),
            Ok(ValidatedAction::Raise { to: 100, added: 90 })
        );
        assert_eq!(
            validate_action(&p, 10, A::Raise(101)),
            Err(IllegalAction::InsufficientChips {
                to: 101,
                needed: 91,
                stack: 90
            })
        );
    }

    #[test]
    fn raise_must_exceed_current_bet() {
        let p = player_with_bet(100, 0);
        assert_eq!(
            validate_action(&p, 40, A::Raise(40)),
            Err(IllegalAction::RaiseTooSmall { to: 40, current: 40 })
        );
    }

    #[test]
    fn all_in_below_current_bet_is_a_short_call() {
        let p = player_with_bet(25, 5);
        assert_eq!(
            validate_action(&p, 50, A::AllIn),
            Ok(ValidatedAction::Call(25))
        );
        assert_eq!(
            validate_action(&p, 10, A::AllIn),
            Ok(ValidatedAction::Raise { to: 30, added: 25 })
        );
    }

    #[test]
    fn legal_actions_describe_raise_window() {
        let p = player_with_bet(95, 5);
        let choices = legal_actions(&p, 10);
        assert!(!choices.can_check);
        assert_eq!(choices.call_amount, Some(5));
        assert_eq!(choices.min_raise_to, Some(11));
        assert_eq!(choices.max_raise_to, Some(100));

        let short = player_with_bet(3, 5);
        let choices = legal_actions(&short, 10);
        assert_eq!(choices.call_amount, Some(3));
        assert_eq!(choices.min_raise_to, None);
    }
}
