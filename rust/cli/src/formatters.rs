//! Card, board, action and result formatters for terminal display.
//!
//! Suits are drawn with Unicode symbols where the terminal supports them and
//! fall back to the ASCII letters `c d h s` otherwise.
//!
//! ## Example
//!
//! ```rust
//! use cardroom_engine::cards::{Card, Rank, Suit};
//! use cardroom_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use cardroom_engine::cards::{Card, Rank, Suit};
use cardroom_engine::hand::HandStrength;
use cardroom_engine::player::PlayerAction;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        suit.letter().to_string()
    }
}

/// Single character: 2-9, T, J, Q, K, A.
pub fn format_rank(rank: &Rank) -> String {
    rank.label().to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Formatted board string like "[A♠ K♥ Q♦]" or "[]" if empty
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Format a PlayerAction as a human-readable string.
///
/// ```rust
/// use cardroom_engine::player::PlayerAction;
/// # use cardroom_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold), "fold");
/// assert_eq!(format_action(&PlayerAction::Raise(100)), "raise to 100");
/// assert_eq!(format_action(&PlayerAction::AllIn), "all-in");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    action.to_string()
}

/// Category name followed by the tie-break values, e.g. "Four of a Kind (A K)".
pub fn format_strength(strength: &HandStrength) -> String {
    let kickers: Vec<String> = strength
        .kickers
        .iter()
        .filter_map(|&v| Rank::from_u8(v))
        .map(|r| format_rank(&r))
        .collect();
    format!("{} ({})", strength.category, kickers.join(" "))
}
