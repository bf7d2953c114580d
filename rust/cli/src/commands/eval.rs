//! Eval command: rank a set of 5 to 7 cards.

use crate::error::CliError;
use crate::formatters::{format_board, format_strength};
use cardroom_engine::cards::parse_cards;
use cardroom_engine::hand::best_of;
use std::io::Write;

/// Handle the eval command.
///
/// Prints the category with its tie-break ranks and the best five cards.
/// Card text is whitespace or comma separated, e.g. `"As Kd, 10h"`.
pub fn handle_eval_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let best = best_of(&cards).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    writeln!(out, "Hand: {}", format_strength(&best.strength))?;
    writeln!(out, "Category: {}", best.strength.category.value())?;
    writeln!(out, "Best five: {}", format_board(&best.cards))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(cards: &str) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_eval_command(cards, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_eval_quads_with_kicker() {
        let output = eval("As Ah Ad Ac Ks 2c 3d").unwrap();
        assert!(output.contains("Hand: Four of a Kind (A K)"));
        assert!(output.contains("Category: 8"));
    }

    #[test]
    fn test_eval_rejects_bad_input() {
        assert!(matches!(eval("As Kd"), Err(CliError::InvalidInput(_))));
        assert!(matches!(eval("As Zz Kd Qd Jd"), Err(CliError::InvalidInput(_))));
        assert!(matches!(eval("As As Kd Qd Jd"), Err(CliError::InvalidInput(_))));
    }
}
