//! Deal command handler for single hand dealing and display.
//!
//! Starts one hand with the configured seats and blinds and prints the
//! blinds, pot, every seat's hole cards and the first seat to act.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_card;
use cardroom_engine::deck::Deck;
use cardroom_engine::engine::HandState;
use std::io::Write;
use tracing::debug;

/// Handle the deal command.
///
/// The button is on seat 0. Without a seed in `cfg` a random one is drawn and
/// printed so the deal can be reproduced.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out = Vec::new();
/// handle_deal_command(&Config::default(), &mut out).unwrap();
/// ```
pub fn handle_deal_command(cfg: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = cfg.seed.unwrap_or_else(rand::random);
    debug!(seed, players = cfg.players, "dealing single hand");
    let hand = HandState::start(&cfg.seats(), 0, cfg.blinds()?, Deck::new_with_seed(seed))?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(
        out,
        "Blinds: SB={} BB={}",
        hand.blinds().small,
        hand.blinds().big
    )?;
    for (seat, p) in hand.players().iter().enumerate() {
        let cards: Vec<String> = p.hole_cards().iter().map(format_card).collect();
        writeln!(
            out,
            "Seat {} {}{}: {} stack={} bet={}",
            seat,
            p.name(),
            position_tag(&hand, seat),
            cards.join(" "),
            p.stack(),
            p.street_bet()
        )?;
    }
    writeln!(out, "Pot: {}", hand.pot())?;
    match hand.acting() {
        Some(seat) => writeln!(out, "To act: seat {}", seat)?,
        None => writeln!(out, "To act: none")?,
    }
    Ok(())
}

fn position_tag(hand: &HandState, seat: usize) -> &'static str {
    if seat == hand.big_blind_seat() {
        " [BB]"
    } else if seat == hand.small_blind_seat() {
        " [SB]"
    } else if seat == hand.dealer() {
        " [BTN]"
    } else {
        ""
    }
}
