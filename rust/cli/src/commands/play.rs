//! # Play Command
//!
//! Hot-seat Texas Hold'em at a single terminal.
//!
//! Every seat takes its turn at the same keyboard, or with `--auto` each seat
//! checks or calls until the hand is decided. Stacks carry from hand to hand
//! and the session ends early once fewer than two seats have chips.
//!
//! ## Features
//!
//! - Interactive input validation with clear error messages; illegal actions re-prompt
//! - Graceful quit handling (`q`, `quit` or end of input)
//! - Deterministic decks: hand `i` is shuffled from `seed + i - 1`

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_card, format_strength};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use cardroom_engine::deck::Deck;
use cardroom_engine::engine::{HandOutcome, HandState};
use cardroom_engine::errors::GameError;
use cardroom_engine::game::Table;
use cardroom_engine::player::{PlayerAction, SeatedPlayer};
use cardroom_engine::rules::ActionChoices;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info};

/// Handle the play command.
///
/// # Arguments
///
/// * `cfg` - Resolved configuration (seats, stacks, blinds, seed)
/// * `hands` - Number of hands to play (must be >= 1, default: 1)
/// * `auto` - Check/call for every seat instead of reading stdin
/// * `out` - Output stream for game display
/// * `err` - Error stream for rejected input
/// * `stdin` - Input stream for player actions
///
/// # Returns
///
/// * `Ok(())` on completion, quit, or end of input
/// * `Err(CliError)` if hands < 1, the configuration is unusable, or I/O fails
///
/// # Examples
///
/// ```ignore
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = std::io::Cursor::new("call\ncheck\n");
/// let cfg = Config::default();
/// handle_play_command(&cfg, Some(1), false, &mut out, &mut err, &mut input).unwrap();
/// ```
pub fn handle_play_command(
    cfg: &Config,
    hands: Option<u32>,
    auto: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let hands = hands.unwrap_or(1);
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut table = Table::new(cfg.seats(), cfg.blinds()?);

    writeln!(
        out,
        "play: players={} hands={} seed={}",
        cfg.players, hands, seed
    )?;
    info!(players = cfg.players, hands, seed, auto, "play session started");

    let mut played = 0u32;
    for i in 1..=hands {
        if table.funded_seats() < 2 {
            writeln!(out, "Not enough players with chips; session over.")?;
            break;
        }
        let deck = Deck::new_with_seed(seed.wrapping_add(u64::from(i - 1)));
        let hand = table.start_hand(deck)?;
        writeln!(out, "Hand {}", i)?;
        writeln!(
            out,
            "Dealer: seat {} SB: seat {} ({}) BB: seat {} ({})",
            hand.dealer(),
            hand.small_blind_seat(),
            hand.blinds().small,
            hand.big_blind_seat(),
            hand.blinds().big
        )?;

        if !play_hand(&mut table, hand, auto, out, err, stdin)? {
            writeln!(out, "Quit requested.")?;
            break;
        }
        played += 1;
    }

    writeln!(out, "Hands played: {}", played)?;
    write_stacks(out, table.seats())?;
    Ok(())
}

/// Plays one hand to completion. Returns `false` if the user quit.
fn play_hand(
    table: &mut Table,
    mut hand: Arc<HandState>,
    auto: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    while let Some(seat) = hand.acting() {
        let action = if auto {
            PlayerAction::Call
        } else {
            match prompt_action(&hand, seat, out, err, stdin)? {
                Some(action) => action,
                None => return Ok(false),
            }
        };

        match table.apply_action(seat, action) {
            Ok(next) => {
                writeln!(out, "Seat {}: {}", seat, format_action(&action))?;
                if next.board().len() != hand.board().len() {
                    writeln!(out, "Board: {}", format_board(next.board()))?;
                }
                hand = next;
            }
            Err(GameError::IllegalAction(reason)) if !auto => {
                ui::write_error(err, &format!("Invalid action: {}", reason))?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    report_outcome(&hand, out)?;
    debug!(hand = table.hands_played(), "hand finished");
    Ok(true)
}

/// Shows the acting seat its cards and options, then reads until a
/// parseable action arrives. `None` means quit or end of input.
fn prompt_action(
    hand: &HandState,
    seat: usize,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<PlayerAction>, CliError> {
    let view = hand.public_view(Some(seat));
    let me = &view.players[seat];
    let hole: Vec<String> = me
        .hole_cards
        .iter()
        .flatten()
        .map(format_card)
        .collect();
    writeln!(
        out,
        "Seat {} ({}) hole: {} board: {} pot: {} stack: {}",
        seat,
        me.name,
        hole.join(" "),
        format_board(&view.board),
        view.pot,
        me.stack
    )?;
    if let Some(menu) = &view.legal_actions {
        writeln!(out, "Options: {}", describe_choices(menu))?;
    }

    loop {
        ui::prompt(out, "Enter action (fold/check/call/raise <to>/allin/q): ")?;
        let Some(line) = read_stdin_line(stdin)? else {
            return Ok(None);
        };
        match parse_player_action(&line) {
            ParseResult::Action(action) => return Ok(Some(action)),
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

fn describe_choices(menu: &ActionChoices) -> String {
    let mut parts = vec!["fold".to_string()];
    if menu.can_check {
        parts.push("check".to_string());
    }
    if let Some(amount) = menu.call_amount {
        parts.push(format!("call {}", amount));
    }
    if let (Some(min), Some(max)) = (menu.min_raise_to, menu.max_raise_to) {
        parts.push(format!("raise {}-{}", min, max));
    }
    parts.push("allin".to_string());
    parts.join(", ")
}

fn report_outcome(hand: &HandState, out: &mut dyn Write) -> Result<(), CliError> {
    match hand.outcome() {
        Some(HandOutcome::EarlyWin { seat, amount }) => {
            writeln!(out, "Seat {} wins {} uncontested", seat, amount)?;
        }
        Some(HandOutcome::Showdown(result)) => {
            for shown in &result.hands {
                writeln!(
                    out,
                    "Seat {} shows {} {}",
                    shown.seat,
                    format_board(&shown.best.cards),
                    format_strength(&shown.best.strength)
                )?;
            }
            for (i, pot) in result.pots.iter().enumerate() {
                let label = if i == 0 { "Main pot" } else { "Side pot" };
                for share in &pot.shares {
                    writeln!(
                        out,
                        "{} ({}): seat {} wins {}",
                        label, pot.amount, share.seat, share.amount
                    )?;
                }
            }
        }
        None => {}
    }
    Ok(())
}

fn write_stacks(out: &mut dyn Write, seats: &[SeatedPlayer]) -> Result<(), CliError> {
    let stacks: Vec<String> = seats
        .iter()
        .map(|s| format!("{}={}", s.name, s.stack))
        .collect();
    writeln!(out, "Stacks: {}", stacks.join(" "))?;
    Ok(())
}
