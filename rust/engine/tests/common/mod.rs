#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use cardroom_engine::cards::{full_deck, parse_cards, Card};
use cardroom_engine::deck::Deck;
use cardroom_engine::engine::HandState;
use cardroom_engine::player::SeatedPlayer;
use cardroom_engine::rules::Blinds;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

pub fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).expect("valid card text")
}

pub fn seats(stacks: &[u32]) -> Vec<SeatedPlayer> {
    stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| SeatedPlayer::new(format!("p{}", i), s))
        .collect()
}

pub fn blinds() -> Blinds {
    Blinds::new(5, 10).expect("valid blinds")
}

/// Starts a 5/10 hand over `stacks` with a seeded deck.
pub fn start_seeded(stacks: &[u32], dealer: usize, seed: u64) -> HandState {
    HandState::start(&seats(stacks), dealer, blinds(), Deck::new_with_seed(seed))
        .expect("hand starts")
}

/// Builds a deck that deals `holes[seat]` to each seat (every seat funded)
/// and `board` as flop, turn and river, with unused cards burned in between.
pub fn stacked_deck(holes: &[&str], board: &str, dealer: usize) -> Deck {
    let holes: Vec<Vec<Card>> = holes.iter().map(|h| cards(h)).collect();
    let board = cards(board);
    assert_eq!(board.len(), 5);

    let used: Vec<Card> = holes.iter().flatten().chain(board.iter()).copied().collect();
    let mut spare = full_deck().into_iter().filter(|c| !used.contains(c));
    let mut burn = || spare.next().expect("spare card");

    let n = holes.len();
    let mut order = Vec::with_capacity(n * 2 + 8);
    for round in 0..2 {
        for k in 1..=n {
            order.push(holes[(dealer + k) % n][round]);
        }
    }
    order.push(burn());
    order.extend_from_slice(&board[..3]);
    order.push(burn());
    order.push(board[3]);
    order.push(burn());
    order.push(board[4]);
    Deck::stacked(&order).expect("distinct cards")
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Collects every event emitted while it is the active subscriber layer.
#[derive(Clone, Default)]
pub struct CaptureLayer {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLayer {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.entries.lock().unwrap().push(LogEntry {
            level: *event.metadata().level(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let value = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}
