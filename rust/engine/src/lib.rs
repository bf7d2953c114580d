//! # cardroom-engine: Texas Hold'em Core
//!
//! A deterministic no-limit Texas Hold'em engine for 2 to 10 seats.
//! Provides the deck, the hand evaluator, the betting state machine and pot
//! resolution with side pots. Every transition is a pure function from one
//! immutable [`engine::HandState`] to the next.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and card parsing
//! - [`deck`] - Seeded (ChaCha20) and stacked decks
//! - [`hand`] - Best-of-seven hand evaluation and comparison
//! - [`player`] - Player state and actions
//! - [`rules`] - Blinds, action validation and the legal action menu
//! - [`engine`] - The hand state machine: blinds, streets, turn order
//! - [`showdown`] - Side pots, winners and odd-chip splits
//! - [`view`] - Per-viewer projection that hides other players' cards
//! - [`game`] - Multi-hand table with button rotation
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cardroom_engine::cards::parse_cards;
//! use cardroom_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let strength = evaluate(&cards).unwrap();
//! assert_eq!(strength.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use cardroom_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! assert_eq!(Deck::new_with_seed(42), Deck::new_with_seed(42));
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use cardroom_engine::deck::Deck;
//! use cardroom_engine::engine::HandOutcome;
//! use cardroom_engine::player::{PlayerAction, SeatedPlayer};
//! use cardroom_engine::rules::Blinds;
//! use cardroom_engine::engine::HandState;
//!
//! let seats = vec![SeatedPlayer::new("alice", 1000), SeatedPlayer::new("bob", 1000)];
//! let blinds = Blinds::new(5, 10).unwrap();
//! let hand = HandState::start(&seats, 0, blinds, Deck::new_with_seed(1)).unwrap();
//! let seat = hand.acting().unwrap();
//! let hand = hand.apply_action(seat, PlayerAction::Fold).unwrap();
//! assert!(matches!(hand.outcome(), Some(HandOutcome::EarlyWin { amount: 15, .. })));
//! assert_eq!(hand.pot(), 0);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod rules;
pub mod showdown;
pub mod view;
