use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluated strength of a five-card hand. Ordering is by category, then
/// lexicographically by `kickers` (rank values, most significant first).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    pub kickers: Vec<u8>,
}

/// Best five-card hand found among a larger set of cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BestHand {
    pub strength: HandStrength,
    pub cards: [Card; 5],
}

/// Evaluates 5 to 7 cards. Six or seven cards are reduced to their best
/// five-card subset.
pub fn evaluate(cards: &[Card]) -> Result<HandStrength, GameError> {
    best_of(cards).map(|best| best.strength)
}

/// Searches every five-card subset of `cards` (5 to 7 cards) and keeps the
/// strongest. Exactly five cards are evaluated directly.
pub fn best_of(cards: &[Card]) -> Result<BestHand, GameError> {
    check_input(cards)?;
    let n = cards.len();
    let mut best: Option<BestHand> = None;
    for mask in 0u32..(1 << n) {
        if mask.count_ones() != 5 {
            continue;
        }
        let mut five = [cards[0]; 5];
        let mut k = 0;
        for (i, &c) in cards.iter().enumerate() {
            if mask & (1 << i) != 0 {
                five[k] = c;
                k += 1;
            }
        }
        let strength = evaluate_five(&five);
        let better = match &best {
            Some(b) => compare_hands(&strength, &b.strength).is_gt(),
            None => true,
        };
        if better {
            best = Some(BestHand {
                strength,
                cards: five,
            });
        }
    }
    best.ok_or(GameError::InvalidHandSize { count: n })
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

pub fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[c.rank.value() as usize] += 1;
    }
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high(&rank_counts);

    if let (true, Some(high)) = (is_flush, straight_high) {
        let category = if high == 14 {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return HandStrength {
            category,
            kickers: vec![high],
        };
    }

    // (count, rank) ordered by count, then rank, both descending
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    let ordered: Vec<u8> = groups.iter().map(|&(_, r)| r).collect();

    let category = match (groups[0].0, groups.get(1).map(|g| g.0)) {
        (4, _) => Category::FourOfAKind,
        (3, Some(2)) => Category::FullHouse,
        _ if is_flush => Category::Flush,
        _ if straight_high.is_some() => Category::Straight,
        (3, _) => Category::ThreeOfAKind,
        (2, Some(2)) => Category::TwoPair,
        (2, _) => Category::OnePair,
        _ => Category::HighCard,
    };
    let kickers = match (category, straight_high) {
        (Category::Straight, Some(high)) => vec![high],
        _ => ordered,
    };
    HandStrength { category, kickers }
}

fn check_input(cards: &[Card]) -> Result<(), GameError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(GameError::InvalidHandSize { count: cards.len() });
    }
    for (i, c) in cards.iter().enumerate() {
        if cards[..i].contains(c) {
            return Err(GameError::DuplicateCard(*c));
        }
    }
    Ok(())
}

/// Top rank of a five-distinct-rank run, with the ace also playing low.
fn straight_high(rank_counts: &[u8; 15]) -> Option<u8> {
    let mut mask: u16 = 0;
    for r in 2..=14 {
        if rank_counts[r] > 0 {
            mask |= 1 << r;
        }
    }
    if mask & (1 << 14) != 0 {
        mask |= 1 << 1;
    }
    (5..=14u8).rev().find(|&high| {
        let window = 0b11111u16 << (high - 4);
        mask & window == window
    })
}
