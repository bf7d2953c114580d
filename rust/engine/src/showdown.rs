//! Pot resolution: side-pot tiers, hand ranking per tier, and chip splits.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{best_of, compare_hands, BestHand};
use crate::player::Player;

/// A slice of the pot and the seats allowed to win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePot {
    pub amount: u32,
    pub eligible: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub seat: usize,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotAward {
    pub amount: u32,
    pub eligible: Vec<usize>,
    pub winners: Vec<usize>,
    pub shares: Vec<Award>,
}

/// A hand revealed at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedHand {
    pub seat: usize,
    pub best: BestHand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownResult {
    pub hands: Vec<RevealedHand>,
    pub pots: Vec<PotAward>,
}

impl ShowdownResult {
    /// Total chips won by `seat` across every pot.
    pub fn winnings(&self, seat: usize) -> u32 {
        self.pots
            .iter()
            .flat_map(|p| p.shares.iter())
            .filter(|a| a.seat == seat)
            .map(|a| a.amount)
            .sum()
    }

    /// Seats that won at least one chip, in seat order.
    pub fn winners(&self) -> Vec<usize> {
        let mut seats: Vec<usize> = self
            .pots
            .iter()
            .flat_map(|p| p.shares.iter())
            .filter(|a| a.amount > 0)
            .map(|a| a.seat)
            .collect();
        seats.sort_unstable();
        seats.dedup();
        seats
    }

    pub fn hand_for(&self, seat: usize) -> Option<&BestHand> {
        self.hands.iter().find(|h| h.seat == seat).map(|h| &h.best)
    }
}

/// Splits contributions into tiers at each distinct contribution level.
/// Folded chips fund the tiers they reached but folded seats are never
/// eligible. Tiers nobody can win fold into the previous pot, and adjacent
/// tiers with the same contenders are merged.
pub fn side_pots(players: &[Player]) -> Vec<SidePot> {
    let mut levels: Vec<u32> = players
        .iter()
        .map(|p| p.total_contributed())
        .filter(|&c| c > 0)
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots: Vec<SidePot> = Vec::new();
    let mut prev = 0u32;
    let mut carry = 0u32;
    for lvl in levels {
        let contributors = players
            .iter()
            .filter(|p| p.total_contributed() >= lvl)
            .count() as u32;
        let amount = (lvl - prev) * contributors + carry;
        prev = lvl;
        let eligible: Vec<usize> = players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.in_hand() && p.total_contributed() >= lvl)
            .map(|(i, _)| i)
            .collect();

        if eligible.is_empty() {
            match pots.last_mut() {
                Some(last) => last.amount += amount,
                None => carry = amount,
            }
            continue;
        }
        carry = 0;
        match pots.last_mut() {
            Some(last) if last.eligible == eligible => last.amount += amount,
            _ => pots.push(SidePot { amount, eligible }),
        }
    }
    pots
}

/// Divides `amount` evenly among `winners`. Odd chips go one at a time to
/// winners in seat order starting left of the dealer.
pub fn split_pot(amount: u32, winners: &[usize], dealer: usize, seat_count: usize) -> Vec<Award> {
    if winners.is_empty() {
        return Vec::new();
    }
    let mut order = winners.to_vec();
    order.sort_by_key(|&seat| (seat + seat_count - dealer - 1) % seat_count);
    let per = amount / order.len() as u32;
    let mut rem = amount % order.len() as u32;
    order
        .into_iter()
        .map(|seat| {
            let mut share = per;
            if rem > 0 {
                share += 1;
                rem -= 1;
            }
            Award {
                seat,
                amount: share,
            }
        })
        .collect()
}

/// Ranks every non-folded player on `hole ∪ board` and awards each pot to its
/// best eligible hand(s). A lone remaining player takes everything without
/// any evaluation.
pub fn resolve(
    players: &[Player],
    board: &[Card],
    dealer: usize,
) -> Result<ShowdownResult, GameError> {
    let contenders: Vec<usize> = players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.in_hand())
        .map(|(i, _)| i)
        .collect();

    if let [only] = *contenders.as_slice() {
        let amount = players.iter().map(|p| p.total_contributed()).sum();
        return Ok(ShowdownResult {
            hands: Vec::new(),
            pots: vec![PotAward {
                amount,
                eligible: vec![only],
                winners: vec![only],
                shares: vec![Award { seat: only, amount }],
            }],
        });
    }

    let mut hands = Vec::with_capacity(contenders.len());
    for &seat in &contenders {
        let mut cards: Vec<Card> = players[seat].hole_cards().to_vec();
        cards.extend_from_slice(board);
        hands.push(RevealedHand {
            seat,
            best: best_of(&cards)?,
        });
    }

    let pots = side_pots(players)
        .into_iter()
        .map(|pot| {
            let winners = best_seats(&hands, &pot.eligible);
            let shares = split_pot(pot.amount, &winners, dealer, players.len());
            PotAward {
                amount: pot.amount,
                eligible: pot.eligible,
                winners,
                shares,
            }
        })
        .collect();

    Ok(ShowdownResult { hands, pots })
}

fn best_seats(hands: &[RevealedHand], eligible: &[usize]) -> Vec<usize> {
    let mut winners: Vec<usize> = Vec::new();
    let mut best: Option<&BestHand> = None;
    for h in hands.iter().filter(|h| eligible.contains(&h.seat)) {
        match best.map(|b| compare_hands(&h.best.strength, &b.strength)) {
            None | Some(Ordering::Greater) => {
                best = Some(&h.best);
                winners.clear();
                winners.push(h.seat);
            }
            Some(Ordering::Equal) => winners.push(h.seat),
            Some(Ordering::Less) => {}
        }
    }
    winners
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributed(name: &str, amount: u32, folded: bool) -> Player {
        let mut p = Player::new(name, amount + 100);
        p.commit(amount);
        if folded {
            p.fold();
        }
        p
    }

    #[test]
    fn equal_contributions_make_one_pot() {
        let players = vec![
            contributed("a", 50, false),
            contributed("b", 50, false),
            contributed("c", 50, true),
        ];
        let pots = side_pots(&players);
        assert_eq!(
            pots,
            vec![SidePot {
                amount: 150,
                eligible: vec![0, 1]
            }]
        );
    }

    #[test]
    fn short_all_in_creates_main_and_side_pot() {
        let players = vec![
            contributed("short", 20, false),
            contributed("b", 100, false),
            contributed("c", 100, false),
        ];
        let pots = side_pots(&players);
        assert_eq!(pots.len(), 2);
        assert_eq!(pots[0].amount, 60);
        assert_eq!(pots[0].eligible, vec![0, 1, 2]);
        assert_eq!(pots[1].amount, 160);
        assert_eq!(pots[1].eligible, vec![1, 2]);
    }

    #[test]
    fn folded_overbet_is_not_lost() {
        // seat 2 folded after putting in more than the all-in seats
        let players = vec![
            contributed("a", 30, false),
            contributed("b", 10, false),
            contributed("c", 50, true),
        ];
        let pots = side_pots(&players);
        let total: u32 = pots.iter().map(|p| p.amount).sum();
        assert_eq!(total, 90);
        assert!(pots.iter().all(|p| !p.eligible.contains(&2)));
        assert_eq!(pots.last().unwrap().eligible, vec![0]);
    }

    #[test]
    fn odd_chip_goes_left_of_dealer() {
        // dealer seat 1: seat 2 is first left, then 0
        let shares = split_pot(21, &[0, 2], 1, 3);
        assert_eq!(
            shares,
            vec![Award { seat: 2, amount: 11 }, Award { seat: 0, amount: 10 }]
        );
    }
}
