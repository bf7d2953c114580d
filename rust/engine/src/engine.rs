use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{GameError, IllegalAction};
use crate::player::{Player, PlayerAction, SeatedPlayer};
use crate::rules::{legal_actions, validate_action, ActionChoices, Blinds, ValidatedAction};
use crate::showdown::{resolve, ShowdownResult};

/// Largest table a hand can be dealt to.
pub const MAX_SEATS: usize = 10;

/// Burn cards plus board cards drawn after the hole cards.
const COMMUNITY_DRAWS: usize = 3 + 5;

/// Betting phase of a hand. `Showdown` is terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Hole cards dealt, no board
    Preflop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hands revealed and the pot awarded
    Showdown,
}

impl Street {
    pub fn next(self) -> Street {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River | Street::Showdown => Street::Showdown,
        }
    }

    /// Community cards revealed when this street begins.
    pub fn cards_dealt(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::Preflop | Street::Showdown => 0,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::Showdown => "showdown",
        };
        f.write_str(repr)
    }
}

/// Records a single player action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    /// The betting street when this action occurred
    pub street: Street,
    pub action: PlayerAction,
}

/// How a finished hand ended.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandOutcome {
    /// Everyone else folded; the pot went to `seat` without a showdown.
    EarlyWin { seat: usize, amount: u32 },
    Showdown(ShowdownResult),
}

impl HandOutcome {
    pub fn winnings(&self, seat: usize) -> u32 {
        match self {
            HandOutcome::EarlyWin { seat: s, amount } if *s == seat => *amount,
            HandOutcome::EarlyWin { .. } => 0,
            HandOutcome::Showdown(result) => result.winnings(seat),
        }
    }
}

/// Complete state of one hand of Texas Hold'em.
///
/// Every transition takes `&self` and returns a fresh state, so a caller can
/// hand out the previous value to readers while the next one is computed. A
/// rejected action returns an error and leaves the original untouched.
///
/// # Examples
///
/// ```
/// use cardroom_engine::deck::Deck;
/// use cardroom_engine::engine::{HandState, Street};
/// use cardroom_engine::player::{PlayerAction, SeatedPlayer};
/// use cardroom_engine::rules::Blinds;
///
/// let seats = vec![
///     SeatedPlayer::new("alice", 1000),
///     SeatedPlayer::new("bob", 1000),
///     SeatedPlayer::new("carol", 1000),
/// ];
/// let blinds = Blinds::new(5, 10).unwrap();
/// let hand = HandState::start(&seats, 0, blinds, Deck::new_with_seed(7)).unwrap();
/// assert_eq!(hand.pot(), 15);
/// assert_eq!(hand.acting(), Some(0));
///
/// let hand = hand.apply_action(0, PlayerAction::Call).unwrap();
/// let hand = hand.apply_action(1, PlayerAction::Call).unwrap();
/// let hand = hand.apply_action(2, PlayerAction::Check).unwrap();
/// assert_eq!(hand.street(), Street::Flop);
/// assert_eq!(hand.board().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandState {
    players: Vec<Player>,
    dealer: usize,
    small_blind_seat: usize,
    big_blind_seat: usize,
    blinds: Blinds,
    /// Community cards (0, 3, 4 or 5)
    board: Vec<Card>,
    burned: Vec<Card>,
    pot: u32,
    street: Street,
    /// Seat due to act; `None` once the hand is over
    acting: Option<usize>,
    /// Highest street bet any player has made on this street
    max_bet: u32,
    deck: Deck,
    actions: Vec<ActionRecord>,
    outcome: Option<HandOutcome>,
}

impl HandState {
    /// Starts a hand with `dealer` holding the button: posts blinds from the
    /// next two seats with chips, deals two hole cards to every seat with
    /// chips, and points the action at the first seat after the big blind.
    ///
    /// Refuses tables over [`MAX_SEATS`], a deck too short to finish the hand,
    /// and stacks whose total does not fit the `u32` pot.
    pub fn start(
        seats: &[SeatedPlayer],
        dealer: usize,
        blinds: Blinds,
        deck: Deck,
    ) -> Result<Self, GameError> {
        if seats.len() > MAX_SEATS {
            return Err(GameError::TooManySeats {
                seats: seats.len(),
                max: MAX_SEATS,
            });
        }
        if dealer >= seats.len() {
            return Err(GameError::InvalidSeat { seat: dealer });
        }
        let available = seats.iter().filter(|s| s.stack > 0).count();
        if available < 2 {
            return Err(GameError::NotEnoughPlayers { available });
        }
        let needed = 2 * available + COMMUNITY_DRAWS;
        if deck.remaining() < needed {
            return Err(GameError::NotEnoughCards {
                needed,
                remaining: deck.remaining(),
            });
        }
        // every chip amount in the hand is bounded by this total
        let chips: u64 = seats.iter().map(|s| u64::from(s.stack)).sum();
        if chips > u64::from(u32::MAX) {
            return Err(GameError::ChipOverflow { max: u32::MAX });
        }
        let players = seats
            .iter()
            .map(|s| {
                if s.stack > 0 {
                    Player::new(s.name.as_str(), s.stack)
                } else {
                    Player::sitting_out(s.name.as_str())
                }
            })
            .collect();

        let mut state = Self {
            players,
            dealer,
            small_blind_seat: dealer,
            big_blind_seat: dealer,
            blinds,
            board: Vec::with_capacity(5),
            burned: Vec::with_capacity(3),
            pot: 0,
            street: Street::Preflop,
            acting: None,
            max_bet: 0,
            deck,
            actions: Vec::new(),
            outcome: None,
        };

        let sb = state
            .seat_after(dealer, Player::in_hand)
            .ok_or(GameError::NotEnoughPlayers { available })?;
        let bb = state
            .seat_after(sb, Player::in_hand)
            .ok_or(GameError::NotEnoughPlayers { available })?;
        state.small_blind_seat = sb;
        state.big_blind_seat = bb;
        state.post(sb, blinds.small);
        state.post(bb, blinds.big);

        let n = state.players.len();
        for _ in 0..2 {
            for k in 1..=n {
                let seat = (dealer + k) % n;
                if state.players[seat].in_hand() {
                    let card = state.deck.draw()?;
                    state.players[seat].give_card(card);
                }
            }
        }

        state.max_bet = blinds.big;
        state.acting = Some(bb);
        info!(
            dealer,
            small_blind = sb,
            big_blind = bb,
            players = available,
            pot = state.pot,
            "hand started"
        );
        state.settle()?;
        Ok(state)
    }

    /// Applies `action` for `seat` and advances the hand as far as it can go
    /// without further input (next actor, next street, or showdown).
    pub fn apply_action(&self, seat: usize, action: PlayerAction) -> Result<HandState, GameError> {
        let validated = self.validate(seat, action).map_err(|reason| {
            debug!(seat, %action, %reason, "action rejected");
            GameError::from(reason)
        })?;

        let mut next = self.clone();
        next.apply_validated(seat, validated);
        next.actions.push(ActionRecord {
            seat,
            street: self.street,
            action,
        });
        debug_assert_eq!(next.pot, next.contributed_total());
        debug!(
            seat,
            %action,
            street = %self.street,
            pot = next.pot,
            current_bet = next.max_bet,
            "action applied"
        );
        next.settle()?;
        Ok(next)
    }

    /// Moves to the next street when the current one is complete. A no-op
    /// while betting is still open or once the hand is over.
    pub fn advance_street(&self) -> Result<HandState, GameError> {
        let mut next = self.clone();
        if !self.is_complete() && self.is_street_complete() {
            next.settle()?;
        }
        Ok(next)
    }

    /// The seat that should act after the current one, or `None` when the
    /// street is closed.
    pub fn next_actor(&self) -> Option<usize> {
        if self.is_street_complete() {
            return None;
        }
        let from = self.acting.unwrap_or(self.dealer);
        self.seat_after(from, |p| self.owes_action(p))
    }

    /// True once every player who can still bet has acted and matched the
    /// current bet, or when at most one such player remains and owes nothing.
    pub fn is_street_complete(&self) -> bool {
        if self.is_complete() {
            return true;
        }
        let active: Vec<&Player> = self.players.iter().filter(|p| p.is_active()).collect();
        match active.as_slice() {
            [] => true,
            [only] => only.street_bet() >= self.max_bet,
            many => many
                .iter()
                .all(|p| p.has_acted() && p.street_bet() == self.max_bet),
        }
    }

    /// Legal action menu for the seat due to act.
    pub fn legal_actions(&self) -> Option<ActionChoices> {
        let seat = self.acting?;
        Some(legal_actions(&self.players[seat], self.max_bet))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn small_blind_seat(&self) -> usize {
        self.small_blind_seat
    }
    pub fn big_blind_seat(&self) -> usize {
        self.big_blind_seat
    }
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn burned(&self) -> &[Card] {
        &self.burned
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn acting(&self) -> Option<usize> {
        self.acting
    }
    pub fn current_bet(&self) -> u32 {
        self.max_bet
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }
    pub fn outcome(&self) -> Option<&HandOutcome> {
        self.outcome.as_ref()
    }
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    /// Seats with their stacks as they stand now; after the hand is over
    /// these are the stacks to carry into the next hand.
    pub fn final_stacks(&self) -> Vec<SeatedPlayer> {
        self.players
            .iter()
            .map(|p| SeatedPlayer::new(p.name(), p.stack()))
            .collect()
    }

    fn validate(
        &self,
        seat: usize,
        action: PlayerAction,
    ) -> Result<ValidatedAction, IllegalAction> {
        if self.is_complete() {
            return Err(IllegalAction::HandComplete);
        }
        let player = self
            .players
            .get(seat)
            .ok_or(IllegalAction::UnknownSeat { seat })?;
        let expected = self.acting.ok_or(IllegalAction::HandComplete)?;
        if seat != expected {
            return Err(IllegalAction::NotYourTurn {
                expected,
                actual: seat,
            });
        }
        if !player.is_active() {
            return Err(IllegalAction::PlayerNotActive {
                seat,
                status: player.status(),
            });
        }
        validate_action(player, self.max_bet, action)
    }

    fn apply_validated(&mut self, seat: usize, action: ValidatedAction) {
        match action {
            ValidatedAction::Fold => self.players[seat].fold(),
            ValidatedAction::Check => self.players[seat].mark_acted(),
            ValidatedAction::Call(amount) => {
                self.pot += self.players[seat].commit(amount);
                self.players[seat].mark_acted();
            }
            ValidatedAction::Raise { to, added } => {
                self.pot += self.players[seat].commit(added);
                self.max_bet = to;
                for (i, p) in self.players.iter_mut().enumerate() {
                    if i != seat && p.is_active() {
                        p.reopen();
                    }
                }
                self.players[seat].mark_acted();
            }
        }
    }

    /// Drives the hand forward until it needs player input or is over.
    fn settle(&mut self) -> Result<(), GameError> {
        loop {
            if self.is_complete() {
                self.acting = None;
                return Ok(());
            }
            if self.players.iter().filter(|p| p.in_hand()).count() == 1 {
                self.award_early_win();
                return Ok(());
            }
            if !self.is_street_complete() {
                self.acting = self.next_actor();
                return Ok(());
            }
            if self.street == Street::River {
                return self.showdown();
            }
            self.deal_next_street()?;
        }
    }

    fn deal_next_street(&mut self) -> Result<(), GameError> {
        let next = self.street.next();
        for p in &mut self.players {
            p.reset_street();
        }
        self.max_bet = 0;
        let burn = self.deck.draw()?;
        self.burned.push(burn);
        let cards = self.deck.draw_n(next.cards_dealt())?;
        self.board.extend(cards);
        self.street = next;
        self.acting = Some(self.dealer);
        debug!(street = %next, board = ?self.board, "street dealt");
        Ok(())
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        let result = resolve(&self.players, &self.board, self.dealer)?;
        for share in result.pots.iter().flat_map(|p| p.shares.iter()) {
            self.players[share.seat].add_chips(share.amount);
        }
        self.street = Street::Showdown;
        self.acting = None;
        self.pot = 0;
        info!(winners = ?result.winners(), pots = result.pots.len(), "showdown");
        self.outcome = Some(HandOutcome::Showdown(result));
        Ok(())
    }

    fn award_early_win(&mut self) {
        let Some(seat) = self.players.iter().position(Player::in_hand) else {
            return;
        };
        let amount = self.pot;
        self.players[seat].add_chips(amount);
        self.pot = 0;
        self.acting = None;
        info!(seat, amount, street = %self.street, "pot awarded without showdown");
        self.outcome = Some(HandOutcome::EarlyWin { seat, amount });
    }

    fn post(&mut self, seat: usize, amount: u32) {
        self.pot += self.players[seat].commit(amount);
    }

    fn owes_action(&self, p: &Player) -> bool {
        p.is_active() && (!p.has_acted() || p.street_bet() < self.max_bet)
    }

    fn contributed_total(&self) -> u32 {
        self.players.iter().map(|p| p.total_contributed()).sum()
    }

    /// First seat after `from` (wrapping, `from` itself last) matching `pred`.
    fn seat_after(&self, from: usize, pred: impl Fn(&Player) -> bool) -> Option<usize> {
        let n = self.players.len();
        (1..=n)
            .map(|k| (from + k) % n)
            .find(|&seat| pred(&self.players[seat]))
    }
}
