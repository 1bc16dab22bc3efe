//! Game state module - the turn controller
//!
//! This module owns the board plus the selection state machine:
//!
//! ```text
//!   Idle ──click──▶ OneSelected ──click (match)──▶ Idle / Won
//!                        │
//!                        └──click (mismatch)──▶ Resolving ──tick × REVEAL_MS──▶ Idle
//! ```
//!
//! All invalid or out-of-turn input is a silent no-op. The mismatch reveal is a
//! countdown held in [`Phase::Resolving`] and advanced by [`GameState::tick`], so the
//! frame loop never blocks.

use tracing::{debug, info};

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::snapshot::{CardFace, CardSnapshot, GameSnapshot};
use crate::types::{GameAction, Point, PAIR_COUNT, REVEAL_MS};

/// Turn phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No pending selection, input unlocked
    Idle,
    /// One face-up card awaiting its partner
    OneSelected { first: usize },
    /// Mismatched pair on display; input locked until the timer runs out
    Resolving {
        first: usize,
        second: usize,
        remaining_ms: u32,
    },
    /// Every pair found (terminal)
    Won,
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed
    Ignored,
    /// First card of a turn turned face-up
    Flipped,
    /// Second card matched the first
    Matched,
    /// Second card differs; the pair is now on display
    Mismatched,
    /// Final pair matched
    Won,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    phase: Phase,
    match_count: u32,
    rng: SimpleRng,
    /// Monotonic game id (increments on restart).
    game_id: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::deal(&mut rng);
        info!(seed, "dealt new board");
        Self::from_parts(board, rng)
    }

    /// Create a game on a prepared board
    ///
    /// Restarts still deal from a generator seeded with `seed`.
    pub fn with_board(board: Board, seed: u64) -> Self {
        Self::from_parts(board, SimpleRng::new(seed))
    }

    fn from_parts(board: Board, rng: SimpleRng) -> Self {
        Self {
            board,
            phase: Phase::Idle,
            match_count: 0,
            rng,
            game_id: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    pub fn won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// True while a mismatched pair is on display
    pub fn input_locked(&self) -> bool {
        matches!(self.phase, Phase::Resolving { .. })
    }

    /// The face-up card waiting for a partner, if any
    pub fn pending_selection(&self) -> Option<usize> {
        match self.phase {
            Phase::OneSelected { first } => Some(first),
            Phase::Resolving { first, .. } => Some(first),
            Phase::Idle | Phase::Won => None,
        }
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Apply an input action
    pub fn apply_action(&mut self, action: GameAction) -> ClickOutcome {
        match action {
            GameAction::Click(point) => self.click(point),
            GameAction::Restart => {
                self.restart();
                ClickOutcome::Ignored
            }
        }
    }

    /// Handle a primary-button click at a table point
    pub fn click(&mut self, point: Point) -> ClickOutcome {
        if !self.accepts_input() {
            debug!(x = point.x, y = point.y, phase = ?self.phase, "click ignored");
            return ClickOutcome::Ignored;
        }

        match self.board.card_at(point) {
            Some(index) => self.select(index),
            None => ClickOutcome::Ignored,
        }
    }

    /// Handle a click that landed on the card in slot `index`
    pub fn select(&mut self, index: usize) -> ClickOutcome {
        if !self.accepts_input() {
            return ClickOutcome::Ignored;
        }

        let Some(card) = self.board.card(index).copied() else {
            return ClickOutcome::Ignored;
        };
        // Covers re-clicking the pending card too: it is already face-up.
        if !card.selectable() {
            debug!(index, "card not selectable");
            return ClickOutcome::Ignored;
        }

        self.board.flip_up(index);
        debug!(index, symbol = card.symbol().as_str(), "card flipped");

        let outcome = match self.phase {
            Phase::Idle => {
                self.phase = Phase::OneSelected { first: index };
                ClickOutcome::Flipped
            }
            Phase::OneSelected { first } => self.resolve_pair(first, index),
            Phase::Resolving { .. } | Phase::Won => unreachable!("input gated above"),
        };

        self.check_invariants();
        outcome
    }

    fn resolve_pair(&mut self, first: usize, second: usize) -> ClickOutcome {
        let a = self.board.cards()[first].symbol();
        let b = self.board.cards()[second].symbol();

        if a != b {
            debug!(first, second, "mismatch");
            self.phase = Phase::Resolving {
                first,
                second,
                remaining_ms: REVEAL_MS,
            };
            return ClickOutcome::Mismatched;
        }

        self.board.mark_matched(first);
        self.board.mark_matched(second);
        self.match_count += 1;
        info!(
            symbol = a.as_str(),
            matches = self.match_count,
            "pair matched"
        );

        if self.match_count as usize == PAIR_COUNT {
            debug_assert!(self.board.all_matched());
            self.phase = Phase::Won;
            info!(game_id = self.game_id, "all pairs found");
            ClickOutcome::Won
        } else {
            self.phase = Phase::Idle;
            ClickOutcome::Matched
        }
    }

    /// Advance the mismatch reveal timer
    ///
    /// Returns true when the revealed pair flipped back face-down on this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Phase::Resolving {
            first,
            second,
            remaining_ms,
        } = self.phase
        else {
            return false;
        };

        let remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
        if remaining_ms > 0 {
            self.phase = Phase::Resolving {
                first,
                second,
                remaining_ms,
            };
            return false;
        }

        self.board.flip_down(first);
        self.board.flip_down(second);
        self.phase = Phase::Idle;
        debug!(first, second, "mismatched pair hidden");
        self.check_invariants();
        true
    }

    /// Start over with a fresh deal from the continuing RNG stream
    pub fn restart(&mut self) {
        self.board = Board::deal(&mut self.rng);
        self.phase = Phase::Idle;
        self.match_count = 0;
        self.game_id = self.game_id.wrapping_add(1);
        info!(game_id = self.game_id, "game restarted");
    }

    fn accepts_input(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::OneSelected { .. })
    }

    fn check_invariants(&self) {
        debug_assert!(self.match_count as usize <= PAIR_COUNT);
        debug_assert!(self
            .board
            .cards()
            .iter()
            .all(|c| !c.matched() || c.flipped()));
        let open = self.board.face_up_unmatched();
        match self.phase {
            Phase::Idle | Phase::Won => debug_assert_eq!(open, 0),
            Phase::OneSelected { .. } => debug_assert_eq!(open, 1),
            Phase::Resolving { .. } => debug_assert_eq!(open, 2),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (slot, card) in out.cards.iter_mut().zip(self.board.cards().iter()) {
            let face = if card.matched() {
                CardFace::Matched
            } else if card.flipped() {
                CardFace::Up
            } else {
                CardFace::Down
            };
            *slot = CardSnapshot {
                rect: card.rect(),
                symbol: card.symbol(),
                face,
            };
        }
        out.match_count = self.match_count;
        out.won = self.won();
        out.input_locked = self.input_locked();
        out.game_id = self.game_id;
        out.seed = self.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Symbol, CARD_COUNT, TICK_MS};

    /// Pairs in adjacent slots: (0,1) circle, (2,3) triangle, ...
    fn paired_board() -> Board {
        Board::from_symbols(Board::symbol_pairs())
    }

    fn paired_game() -> GameState {
        GameState::with_board(paired_board(), 7)
    }

    fn center_of(game: &GameState, index: usize) -> Point {
        game.board().cards()[index].rect().center()
    }

    #[test]
    fn test_first_click_selects() {
        let mut game = paired_game();
        assert_eq!(game.select(0), ClickOutcome::Flipped);
        assert_eq!(game.phase(), Phase::OneSelected { first: 0 });
        assert_eq!(game.pending_selection(), Some(0));
        assert!(game.board().cards()[0].flipped());
        assert!(!game.input_locked());
    }

    #[test]
    fn test_match_returns_to_idle() {
        let mut game = paired_game();
        game.select(0);
        assert_eq!(game.select(1), ClickOutcome::Matched);

        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.match_count(), 1);
        assert_eq!(game.pending_selection(), None);
        assert!(game.board().cards()[0].matched());
        assert!(game.board().cards()[1].matched());
    }

    #[test]
    fn test_mismatch_locks_then_resets_after_reveal() {
        let mut game = paired_game();
        game.select(0);
        assert_eq!(game.select(2), ClickOutcome::Mismatched);
        assert!(game.input_locked());
        assert_eq!(game.pending_selection(), Some(0));

        // Just short of the delay: still revealed.
        assert!(!game.tick(REVEAL_MS - 1));
        assert!(game.board().cards()[0].flipped());
        assert!(game.board().cards()[2].flipped());

        assert!(game.tick(1));
        assert_eq!(game.phase(), Phase::Idle);
        assert!(!game.board().cards()[0].flipped());
        assert!(!game.board().cards()[2].flipped());
        assert_eq!(game.match_count(), 0);
        assert!(!game.input_locked());
    }

    #[test]
    fn test_reveal_spans_many_frames() {
        let mut game = paired_game();
        game.select(0);
        game.select(2);

        let mut frames = 0;
        while !game.tick(TICK_MS) {
            frames += 1;
            assert!(frames < 1000, "reveal never finished");
        }
        assert_eq!(frames, (REVEAL_MS / TICK_MS) as usize);
    }

    #[test]
    fn test_clicks_ignored_while_resolving() {
        let mut game = paired_game();
        game.select(0);
        game.select(2);
        let before = game.board().clone();

        assert_eq!(game.select(4), ClickOutcome::Ignored);
        assert_eq!(game.click(center_of(&game, 5)), ClickOutcome::Ignored);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_reclick_pending_is_noop() {
        let mut game = paired_game();
        game.select(3);
        let before = game.board().clone();

        assert_eq!(game.select(3), ClickOutcome::Ignored);
        assert_eq!(game.phase(), Phase::OneSelected { first: 3 });
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_matched_card_is_inert() {
        let mut game = paired_game();
        game.select(0);
        game.select(1);

        assert_eq!(game.select(0), ClickOutcome::Ignored);
        assert_eq!(game.phase(), Phase::Idle);

        game.select(2);
        assert_eq!(game.select(1), ClickOutcome::Ignored);
        assert_eq!(game.phase(), Phase::OneSelected { first: 2 });
        assert_eq!(game.match_count(), 1);
    }

    #[test]
    fn test_click_misses_are_ignored() {
        let mut game = paired_game();
        assert_eq!(game.click(Point::new(0, 0)), ClickOutcome::Ignored);
        assert_eq!(game.click(Point::new(14, 3)), ClickOutcome::Ignored);
        assert_eq!(game.click(Point::new(-5, 500)), ClickOutcome::Ignored);
        assert_eq!(game.select(CARD_COUNT), ClickOutcome::Ignored);
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[test]
    fn test_click_maps_point_to_card() {
        let mut game = paired_game();
        let p = center_of(&game, 6);
        assert_eq!(game.click(p), ClickOutcome::Flipped);
        assert_eq!(game.pending_selection(), Some(6));
    }

    #[test]
    fn test_full_solve_wins_and_stays_won() {
        let mut game = paired_game();
        for pair in 0..PAIR_COUNT {
            game.select(pair * 2);
            let outcome = game.select(pair * 2 + 1);
            if pair + 1 == PAIR_COUNT {
                assert_eq!(outcome, ClickOutcome::Won);
            } else {
                assert_eq!(outcome, ClickOutcome::Matched);
            }
        }

        assert!(game.won());
        assert_eq!(game.match_count(), PAIR_COUNT as u32);
        assert!(game.board().all_matched());

        let before = game.board().clone();
        for i in 0..CARD_COUNT {
            assert_eq!(game.select(i), ClickOutcome::Ignored);
        }
        assert!(!game.tick(REVEAL_MS));
        assert!(game.won());
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_tick_outside_resolving_is_noop() {
        let mut game = paired_game();
        assert!(!game.tick(TICK_MS));
        game.select(0);
        assert!(!game.tick(REVEAL_MS * 2));
        assert_eq!(game.phase(), Phase::OneSelected { first: 0 });
    }

    #[test]
    fn test_restart_deals_fresh_board() {
        let mut game = GameState::new(11);
        game.select(0);
        game.restart();

        assert_eq!(game.game_id(), 1);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.match_count(), 0);
        assert!(game.board().cards().iter().all(|c| c.selectable()));
    }

    #[test]
    fn test_restart_during_reveal_clears_lock() {
        let mut game = paired_game();
        game.select(0);
        game.select(2);
        game.apply_action(GameAction::Restart);

        assert!(!game.input_locked());
        assert_eq!(game.pending_selection(), None);
        assert!(!game.tick(REVEAL_MS));
    }

    #[test]
    fn test_snapshot_reflects_faces() {
        let mut game = paired_game();
        game.select(0);
        game.select(1);
        game.select(2);

        let snap = game.snapshot();
        assert_eq!(snap.cards[0].face, CardFace::Matched);
        assert_eq!(snap.cards[1].face, CardFace::Matched);
        assert_eq!(snap.cards[2].face, CardFace::Up);
        assert_eq!(snap.cards[3].face, CardFace::Down);
        assert_eq!(snap.cards[2].symbol, Symbol::Triangle);
        assert_eq!(snap.match_count, 1);
        assert!(!snap.won);
        assert_eq!(snap.seed, 7);
    }
}
