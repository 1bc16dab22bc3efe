//! Render-facing copy of the game state.
//!
//! Views consume a `GameSnapshot` instead of borrowing `GameState`, so the
//! frame loop can keep one snapshot and refill it every frame without allocating.

use crate::board::slot_rect;
use crate::types::{Rect, Symbol, CARD_COUNT};

/// How a card should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardFace {
    Down,
    Up,
    Matched,
}

impl CardFace {
    pub fn is_face_up(&self) -> bool {
        !matches!(self, CardFace::Down)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSnapshot {
    pub rect: Rect,
    pub symbol: Symbol,
    pub face: CardFace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cards: [CardSnapshot; CARD_COUNT],
    pub match_count: u32,
    pub won: bool,
    pub input_locked: bool,
    pub game_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            *card = CardSnapshot {
                rect: slot_rect(i),
                symbol: Symbol::Circle,
                face: CardFace::Down,
            };
        }
        self.match_count = 0;
        self.won = false;
        self.input_locked = false;
        self.game_id = 0;
        self.seed = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let card = CardSnapshot {
            rect: slot_rect(0),
            symbol: Symbol::Circle,
            face: CardFace::Down,
        };
        let mut s = Self {
            cards: [card; CARD_COUNT],
            match_count: 0,
            won: false,
            input_locked: false,
            game_id: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}
