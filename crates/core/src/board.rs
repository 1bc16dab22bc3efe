//! Board module - the twelve cards and their fixed layout
//!
//! The board is a 3x4 grid of cards stored in row-major slot order.
//! Card rectangles are assigned once at deal time and never move; only the
//! per-card `flipped`/`matched` state changes during a game.
//! Slot `i` sits at row `i / 4`, column `i % 4`.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{
    Point, Rect, Symbol, CARD_COUNT, CARD_GAP_X, CARD_GAP_Y, CARD_HEIGHT, CARD_WIDTH, GRID_COLS,
    START_X, START_Y,
};

/// A single card on the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rect: Rect,
    symbol: Symbol,
    flipped: bool,
    matched: bool,
}

impl Card {
    fn new(rect: Rect, symbol: Symbol) -> Self {
        Self {
            rect,
            symbol,
            flipped: false,
            matched: false,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Face-up (true) or face-down (false)
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    pub fn matched(&self) -> bool {
        self.matched
    }

    /// Face-down and not yet part of a resolved pair
    pub fn selectable(&self) -> bool {
        !self.flipped && !self.matched
    }
}

/// The game board - exactly `CARD_COUNT` cards in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cards: [Card; CARD_COUNT],
}

impl Board {
    /// Deal a fresh board: every symbol twice, shuffled, laid out row-major
    pub fn deal(rng: &mut SimpleRng) -> Self {
        let mut symbols = Self::symbol_pairs();
        rng.shuffle(&mut symbols);
        Self::from_symbols(symbols)
    }

    /// Lay out a board with a caller-chosen symbol order
    ///
    /// Slot `i` receives `symbols[i]`. The list must contain each symbol exactly
    /// twice; this is checked in debug builds.
    pub fn from_symbols(symbols: [Symbol; CARD_COUNT]) -> Self {
        debug_assert!(
            Symbol::ALL
                .iter()
                .all(|s| symbols.iter().filter(|&x| x == s).count() == 2),
            "each symbol must appear exactly twice"
        );

        let cards: ArrayVec<Card, CARD_COUNT> = symbols
            .iter()
            .enumerate()
            .map(|(slot, &symbol)| Card::new(slot_rect(slot), symbol))
            .collect();

        match cards.into_inner() {
            Ok(cards) => Self { cards },
            // The iterator yields exactly CARD_COUNT items.
            Err(_) => unreachable!("board always has {CARD_COUNT} cards"),
        }
    }

    /// Every symbol twice, in id order
    pub fn symbol_pairs() -> [Symbol; CARD_COUNT] {
        let mut out = [Symbol::Circle; CARD_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = Symbol::ALL[i / 2];
        }
        out
    }

    /// Index of the card whose rectangle contains `point`
    ///
    /// Side-effect free. Layout guarantees at most one hit; the first card in
    /// slot order wins otherwise.
    pub fn card_at(&self, point: Point) -> Option<usize> {
        self.cards.iter().position(|c| c.rect.contains(point))
    }

    /// True once every pair has been found
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    pub fn cards(&self) -> &[Card; CARD_COUNT] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Number of cards currently face-up but not matched
    pub fn face_up_unmatched(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.flipped && !c.matched)
            .count()
    }

    pub(crate) fn flip_up(&mut self, index: usize) {
        self.cards[index].flipped = true;
    }

    pub(crate) fn flip_down(&mut self, index: usize) {
        let card = &mut self.cards[index];
        debug_assert!(!card.matched, "matched cards never flip back");
        card.flipped = false;
    }

    pub(crate) fn mark_matched(&mut self, index: usize) {
        let card = &mut self.cards[index];
        debug_assert!(card.flipped, "only face-up cards can be matched");
        card.matched = true;
    }
}

/// Fixed rectangle for a grid slot (row-major)
pub fn slot_rect(slot: usize) -> Rect {
    let row = (slot / GRID_COLS) as i32;
    let col = (slot % GRID_COLS) as i32;
    Rect::new(
        START_X + col * (CARD_WIDTH + CARD_GAP_X),
        START_Y + row * (CARD_HEIGHT + CARD_GAP_Y),
        CARD_WIDTH,
        CARD_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_rect_layout() {
        assert_eq!(slot_rect(0), Rect::new(2, 2, 12, 6));
        assert_eq!(slot_rect(1), Rect::new(16, 2, 12, 6));
        assert_eq!(slot_rect(3), Rect::new(44, 2, 12, 6));
        assert_eq!(slot_rect(4), Rect::new(2, 9, 12, 6));
        assert_eq!(slot_rect(11), Rect::new(44, 16, 12, 6));
    }

    #[test]
    fn test_symbol_pairs_has_two_of_each() {
        let pairs = Board::symbol_pairs();
        for s in Symbol::ALL {
            assert_eq!(pairs.iter().filter(|&&x| x == s).count(), 2);
        }
    }

    #[test]
    fn test_from_symbols_keeps_order() {
        let symbols = Board::symbol_pairs();
        let board = Board::from_symbols(symbols);
        for (i, card) in board.cards().iter().enumerate() {
            assert_eq!(card.symbol(), symbols[i]);
            assert_eq!(card.rect(), slot_rect(i));
            assert!(!card.flipped());
            assert!(!card.matched());
        }
    }

    #[test]
    fn test_card_at_corners_and_gaps() {
        let board = Board::from_symbols(Board::symbol_pairs());

        assert_eq!(board.card_at(Point::new(2, 2)), Some(0));
        assert_eq!(board.card_at(Point::new(13, 7)), Some(0));
        // Gap between column 0 and column 1.
        assert_eq!(board.card_at(Point::new(14, 2)), None);
        assert_eq!(board.card_at(Point::new(16, 2)), Some(1));
        // Gap between row 0 and row 1.
        assert_eq!(board.card_at(Point::new(2, 8)), None);
        assert_eq!(board.card_at(Point::new(2, 9)), Some(4));
        assert_eq!(board.card_at(Point::new(55, 21)), Some(11));
        assert_eq!(board.card_at(Point::new(-1, -1)), None);
        assert_eq!(board.card_at(Point::new(0, 0)), None);
    }

    #[test]
    fn test_all_matched() {
        let mut board = Board::from_symbols(Board::symbol_pairs());
        assert!(!board.all_matched());

        for i in 0..CARD_COUNT {
            board.flip_up(i);
            board.mark_matched(i);
        }
        assert!(board.all_matched());
    }

    #[test]
    fn test_face_up_unmatched_count() {
        let mut board = Board::from_symbols(Board::symbol_pairs());
        board.flip_up(0);
        board.flip_up(1);
        assert_eq!(board.face_up_unmatched(), 2);

        board.mark_matched(0);
        board.mark_matched(1);
        assert_eq!(board.face_up_unmatched(), 0);

        board.flip_up(5);
        board.flip_down(5);
        assert_eq!(board.face_up_unmatched(), 0);
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = Board::deal(&mut SimpleRng::new(42));
        let b = Board::deal(&mut SimpleRng::new(42));
        assert_eq!(a, b);
    }
}
