//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The table (`TABLE_WIDTH` x `TABLE_HEIGHT` cells) is centered horizontally
//! and anchored vertically in the viewport. The same placement is used in
//! reverse by [`GameView::table_point`] to turn mouse positions into table
//! coordinates, so hit-testing always agrees with what is on screen.

use crate::core::{CardFace, CardSnapshot, GameSnapshot};
use crate::fb::{BoxChars, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Point, Symbol, CARD_HEIGHT, CARD_WIDTH, PAIR_COUNT, START_X, TABLE_HEIGHT, TABLE_WIDTH,
};

const FELT: Rgb = Rgb::new(26, 76, 59);
const CARD_BACK: Rgb = Rgb::new(51, 102, 204);
const CARD_FRONT: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// How a symbol looks face-up: glyph rows (equal width) and a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolFace {
    pub glyph: &'static [&'static str],
    pub color: Rgb,
}

impl SymbolFace {
    pub fn width(&self) -> u16 {
        self.glyph
            .iter()
            .map(|row| row.chars().count() as u16)
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> u16 {
        self.glyph.len() as u16
    }
}

/// Glyph and color for each symbol.
pub fn symbol_face(symbol: Symbol) -> SymbolFace {
    match symbol {
        Symbol::Circle => SymbolFace {
            glyph: &[" ▄██▄ ", "██████", " ▀██▀ "],
            color: Rgb::new(220, 30, 30),
        },
        Symbol::Triangle => SymbolFace {
            glyph: &["  ▟▙  ", " ▟██▙ ", "▟████▙"],
            color: Rgb::new(20, 170, 40),
        },
        Symbol::Star => SymbolFace {
            glyph: &["▚ ▐▌ ▞", " ▐██▌ ", "▞ ▐▌ ▚"],
            color: Rgb::new(230, 0, 230),
        },
        Symbol::Square => SymbolFace {
            glyph: &["██████", "██████", "██████"],
            color: Rgb::new(255, 153, 0),
        },
        Symbol::Diamond => SymbolFace {
            glyph: &["  ▗▖  ", " ▟██▙ ", " ▜██▛ ", "  ▝▘  "],
            color: Rgb::new(153, 0, 255),
        },
        Symbol::Ring => SymbolFace {
            glyph: &[" ▄▀▀▄ ", "█    █", " ▀▄▄▀ "],
            color: Rgb::new(0, 170, 200),
        },
    }
}

/// A lightweight terminal renderer for the card table.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Screen position of the table's top-left corner.
    pub fn table_origin(&self, viewport: Viewport) -> (u16, u16) {
        let x = viewport.width.saturating_sub(TABLE_WIDTH as u16) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(TABLE_HEIGHT as u16) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Map a terminal cell into table coordinates.
    ///
    /// Positions left of or above the table come out negative; the board
    /// treats any point outside a card as a miss.
    pub fn table_point(&self, viewport: Viewport, column: u16, row: u16) -> Point {
        let (ox, oy) = self.table_origin(viewport);
        Point::new(column as i32 - ox as i32, row as i32 - oy as i32)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (ox, oy) = self.table_origin(viewport);
        let felt = CellStyle::new(WHITE, FELT);
        fb.fill_rect(ox, oy, TABLE_WIDTH as u16, TABLE_HEIGHT as u16, ' ', felt);

        self.draw_counter(fb, snap, ox, oy);

        for card in &snap.cards {
            self.draw_card(fb, card, ox, oy);
        }

        let hint = CellStyle::new(Rgb::new(150, 190, 170), FELT);
        let hint_text = "r restart  q quit";
        let hint_x = ox + TABLE_WIDTH as u16 - START_X as u16 - hint_text.chars().count() as u16;
        fb.put_str(hint_x, oy + TABLE_HEIGHT as u16 - 1, hint_text, hint);

        if snap.won {
            self.draw_banner(fb, ox, oy, "YOU WIN!");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_counter(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, ox: u16, oy: u16) {
        let label = CellStyle::new(WHITE, FELT).bold();
        let x = ox + START_X as u16;
        let y = oy + 1;
        fb.put_str(x, y, "MATCHES ", label);

        let mut buf = [0u8; 8];
        let text = format_count(snap.match_count, &mut buf);
        fb.put_str(x + 8, y, text, label);
        let after = x + 8 + text.len() as u16;
        fb.put_char(after, y, '/', label);
        fb.put_char(after + 1, y, digit(PAIR_COUNT as u32), label);
    }

    fn draw_card(&self, fb: &mut FrameBuffer, card: &CardSnapshot, ox: u16, oy: u16) {
        let x = ox.saturating_add(card.rect.x as u16);
        let y = oy.saturating_add(card.rect.y as u16);
        let w = card.rect.width as u16;
        let h = card.rect.height as u16;

        match card.face {
            CardFace::Down => {
                let back = CellStyle::new(Rgb::new(90, 140, 230), CARD_BACK);
                fb.fill_rect(x, y, w, h, '░', back);
                fb.draw_box(x, y, w, h, BoxChars::LIGHT, CellStyle::new(WHITE, CARD_BACK));
            }
            CardFace::Up | CardFace::Matched => {
                let front = CellStyle::new(BLACK, CARD_FRONT);
                fb.fill_rect(x, y, w, h, ' ', front);
                let border = if card.face == CardFace::Matched {
                    CellStyle::new(Rgb::new(160, 160, 160), CARD_FRONT)
                } else {
                    CellStyle::new(BLACK, CARD_FRONT).bold()
                };
                fb.draw_box(x, y, w, h, BoxChars::ROUNDED, border);

                let face = symbol_face(card.symbol);
                let gx = x + (CARD_WIDTH as u16).saturating_sub(face.width()) / 2;
                let gy = y + (CARD_HEIGHT as u16).saturating_sub(face.height()) / 2;
                let style = CellStyle::new(face.color, CARD_FRONT);
                for (i, row) in face.glyph.iter().enumerate() {
                    fb.put_str(gx, gy + i as u16, row, style);
                }
            }
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let w = text_w + 6;
        let h = 3;
        let x = ox + (TABLE_WIDTH as u16).saturating_sub(w) / 2;
        let y = oy + (TABLE_HEIGHT as u16).saturating_sub(h) / 2;

        let style = CellStyle::new(WHITE, BLACK).bold();
        fb.fill_rect(x, y, w, h, ' ', style);
        fb.draw_box(x, y, w, h, BoxChars::DOUBLE, style);
        fb.put_str(x + 3, y + 1, text, style);
    }
}

fn digit(d: u32) -> char {
    char::from_digit(d % 10, 10).unwrap_or('?')
}

/// Format without allocating; the frame loop calls this every frame.
fn format_count(mut n: u32, buf: &mut [u8; 8]) -> &str {
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 || i == 0 {
            break;
        }
    }
    std::str::from_utf8(&buf[i..]).unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_faces_are_distinct() {
        for (i, a) in Symbol::ALL.iter().enumerate() {
            for b in Symbol::ALL.iter().skip(i + 1) {
                let fa = symbol_face(*a);
                let fb = symbol_face(*b);
                assert_ne!(fa.glyph, fb.glyph, "{a:?} and {b:?} share a glyph");
                assert_ne!(fa.color, fb.color, "{a:?} and {b:?} share a color");
            }
        }
    }

    #[test]
    fn symbol_faces_fit_inside_card_border() {
        for symbol in Symbol::ALL {
            let face = symbol_face(symbol);
            assert!(face.width() <= CARD_WIDTH as u16 - 2);
            assert!(face.height() <= CARD_HEIGHT as u16 - 2);
            for row in face.glyph {
                assert_eq!(row.chars().count() as u16, face.width(), "{symbol:?}");
            }
        }
    }

    #[test]
    fn format_count_writes_digits() {
        let mut buf = [0u8; 8];
        assert_eq!(format_count(0, &mut buf), "0");
        assert_eq!(format_count(6, &mut buf), "6");
        assert_eq!(format_count(1234, &mut buf), "1234");
    }

    #[test]
    fn table_origin_centers_horizontally() {
        let view = GameView::default();
        assert_eq!(view.table_origin(Viewport::new(80, 24)), (11, 0));
        assert_eq!(view.table_origin(Viewport::new(58, 30)), (0, 3));
        assert_eq!(view.table_origin(Viewport::new(20, 10)), (0, 0));
    }
}
