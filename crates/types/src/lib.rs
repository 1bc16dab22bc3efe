//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Table Coordinates
//!
//! The game is laid out on a fixed "table" measured in terminal cells:
//!
//! - **Origin**: (0, 0) is the table's top-left corner
//! - **Grid**: 3 rows x 4 columns of cards, row-major slot order
//! - **Size**: `TABLE_WIDTH` x `TABLE_HEIGHT` (58 x 24)
//!
//! The terminal view centers the table in the viewport and maps mouse
//! positions back into table coordinates.
//!
//! # Card Layout Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CARD_WIDTH` | 12 | Card width in columns |
//! | `CARD_HEIGHT` | 6 | Card height in rows |
//! | `CARD_GAP_X` | 2 | Columns between neighbouring cards |
//! | `CARD_GAP_Y` | 1 | Rows between neighbouring cards |
//! | `START_X` | 2 | Left edge of the first column |
//! | `START_Y` | 2 | Top edge of the first row |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `REVEAL_MS` | 1000 | How long a mismatched pair stays face-up |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{Point, Rect, Symbol, CARD_COUNT, PAIR_COUNT};
//!
//! let rect = Rect::new(2, 2, 12, 6);
//! assert!(rect.contains(Point::new(2, 2)));
//! assert!(!rect.contains(Point::new(14, 2)));
//!
//! assert_eq!(Symbol::from_id(3), Some(Symbol::Star));
//! assert_eq!(Symbol::ALL.len(), PAIR_COUNT);
//! assert_eq!(CARD_COUNT, 2 * PAIR_COUNT);
//! ```

/// Number of card rows on the table
pub const GRID_ROWS: usize = 3;

/// Number of card columns on the table
pub const GRID_COLS: usize = 4;

/// Number of distinct symbols (and pairs to find)
pub const PAIR_COUNT: usize = 6;

/// Total number of cards dealt
pub const CARD_COUNT: usize = GRID_ROWS * GRID_COLS;

/// Card width in table columns
pub const CARD_WIDTH: i32 = 12;

/// Card height in table rows
pub const CARD_HEIGHT: i32 = 6;

/// Horizontal spacing between cards
pub const CARD_GAP_X: i32 = 2;

/// Vertical spacing between cards
pub const CARD_GAP_Y: i32 = 1;

/// X coordinate of the first card column
pub const START_X: i32 = 2;

/// Y coordinate of the first card row
pub const START_Y: i32 = 2;

/// Table width: cards plus gaps plus a symmetric margin
pub const TABLE_WIDTH: i32 =
    START_X * 2 + GRID_COLS as i32 * CARD_WIDTH + (GRID_COLS as i32 - 1) * CARD_GAP_X;

/// Table height: cards plus gaps plus a symmetric margin
pub const TABLE_HEIGHT: i32 =
    START_Y * 2 + GRID_ROWS as i32 * CARD_HEIGHT + (GRID_ROWS as i32 - 1) * CARD_GAP_Y;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long a mismatched pair stays revealed before flipping back (1 second)
pub const REVEAL_MS: u32 = 1000;


/// The six card symbols
///
/// Each symbol appears on exactly two cards. The numeric id (1-6) is the
/// symbol's stable identity; how it is drawn is up to the renderer.
/// - **Circle**: filled disc
/// - **Triangle**: upward triangle
/// - **Star**: four-pointed star
/// - **Square**: filled block
/// - **Diamond**: rhombus
/// - **Ring**: hollow circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Circle,
    Triangle,
    Star,
    Square,
    Diamond,
    Ring,
}

impl Symbol {
    /// All symbols in id order
    pub const ALL: [Symbol; PAIR_COUNT] = [
        Symbol::Circle,
        Symbol::Triangle,
        Symbol::Star,
        Symbol::Square,
        Symbol::Diamond,
        Symbol::Ring,
    ];

    /// Numeric symbol id (1-6)
    pub fn id(&self) -> u8 {
        match self {
            Symbol::Circle => 1,
            Symbol::Triangle => 2,
            Symbol::Star => 3,
            Symbol::Square => 4,
            Symbol::Diamond => 5,
            Symbol::Ring => 6,
        }
    }

    /// Look up a symbol by id
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::Symbol;
    ///
    /// assert_eq!(Symbol::from_id(1), Some(Symbol::Circle));
    /// assert_eq!(Symbol::from_id(6), Some(Symbol::Ring));
    /// assert_eq!(Symbol::from_id(9), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Symbol::Circle),
            2 => Some(Symbol::Triangle),
            3 => Some(Symbol::Star),
            4 => Some(Symbol::Square),
            5 => Some(Symbol::Diamond),
            6 => Some(Symbol::Ring),
            _ => None,
        }
    }

    /// Lowercase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Circle => "circle",
            Symbol::Triangle => "triangle",
            Symbol::Star => "star",
            Symbol::Square => "square",
            Symbol::Diamond => "diamond",
            Symbol::Ring => "ring",
        }
    }
}

/// A point in table coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in table coordinates
///
/// Edges are half-open: a rect covers `x..x + width` and `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check whether a point lies inside the rectangle
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Check whether two rectangles share any area
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Center point (rounded toward the top-left)
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Game actions that can be applied to the game state
///
/// Produced by the input layer (mouse and keyboard) after mapping
/// screen positions into table coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Primary-button press at a table point
    Click(Point),
    /// Deal a fresh board and start over
    Restart,
}
