//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Own every piece of display state here, never in the game logic
//! - Share one table placement between drawing and mouse hit-testing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use fb::{BoxChars, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{symbol_face, AnchorY, GameView, SymbolFace, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
