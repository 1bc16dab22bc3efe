//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state management for the memory
//! matching game. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Testable**: Every transition of the turn state machine is unit tested
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the twelve cards, their fixed 3x4 layout, and shuffle-and-deal
//! - [`game_state`]: the turn controller (selection, match/mismatch, reveal timer, win)
//! - [`rng`]: seeded LCG with Fisher-Yates shuffling
//! - [`snapshot`]: render-facing copy of the state
//!
//! # Game Rules
//!
//! - Six symbols, each on two cards, shuffled into a 3x4 grid
//! - Click a face-down card to turn it up, then click a second one
//! - A matching pair stays face-up for the rest of the game
//! - A mismatched pair stays visible for one second, then turns back down;
//!   clicks are ignored meanwhile
//! - Finding all six pairs wins; the board then ignores input until restart
//!
//! # Example
//!
//! ```
//! use memory_match_core::{Board, ClickOutcome, GameState};
//! use memory_match_types::{GameAction, REVEAL_MS};
//!
//! // Scripted board: slots 0 and 1 hold the same symbol.
//! let mut game = GameState::with_board(Board::from_symbols(Board::symbol_pairs()), 1);
//!
//! let p0 = game.board().cards()[0].rect().center();
//! let p2 = game.board().cards()[2].rect().center();
//! assert_eq!(game.apply_action(GameAction::Click(p0)), ClickOutcome::Flipped);
//! assert_eq!(game.apply_action(GameAction::Click(p2)), ClickOutcome::Mismatched);
//! assert!(game.input_locked());
//!
//! // The frame loop advances the reveal timer.
//! assert!(game.tick(REVEAL_MS));
//! assert!(!game.input_locked());
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time (`TICK_MS` in the default runner).

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use board::{slot_rect, Board, Card};
pub use game_state::{ClickOutcome, GameState, Phase};
pub use rng::SimpleRng;
pub use snapshot::{CardFace, CardSnapshot, GameSnapshot};
