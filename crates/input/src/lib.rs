//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into quit requests, restarts, and
//! primary-button presses in screen coordinates. Turning a screen position
//! into a table point is the view's job, since only it knows the layout.

pub mod map;

pub use memory_match_types as types;

pub use map::{handle_key_event, primary_press, should_quit, ScreenPos};
