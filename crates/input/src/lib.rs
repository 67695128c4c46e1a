//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`]s.
//! Nothing here touches the game state; the run loop decides what to do with
//! the actions.

pub mod map;
pub mod mouse;

pub use blockfall_types as types;

pub use map::{dismisses_alert, handle_key_event, is_actionable, should_quit};
pub use mouse::{handle_mouse_event, is_click};
