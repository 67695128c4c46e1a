//! Terminal rendering for the falling-block game.
//!
//! Frames are drawn into a plain [`FrameBuffer`] by [`GameView`] and flushed
//! by [`TerminalRenderer`], which only rewrites cells that changed. Board
//! cells are two columns wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
