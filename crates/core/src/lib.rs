//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and the per-frame loop. It has no
//! dependency on terminals, input devices or files, which makes it:
//!
//! - **Deterministic**: the same seed replays the same sequence of pieces
//! - **Testable**: every rule is exercised by plain unit tests
//! - **Portable**: the same state drives the terminal renderer or a headless run
//!
//! # Module Structure
//!
//! - [`board`]: the grid, collision predicate and row removal
//! - [`shape`]: piece matrices and clockwise rotation by transposition
//! - [`game_state`]: active piece, gravity, solidification, score and phases
//! - [`clear`]: the step-based fade that precedes row removal
//! - [`rng`]: seeded LCG used to pick shapes and colors
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Game Rules
//!
//! - **Gravity**: the piece falls one row once more than 600ms have accumulated
//! - **Collision**: walls and floor are solid, the space above the board is not
//! - **Rotation**: 90° clockwise, rejected on collision, no wall kicks
//! - **Row clear**: full rows fade for 500ms in 10 steps, then score 10 each
//! - **Game over**: a freshly spawned piece that already collides
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, Variant};
//!
//! let mut game = GameState::new(Variant::Keyboard, 12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::SoftDrop);
//!
//! // A frame worth of time rarely triggers gravity.
//! game.tick(16);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod clear;
pub mod game_state;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, FullRows, MAX_BOARD_HEIGHT};
pub use clear::ClearAnimation;
pub use game_state::{GameEvent, GameEvents, GameState, Phase, Piece};
pub use rng::SimpleRng;
pub use shape::{shape_of, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
