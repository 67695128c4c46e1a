//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! used by the core logic, the terminal renderer and the input mapping alike.
//!
//! # Board Dimensions
//!
//! The playfield is 14 columns wide. Its height depends on the [`Variant`]:
//!
//! - **keyboard**: 30 rows, arrow keys only
//! - **controls**: 25 rows, arrow keys plus an on-screen button bar
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 600 | Gravity: the piece falls once the drop counter exceeds this |
//! | `CLEAR_ANIMATION_MS` | 500 | Total duration of the row fade |
//! | `CLEAR_ANIMATION_STEPS` | 10 | Number of opacity steps in the row fade |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Button, Color, GameAction, PieceKind, Variant, BOARD_WIDTH};
//!
//! // Board cells store palette codes (index + 1).
//! assert_eq!(Color::Cyan.code(), 1);
//! assert_eq!(Color::from_code(5), Some(Color::Yellow));
//!
//! // Buttons carry the action they trigger
//! assert_eq!(Button::Rotate.action(), GameAction::Rotate);
//!
//! // Variant presets
//! assert_eq!(Variant::Keyboard.board_height(), 30);
//! assert_eq!(Variant::Controls.board_height(), 25);
//! assert_eq!(BOARD_WIDTH, 14);
//! assert_eq!(PieceKind::ALL.len(), 7);
//! ```

/// Board width in cells (14 columns)
pub const BOARD_WIDTH: u8 = 14;

/// Board height of the keyboard-only variant
pub const KEYBOARD_BOARD_HEIGHT: u8 = 30;

/// Board height of the variant with on-screen controls
pub const CONTROLS_BOARD_HEIGHT: u8 = 25;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity threshold: the piece drops one row once the drop counter is strictly above it.
pub const DROP_INTERVAL_MS: u32 = 600;

/// Duration of the row clear fade.
pub const CLEAR_ANIMATION_MS: u32 = 500;

/// Number of opacity steps in the row clear fade.
pub const CLEAR_ANIMATION_STEPS: u8 = 10;

/// Duration of a single fade step (50ms).
pub const CLEAR_STEP_MS: u32 = CLEAR_ANIMATION_MS / CLEAR_ANIMATION_STEPS as u32;

/// Points awarded per removed row.
pub const ROW_SCORE: u32 = 10;

/// Position of the first piece and of the piece placed on restart.
pub const INITIAL_POSITION: (i8, i8) = (6, 5);

/// Message of the blocking game over notification.
pub const GAME_OVER_MESSAGE: &str = "El juego ha terminado";

/// Spawn position for pieces after a solidification: `(width / 2 - 2, 0)`.
pub const fn spawn_position(board_width: u8) -> (i8, i8) {
    ((board_width / 2) as i8 - 2, 0)
}

/// Game variant: board height plus the available controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// 14x30 board, arrow keys only, starts immediately.
    #[default]
    Keyboard,
    /// 14x25 board, arrow keys plus start/pause/restart buttons, waits for start.
    Controls,
}

impl Variant {
    /// Parse a variant name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "keyboard" | "keys" => Some(Variant::Keyboard),
            "controls" | "buttons" => Some(Variant::Controls),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Keyboard => "keyboard",
            Variant::Controls => "controls",
        }
    }

    pub fn board_width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn board_height(&self) -> u8 {
        match self {
            Variant::Keyboard => KEYBOARD_BOARD_HEIGHT,
            Variant::Controls => CONTROLS_BOARD_HEIGHT,
        }
    }

    /// Whether the variant exposes start/pause/restart.
    pub fn has_controls(&self) -> bool {
        matches!(self, Variant::Controls)
    }
}

/// Fixed piece palette.
///
/// Board cells remember only the color of the piece that filled them, so two
/// pieces drawn with the same color look identical once solidified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Orange,
    Purple,
    Red,
    Yellow,
}

impl Color {
    /// Palette in lookup order.
    pub const PALETTE: [Color; 5] = [
        Color::Cyan,
        Color::Orange,
        Color::Purple,
        Color::Red,
        Color::Yellow,
    ];

    /// Position in [`Color::PALETTE`].
    pub fn index(&self) -> usize {
        match self {
            Color::Cyan => 0,
            Color::Orange => 1,
            Color::Purple => 2,
            Color::Red => 3,
            Color::Yellow => 4,
        }
    }

    /// Integer stored for this color in the board grid (index + 1, 0 is empty).
    pub fn code(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`Color::code`]. Returns `None` for 0 and unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => None,
            n => Self::PALETTE.get(n as usize - 1).copied(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Red => "red",
            Color::Yellow => "yellow",
        }
    }
}

/// The seven piece kinds, in the order they are picked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    T,
    L,
    I,
    Z,
    S,
    J,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::J,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::I => "i",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::J => "j",
        }
    }
}

/// Game actions that can be applied to the game state
///
/// Keyboard and button input both end up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; solidifies on collision
    SoftDrop,
    /// Rotate the shape 90° clockwise
    Rotate,
    /// Start the game, or resume it when paused
    Start,
    /// Pause the game loop
    Pause,
    /// Reset board, score and piece
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Start => "start",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// On-screen buttons of the controls variant, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Down,
    Rotate,
    Start,
    Pause,
    Restart,
}

impl Button {
    pub const ALL: [Button; 7] = [
        Button::Left,
        Button::Right,
        Button::Down,
        Button::Rotate,
        Button::Start,
        Button::Pause,
        Button::Restart,
    ];

    /// ASCII only, so one char is one terminal column.
    pub fn label(&self) -> &'static str {
        match self {
            Button::Left => "Left",
            Button::Right => "Right",
            Button::Down => "Down",
            Button::Rotate => "Rotate",
            Button::Start => "Start",
            Button::Pause => "Pause",
            Button::Restart => "Restart",
        }
    }

    pub fn action(&self) -> GameAction {
        match self {
            Button::Left => GameAction::MoveLeft,
            Button::Right => GameAction::MoveRight,
            Button::Down => GameAction::SoftDrop,
            Button::Rotate => GameAction::Rotate,
            Button::Start => GameAction::Start,
            Button::Pause => GameAction::Pause,
            Button::Restart => GameAction::Restart,
        }
    }
}

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.width
            && (y - self.y) < self.height
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled with the specified palette color
pub type Cell = Option<Color>;
