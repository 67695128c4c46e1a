use crate::board::FullRows;
use crate::game_state::{Phase, Piece};
use crate::shape::Shape;
use crate::types::{Color, PieceKind, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Board coordinates of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Read-only copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub variant: Variant,
    pub width: u8,
    pub height: u8,
    /// Row-major palette codes: 0 = empty, index + 1 = color.
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub phase: Phase,
    pub alert: Option<&'static str>,
    pub fading_rows: FullRows,
    pub fade_opacity: f32,
    pub drop_counter_ms: u32,
}

impl GameSnapshot {
    /// Palette code at (x, y); 0 when empty or out of bounds.
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        if x >= self.width as usize || y >= self.height as usize {
            return 0;
        }
        self.board
            .get(y * self.width as usize + x)
            .copied()
            .unwrap_or(0)
    }

    pub fn is_fading(&self, y: usize) -> bool {
        self.fading_rows.iter().any(|&r| r as usize == y)
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running && self.alert.is_none()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let variant = Variant::default();
        let (width, height) = (variant.board_width(), variant.board_height());
        Self {
            variant,
            width,
            height,
            board: vec![0; width as usize * height as usize],
            active: None,
            score: 0,
            phase: Phase::Idle,
            alert: None,
            fading_rows: FullRows::new(),
            fade_opacity: 1.0,
            drop_counter_ms: 0,
        }
    }
}
