//! Game state module - manages the complete game state
//!
//! This module ties together the board, the falling piece, the RNG and the row
//! clear animation. It owns the per-frame loop (gravity, collision,
//! solidification, row removal) and applies player actions.
//!
//! Moves are always checked on a candidate piece before being committed, so
//! the live piece never sits in a colliding position.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::clear::ClearAnimation;
use crate::rng::SimpleRng;
use crate::shape::{shape_of, Shape};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece with the spawn matrix of `kind` at `position`.
    pub fn new(kind: PieceKind, color: Color, position: (i8, i8)) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            color,
            x: position.0,
            y: position.1,
        }
    }

    /// Copy of this piece shifted by (dx, dy).
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy of this piece rotated 90° clockwise around its anchor.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Board coordinates of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for Start (controls variant only).
    Idle,
    Running,
    Paused,
    /// The last spawn collided; only Restart leaves this phase.
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "game_over",
        }
    }
}

/// Notable changes, queued for observers (logging, event log).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Solidified {
        kind: PieceKind,
        color: Color,
        x: i8,
        y: i8,
    },
    RowsCleared {
        rows: u8,
        score: u32,
    },
    GameOver {
        score: u32,
    },
    Restarted,
}

/// Events produced since the last drain. A frame produces at most a few.
pub type GameEvents = ArrayVec<GameEvent, 8>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    variant: Variant,
    board: Board,
    piece: Piece,
    rng: SimpleRng,
    seed: u32,
    score: u32,
    drop_counter_ms: u32,
    phase: Phase,
    clear: ClearAnimation,
    alert: Option<&'static str>,
    events: GameEvents,
}

impl GameState {
    /// Create a new game for `variant` with the given RNG seed.
    ///
    /// The first piece is an O at [`INITIAL_POSITION`] with a random color. The
    /// keyboard variant starts running at once; the controls variant waits
    /// for [`GameAction::Start`].
    pub fn new(variant: Variant, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let piece = Piece::new(PieceKind::O, rng.color(), INITIAL_POSITION);
        let phase = if variant.has_controls() {
            Phase::Idle
        } else {
            Phase::Running
        };

        Self {
            variant,
            board: Board::new(variant.board_width(), variant.board_height()),
            piece,
            rng,
            seed,
            score: 0,
            drop_counter_ms: 0,
            phase,
            clear: ClearAnimation::Idle,
            alert: None,
            events: GameEvents::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Replace the active piece. Rejected (returns false) if it collides.
    pub fn set_piece(&mut self, piece: Piece) -> bool {
        if piece.collides(&self.board) {
            return false;
        }
        self.piece = piece;
        true
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn clear_animation(&self) -> &ClearAnimation {
        &self.clear
    }

    /// Pending blocking notification, if any.
    pub fn alert(&self) -> Option<&'static str> {
        self.alert
    }

    /// Acknowledge the pending notification. Returns false if there was none.
    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    /// Whether the frame loop should keep ticking.
    pub fn running(&self) -> bool {
        self.phase == Phase::Running && self.alert.is_none()
    }

    /// Take the events produced since the last call.
    pub fn take_events(&mut self) -> GameEvents {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.try_push(event).is_err() {
            log::warn!("event queue full, dropping {:?}", event);
        }
    }

    /// Main game tick: row fade, gravity, collision, solidification.
    ///
    /// Returns true if anything changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.running() {
            return false;
        }

        // The fade runs alongside gravity.
        let fading = self.clear.is_active();
        if let Some(rows) = self.clear.advance(elapsed_ms) {
            self.remove_rows(&rows);
            if !self.running() {
                return true;
            }
        }

        self.drop_counter_ms += elapsed_ms;
        if self.drop_counter_ms > DROP_INTERVAL_MS {
            self.drop_counter_ms = 0;
            self.step_down();
            return true;
        }

        fading
    }

    /// Apply a game action
    ///
    /// Returns true if the action changed the game. Actions are ignored while
    /// a notification is pending.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.alert.is_some() {
            return false;
        }

        match action {
            GameAction::Start => self.start(),
            GameAction::Pause => self.pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
            _ if !self.running() => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => {
                self.step_down();
                true
            }
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Start from Idle, or resume from Paused.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::Paused => {
                self.phase = Phase::Running;
                true
            }
            Phase::Running | Phase::GameOver => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    /// Empty board, zero score, random piece at [`INITIAL_POSITION`], running.
    ///
    /// Any row fade in progress is dropped.
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.drop_counter_ms = 0;
        self.clear.cancel();
        self.alert = None;
        self.piece = Piece::new(self.rng.piece_kind(), self.rng.color(), INITIAL_POSITION);
        self.phase = Phase::Running;
        self.push_event(GameEvent::Restarted);
        log::info!("game restarted");
    }

    /// Try to move the active piece
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let candidate = self.piece.moved(dx, dy);
        if candidate.collides(&self.board) {
            return false;
        }
        self.piece = candidate;
        true
    }

    /// Try to rotate the active piece clockwise; the old shape stays on collision.
    pub fn try_rotate(&mut self) -> bool {
        let candidate = self.piece.rotated();
        if candidate.collides(&self.board) {
            return false;
        }
        self.piece = candidate;
        true
    }

    /// One row of gravity: move down, or solidify if the row below is blocked.
    fn step_down(&mut self) {
        if !self.try_move(0, 1) {
            self.solidify();
        }
    }

    /// Write the piece into the board, spawn the next one and look for full rows.
    pub fn solidify(&mut self) {
        let piece = self.piece;
        self.board
            .stamp(&piece.shape, piece.x, piece.y, Some(piece.color));
        self.push_event(GameEvent::Solidified {
            kind: piece.kind,
            color: piece.color,
            x: piece.x,
            y: piece.y,
        });

        self.spawn_piece();

        if self.phase != Phase::GameOver {
            // Rows already fading stay full, so the scan finds them again.
            self.clear.merge(self.board.full_rows());
            if self.clear.is_active() {
                log::debug!("fading rows {:?}", self.clear.rows());
            }
        }
    }

    /// Spawn a random piece at the spawn position; game over if it collides.
    fn spawn_piece(&mut self) {
        let kind = self.rng.piece_kind();
        let color = self.rng.color();
        self.piece = Piece::new(kind, color, spawn_position(self.board.width()));
        log::debug!("spawned {} ({})", kind.as_str(), color.as_str());

        if self.piece.collides(&self.board) {
            self.end_game();
        }
    }

    /// Remove `rows` (ascending) and score them.
    fn remove_rows(&mut self, rows: &[u8]) {
        let mut removed: u8 = 0;
        for &y in rows {
            if self.board.remove_row(y as usize) {
                self.score += ROW_SCORE;
                removed += 1;
            }
        }

        self.push_event(GameEvent::RowsCleared {
            rows: removed,
            score: self.score,
        });
        log::info!("cleared {} row(s), score {}", removed, self.score);

        // The shift can move cells into a piece spawned before the fade.
        if self.piece.collides(&self.board) {
            self.end_game();
        }
    }

    fn end_game(&mut self) {
        self.alert = Some(GAME_OVER_MESSAGE);
        self.board.clear();
        self.clear.cancel();
        self.drop_counter_ms = 0;
        self.phase = Phase::GameOver;
        self.push_event(GameEvent::GameOver { score: self.score });
        log::info!("game over, score {}", self.score);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.variant = self.variant;
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_codes(&mut out.board);
        out.active = if self.game_over() {
            None
        } else {
            Some(self.piece.into())
        };
        out.score = self.score;
        out.phase = self.phase;
        out.alert = self.alert;
        out.fading_rows = self.clear.rows().iter().copied().collect();
        out.fade_opacity = self.clear.opacity();
        out.drop_counter_ms = self.drop_counter_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Variant::default(), 1)
    }
}
