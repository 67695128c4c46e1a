//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Phase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Button, Color, Rect};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(0, 0, 0);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Rows between the board frame and the button bar, plus the bar itself.
const BUTTON_BAR_ROWS: u16 = 3;

const BUTTON_ROWS: [&[Button]; 2] = [
    &[Button::Left, Button::Right, Button::Down, Button::Rotate],
    &[Button::Start, Button::Pause, Button::Restart],
];

/// Frame placement for one viewport.
#[derive(Debug, Clone, Copy)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// A lightweight terminal renderer for the falling-block game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let frame_w = (snap.width as u16) * self.cell_w + 2;
        let frame_h = (snap.height as u16) * self.cell_h + 2;
        let total_h = if snap.variant.has_controls() {
            frame_h + BUTTON_BAR_ROWS
        } else {
            frame_h
        };

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            start_x,
            start_y,
            frame_w,
            frame_h,
        }
    }

    /// Screen rectangles of the on-screen buttons, in the order they are drawn.
    ///
    /// Empty for variants without a button bar.
    pub fn button_layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Vec<(Button, Rect)> {
        let mut out = Vec::with_capacity(Button::ALL.len());
        if !snap.variant.has_controls() {
            return out;
        }

        let l = self.layout(snap, viewport);
        let frame_mid = l.start_x + l.frame_w / 2;
        for (row, buttons) in BUTTON_ROWS.iter().enumerate() {
            let y = l.start_y + l.frame_h + 1 + row as u16;
            let widths = buttons.iter().map(|b| button_width(*b));
            let row_w: u16 = widths.clone().sum::<u16>() + buttons.len() as u16 - 1;
            let mut x = frame_mid.saturating_sub(row_w / 2);
            for (button, w) in buttons.iter().zip(widths) {
                out.push((*button, Rect::new(x, y, w, 1)));
                x += w + 1;
            }
        }
        out
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(
            CellStyle {
                bg: SCREEN_BG,
                ..CellStyle::default()
            }
            .into_cell(' '),
        );

        let l = self.layout(snap, viewport);
        let board_px_w = l.frame_w - 2;
        let board_px_h = l.frame_h - 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: SCREEN_BG,
            bold: false,
            dim: false,
        };
        let bg = CellStyle {
            fg: Rgb::new(60, 60, 60),
            bg: BOARD_BG,
            bold: false,
            dim: false,
        };

        fb.fill_rect(l.start_x + 1, l.start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, l.start_x, l.start_y, l.frame_w, l.frame_h, border);

        // Solidified cells. Rows being cleared are drawn with reduced opacity.
        for y in 0..snap.height as usize {
            let opacity = if snap.is_fading(y) {
                snap.fade_opacity
            } else {
                1.0
            };
            for x in 0..snap.width as usize {
                if let Some(color) = Color::from_code(snap.cell(x, y)) {
                    let fg = Rgb::from(color).blend(BOARD_BG, opacity);
                    self.draw_block(fb, &l, x as u16, y as u16, fg);
                }
            }
        }

        // Active piece; cells above the board are not drawn.
        if let Some(active) = snap.active {
            let fg = Rgb::from(active.color);
            for (x, y) in active.cells() {
                if x >= 0 && (x as u8) < snap.width && y >= 0 && (y as u8) < snap.height {
                    self.draw_block(fb, &l, x as u16, y as u16, fg);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, &l);

        if snap.variant.has_controls() {
            self.draw_buttons(fb, snap, viewport);
        }

        if let Some(message) = snap.alert {
            self.draw_alert(fb, &l, message);
        } else if snap.game_over() {
            self.draw_overlay_text(fb, &l, "GAME OVER");
        } else if snap.paused() {
            self.draw_overlay_text(fb, &l, "PAUSED");
        } else if snap.phase == Phase::Idle {
            self.draw_overlay_text(fb, &l, "PRESS START");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, l: &Layout, cell_x: u16, cell_y: u16, fg: Rgb) {
        let style = CellStyle {
            fg,
            bg: BOARD_BG,
            bold: false,
            dim: false,
        };
        let px = l.start_x + 1 + cell_x * self.cell_w;
        let py = l.start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, l: &Layout) {
        let panel_x = l.start_x.saturating_add(l.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: SCREEN_BG,
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            bold: false,
            ..label
        };
        let hint = CellStyle {
            fg: Rgb::new(150, 150, 150),
            dim: true,
            ..value
        };

        let mut y = l.start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, value);
        y += 2;

        let hints: &[&str] = if snap.variant.has_controls() {
            &["←→ move", "↓ drop", "↑ rotate", "s start", "p pause", "r restart", "q quit"]
        } else {
            &["←→ move", "↓ drop", "↑ rotate", "q quit"]
        };
        for line in hints {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_buttons(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let active = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(50, 50, 60),
            bold: true,
            dim: false,
        };
        let inactive = CellStyle {
            fg: Rgb::new(120, 120, 120),
            bold: false,
            dim: true,
            ..active
        };

        for (button, rect) in self.button_layout(snap, viewport) {
            let style = if button_enabled(button, snap) {
                active
            } else {
                inactive
            };
            fb.put_char(rect.x, rect.y, '[', style);
            fb.put_str(rect.x + 1, rect.y, button.label(), style);
            fb.put_char(rect.x + rect.width - 1, rect.y, ']', style);
        }
    }

    fn draw_alert(&self, fb: &mut FrameBuffer, l: &Layout, message: &str) {
        const FOOTER: &str = "[Enter] OK";
        let text_w = message.chars().count().max(FOOTER.len()) as u16;
        let box_w = text_w + 4;
        let box_h = 5;
        let x = l.start_x + l.frame_w.saturating_sub(box_w) / 2;
        let y = l.start_y + l.frame_h.saturating_sub(box_h) / 2;

        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(40, 40, 60),
            bold: true,
            dim: false,
        };
        fb.fill_rect(x, y, box_w, box_h, ' ', style);
        self.draw_border(fb, x, y, box_w, box_h, style);
        fb.put_str(x + 2, y + 1, message, style);
        let footer_x = x + box_w.saturating_sub(FOOTER.len() as u16) / 2;
        fb.put_str(footer_x, y + 3, FOOTER, CellStyle { bold: false, ..style });
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, l: &Layout, text: &str) {
        let mid_y = l.start_y.saturating_add(l.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = l.start_x.saturating_add(l.frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: SCREEN_BG,
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Width of a button drawn as `[label]`.
fn button_width(button: Button) -> u16 {
    button.label().len() as u16 + 2
}

fn button_enabled(button: Button, snap: &GameSnapshot) -> bool {
    if snap.alert.is_some() {
        return false;
    }
    match button {
        Button::Start => matches!(snap.phase, Phase::Idle | Phase::Paused),
        Button::Pause => snap.phase == Phase::Running,
        Button::Restart => true,
        Button::Left | Button::Right | Button::Down | Button::Rotate => {
            snap.playable() && snap.fading_rows.is_empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Variant;

    fn controls_snapshot() -> GameSnapshot {
        let variant = Variant::Controls;
        GameSnapshot {
            variant,
            width: variant.board_width(),
            height: variant.board_height(),
            board: vec![0; variant.board_width() as usize * variant.board_height() as usize],
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn keyboard_variant_has_no_buttons() {
        let snap = GameSnapshot::default();
        let view = GameView::default();
        assert!(view.button_layout(&snap, Viewport::new(80, 40)).is_empty());
    }

    #[test]
    fn button_rects_do_not_overlap_and_sit_below_frame() {
        let snap = controls_snapshot();
        let view = GameView::default();
        let vp = Viewport::new(80, 40);
        let buttons = view.button_layout(&snap, vp);
        assert_eq!(buttons.len(), 7);

        // 25 rows + border, centered with the 3-row bar: (40 - 30) / 2 = 5.
        let frame_bottom = 5 + 27;
        for (_, r) in &buttons {
            assert!(r.y >= frame_bottom);
        }
        for (i, (_, a)) in buttons.iter().enumerate() {
            for (_, b) in &buttons[i + 1..] {
                let overlap = a.y == b.y && a.x < b.x + b.width && b.x < a.x + a.width;
                assert!(!overlap, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn start_is_the_only_enabled_control_before_start() {
        let snap = controls_snapshot();
        assert_eq!(snap.phase, Phase::Idle);
        assert!(button_enabled(Button::Start, &snap));
        assert!(!button_enabled(Button::Pause, &snap));
        assert!(!button_enabled(Button::Left, &snap));
    }
}
