//! Row clear animation.
//!
//! Full rows fade out over [`CLEAR_ANIMATION_MS`](crate::types::CLEAR_ANIMATION_MS)
//! in [`CLEAR_ANIMATION_STEPS`] equal steps before they are removed. The animation is a small state machine
//! advanced by the game tick:
//!
//! ```text
//! Idle --start(rows)--> Fading { step: 1 } --advance--> ... Fading { step: 9 }
//!                                                            |
//!                          Idle <--rows returned (cleared)---+
//! ```
//!
//! Step 1 applies as soon as the animation starts, and every further step
//! takes [`CLEAR_STEP_MS`]. Reaching the last step ends the animation and hands
//! the rows back to the caller for removal.

use crate::board::FullRows;
use crate::types::{CLEAR_ANIMATION_STEPS, CLEAR_STEP_MS};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClearAnimation {
    #[default]
    Idle,
    Fading {
        rows: FullRows,
        step: u8,
        elapsed_ms: u32,
    },
}

impl ClearAnimation {
    /// Begin fading `rows`. An empty row set stays idle.
    pub fn start(rows: FullRows) -> Self {
        if rows.is_empty() {
            return ClearAnimation::Idle;
        }
        ClearAnimation::Fading {
            rows,
            step: 1,
            elapsed_ms: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ClearAnimation::Fading { .. })
    }

    /// Rows being faded (empty when idle).
    pub fn rows(&self) -> &[u8] {
        match self {
            ClearAnimation::Idle => &[],
            ClearAnimation::Fading { rows, .. } => rows.as_slice(),
        }
    }

    /// Current step, 0 when idle.
    pub fn step(&self) -> u8 {
        match self {
            ClearAnimation::Idle => 0,
            ClearAnimation::Fading { step, .. } => *step,
        }
    }

    /// Draw opacity of the fading rows: `1 - step / steps`.
    pub fn opacity(&self) -> f32 {
        1.0 - self.step() as f32 / CLEAR_ANIMATION_STEPS as f32
    }

    /// Advance by `elapsed_ms`.
    ///
    /// Returns the rows to remove once the final step is reached; the animation
    /// is idle again afterwards.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<FullRows> {
        let ClearAnimation::Fading {
            step, elapsed_ms: acc, ..
        } = self
        else {
            return None;
        };

        *acc += elapsed_ms;
        while *acc >= CLEAR_STEP_MS && *step < CLEAR_ANIMATION_STEPS {
            *acc -= CLEAR_STEP_MS;
            *step += 1;
        }

        if *step < CLEAR_ANIMATION_STEPS {
            return None;
        }

        match std::mem::take(self) {
            ClearAnimation::Fading { rows, .. } => Some(rows),
            ClearAnimation::Idle => None,
        }
    }

    /// Add newly completed rows to a running fade, or start one.
    ///
    /// Rows already fading are not added twice and the current step is kept.
    pub fn merge(&mut self, full: FullRows) {
        match self {
            ClearAnimation::Idle => *self = ClearAnimation::start(full),
            ClearAnimation::Fading { rows, .. } => {
                for y in full {
                    if !rows.contains(&y) {
                        rows.push(y);
                    }
                }
                rows.sort_unstable();
            }
        }
    }

    /// Drop the animation without clearing anything.
    pub fn cancel(&mut self) {
        *self = ClearAnimation::Idle;
    }
}
