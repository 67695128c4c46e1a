//! RNG module - deterministic piece and color selection
//!
//! Every new piece gets a shape and a color drawn independently and uniformly.
//! The generator is a simple LCG so a seed replays the same game.

use crate::types::{Color, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The high bits of an LCG are the well-mixed ones.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Uniform index into a collection of `len` elements.
    pub fn pick(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }

    /// Random piece kind.
    pub fn piece_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.pick(PieceKind::ALL.len())]
    }

    /// Random palette color.
    pub fn color(&mut self) -> Color {
        Color::PALETTE[self.pick(Color::PALETTE.len())]
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
