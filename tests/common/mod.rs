//! Shared test infrastructure for rainbow-palettes integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rainbow_palettes::{Color, LedStrip, Rainbow};

// ============================================================================
// Mock LED Strip
// ============================================================================

/// Mock strip that records every frame written to it
pub struct MockStrip {
    frames: heapless::Vec<heapless::Vec<Color, 16>, 8>,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            frames: heapless::Vec::new(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> &[Color] {
        &self.frames[index]
    }

    pub fn last_frame(&self) -> Option<&[Color]> {
        self.frames.last().map(|frame| frame.as_slice())
    }
}

impl LedStrip for MockStrip {
    fn write(&mut self, pixels: &[Color]) {
        let mut frame = heapless::Vec::new();
        for pixel in pixels {
            let _ = frame.push(*pixel);
        }
        let _ = self.frames.push(frame);
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use rainbow_palettes::{
    BLUE, DEEP_BLUE, GREEN, OFF, ORANGE, PURPLE, RED, SKY_BLUE, WHITE, YELLOW,
};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// The classic six-color rainbow
pub const ROYGBIV: [Color; 6] = [RED, YELLOW, GREEN, SKY_BLUE, BLUE, PURPLE];

/// Build a rainbow that must be valid for the test to make sense
pub fn rainbow<const N: usize>(colors: &[Color]) -> Rainbow<N> {
    Rainbow::new(colors, colors.len()).unwrap()
}

/// Collect the colors shown over `steps` consecutive steps
pub fn sample<const N: usize>(rainbow: &Rainbow<N>, start: u64, steps: usize) -> heapless::Vec<Color, 64> {
    rainbow.cycle(start).take(steps).collect()
}
