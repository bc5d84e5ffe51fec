//! Named colors used by the factory rainbows.
//!
//! The hue wheel is split into twelve fully saturated steps at 0, 127 and 255
//! channel intensity, plus white, off and two half-intensity tints.

use crate::color::Color;

pub const RED: Color = Color::new(255, 0, 0);
pub const ORANGE: Color = Color::new(255, 127, 0);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const YELLOW_GREEN: Color = Color::new(127, 255, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const GREEN_BLUE: Color = Color::new(0, 255, 127);
pub const SKY_BLUE: Color = Color::new(0, 255, 255);
pub const DEEP_BLUE: Color = Color::new(0, 127, 255);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const PURPLE_BLUE: Color = Color::new(127, 0, 255);
pub const PURPLE: Color = Color::new(255, 0, 255);
pub const DARK_PURPLE: Color = Color::new(255, 0, 127);

pub const WHITE: Color = Color::new(255, 255, 255);
pub const OFF: Color = Color::new(0, 0, 0);

/// Half-intensity red, used between white and red in the red/white pattern.
pub const DIM_RED: Color = Color::new(127, 0, 0);
/// Half-intensity green, used between white and green in the green/white pattern.
pub const DIM_GREEN: Color = Color::new(0, 127, 0);
