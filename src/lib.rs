#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: One RGB color packed as `0x00RRGGBB`
//! - **`Rainbow`**: A bounded, cyclic sequence of colors whose length is fixed at construction
//! - **`RainbowBuilder`**: Builds a rainbow from colors and repeated cycles
//! - **`Catalog`**: Read-only set of rainbows addressed by `RainbowId`
//! - **`CatalogBuilder`**: Registers rainbows once during start-up
//! - **`LedStrip`**: Trait to implement for your LED strip driver
//! - **`presets`**: The factory rainbows
//!
//! The animation loop owns the step counter. It looks a rainbow up once per
//! palette switch and then asks for `color_at(step)` every frame; the rainbow
//! wraps the step around its length.

// Re-export Srgb from palette for driver implementations
pub use palette::Srgb;

pub mod catalog;
pub mod color;
pub mod colors;
pub mod presets;
pub mod rainbow;
pub mod strip;
pub mod types;

pub use catalog::{Catalog, CatalogBuilder, RainbowId};
pub use color::Color;
pub use colors::*;
pub use presets::{DEFAULT_RAINBOW, PRESET_COUNT, PresetCatalog};
pub use rainbow::{Cycle, Rainbow, RainbowBuilder};
pub use strip::{LedStrip, render};
pub use types::{Channel, InvalidPaletteReason, PaletteError};

/// Color capacity of every controller rainbow.
pub const MAX_RAINBOW_COLORS: usize = 12;

/// Rainbow sized for the controller.
pub type StandardRainbow = Rainbow<MAX_RAINBOW_COLORS>;
