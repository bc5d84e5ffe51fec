//! The factory rainbows shipped with the controller.
//!
//! Each preset is written as its shortest distinct cycle plus a repeat count.
//! The repeat count keeps every rainbow at the length the controller has
//! always used (a six-color cycle shown twice is twelve steps long), so
//! animations that advance one step per LED keep their spacing.

use crate::catalog::{Catalog, RainbowId};
use crate::color::Color;
use crate::colors::*;
use crate::types::PaletteError;
use crate::{MAX_RAINBOW_COLORS, StandardRainbow};

/// Number of factory rainbows.
pub const PRESET_COUNT: usize = 27;

/// Catalog type holding the factory rainbows.
pub type PresetCatalog = Catalog<MAX_RAINBOW_COLORS, PRESET_COUNT>;

/// Rainbow selected when the controller powers up.
pub const DEFAULT_RAINBOW: RainbowId = RainbowId(1);

struct Preset {
    name: &'static str,
    cycle: &'static [Color],
    repeats: usize,
}

const ROYGBIV: [Color; 6] = [RED, YELLOW, GREEN, SKY_BLUE, BLUE, PURPLE];

const GUIDE_1: [Color; 6] = [
    Color::new(255, 255, 163),
    Color::new(255, 180, 149),
    Color::new(214, 98, 168),
    Color::new(106, 45, 138),
    Color::new(65, 42, 120),
    Color::new(14, 13, 90),
];

const GUIDE_2: [Color; 6] = [
    Color::new(127, 188, 255),
    Color::new(173, 216, 217),
    Color::new(238, 243, 196),
    Color::new(255, 215, 127),
    Color::new(255, 168, 112),
    Color::new(249, 106, 74),
];

const FLAMEO_HOTMAN: [Color; 6] = [
    Color::new(204, 0, 102),
    Color::new(213, 37, 83),
    Color::new(223, 74, 65),
    Color::new(232, 111, 46),
    Color::new(241, 148, 28),
    Color::new(255, 204, 0),
];

const PURPLISH: [Color; 6] = [
    Color::new(255, 1, 252),
    Color::new(202, 1, 255),
    Color::new(127, 1, 231),
    Color::new(89, 18, 208),
    Color::new(52, 34, 176),
    Color::new(44, 50, 135),
];

const GUIDE_8: [Color; 6] = [
    Color::new(44, 174, 172),
    Color::new(15, 121, 107),
    Color::new(0, 88, 83),
    Color::new(239, 31, 207),
    Color::new(135, 16, 109),
    Color::new(89, 2, 82),
];

const GUIDE_19: [Color; 6] = [
    Color::new(233, 180, 69),
    Color::new(232, 211, 70),
    Color::new(184, 165, 73),
    Color::new(114, 136, 74),
    Color::new(48, 101, 85),
    Color::new(45, 55, 54),
];

const GUIDE_25: [Color; 6] = [
    Color::new(159, 40, 76),
    Color::new(144, 60, 75),
    Color::new(97, 26, 38),
    Color::new(92, 31, 60),
    Color::new(69, 20, 54),
    Color::new(36, 6, 29),
];

const GUIDE_33: [Color; 5] = [
    Color::new(167, 255, 255),
    Color::new(82, 136, 242),
    Color::new(72, 54, 191),
    Color::new(33, 10, 64),
    Color::new(21, 8, 38),
];

const GUIDE_37: [Color; 5] = [
    Color::new(125, 208, 214),
    Color::new(40, 162, 183),
    Color::new(0, 73, 103),
    Color::new(191, 168, 212),
    Color::new(123, 97, 170),
];

const GUIDE_60: [Color; 5] = [
    Color::new(34, 170, 255),
    Color::new(254, 253, 73),
    Color::new(255, 219, 65),
    Color::new(255, 136, 0),
    Color::new(214, 110, 4),
];

const GUIDE_64: [Color; 5] = [
    Color::new(45, 5, 0),
    Color::new(120, 0, 19),
    Color::new(161, 2, 30),
    Color::new(217, 23, 109),
    Color::new(252, 246, 198),
];

const GUIDE_65: [Color; 5] = [
    Color::new(1, 142, 96),
    Color::new(3, 182, 89),
    Color::new(1, 219, 115),
    Color::new(7, 233, 175),
    Color::new(8, 240, 205),
];

const GUIDE_75: [Color; 5] = [
    Color::new(176, 228, 242),
    Color::new(88, 199, 252),
    Color::new(36, 91, 112),
    Color::new(79, 120, 0),
    Color::new(178, 254, 57),
];

const GUIDE_80: [Color; 5] = [
    Color::new(40, 23, 14),
    Color::new(114, 21, 33),
    Color::new(138, 55, 43),
    Color::new(184, 123, 63),
    Color::new(255, 226, 94),
];

const GUIDE_97: [Color; 5] = [
    Color::new(189, 219, 83),
    Color::new(105, 140, 61),
    Color::new(66, 100, 30),
    Color::new(24, 42, 16),
    Color::new(3, 7, 0),
];

const GUIDE_46: [Color; 5] = [
    Color::new(82, 231, 163),
    Color::new(44, 196, 207),
    Color::new(111, 200, 255),
    Color::new(88, 113, 239),
    Color::new(169, 136, 215),
];

// Index `i` holds rainbow id `i + 1`.
const PRESETS: [Preset; PRESET_COUNT] = [
    Preset { name: "roygbiv", cycle: &ROYGBIV, repeats: 1 },
    Preset { name: "double_roygbiv", cycle: &ROYGBIV, repeats: 2 },
    Preset { name: "primaries", cycle: &[RED, OFF, YELLOW, OFF, BLUE, OFF], repeats: 1 },
    Preset { name: "secondaries", cycle: &[OFF, ORANGE, OFF, GREEN, OFF, PURPLE], repeats: 1 },
    Preset { name: "rgb", cycle: &[OFF, RED, OFF, GREEN, OFF, BLUE], repeats: 1 },
    Preset { name: "blue_yellow", cycle: &[OFF, YELLOW, OFF, BLUE], repeats: 2 },
    Preset { name: "red_sky_blue", cycle: &[OFF, RED, OFF, SKY_BLUE], repeats: 2 },
    Preset { name: "orange_deep_blue", cycle: &[OFF, ORANGE, OFF, DEEP_BLUE], repeats: 2 },
    Preset { name: "guide_1", cycle: &GUIDE_1, repeats: 2 },
    Preset { name: "guide_2", cycle: &GUIDE_2, repeats: 2 },
    Preset { name: "flameo_hotman", cycle: &FLAMEO_HOTMAN, repeats: 2 },
    Preset { name: "purplish", cycle: &PURPLISH, repeats: 2 },
    Preset { name: "guide_8", cycle: &GUIDE_8, repeats: 2 },
    Preset { name: "guide_19", cycle: &GUIDE_19, repeats: 2 },
    Preset { name: "guide_25", cycle: &GUIDE_25, repeats: 2 },
    Preset { name: "guide_33", cycle: &GUIDE_33, repeats: 2 },
    Preset { name: "guide_37", cycle: &GUIDE_37, repeats: 2 },
    Preset { name: "guide_60", cycle: &GUIDE_60, repeats: 2 },
    Preset { name: "guide_64", cycle: &GUIDE_64, repeats: 2 },
    Preset { name: "guide_65", cycle: &GUIDE_65, repeats: 2 },
    Preset { name: "guide_75", cycle: &GUIDE_75, repeats: 2 },
    Preset { name: "guide_80", cycle: &GUIDE_80, repeats: 2 },
    Preset { name: "guide_97", cycle: &GUIDE_97, repeats: 2 },
    Preset { name: "guide_46", cycle: &GUIDE_46, repeats: 2 },
    Preset { name: "blue_white", cycle: &[WHITE, SKY_BLUE, BLUE, DEEP_BLUE], repeats: 2 },
    Preset { name: "red_white", cycle: &[WHITE, DIM_RED, RED, DIM_RED], repeats: 2 },
    Preset { name: "green_white", cycle: &[WHITE, DIM_GREEN, GREEN, DIM_GREEN], repeats: 2 },
];

/// Builds the catalog of factory rainbows, ids `1..=PRESET_COUNT`.
///
/// Call once during start-up. An error here means the preset table itself is
/// malformed; the animation loop must not start with a partial catalog.
///
/// # Errors
/// * `InvalidPalette` - A preset does not fit in `MAX_RAINBOW_COLORS`
pub fn catalog() -> Result<PresetCatalog, PaletteError> {
    let mut builder = PresetCatalog::builder();

    for (slot, preset) in PRESETS.iter().enumerate() {
        let rainbow = StandardRainbow::builder()
            .colors(preset.cycle)?
            .repeated(preset.repeats)?
            .build();
        builder.insert(RainbowId((slot + 1) as u8), rainbow)?;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("{} preset rainbows ready", PRESET_COUNT);

    Ok(builder.build())
}

/// Looks up a preset id by name.
pub fn find(name: &str) -> Option<RainbowId> {
    PRESETS
        .iter()
        .position(|preset| preset.name == name)
        .map(|slot| RainbowId((slot + 1) as u8))
}

/// Returns the name of a preset id.
pub fn name(id: RainbowId) -> Option<&'static str> {
    let slot = (id.0 as usize).checked_sub(1)?;
    PRESETS.get(slot).map(|preset| preset.name)
}
