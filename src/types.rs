//! Error types shared by colors, rainbows and the catalog.

use crate::catalog::RainbowId;

/// A single color channel, used to report which channel was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// Why a rainbow could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidPaletteReason {
    /// A signed color count below zero.
    NegativeLength(i32),

    /// Active length larger than the rainbow's storage.
    ExceedsCapacity { active_length: usize, capacity: usize },

    /// Active length larger than the number of colors actually supplied.
    ExceedsSupplied { active_length: usize, supplied: usize },

    /// More colors supplied than the rainbow can store.
    TooManyColors { supplied: usize, capacity: usize },
}

/// Errors raised while building or querying rainbows and catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaletteError {
    /// Construction-time invariant violation.
    InvalidPalette(InvalidPaletteReason),

    /// A zero-length rainbow was queried for a color.
    EmptyPalette,

    /// No rainbow is registered under this id.
    UnknownPalette(RainbowId),

    /// A color channel outside `0..=255`.
    OutOfRangeColor { channel: Channel, value: i32 },

    /// A rainbow is already registered under this id.
    DuplicatePalette(RainbowId),

    /// The id cannot be stored in a catalog of this capacity.
    PaletteIdOutOfBounds { id: RainbowId, capacity: usize },
}

impl From<InvalidPaletteReason> for PaletteError {
    fn from(reason: InvalidPaletteReason) -> Self {
        PaletteError::InvalidPalette(reason)
    }
}

impl core::fmt::Display for InvalidPaletteReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvalidPaletteReason::NegativeLength(length) => {
                write!(f, "color count {} is negative", length)
            }
            InvalidPaletteReason::ExceedsCapacity {
                active_length,
                capacity,
            } => {
                write!(
                    f,
                    "active length {} exceeds capacity of {}",
                    active_length, capacity
                )
            }
            InvalidPaletteReason::ExceedsSupplied {
                active_length,
                supplied,
            } => {
                write!(
                    f,
                    "active length {} exceeds the {} colors supplied",
                    active_length, supplied
                )
            }
            InvalidPaletteReason::TooManyColors { supplied, capacity } => {
                write!(
                    f,
                    "{} colors supplied but capacity is {}",
                    supplied, capacity
                )
            }
        }
    }
}

impl core::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PaletteError::InvalidPalette(reason) => {
                write!(f, "invalid palette: {}", reason)
            }
            PaletteError::EmptyPalette => {
                write!(f, "palette has no active colors")
            }
            PaletteError::UnknownPalette(id) => {
                write!(f, "palette {} does not exist in catalog", id)
            }
            PaletteError::OutOfRangeColor { channel, value } => {
                write!(f, "{} channel value {} is outside 0-255", channel, value)
            }
            PaletteError::DuplicatePalette(id) => {
                write!(f, "palette {} already exists in catalog", id)
            }
            PaletteError::PaletteIdOutOfBounds { id, capacity } => {
                write!(
                    f,
                    "palette {} is outside the catalog range 1-{}",
                    id, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PaletteError {}
