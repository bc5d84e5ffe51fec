//! Bounded, cyclic color sequences ("rainbows").
//!
//! A [`Rainbow`] is an ordered list of colors with a fixed compile-time
//! capacity. Its length is the active length: the number of colors the
//! animation loop cycles through. The length is fixed at construction and is
//! always within capacity, so lookups never touch unused storage.

use crate::color::Color;
use crate::types::{InvalidPaletteReason, PaletteError};
use heapless::Vec;

/// An ordered, cyclic color sequence with room for `N` colors.
///
/// The animation loop owns the step counter; the rainbow maps any step onto
/// one of its colors with [`Rainbow::color_at`], wrapping around at the end.
/// Since a rainbow holds no playback state, one instance can drive several
/// independent animation contexts at once.
///
/// # Type Parameters
/// * `N` - Maximum number of colors this rainbow can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rainbow<const N: usize> {
    colors: Vec<Color, N>,
}

impl<const N: usize> Rainbow<N> {
    /// Creates a rainbow from the first `active_length` entries of `colors`.
    ///
    /// # Errors
    /// * `InvalidPalette(ExceedsCapacity)` - `active_length` is larger than `N`
    /// * `InvalidPalette(TooManyColors)` - `colors` does not fit in `N` slots
    /// * `InvalidPalette(ExceedsSupplied)` - `active_length` is larger than `colors.len()`
    pub fn new(colors: &[Color], active_length: usize) -> Result<Self, PaletteError> {
        if active_length > N {
            return Err(InvalidPaletteReason::ExceedsCapacity {
                active_length,
                capacity: N,
            }
            .into());
        }

        if colors.len() > N {
            return Err(InvalidPaletteReason::TooManyColors {
                supplied: colors.len(),
                capacity: N,
            }
            .into());
        }

        if active_length > colors.len() {
            return Err(InvalidPaletteReason::ExceedsSupplied {
                active_length,
                supplied: colors.len(),
            }
            .into());
        }

        let colors = Vec::from_slice(&colors[..active_length]).map_err(|_| {
            InvalidPaletteReason::ExceedsCapacity {
                active_length,
                capacity: N,
            }
        })?;

        Ok(Self { colors })
    }

    /// Creates a rainbow from a signed color count, as found in legacy
    /// firmware tables.
    ///
    /// # Errors
    /// * `InvalidPalette(NegativeLength)` - `num_colors` is below zero
    /// * Any error from [`Rainbow::new`]
    pub fn from_declared(colors: &[Color], num_colors: i32) -> Result<Self, PaletteError> {
        let active_length = usize::try_from(num_colors)
            .map_err(|_| InvalidPaletteReason::NegativeLength(num_colors))?;
        Self::new(colors, active_length)
    }

    /// Creates a rainbow with no colors.
    pub const fn empty() -> Self {
        Self { colors: Vec::new() }
    }

    /// Creates a new rainbow builder.
    pub fn builder() -> RainbowBuilder<N> {
        RainbowBuilder::new()
    }

    /// Returns the color shown at `step`, wrapping around the active length.
    ///
    /// # Errors
    /// * `EmptyPalette` - The rainbow has no colors
    #[inline]
    pub fn color_at(&self, step: u64) -> Result<Color, PaletteError> {
        if self.colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let index = (step % self.colors.len() as u64) as usize;
        Ok(self.colors[index])
    }

    /// Writes `color_at(step + i)` into `pixels[i]` for every pixel.
    ///
    /// # Errors
    /// * `EmptyPalette` - The rainbow has no colors; `pixels` is left untouched
    pub fn fill(&self, step: u64, pixels: &mut [Color]) -> Result<(), PaletteError> {
        let len = self.colors.len();
        if len == 0 {
            return Err(PaletteError::EmptyPalette);
        }

        let mut index = (step % len as u64) as usize;
        for pixel in pixels.iter_mut() {
            *pixel = self.colors[index];
            index += 1;
            if index == len {
                index = 0;
            }
        }

        Ok(())
    }

    /// Returns an endless iterator over the colors starting at `start_step`.
    ///
    /// Yields nothing for an empty rainbow.
    pub fn cycle(&self, start_step: u64) -> Cycle<'_> {
        let index = if self.colors.is_empty() {
            0
        } else {
            (start_step % self.colors.len() as u64) as usize
        };

        Cycle {
            colors: &self.colors,
            index,
        }
    }

    /// Returns the number of active colors.
    #[inline]
    pub fn active_length(&self) -> usize {
        self.colors.len()
    }

    /// Same as [`Rainbow::active_length`].
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the compile-time capacity `N`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the active colors in order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the color shown at step zero.
    #[inline]
    pub fn first(&self) -> Option<Color> {
        self.colors.first().copied()
    }

    /// Returns the length of the shortest cycle that repeats to form this
    /// rainbow. A rainbow storing six colors twice has a period of 6.
    pub fn period(&self) -> usize {
        let len = self.colors.len();
        (1..=len)
            .filter(|candidate| len % candidate == 0)
            .find(|&candidate| {
                self.colors
                    .iter()
                    .enumerate()
                    .all(|(i, color)| *color == self.colors[i % candidate])
            })
            .unwrap_or(0)
    }

    /// Returns this rainbow reduced to its shortest cycle.
    pub fn normalized(&self) -> Self {
        let mut colors = self.colors.clone();
        colors.truncate(self.period());
        Self { colors }
    }

    /// True when both rainbows show the same color at every step.
    pub fn cycles_like<const M: usize>(&self, other: &Rainbow<M>) -> bool {
        let period = self.period();
        period == other.period() && self.colors[..period] == other.colors[..period]
    }
}

impl<const N: usize> Default for Rainbow<N> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Endless iterator over a rainbow's colors. See [`Rainbow::cycle`].
#[derive(Debug, Clone)]
pub struct Cycle<'a> {
    colors: &'a [Color],
    index: usize,
}

impl Iterator for Cycle<'_> {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        let color = *self.colors.get(self.index)?;
        self.index += 1;
        if self.index == self.colors.len() {
            self.index = 0;
        }
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.colors.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}

/// Builder for rainbows that are easier to describe as a repeated cycle.
#[derive(Debug)]
pub struct RainbowBuilder<const N: usize> {
    colors: Vec<Color, N>,
}

impl<const N: usize> RainbowBuilder<N> {
    /// Creates a new empty rainbow builder.
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Appends a color.
    ///
    /// # Errors
    /// * `InvalidPalette(ExceedsCapacity)` - The rainbow is already full
    pub fn color(mut self, color: Color) -> Result<Self, PaletteError> {
        let active_length = self.colors.len() + 1;
        self.colors
            .push(color)
            .map_err(|_| InvalidPaletteReason::ExceedsCapacity {
                active_length,
                capacity: N,
            })?;
        Ok(self)
    }

    /// Appends several colors in order.
    ///
    /// # Errors
    /// * `InvalidPalette(ExceedsCapacity)` - The colors do not fit
    pub fn colors(mut self, colors: &[Color]) -> Result<Self, PaletteError> {
        let active_length = self.colors.len() + colors.len();
        self.colors
            .extend_from_slice(colors)
            .map_err(|_| InvalidPaletteReason::ExceedsCapacity {
                active_length,
                capacity: N,
            })?;
        Ok(self)
    }

    /// Repeats the colors gathered so far until they appear `times` times.
    ///
    /// `repeated(1)` changes nothing and `repeated(0)` removes every color.
    ///
    /// # Errors
    /// * `InvalidPalette(ExceedsCapacity)` - The repeated cycle does not fit
    pub fn repeated(mut self, times: usize) -> Result<Self, PaletteError> {
        let cycle = self.colors.len();
        let active_length = cycle.saturating_mul(times);
        if active_length > N {
            return Err(InvalidPaletteReason::ExceedsCapacity {
                active_length,
                capacity: N,
            }
            .into());
        }

        if times == 0 {
            self.colors.clear();
            return Ok(self);
        }

        for i in cycle..active_length {
            let color = self.colors[i % cycle];
            self.colors
                .push(color)
                .map_err(|_| InvalidPaletteReason::ExceedsCapacity {
                    active_length,
                    capacity: N,
                })?;
        }

        Ok(self)
    }

    /// Builds the rainbow. Its active length is the number of colors added.
    pub fn build(self) -> Rainbow<N> {
        Rainbow {
            colors: self.colors,
        }
    }
}

impl<const N: usize> Default for RainbowBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
