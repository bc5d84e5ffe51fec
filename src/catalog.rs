use crate::rainbow::Rainbow;
use crate::types::PaletteError;

/// An identifier for a rainbow within a catalog.
///
/// Ids are dense and start at 1, matching how the controller numbers its
/// rainbows. Id 0 is never valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RainbowId(pub u8);

impl RainbowId {
    /// Slot index for this id, or `None` for id 0.
    fn slot(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    fn from_slot(slot: usize) -> Self {
        RainbowId((slot + 1) as u8)
    }
}

impl From<u8> for RainbowId {
    fn from(id: u8) -> Self {
        RainbowId(id)
    }
}

impl From<RainbowId> for u8 {
    fn from(id: RainbowId) -> Self {
        id.0
    }
}

impl core::fmt::Display for RainbowId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// A read-only set of rainbows, addressed by [`RainbowId`].
///
/// Catalogs are assembled once with a [`CatalogBuilder`] during start-up and
/// cannot be changed afterwards. Lookups index straight into a slot array, so
/// [`Catalog::get`] is constant-time and never allocates.
///
/// # Type Parameters
/// * `N` - Color capacity of every rainbow in the catalog
/// * `MAX` - Number of slots; valid ids are `1..=MAX`
#[derive(Debug, Clone)]
pub struct Catalog<const N: usize, const MAX: usize> {
    slots: [Option<Rainbow<N>>; MAX],
}

impl<const N: usize, const MAX: usize> Catalog<N, MAX> {
    /// Creates a new empty catalog builder.
    pub fn builder() -> CatalogBuilder<N, MAX> {
        CatalogBuilder::new()
    }

    /// Returns the rainbow registered under `id`.
    ///
    /// # Errors
    /// * `UnknownPalette` - Nothing is registered under `id`
    pub fn get(&self, id: RainbowId) -> Result<&Rainbow<N>, PaletteError> {
        id.slot()
            .and_then(|slot| self.slots.get(slot))
            .and_then(Option::as_ref)
            .ok_or(PaletteError::UnknownPalette(id))
    }

    /// Returns true if a rainbow is registered under `id`.
    pub fn contains(&self, id: RainbowId) -> bool {
        self.get(id).is_ok()
    }

    /// Returns the number of registered rainbows.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the registered ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = RainbowId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// Returns `(id, rainbow)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (RainbowId, &Rainbow<N>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, rainbow)| {
                rainbow
                    .as_ref()
                    .map(|rainbow| (RainbowId::from_slot(slot), rainbow))
            })
    }

    /// Returns the lowest registered id.
    pub fn first_id(&self) -> Option<RainbowId> {
        self.ids().next()
    }

    /// Returns the next registered id after `id`, wrapping to the lowest.
    ///
    /// # Errors
    /// * `UnknownPalette` - `id` itself is not registered
    pub fn next_id(&self, id: RainbowId) -> Result<RainbowId, PaletteError> {
        let current = self.registered_slot(id)?;
        let slot = (current + 1..MAX)
            .chain(0..=current)
            .find(|&slot| self.slots[slot].is_some())
            .unwrap_or(current);
        Ok(RainbowId::from_slot(slot))
    }

    /// Returns the previous registered id before `id`, wrapping to the highest.
    ///
    /// # Errors
    /// * `UnknownPalette` - `id` itself is not registered
    pub fn previous_id(&self, id: RainbowId) -> Result<RainbowId, PaletteError> {
        let current = self.registered_slot(id)?;
        let slot = (0..current)
            .rev()
            .chain((current..MAX).rev())
            .find(|&slot| self.slots[slot].is_some())
            .unwrap_or(current);
        Ok(RainbowId::from_slot(slot))
    }

    fn registered_slot(&self, id: RainbowId) -> Result<usize, PaletteError> {
        self.get(id)?;
        id.slot().ok_or(PaletteError::UnknownPalette(id))
    }
}

/// Collects rainbows before freezing them into a [`Catalog`].
#[derive(Debug)]
pub struct CatalogBuilder<const N: usize, const MAX: usize> {
    slots: [Option<Rainbow<N>>; MAX],
}

impl<const N: usize, const MAX: usize> CatalogBuilder<N, MAX> {
    /// Creates a new empty catalog builder.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    /// Registers `rainbow` under `id`.
    ///
    /// # Errors
    /// * `PaletteIdOutOfBounds` - `id` is 0 or greater than `MAX`
    /// * `DuplicatePalette` - A rainbow is already registered under `id`
    pub fn insert(&mut self, id: RainbowId, rainbow: Rainbow<N>) -> Result<(), PaletteError> {
        let Some(slot) = id.slot().filter(|&slot| slot < MAX) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("rainbow {} rejected: outside 1-{}", id.0, MAX);
            return Err(PaletteError::PaletteIdOutOfBounds { id, capacity: MAX });
        };

        if self.slots[slot].is_some() {
            #[cfg(feature = "defmt")]
            defmt::warn!("rainbow {} rejected: already registered", id.0);
            return Err(PaletteError::DuplicatePalette(id));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("rainbow {} registered with {} colors", id.0, rainbow.len());

        self.slots[slot] = Some(rainbow);
        Ok(())
    }

    /// Freezes the builder into a read-only catalog.
    pub fn build(self) -> Catalog<N, MAX> {
        Catalog { slots: self.slots }
    }
}

impl<const N: usize, const MAX: usize> Default for CatalogBuilder<N, MAX> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, GREEN, RED};

    fn solid(color: crate::color::Color) -> Rainbow<4> {
        Rainbow::new(&[color], 1).unwrap()
    }

    #[test]
    fn can_create_empty_catalog() {
        let catalog = Catalog::<4, 8>::builder().build();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
        assert_eq!(catalog.first_id(), None);
    }

    #[test]
    fn rejects_id_zero_and_ids_past_capacity() {
        let mut builder = Catalog::<4, 3>::builder();
        assert_eq!(
            builder.insert(RainbowId(0), solid(RED)),
            Err(PaletteError::PaletteIdOutOfBounds {
                id: RainbowId(0),
                capacity: 3,
            })
        );
        assert_eq!(
            builder.insert(RainbowId(4), solid(RED)),
            Err(PaletteError::PaletteIdOutOfBounds {
                id: RainbowId(4),
                capacity: 3,
            })
        );
        assert!(builder.insert(RainbowId(3), solid(RED)).is_ok());
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut builder = Catalog::<4, 3>::builder();
        builder.insert(RainbowId(1), solid(RED)).unwrap();
        assert_eq!(
            builder.insert(RainbowId(1), solid(GREEN)),
            Err(PaletteError::DuplicatePalette(RainbowId(1)))
        );

        let catalog = builder.build();
        assert_eq!(catalog.get(RainbowId(1)).unwrap().first(), Some(RED));
    }

    #[test]
    fn navigation_skips_gaps_and_wraps() {
        let mut builder = Catalog::<4, 6>::builder();
        builder.insert(RainbowId(2), solid(RED)).unwrap();
        builder.insert(RainbowId(3), solid(GREEN)).unwrap();
        builder.insert(RainbowId(5), solid(BLUE)).unwrap();
        let catalog = builder.build();

        assert_eq!(catalog.first_id(), Some(RainbowId(2)));
        assert_eq!(catalog.next_id(RainbowId(3)), Ok(RainbowId(5)));
        assert_eq!(catalog.next_id(RainbowId(5)), Ok(RainbowId(2)));
        assert_eq!(catalog.previous_id(RainbowId(2)), Ok(RainbowId(5)));
        assert_eq!(catalog.previous_id(RainbowId(5)), Ok(RainbowId(3)));
        assert_eq!(
            catalog.next_id(RainbowId(4)),
            Err(PaletteError::UnknownPalette(RainbowId(4)))
        );
    }

    #[test]
    fn single_entry_navigates_to_itself() {
        let mut builder = Catalog::<4, 3>::builder();
        builder.insert(RainbowId(2), solid(RED)).unwrap();
        let catalog = builder.build();

        assert_eq!(catalog.next_id(RainbowId(2)), Ok(RainbowId(2)));
        assert_eq!(catalog.previous_id(RainbowId(2)), Ok(RainbowId(2)));
    }
}
