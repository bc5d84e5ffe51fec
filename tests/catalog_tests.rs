//! Integration tests for Catalog and the factory presets

mod common;
use common::*;

use rainbow_palettes::catalog::{Catalog, RainbowId};
use rainbow_palettes::presets::{self, DEFAULT_RAINBOW, PRESET_COUNT};
use rainbow_palettes::types::PaletteError;
use rainbow_palettes::{DIM_RED, MAX_RAINBOW_COLORS, Rainbow};

#[test]
fn get_returns_registered_rainbow() {
    let mut builder = Catalog::<6, 4>::builder();
    builder.insert(RainbowId(1), rainbow(&ROYGBIV)).unwrap();
    let catalog = builder.build();

    let found = catalog.get(RainbowId(1)).unwrap();
    assert_eq!(found.colors(), &ROYGBIV);
    assert!(catalog.contains(RainbowId(1)));
}

#[test]
fn get_rejects_ids_never_inserted() {
    let mut builder = Catalog::<6, 4>::builder();
    builder.insert(RainbowId(1), rainbow(&ROYGBIV)).unwrap();
    let catalog = builder.build();

    for id in [0, 2, 4, 5, 255] {
        assert_eq!(
            catalog.get(RainbowId(id)),
            Err(PaletteError::UnknownPalette(RainbowId(id)))
        );
    }
}

#[test]
fn ids_are_listed_in_ascending_order() {
    let mut builder = Catalog::<6, 8>::builder();
    builder.insert(RainbowId(7), rainbow(&[RED])).unwrap();
    builder.insert(RainbowId(2), rainbow(&[GREEN])).unwrap();
    builder.insert(RainbowId(4), rainbow(&[BLUE])).unwrap();
    let catalog = builder.build();

    let ids: heapless::Vec<RainbowId, 8> = catalog.ids().collect();
    assert_eq!(ids.as_slice(), &[RainbowId(2), RainbowId(4), RainbowId(7)]);
    assert_eq!(catalog.len(), 3);
}

#[test]
fn presets_build_into_full_catalog() {
    let catalog = presets::catalog().unwrap();
    assert_eq!(catalog.len(), PRESET_COUNT);
    assert_eq!(catalog.first_id(), Some(DEFAULT_RAINBOW));

    for (id, rainbow) in catalog.iter() {
        assert!(!rainbow.is_empty(), "{} is empty", id);
        assert_eq!(rainbow.capacity(), MAX_RAINBOW_COLORS);
        assert!(presets::name(id).is_some());
    }
}

#[test]
fn presets_keep_declared_lengths() {
    let catalog = presets::catalog().unwrap();
    let expected: [(u8, usize); 8] = [
        (1, 6),
        (2, 12),
        (5, 6),
        (8, 8),
        (11, 12),
        (16, 10),
        (24, 10),
        (27, 8),
    ];

    for (id, length) in expected {
        let rainbow = catalog.get(RainbowId(id)).unwrap();
        assert_eq!(rainbow.active_length(), length, "rainbow {}", id);
    }
}

#[test]
fn double_rainbow_cycles_like_single() {
    let catalog = presets::catalog().unwrap();
    let single = catalog.get(RainbowId(1)).unwrap();
    let double = catalog.get(RainbowId(2)).unwrap();

    assert!(double.cycles_like(single));
    assert_eq!(double.period(), 6);
    assert_eq!(single.colors(), &ROYGBIV);
}

#[test]
fn white_patterns_match_factory_order() {
    let catalog = presets::catalog().unwrap();

    let blue_white = catalog.get(presets::find("blue_white").unwrap()).unwrap();
    let expected = rainbow::<4>(&[WHITE, SKY_BLUE, BLUE, DEEP_BLUE]);
    assert!(blue_white.cycles_like(&expected));
    assert_eq!(blue_white.active_length(), 8);

    let red_white = catalog.get(RainbowId(26)).unwrap();
    assert_eq!(red_white.color_at(1), Ok(DIM_RED));
    assert_eq!(red_white.color_at(2), Ok(RED));
    assert_eq!(red_white.color_at(3), Ok(DIM_RED));
}

#[test]
fn preset_navigation_wraps_around() {
    let catalog = presets::catalog().unwrap();
    let last = RainbowId(PRESET_COUNT as u8);

    assert_eq!(catalog.next_id(DEFAULT_RAINBOW), Ok(RainbowId(2)));
    assert_eq!(catalog.next_id(last), Ok(DEFAULT_RAINBOW));
    assert_eq!(catalog.previous_id(DEFAULT_RAINBOW), Ok(last));
    assert_eq!(
        catalog.get(RainbowId(PRESET_COUNT as u8 + 1)),
        Err(PaletteError::UnknownPalette(RainbowId(28)))
    );
}

#[test]
fn find_unknown_preset_returns_none() {
    assert_eq!(presets::find("plaid"), None);
    assert_eq!(presets::find("rgb"), Some(RainbowId(5)));
}

#[test]
fn same_rainbow_drives_independent_contexts() {
    let catalog = presets::catalog().unwrap();
    let shared: &Rainbow<MAX_RAINBOW_COLORS> = catalog.get(DEFAULT_RAINBOW).unwrap();

    let mut zone_a = 0u64;
    let mut zone_b = 3u64;
    for _ in 0..10 {
        zone_a += 1;
        zone_b += 2;
    }

    assert_eq!(shared.color_at(zone_a), Ok(BLUE));
    assert_eq!(shared.color_at(zone_b), Ok(PURPLE));
}
