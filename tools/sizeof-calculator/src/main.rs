//! Memory calculator for rainbow-palettes
//!
//! Writes the RAM footprint of rainbows and catalogs at several capacities to
//! `report.md`, so firmware authors can pick `N` and `MAX` for their target.
//!
//! Usage:
//!   cd tools/sizeof-calculator
//!   cargo run --release
//!   cat report.md

use rainbow_palettes::presets::{self, PRESET_COUNT, PresetCatalog};
use rainbow_palettes::{Catalog, Color, MAX_RAINBOW_COLORS, PaletteError, Rainbow, StandardRainbow};
use std::fs::File;
use std::io::Write;
use std::mem::size_of;

fn write_header(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "# rainbow-palettes Memory Footprint")?;
    writeln!(f)?;
    writeln!(f, "Sizes are `core::mem::size_of` on the host.")?;
    writeln!(f)?;
    Ok(())
}

fn write_component_sizes(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "## Components")?;
    writeln!(f)?;
    writeln!(f, "| Type | Size |")?;
    writeln!(f, "|------|------|")?;
    writeln!(f, "| `Color` | {} B |", size_of::<Color>())?;
    writeln!(f, "| `PaletteError` | {} B |", size_of::<PaletteError>())?;
    writeln!(
        f,
        "| `StandardRainbow` (N = {}) | {} B |",
        MAX_RAINBOW_COLORS,
        size_of::<StandardRainbow>()
    )?;
    writeln!(
        f,
        "| `PresetCatalog` ({} slots) | {} B |",
        PRESET_COUNT,
        size_of::<PresetCatalog>()
    )?;
    writeln!(f)?;
    Ok(())
}

fn write_rainbow_table(f: &mut File, capacities: &[usize]) -> std::io::Result<()> {
    writeln!(f, "## Rainbow Memory Usage")?;
    writeln!(f)?;
    writeln!(f, "| Capacity | Total Size | Storage Cost | Overhead |")?;
    writeln!(f, "|----------|------------|--------------|----------|")?;

    for &capacity in capacities {
        let total_size = match capacity {
            4 => size_of::<Rainbow<4>>(),
            6 => size_of::<Rainbow<6>>(),
            8 => size_of::<Rainbow<8>>(),
            12 => size_of::<Rainbow<12>>(),
            16 => size_of::<Rainbow<16>>(),
            32 => size_of::<Rainbow<32>>(),
            _ => continue,
        };

        let storage_cost = size_of::<Color>() * capacity;
        let overhead = total_size - storage_cost;

        writeln!(
            f,
            "| {} | {} B | {} B | {} B |",
            capacity, total_size, storage_cost, overhead
        )?;
    }

    writeln!(f)?;
    Ok(())
}

fn write_catalog_table(f: &mut File, slots: &[usize]) -> std::io::Result<()> {
    writeln!(f, "## Catalog Memory Usage (N = {})", MAX_RAINBOW_COLORS)?;
    writeln!(f)?;
    writeln!(f, "| Slots | Total Size | Per Slot |")?;
    writeln!(f, "|-------|------------|----------|")?;

    for &count in slots {
        let total_size = match count {
            8 => size_of::<Catalog<MAX_RAINBOW_COLORS, 8>>(),
            16 => size_of::<Catalog<MAX_RAINBOW_COLORS, 16>>(),
            PRESET_COUNT => size_of::<PresetCatalog>(),
            32 => size_of::<Catalog<MAX_RAINBOW_COLORS, 32>>(),
            64 => size_of::<Catalog<MAX_RAINBOW_COLORS, 64>>(),
            _ => continue,
        };

        writeln!(f, "| {} | {} B | {} B |", count, total_size, total_size / count)?;
    }

    writeln!(f)?;
    Ok(())
}

fn write_preset_usage(f: &mut File) -> std::io::Result<()> {
    let catalog = presets::catalog().map_err(std::io::Error::other)?;

    writeln!(f, "## Preset Slot Usage")?;
    writeln!(f)?;
    writeln!(f, "| Id | Name | Colors | Period | Unused Slots |")?;
    writeln!(f, "|----|------|--------|--------|--------------|")?;

    for (id, rainbow) in catalog.iter() {
        writeln!(
            f,
            "| {} | {} | {} | {} | {} |",
            id,
            presets::name(id).unwrap_or("?"),
            rainbow.len(),
            rainbow.period(),
            rainbow.capacity() - rainbow.len()
        )?;
    }

    writeln!(f)?;
    Ok(())
}

fn main() -> std::io::Result<()> {
    let report_path = "report.md";

    // Remove old report if it exists
    let _ = std::fs::remove_file(report_path);

    let mut file = File::create(report_path)?;

    println!("Generating memory footprint analysis...");

    write_header(&mut file)?;
    write_component_sizes(&mut file)?;
    write_rainbow_table(&mut file, &[4, 6, 8, 12, 16, 32])?;
    write_catalog_table(&mut file, &[8, 16, PRESET_COUNT, 32, 64])?;
    write_preset_usage(&mut file)?;

    writeln!(&mut file, "## Architecture Note")?;
    writeln!(&mut file)?;
    writeln!(
        &mut file,
        "Analysis performed on {}-bit host architecture. The length field of each rainbow shrinks to 4 B on 32-bit targets; color storage is identical across architectures.",
        size_of::<usize>() * 8
    )?;

    println!("✓ Report generated: {}", report_path);
    println!("  View with: cat {}", report_path);

    Ok(())
}
