//! Headless capture: PNG renders of shade tables.
//!
//! A shade table is a grid of palette indices; resolving each cell through
//! the palette gives a 256×32 image where column = original colour, row =
//! shade level. Shading bands and the never-saturates property are easy to
//! eyeball in the output.

use std::error::Error;
use std::fs;
use std::io::BufWriter;
use std::path::Path;

use shade_core::{PALETTE_SIZE, Palette, SHADE_LEVELS, ShadeTable};

/// Save a shade table as a 256×32 RGBA PNG, one pixel per table cell.
pub fn save_table_png(
    table: &ShadeTable,
    palette: &Palette,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let file = fs::File::create(path)?;
    let w = BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, PALETTE_SIZE as u32, SHADE_LEVELS as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;

    let mut rgba = Vec::with_capacity(PALETTE_SIZE * SHADE_LEVELS * 4);
    for level in 0..SHADE_LEVELS {
        for &shaded in table.row(level) {
            let colour = palette.entry(shaded);
            rgba.extend_from_slice(&[colour.r, colour.g, colour.b, 0xFF]);
        }
    }

    writer.write_image_data(&rgba)?;
    Ok(())
}
