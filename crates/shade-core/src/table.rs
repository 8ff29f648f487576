//! Precomputed shade tables and the per-draw row selector.
//!
//! # Table construction
//!
//! For every palette colour, the builder walks a straight line in RGB space
//! from the original colour toward the profile's target, one step per shade
//! level, re-quantizing each stop into the palette. The per-channel step
//! divides by `SHADE_LEVELS + 8`, not `SHADE_LEVELS`: 32 steps cover only
//! 32/40 of the distance to the target, so even the deepest row keeps
//! nearby and very distant surfaces distinguishable instead of saturating
//! to a flat colour.
//!
//! Channel accumulators are f64, quantized with a truncating cast at each
//! level. The truncation bands are part of the visible output; changing
//! the rounding moves shading band boundaries.
//!
//! # Row selection
//!
//! `shade_row` maps a draw's scale (larger = nearer/bigger) to a row:
//!
//! ```text
//! shade = (scale >> 1) / (((view_width * 3) >> 8) + 1 + fog_term)
//! row   = SHADE_LEVELS - clamp(shade, 1, SHADE_LEVELS)
//! ```
//!
//! Truncating integer division throughout; the exact arithmetic encodes a
//! visual tuning and is pinned by regression tests. Full-bright draws take
//! row 0 unconditionally.

use crate::matcher::nearest_colour;
use crate::palette::{PALETTE_SIZE, Palette, Rgb};
use crate::profile::FogStrength;

/// Number of shade rows. Row 0 is unfaded, row 31 the deepest fade.
pub const SHADE_LEVELS: usize = 32;

/// Step divisor: deliberately oversized so the walk never reaches the
/// target colour within `SHADE_LEVELS` steps.
const STEP_DIVISOR: f64 = (SHADE_LEVELS + 8) as f64;

/// Precomputed shade table for one level: 32 rows of 256 palette indices,
/// plus the fog strength it was built with.
///
/// Built once at level load, immutable thereafter. Loading a new level
/// builds a fresh table and moves it into place wholesale, so a renderer
/// never observes a half-built table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeTable {
    rows: Box<[[u8; PALETTE_SIZE]; SHADE_LEVELS]>,
    fog: FogStrength,
}

impl ShadeTable {
    /// Fade every palette colour toward `target` in `SHADE_LEVELS` steps.
    ///
    /// Row 0 re-quantizes the unmodified colour, so `row(0)` is the
    /// identity mapping for palettes with distinct entries (a duplicated
    /// entry resolves to the lower of its indices).
    #[must_use]
    pub fn build(target: Rgb, fog: FogStrength, palette: &Palette) -> Self {
        let mut rows = Box::new([[0u8; PALETTE_SIZE]; SHADE_LEVELS]);

        for (colour, &entry) in palette.entries().iter().enumerate() {
            let mut cur_r = f64::from(entry.r);
            let mut cur_g = f64::from(entry.g);
            let mut cur_b = f64::from(entry.b);

            let step_r = (f64::from(target.r) - cur_r) / STEP_DIVISOR;
            let step_g = (f64::from(target.g) - cur_g) / STEP_DIVISOR;
            let step_b = (f64::from(target.b) - cur_b) / STEP_DIVISOR;

            for row in rows.iter_mut() {
                let stop = Rgb::new(cur_r as u8, cur_g as u8, cur_b as u8);
                row[colour] = nearest_colour(stop, palette);

                cur_r += step_r;
                cur_g += step_g;
                cur_b += step_b;
            }
        }

        Self { rows, fog }
    }

    /// Identity table: every row maps each index to itself.
    ///
    /// Used when the level's profile disables shading entirely.
    #[must_use]
    pub fn identity() -> Self {
        let mut rows = Box::new([[0u8; PALETTE_SIZE]; SHADE_LEVELS]);
        for row in rows.iter_mut() {
            for (i, cell) in row.iter_mut().enumerate() {
                *cell = i as u8;
            }
        }
        Self {
            rows,
            fog: FogStrength::NoShading,
        }
    }

    /// Fog strength the table was built with.
    #[must_use]
    pub const fn fog(&self) -> FogStrength {
        self.fog
    }

    /// Row `level` (0 = unfaded). Panics if `level >= SHADE_LEVELS`.
    #[must_use]
    pub fn row(&self, level: usize) -> &[u8; PALETTE_SIZE] {
        &self.rows[level]
    }

    /// Row index for one draw operation.
    ///
    /// `scale` grows with apparent size/proximity, so near draws land on
    /// rows close to 0 (unfaded) and distant draws close to
    /// `SHADE_LEVELS - 1`. A fog profile enlarges the divisor, pushing
    /// every distance deeper into the fade. The intermediate shade value
    /// is clamped to `[1, SHADE_LEVELS]`, so the result is always a valid
    /// row index.
    #[must_use]
    pub fn shade_row_index(&self, scale: u32, full_bright: bool, view_width: u32) -> usize {
        if full_bright {
            return 0;
        }

        let divisor = ((view_width * 3) >> 8) + 1 + self.fog.divisor_term();
        let shade = ((scale >> 1) / divisor).clamp(1, SHADE_LEVELS as u32);

        SHADE_LEVELS - shade as usize
    }

    /// Remapping row for one draw operation: the renderer indexes it by
    /// each source pixel's original palette value.
    #[must_use]
    pub fn shade_row(&self, scale: u32, full_bright: bool, view_width: u32) -> &[u8; PALETTE_SIZE] {
        &self.rows[self.shade_row_index(scale, full_bright, view_width)]
    }
}
