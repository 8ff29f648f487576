//! Distance-shading tables for palette-indexed rendering.
//!
//! A raycast renderer working in palette-indexed colour cannot afford to
//! blend RGB per pixel. Instead, once per level, it precomputes a table of
//! 32 remapping rows that fade every palette colour toward a target (black
//! for plain darkening, gray for fog), then picks one row per drawn column
//! from an integer distance metric. The hot path is a single table lookup
//! per pixel.

mod matcher;
mod palette;
mod profile;
mod table;

pub use matcher::nearest_colour;
pub use palette::{PALETTE_SIZE, Palette, Rgb};
pub use profile::{BUILTIN_PROFILES, FogStrength, ShadeProfile};
pub use table::{SHADE_LEVELS, ShadeTable};
