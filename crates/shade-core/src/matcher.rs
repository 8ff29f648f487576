//! Nearest-palette-colour matching.
//!
//! Re-quantizes an arbitrary RGB colour back into the palette by squared
//! Euclidean distance. No square root is taken; only relative ordering
//! matters. The scan runs in index order with a strict less-than, so the
//! lowest index wins exact ties.

use crate::palette::{Palette, Rgb};

/// Palette index of the entry nearest to `colour`.
///
/// The maximum possible squared distance is 3 × 255² = 195,075, comfortably
/// inside `u32`, so the comparison is exact integer arithmetic.
#[must_use]
pub fn nearest_colour(colour: Rgb, palette: &Palette) -> u8 {
    let mut best = 0u8;
    let mut best_dist = u32::MAX;

    for (index, entry) in palette.entries().iter().enumerate() {
        let dr = i32::from(colour.r) - i32::from(entry.r);
        let dg = i32::from(colour.g) - i32::from(entry.g);
        let db = i32::from(colour.b) - i32::from(entry.b);
        let dist = (dr * dr + dg * dg + db * db) as u32;

        if dist < best_dist {
            best_dist = dist;
            best = index as u8;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE_SIZE;

    fn palette_with(head: &[Rgb]) -> Palette {
        let mut entries = [Rgb::new(255, 255, 255); PALETTE_SIZE];
        entries[..head.len()].copy_from_slice(head);
        Palette::new(entries)
    }

    #[test]
    fn exact_entry_matches_itself() {
        let palette = palette_with(&[
            Rgb::new(0, 0, 0),
            Rgb::new(100, 50, 25),
            Rgb::new(200, 200, 200),
        ]);
        assert_eq!(nearest_colour(Rgb::new(100, 50, 25), &palette), 1);
    }

    #[test]
    fn picks_closest_of_two() {
        let palette = palette_with(&[Rgb::new(0, 0, 0), Rgb::new(100, 0, 0)]);
        assert_eq!(nearest_colour(Rgb::new(30, 0, 0), &palette), 0);
        assert_eq!(nearest_colour(Rgb::new(70, 0, 0), &palette), 1);
    }

    #[test]
    fn exact_tie_keeps_lower_index() {
        // (5,0,0) is distance 25 from both entry 0 and entry 1.
        let palette = palette_with(&[Rgb::new(0, 0, 0), Rgb::new(10, 0, 0)]);
        assert_eq!(nearest_colour(Rgb::new(5, 0, 0), &palette), 0);
    }

    #[test]
    fn duplicate_entries_resolve_to_lower_index() {
        let palette = palette_with(&[
            Rgb::new(1, 2, 3),
            Rgb::new(9, 9, 9),
            Rgb::new(9, 9, 9),
        ]);
        assert_eq!(nearest_colour(Rgb::new(9, 9, 9), &palette), 1);
    }
}
