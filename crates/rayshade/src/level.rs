//! Per-level shading lifecycle.
//!
//! A level owns exactly one shade table, built once at load time and
//! immutable until the next level load. Reloading builds a fresh table and
//! moves it into place as a whole value, so the renderer never observes a
//! half-built table or a table paired with the wrong fog strength.

use shade_core::{BUILTIN_PROFILES, FogStrength, Palette, ShadeProfile, ShadeTable};

/// Shading state for the currently loaded level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelShading {
    table: ShadeTable,
}

impl LevelShading {
    /// Build shading for a level from the built-in profile registry.
    ///
    /// # Panics
    ///
    /// Panics if `profile_id` is outside the registry. Level metadata is
    /// trusted by contract; an out-of-range id means corrupted data and is
    /// never clamped.
    #[must_use]
    pub fn init(profile_id: usize, palette: &Palette) -> Self {
        Self::init_with_profiles(profile_id, &BUILTIN_PROFILES, palette)
    }

    /// Build shading for a level against a caller-supplied registry.
    ///
    /// # Panics
    ///
    /// Panics if `profile_id` is outside `profiles`.
    #[must_use]
    pub fn init_with_profiles(
        profile_id: usize,
        profiles: &[ShadeProfile],
        palette: &Palette,
    ) -> Self {
        assert!(
            profile_id < profiles.len(),
            "shade profile id {profile_id} outside registry of {} profiles",
            profiles.len()
        );

        let profile = profiles[profile_id];
        let table = if profile.fog == FogStrength::NoShading {
            ShadeTable::identity()
        } else {
            ShadeTable::build(profile.target, profile.fog, palette)
        };

        Self { table }
    }

    /// The level's shade table.
    #[must_use]
    pub const fn table(&self) -> &ShadeTable {
        &self.table
    }

    /// Rebuild for a new level, replacing the table and its fog strength
    /// together.
    pub fn reload(&mut self, profile_id: usize, palette: &Palette) {
        *self = Self::init(profile_id, palette);
    }
}
