//! Level shading for a palette-indexed raycast renderer.
//!
//! Wraps the pure algorithms in `shade-core` with the per-level lifecycle:
//! deriving the active shade profile from level metadata, building the
//! level's table at load time, and optional JSON profile registries and
//! headless PNG capture for inspection.

pub mod capture;
mod config;
mod level;
mod selector;

pub use config::ShadeConfig;
pub use level::LevelShading;
pub use selector::ProfileSelector;

pub use shade_core::{
    BUILTIN_PROFILES, FogStrength, PALETTE_SIZE, Palette, Rgb, SHADE_LEVELS, ShadeProfile,
    ShadeTable,
};
