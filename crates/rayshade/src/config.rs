//! JSON shade-profile configuration.
//!
//! Level packs may ship their own profile registry instead of the built-in
//! one:
//!
//! ```json
//! {
//!   "profiles": [
//!     { "target": [0, 0, 0], "fog": "no_shading" },
//!     { "target": [0, 0, 0], "fog": "normal" },
//!     { "target": [60, 60, 60], "fog": "fog" }
//!   ]
//! }
//! ```
//!
//! The selection contract is unchanged: a profile id must be a valid index
//! into whichever registry is active.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use shade_core::{FogStrength, Rgb, ShadeProfile};

/// Fog strength as spelled in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum FogName {
    NoShading,
    Normal,
    Fog,
}

impl From<FogName> for FogStrength {
    fn from(name: FogName) -> Self {
        match name {
            FogName::NoShading => Self::NoShading,
            FogName::Normal => Self::Normal,
            FogName::Fog => Self::Fog,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProfileEntry {
    target: [u8; 3],
    fog: FogName,
}

/// A profile registry parsed from JSON.
#[derive(Debug, Deserialize)]
pub struct ShadeConfig {
    profiles: Vec<ProfileEntry>,
}

impl ShadeConfig {
    /// Parse a registry from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load a registry from a file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self::from_json(&fs::read_to_string(path)?)?)
    }

    /// The registry described by the config.
    #[must_use]
    pub fn profiles(&self) -> Vec<ShadeProfile> {
        self.profiles
            .iter()
            .map(|entry| ShadeProfile {
                target: Rgb::new(entry.target[0], entry.target[1], entry.target[2]),
                fog: entry.fog.into(),
            })
            .collect()
    }
}
