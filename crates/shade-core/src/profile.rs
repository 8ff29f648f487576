//! Shade profiles: fade target plus fog strength.
//!
//! A profile describes how a level fades with distance: toward black for
//! plain darkening, toward gray for fog. Level metadata selects a profile
//! by index; the built-in registry carries the five stock profiles, and a
//! host may supply its own registry with the same selection contract.

use crate::palette::Rgb;

/// Fog strength marker for a shade profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogStrength {
    /// No shading at all: the level uses the identity table.
    NoShading,
    /// Plain distance darkening.
    Normal,
    /// Fog: a larger divisor term shrinks the shade value for a given
    /// scale, densifying the fade uniformly across all distances.
    Fog,
}

impl FogStrength {
    /// Additive term in the shade-level selector's divisor.
    #[must_use]
    pub const fn divisor_term(self) -> u32 {
        match self {
            Self::NoShading | Self::Normal => 0,
            Self::Fog => 5,
        }
    }
}

/// A shading profile: the colour distant surfaces fade toward, and how
/// aggressively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeProfile {
    pub target: Rgb,
    pub fog: FogStrength,
}

/// The five stock profiles, indexed by level metadata.
pub const BUILTIN_PROFILES: [ShadeProfile; 5] = [
    // 0: no shading
    ShadeProfile {
        target: Rgb::new(0, 0, 0),
        fog: FogStrength::NoShading,
    },
    // 1: fade to black
    ShadeProfile {
        target: Rgb::new(0, 0, 0),
        fog: FogStrength::Normal,
    },
    // 2: dense black fog
    ShadeProfile {
        target: Rgb::new(0, 0, 0),
        fog: FogStrength::Fog,
    },
    // 3: fade to dark gray
    ShadeProfile {
        target: Rgb::new(40, 40, 40),
        fog: FogStrength::Normal,
    },
    // 4: gray fog
    ShadeProfile {
        target: Rgb::new(60, 60, 60),
        fog: FogStrength::Fog,
    },
];
