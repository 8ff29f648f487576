//! Profile-id derivation strategies.
//!
//! Level metadata picks a shade profile in one of two ways: maps built with
//! feature flags store the profile id in the low byte of the upper-left
//! tile word, while older episode/map sets use a fixed lookup. The original
//! engine chose between the two at compile time; here both ship as runtime
//! strategies selected by host configuration, and both are testable.
//!
//! The derived id is validated against the active registry when the level
//! is initialized ([`crate::LevelShading`]).

/// How the active shade profile id is derived from level metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSelector {
    /// Low 8 bits of the map's upper-left feature-flag tile word.
    FeatureFlags { top_left_tile: u16 },
    /// Fixed per-(episode, map) assignment for the stock level sets.
    EpisodeMap { episode: u32, map: u32 },
}

impl ProfileSelector {
    /// The profile id this strategy selects.
    #[must_use]
    pub fn profile_id(self) -> usize {
        match self {
            Self::FeatureFlags { top_left_tile } => usize::from(top_left_tile & 0x00FF),
            Self::EpisodeMap { episode, map } => match episode * 10 + map {
                0 => 4,
                1 | 2 | 6 => 1,
                3 => 0,
                5 => 2,
                _ => 3,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_flags_take_low_byte() {
        let selector = ProfileSelector::FeatureFlags {
            top_left_tile: 0xAB02,
        };
        assert_eq!(selector.profile_id(), 2);

        let selector = ProfileSelector::FeatureFlags {
            top_left_tile: 0x0000,
        };
        assert_eq!(selector.profile_id(), 0);
    }

    #[test]
    fn episode_map_assignments() {
        let cases = [
            ((0, 0), 4), // gray fog
            ((0, 1), 1),
            ((0, 2), 1),
            ((0, 3), 0), // unshaded
            ((0, 5), 2),
            ((0, 6), 1),
            ((0, 4), 3), // default
            ((1, 0), 3),
            ((5, 9), 3),
        ];
        for ((episode, map), expected) in cases {
            let selector = ProfileSelector::EpisodeMap { episode, map };
            assert_eq!(
                selector.profile_id(),
                expected,
                "episode {episode}, map {map}"
            );
        }
    }
}
