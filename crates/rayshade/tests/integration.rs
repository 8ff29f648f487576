//! End-to-end tests for the level shading pipeline.
//!
//! Drives the full path a renderer uses: profile selection from level
//! metadata, table construction at level load, and per-draw row selection.

use rayshade::{
    FogStrength, LevelShading, Palette, ProfileSelector, Rgb, SHADE_LEVELS, ShadeConfig,
    ShadeTable,
};

fn grayscale_level(profile_id: usize) -> LevelShading {
    LevelShading::init(profile_id, &Palette::grayscale())
}

// ---------------------------------------------------------------------------
// Table construction
// ---------------------------------------------------------------------------

#[test]
fn level_load_produces_identity_row_zero() {
    let shading = grayscale_level(1);
    for i in 0..=255u8 {
        assert_eq!(shading.table().row(0)[usize::from(i)], i);
    }
}

#[test]
fn rebuilding_the_same_level_is_bit_identical() {
    let a = grayscale_level(4);
    let b = grayscale_level(4);
    assert_eq!(a, b);
}

#[test]
fn deepest_row_keeps_bright_colours_visible() {
    // The step divisor is oversized (levels + 8), so even row 31 has not
    // reached the target: entry 255 fades to 57, not 0.
    let shading = grayscale_level(1);
    assert_eq!(shading.table().row(SHADE_LEVELS - 1)[255], 57);
}

#[test]
fn metadata_selected_no_shading_level_renders_unfaded() {
    // Episode 0 map 3 is the stock unshaded level.
    let selector = ProfileSelector::EpisodeMap { episode: 0, map: 3 };
    let shading = grayscale_level(selector.profile_id());

    for level in 0..SHADE_LEVELS {
        for i in 0..=255u8 {
            assert_eq!(shading.table().row(level)[usize::from(i)], i);
        }
    }
}

// ---------------------------------------------------------------------------
// Per-draw row selection
// ---------------------------------------------------------------------------

#[test]
fn draw_distance_drives_fade_depth() {
    let shading = grayscale_level(1);
    let table = shading.table();

    // Distant draw (scale 0): deepest fade.
    assert_eq!(table.shade_row_index(0, false, 320), SHADE_LEVELS - 1);
    // Point-blank draw: unfaded.
    assert_eq!(table.shade_row_index(u32::MAX, false, 320), 0);
    // Full-bright draws ignore distance entirely.
    assert_eq!(table.shade_row_index(0, true, 320), 0);
}

#[test]
fn fog_profile_fades_faster_than_normal_at_equal_distance() {
    let normal = grayscale_level(1);
    let fog = grayscale_level(2);

    for scale in [32, 100, 400, 1000] {
        let normal_row = normal.table().shade_row_index(scale, false, 320);
        let fog_row = fog.table().shade_row_index(scale, false, 320);
        assert!(
            fog_row >= normal_row,
            "scale {scale}: fog row {fog_row} < normal row {normal_row}"
        );
    }
}

#[test]
fn selected_row_remaps_toward_black() {
    let shading = grayscale_level(1);
    // A mid-distance draw on the grayscale palette darkens every entry.
    let row = shading.table().shade_row(100, false, 320);
    assert!(row[200] < 200);
    assert!(row[0] == 0);
}

// ---------------------------------------------------------------------------
// Custom registries
// ---------------------------------------------------------------------------

#[test]
fn json_registry_drives_level_init() {
    let config = ShadeConfig::from_json(
        r#"{
            "profiles": [
                { "target": [0, 0, 0], "fog": "no_shading" },
                { "target": [80, 10, 10], "fog": "fog" }
            ]
        }"#,
    )
    .expect("valid config");
    let profiles = config.profiles();
    let palette = Palette::grayscale();

    let unshaded = LevelShading::init_with_profiles(0, &profiles, &palette);
    assert_eq!(unshaded.table().row(SHADE_LEVELS - 1)[100], 100);

    let tinted = LevelShading::init_with_profiles(1, &profiles, &palette);
    assert_eq!(tinted.table().fog(), FogStrength::Fog);
    assert_ne!(tinted.table().row(SHADE_LEVELS - 1)[100], 100);
}

#[test]
#[should_panic(expected = "outside registry")]
fn out_of_range_id_against_custom_registry_is_fatal() {
    let profiles = [rayshade::ShadeProfile {
        target: Rgb::new(0, 0, 0),
        fog: FogStrength::Normal,
    }];
    let _ = LevelShading::init_with_profiles(1, &profiles, &Palette::grayscale());
}

// ---------------------------------------------------------------------------
// Capture
// ---------------------------------------------------------------------------

#[test]
fn table_png_is_written() {
    let palette = Palette::grayscale();
    let shading = LevelShading::init(1, &palette);
    let path = std::env::temp_dir().join("rayshade_table_test.png");

    rayshade::capture::save_table_png(shading.table(), &palette, &path).expect("png written");

    let metadata = std::fs::metadata(&path).expect("file exists");
    assert!(metadata.len() > 0);
    let _ = std::fs::remove_file(&path);
}

// ---------------------------------------------------------------------------
// Direct table use (renderer-side contract)
// ---------------------------------------------------------------------------

#[test]
fn renderer_remap_round_trip() {
    // Remapping a source span through a selected row only ever yields valid
    // palette indices, and full-bright spans come back unchanged.
    let palette = Palette::grayscale();
    let table = ShadeTable::build(Rgb::new(0, 0, 0), FogStrength::Normal, &palette);

    let span: Vec<u8> = (0..=255).collect();
    let row = table.shade_row(64, false, 320);
    let shaded: Vec<u8> = span.iter().map(|&px| row[usize::from(px)]).collect();
    assert_eq!(shaded.len(), span.len());

    let bright_row = table.shade_row(64, true, 320);
    let bright: Vec<u8> = span.iter().map(|&px| bright_row[usize::from(px)]).collect();
    assert_eq!(bright, span);
}
