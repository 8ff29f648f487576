//! Shade-table inspection binary.
//!
//! Builds a level's shade table headlessly, prints a row summary, and
//! optionally writes a PNG render for eyeballing shading bands.

use std::path::PathBuf;
use std::process;

use rayshade::{
    BUILTIN_PROFILES, LevelShading, Palette, ProfileSelector, SHADE_LEVELS, ShadeConfig, capture,
};

struct CliArgs {
    /// Raw 768-byte palette dump; grayscale ramp if absent.
    palette_path: Option<PathBuf>,
    /// JSON profile registry; built-in registry if absent.
    config_path: Option<PathBuf>,
    profile: Option<usize>,
    episode: Option<u32>,
    map: Option<u32>,
    flags_tile: Option<u16>,
    view_width: u32,
    png_path: Option<PathBuf>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        palette_path: None,
        config_path: None,
        profile: None,
        episode: None,
        map: None,
        flags_tile: None,
        view_width: 320,
        png_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--palette" => {
                i += 1;
                cli.palette_path = args.get(i).map(PathBuf::from);
            }
            "--config" => {
                i += 1;
                cli.config_path = args.get(i).map(PathBuf::from);
            }
            "--profile" => {
                i += 1;
                if let Some(s) = args.get(i) {
                    cli.profile = s.parse().ok();
                }
            }
            "--episode" => {
                i += 1;
                if let Some(s) = args.get(i) {
                    cli.episode = s.parse().ok();
                }
            }
            "--map" => {
                i += 1;
                if let Some(s) = args.get(i) {
                    cli.map = s.parse().ok();
                }
            }
            "--flags-tile" => {
                i += 1;
                if let Some(s) = args.get(i) {
                    cli.flags_tile = u16::from_str_radix(s.trim_start_matches("0x"), 16).ok();
                }
            }
            "--view-width" => {
                i += 1;
                if let Some(s) = args.get(i) {
                    cli.view_width = s.parse().unwrap_or(320);
                }
            }
            "--png" => {
                i += 1;
                cli.png_path = args.get(i).map(PathBuf::from);
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn print_usage() {
    eprintln!("Usage: rayshade [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --palette <file>     Raw 768-byte R,G,B palette (default: grayscale ramp)");
    eprintln!("  --config <file>      JSON profile registry (default: built-in profiles)");
    eprintln!("  --profile <id>       Profile id to build directly");
    eprintln!("  --episode <n>        Derive the profile id from episode/map metadata");
    eprintln!("  --map <n>");
    eprintln!("  --flags-tile <hex>   Derive the profile id from a feature-flag tile word");
    eprintln!("  --view-width <n>     Viewport width for the row summary (default: 320)");
    eprintln!("  --png <file>         Write the table as a 256x32 PNG");
}

fn load_palette(cli: &CliArgs) -> Palette {
    let Some(path) = &cli.palette_path else {
        return Palette::grayscale();
    };

    let data = std::fs::read(path).unwrap_or_else(|e| {
        eprintln!("Failed to read palette {}: {e}", path.display());
        process::exit(1);
    });
    let raw: &[u8; 768] = data.as_slice().try_into().unwrap_or_else(|_| {
        eprintln!(
            "Palette {} is {} bytes, expected 768",
            path.display(),
            data.len()
        );
        process::exit(1);
    });
    Palette::from_raw(raw)
}

fn resolve_profile_id(cli: &CliArgs) -> usize {
    if let Some(id) = cli.profile {
        return id;
    }
    if let Some(tile) = cli.flags_tile {
        return ProfileSelector::FeatureFlags {
            top_left_tile: tile,
        }
        .profile_id();
    }
    if let (Some(episode), Some(map)) = (cli.episode, cli.map) {
        return ProfileSelector::EpisodeMap { episode, map }.profile_id();
    }
    // Default: fade to black.
    1
}

fn main() {
    let cli = parse_args();
    let palette = load_palette(&cli);
    let profile_id = resolve_profile_id(&cli);

    let shading = match &cli.config_path {
        Some(path) => {
            let config = ShadeConfig::load(path).unwrap_or_else(|e| {
                eprintln!("Failed to load config {}: {e}", path.display());
                process::exit(1);
            });
            let profiles = config.profiles();
            if profile_id >= profiles.len() {
                eprintln!(
                    "Profile id {profile_id} outside registry of {} profiles",
                    profiles.len()
                );
                process::exit(1);
            }
            LevelShading::init_with_profiles(profile_id, &profiles, &palette)
        }
        None => {
            if profile_id >= BUILTIN_PROFILES.len() {
                eprintln!(
                    "Profile id {profile_id} outside registry of {} profiles",
                    BUILTIN_PROFILES.len()
                );
                process::exit(1);
            }
            LevelShading::init(profile_id, &palette)
        }
    };
    let table = shading.table();

    println!("Profile {profile_id}, fog {:?}", table.fog());
    println!("View width {}, {SHADE_LEVELS} shade rows", cli.view_width);
    for scale in [0u32, 16, 64, 128, 256, 512, 1024] {
        let row = table.shade_row_index(scale, false, cli.view_width);
        println!("  scale {scale:>5} -> row {row}");
    }

    if let Some(path) = &cli.png_path {
        if let Err(e) = capture::save_table_png(table, &palette, path) {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        }
        println!("Wrote {}", path.display());
    }
}
