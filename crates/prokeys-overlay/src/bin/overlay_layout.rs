//! Print the ProKeys overlay layout
//!
//! Usage: overlay-layout [CONFIG_PATH] [--fade ZERO_POSITION SIZE]
//!
//! Loads the overlay settings (defaults if the file is missing), builds the
//! overlay against a recording renderer and prints one line per white key.

use anyhow::{bail, Context, Result};
use prokeys_overlay::piano::note_name;
use prokeys_overlay::{
    default_config_path, FadeRegion, KeyOverlay, LoggingRenderer, OverlaySettings,
    TextureSelection,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config_path: Option<PathBuf> = None;
    let mut fade = FadeRegion::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fade" => {
                let zero = args.next().context("--fade needs a zero position")?;
                let size = args.next().context("--fade needs a size")?;
                fade = FadeRegion::new(
                    zero.parse().with_context(|| format!("Invalid fade position: {}", zero))?,
                    size.parse().with_context(|| format!("Invalid fade size: {}", size))?,
                );
            }
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            path => config_path = Some(PathBuf::from(path)),
        }
    }

    let config_path = config_path.unwrap_or_else(default_config_path);
    let settings = OverlaySettings::load(&config_path);

    let overlay = KeyOverlay::initialize(
        LoggingRenderer::new(),
        &settings.overlay,
        &settings.colors,
        fade,
    )?;

    println!(
        "{} white keys, spacing {:.4}, fade {:?}",
        overlay.white_key_count(),
        overlay.key_spacing(),
        fade
    );
    println!("{:>3}  {:<4} {:>4}  {:>8}  edge", "idx", "note", "band", "x");

    for descriptor in overlay.descriptors() {
        let slot = &descriptor.slot;
        let edge = match &descriptor.idle_texture {
            TextureSelection::Solid => "-".to_string(),
            TextureSelection::EdgeGradient { texture, scale_x } => {
                format!("{} (x{:+.0})", texture, scale_x)
            }
        };
        println!(
            "{:>3}  {:<4} {:>4}  {:>8.4}  {}",
            slot.sequential_index,
            format!("{}{}", note_name(slot.note_in_octave), slot.octave_index),
            slot.band_group,
            descriptor.x_offset,
            edge
        );
    }

    Ok(())
}
