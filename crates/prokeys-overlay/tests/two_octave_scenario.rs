//! End-to-end checks on a two octave (24 key) keyboard

use prokeys_overlay::{
    EdgeOrientation, FadeRegion, KeyOverlay, LoggingRenderer, OverlayConfig, OverlaySettings,
    ProKeysColors, TextureSelection,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn two_octave_overlay() -> KeyOverlay<LoggingRenderer> {
    KeyOverlay::with_key_count(
        LoggingRenderer::new(),
        24,
        &OverlayConfig::default(),
        &ProKeysColors::default(),
        FadeRegion::new(2.5, 0.75),
    )
    .unwrap()
}

#[test]
fn test_two_octaves_yield_fourteen_keys() {
    init_logging();
    let overlay = two_octave_overlay();

    assert_eq!(overlay.white_key_count(), 14);
    assert_eq!(overlay.descriptors().len(), 14);
    assert_eq!(overlay.renderer().materialized().len(), 14);

    let indices: Vec<usize> = overlay
        .descriptors()
        .iter()
        .map(|d| d.slot.sequential_index)
        .collect();
    assert_eq!(indices, (0..14).collect::<Vec<_>>());

    // Renderer saw the descriptors in sequential order
    assert_eq!(overlay.renderer().materialized(), overlay.descriptors());
}

#[test]
fn test_first_band_is_bounded_by_edge_keys() {
    init_logging();
    let overlay = two_octave_overlay();
    let slots = overlay.slots();

    // C (chromatic 0) and E (chromatic 4) bound the first band
    let c = slots.iter().find(|s| s.chromatic_index == 0).unwrap();
    let e = slots.iter().find(|s| s.chromatic_index == 4).unwrap();
    assert_eq!(c.band_edge, Some(EdgeOrientation::Normal));
    assert_eq!(e.band_edge, Some(EdgeOrientation::Mirrored));
    assert_eq!(c.band_group, e.band_group);

    // D between them stays solid
    let d = &overlay.descriptors()[1];
    assert_eq!(d.slot.chromatic_index, 2);
    assert_eq!(d.idle_texture, TextureSelection::Solid);

    let edge_count = slots.iter().filter(|s| s.is_band_edge()).count();
    let mirrored_count = slots.iter().filter(|s| s.is_mirrored()).count();
    assert_eq!(edge_count, 8);
    assert_eq!(mirrored_count, 4);
}

#[test]
fn test_holding_last_key_only() {
    init_logging();
    let mut overlay = two_octave_overlay();

    overlay.set_key_held(13, true);

    for i in 0..13 {
        assert!(!overlay.is_key_held(i), "key {} should be released", i);
        assert!(!overlay.renderer().is_highlight_visible(i as usize));
    }
    assert!(overlay.is_key_held(13));
    assert!(overlay.renderer().is_highlight_visible(13));
    assert_eq!(overlay.held_keys(), vec![13]);
}

#[test]
fn test_press_release_sequence() {
    init_logging();
    let mut overlay = two_octave_overlay();

    overlay.set_key_held(0, true);
    overlay.set_key_held(7, true);
    overlay.set_key_held(14, true);
    overlay.set_key_held(-3, true);
    assert_eq!(overlay.held_keys(), vec![0, 7]);

    overlay.set_key_held(0, false);
    overlay.set_key_held(0, false);
    assert_eq!(overlay.held_keys(), vec![7]);

    let renderer = overlay.into_renderer();
    assert!(!renderer.is_highlight_visible(0));
    assert!(renderer.is_highlight_visible(7));
}

#[test]
fn test_overlay_from_settings_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overlay.yaml");

    let mut settings = OverlaySettings::default();
    settings.overlay.track_width = 2.8;
    settings.overlay.overlay_offset = 0.1;
    settings.colors.red_overlay = "#FF0000".to_string();
    settings.save(&path).unwrap();

    let loaded = OverlaySettings::load(&path);
    let overlay = KeyOverlay::initialize(
        LoggingRenderer::new(),
        &loaded.overlay,
        &loaded.colors,
        FadeRegion::default(),
    )
    .unwrap();

    assert!((overlay.key_spacing() - 0.2).abs() < 1e-6);
    let first = &overlay.descriptors()[0];
    assert!((first.x_offset - 0.1).abs() < 1e-6);
    assert_eq!(first.idle_color.r, 1.0);
    assert_eq!(first.idle_color.a, 0.05);
    assert_eq!(first.highlight_color.a, 0.3);
}
