// Font discovery, fallback and measurement

use std::fs;
use std::path::Path;
use std::sync::Arc;

use quote_overlay::config::FontConfig;
use quote_overlay::constants::DEFAULT_SYSTEM_FONT_PATHS;
use quote_overlay::fonts::{FontProvider, FontRegistry, FontSource, GlyphFont};
use quote_overlay::overlay::{FontHandle, OverlayCompositor, OverlayError};

fn font_config(dirs: &[&Path], default_font: Option<&str>) -> FontConfig {
    FontConfig {
        directories: dirs.iter().map(|d| d.display().to_string()).collect(),
        default_font: default_font.map(str::to_string),
        system_paths: vec![],
    }
}

#[test]
fn test_discovery_scans_recursively_and_filters_extensions() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Roboto.ttf"), b"x").unwrap();
    fs::write(dir.path().join("lato.OTF"), b"x").unwrap();
    fs::write(dir.path().join("readme.txt"), b"x").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("Menlo.ttc"), b"x").unwrap();

    let registry = FontRegistry::discover(&font_config(&[dir.path()], None));

    assert_eq!(registry.names(), vec!["lato", "menlo", "roboto"]);
    // Default is the first file scanned, not the first name alphabetically
    assert_eq!(registry.default_name(), "roboto");
    assert!(registry.contains("Roboto"));
    assert!(!registry.contains("readme"));
}

#[test]
fn test_earlier_directory_wins_name_conflicts() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fs::write(first.path().join("Serif.ttf"), b"x").unwrap();
    fs::write(second.path().join("serif.ttf"), b"x").unwrap();

    let registry = FontRegistry::discover(&font_config(&[first.path(), second.path()], None));

    assert_eq!(registry.len(), 1);
    let entry = registry.get("serif").unwrap();
    assert!(entry.path.starts_with(first.path()));
}

#[test]
fn test_missing_directories_are_skipped() {
    let registry =
        FontRegistry::discover(&font_config(&[Path::new("/does/not/exist/fonts")], None));
    assert!(registry.is_empty());
    assert_eq!(registry.default_name(), "builtin");
}

#[test]
fn test_configured_default_font() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.ttf"), b"x").unwrap();
    fs::write(dir.path().join("b.ttf"), b"x").unwrap();

    let registry = FontRegistry::discover(&font_config(&[dir.path()], Some("B")));
    assert_eq!(registry.default_name(), "b");

    // Unknown default falls back to the first discovered font
    let registry = FontRegistry::discover(&font_config(&[dir.path()], Some("zzz")));
    assert_eq!(registry.default_name(), "a");
}

#[test]
fn test_listing_reports_file_and_availability() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Lato.ttf"), b"x").unwrap();
    let registry = FontRegistry::discover(&font_config(&[dir.path()], None));

    let listings = registry.listings();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].name, "lato");
    assert_eq!(listings[0].file, "Lato.ttf");
    assert!(listings[0].available);
}

#[test]
fn test_unknown_font_is_rejected_with_available_names() {
    let registry = FontRegistry::from_paths(["/fonts/Lato.ttf", "/fonts/Roboto.ttf"]);
    let provider = Arc::new(FontProvider::new(Arc::new(registry), vec![]));
    let compositor = OverlayCompositor::new(provider);

    let err = compositor.validate_font(Some("nonexistent")).unwrap_err();
    assert_eq!(
        err,
        OverlayError::UnknownFont {
            name: "nonexistent".to_string(),
            available: vec!["lato".to_string(), "roboto".to_string()],
        }
    );
    assert_eq!(err.to_http_status(), 400);

    assert!(compositor.validate_font(Some("LATO")).is_ok());
    assert!(compositor.validate_font(None).is_ok());
}

#[test]
fn test_unreadable_named_font_falls_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Broken.ttf"), b"not a font").unwrap();
    let registry = FontRegistry::discover(&font_config(&[dir.path()], None));
    let provider = FontProvider::new(Arc::new(registry), vec![]);

    let loaded = provider.load_with_fallback(Some("broken"), 24.0).unwrap();
    assert_eq!(loaded.source, FontSource::BuiltIn);
    assert_eq!(loaded.handle.px_size(), 24.0);
}

#[test]
fn test_direct_load_failure_maps_to_font_unavailable() {
    let provider = FontProvider::new(Arc::new(FontRegistry::default()), vec![]);
    let err: OverlayError = provider.resolve("missing").unwrap_err().into();

    assert!(matches!(err, OverlayError::FontUnavailable(_)));
    assert_eq!(err.to_http_status(), 500);
}

#[test]
fn test_system_font_measures_text_when_installed() {
    let Some(path) = DEFAULT_SYSTEM_FONT_PATHS
        .iter()
        .map(Path::new)
        .find(|p| p.is_file())
    else {
        eprintln!("No system font installed, skipping");
        return;
    };

    let font = GlyphFont::from_bytes(fs::read(path).unwrap(), 40.0).expect("system font parses");
    let short = font.measure("Hi");
    let long = font.measure("Hi there, world");

    assert!(short.width > 0);
    assert!(long.width > short.width);
    assert!(short.height >= 30 && short.height <= 80);

    let provider = FontProvider::new(
        Arc::new(FontRegistry::default()),
        vec![path.to_path_buf()],
    );
    let loaded = provider.load_with_fallback(None, 40.0).unwrap();
    assert_eq!(loaded.source, FontSource::SystemPath(path.to_path_buf()));
}
