use ribcut_core::{DiagnosticKind, LengthUnit};
use ribcut_settings::Config;
use ribcut_wing::Wing;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_build_from_toml_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wing.toml");
    fs::write(
        &path,
        r#"
units = "mm"

[contour]
max_points = 40

[wing]
root_airfoil = "NACA2412"
tip_airfoil = "0012"
root_chord = 200.0
tip_chord = 120.0
span = 600.0
steps = 3
twist = -2.0
trailing_edge_width = 8.0
trailing_edge_height = 3.0

[[wing.spars]]
side = "top"
orientation = "vertical"
position = { percent = 0.3 }
xsize = 6.0
ysize = 6.0

[[wing.stringers]]
side = "bottom"
orientation = "tangent"
position = { front = 20.0 }
xsize = 3.0
ysize = 3.0
"#,
    )
    .unwrap();

    let config = Config::load_or_default(Some(path.as_path())).unwrap();
    assert_eq!(config.units, LengthUnit::Mm);
    assert_eq!(config.wing.spars.len(), 1);

    let ribs = Wing::from_config(&config).unwrap().build().unwrap();
    assert_eq!(ribs.len(), 8);
    for rib in ribs.iter() {
        assert!(rib.contour.top().len() <= 40);
        assert!(!rib.contour.outline().is_empty());
        assert!(!rib.contour.diagnostics().contains(DiagnosticKind::BoundsAutoSaved));
    }

    let root = ribs.right[0].contour.bounds();
    let tip = ribs.right[3].contour.bounds();
    assert!(root.chord() > tip.chord());
}

#[test]
fn test_default_config_round_trip_builds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wing.json");
    let mut config = Config::new();
    config.wing.steps = 2;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_or_default(Some(path.as_path())).unwrap();
    let ribs = Wing::from_config(&loaded).unwrap().build().unwrap();
    assert_eq!(ribs.right.len(), 3);
    assert_eq!(ribs.left[0].label, "WL1");
}
