/// Integration tests for configuration loading
use std::io::Write;

use cps_calculator::config::load_config;

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cps.toml");

    let cfg = load_config(&path).unwrap();

    assert_eq!(cfg.platforms.len(), 9);
    assert_eq!(cfg.platforms[0].name, "Clarifai");
    assert_eq!(cfg.search.volume, 5000.0);
    assert_eq!(cfg.display.currency, "$");
    assert_eq!(cfg.display.decimals, 4);
}

#[test]
fn test_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cps.toml");

    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"
[search]
volume = 2500

[sweep]
min = 500
max = 4000
step = 250

[display]
currency = "€"
decimals = 2

[[platforms]]
name = "SerpAPI"
fixed_cost = 75.0
cost_per_call = 0.02
calls_per_search = 2.0
"#
    )
    .unwrap();

    let cfg = load_config(&path).unwrap();

    assert_eq!(cfg.search.volume, 2500.0);
    assert_eq!(cfg.sweep.min, 500.0);
    assert_eq!(cfg.sweep.max, 4000.0);
    assert_eq!(cfg.sweep.step, 250.0);
    assert_eq!(cfg.display.currency, "€");
    assert_eq!(cfg.platforms.len(), 1);
    assert_eq!(cfg.platforms[0].name, "SerpAPI");
}

#[test]
fn test_partial_file_keeps_remaining_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cps.toml");

    std::fs::write(&path, "[search]\nvolume = 1234\n").unwrap();

    let cfg = load_config(&path).unwrap();

    assert_eq!(cfg.search.volume, 1234.0);
    assert_eq!(cfg.platforms.len(), 9);
    assert!(cfg.sweep.enabled);
}

#[test]
fn test_negative_cost_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cps.toml");

    std::fs::write(
        &path,
        r#"
[[platforms]]
name = "Broken"
fixed_cost = -30.0
cost_per_call = 0.0
calls_per_search = 0.0
"#,
    )
    .unwrap();

    let result = load_config(&path);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Broken"));
}

#[test]
fn test_invalid_sweep_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cps.toml");

    std::fs::write(&path, "[sweep]\nmin = 10000\nmax = 1000\n").unwrap();

    assert!(load_config(&path).is_err());
}
