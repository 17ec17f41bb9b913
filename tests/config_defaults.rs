use std::fs;
use std::io::Write;

use rain_walker::core::config::GameConfig;
use rain_walker::gameplay::rain::control::RainControl;

#[test]
fn default_constants() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.arena.width, 300.0);
    assert_eq!(cfg.arena.height, 100.0);
    assert_eq!(cfg.character.walk_speed, 1.5);
    assert_eq!(cfg.character.walk_frames, 8);
    assert_eq!(cfg.character.frame_delay, 5);
    assert_eq!(cfg.rain.rate, 5);
    assert_eq!(cfg.lightning.rate_threshold, 30);
    assert!(cfg.validate().is_empty());
}

#[test]
fn default_rate_interval() {
    let control = RainControl::default();
    assert_eq!(control.spawn_interval_ticks(), 12.0);
}

#[test]
fn ron_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
        (
            window: (
                width: 640.0,
                title: "Test",
            ),
            rain: (
                rate: 35,
                interactive: false,
            ),
        )
        "#
    )
    .expect("write temp ron");

    let cfg = GameConfig::load_from_file(file.path()).expect("load");
    assert_eq!(cfg.window.width, 640.0);
    assert_eq!(cfg.window.title, "Test");
    assert_eq!(cfg.rain.rate, 35);
    assert!(!cfg.rain.interactive);
    // untouched sections keep their defaults
    assert_eq!(cfg.window.height, 300.0);
    assert_eq!(cfg.arena.width, 300.0);
    assert_eq!(cfg.character.walk_speed, 1.5);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let (cfg, err) = GameConfig::load_or_default("does/not/exist.ron");
    assert_eq!(cfg, GameConfig::default());
    assert!(err.is_some());
}

#[test]
fn malformed_ron_is_an_error() {
    let mut path = std::env::temp_dir();
    path.push("rain_walker_malformed.ron");
    fs::write(&path, "( window: ( width: \"oops\" ) )").expect("write");
    assert!(GameConfig::load_from_file(&path).is_err());
}

#[test]
fn shipped_config_parses() {
    let cfg = GameConfig::load_from_file("assets/config/game.ron").expect("shipped config");
    assert!(cfg.validate().is_empty());
}
