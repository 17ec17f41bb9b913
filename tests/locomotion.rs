use bevy::prelude::*;

use rain_walker::core::components::Character;
use rain_walker::core::config::GameConfig;
use rain_walker::gameplay::character::locomotion::{drive_walker, Walker};

fn setup_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.add_systems(Update, drive_walker);
    let entity = app
        .world_mut()
        .spawn((
            Character,
            Walker::new(-100.0),
            Transform::from_xyz(-100.0, -10.0, 0.0),
            GlobalTransform::default(),
        ))
        .id();
    (app, entity)
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn walker(app: &App, entity: Entity) -> Walker {
    app.world().get::<Walker>(entity).unwrap().clone()
}

#[test]
fn hundred_frames_of_right_move_150_units() {
    let (mut app, entity) = setup_app();
    press(&mut app, KeyCode::ArrowRight);
    for _ in 0..100 {
        app.update();
    }
    let w = walker(&app, entity);
    assert_eq!(w.x, 50.0);
    assert!(w.walking);
    assert!(w.facing_right);
}

#[test]
fn holding_right_clamps_at_margin() {
    let (mut app, entity) = setup_app();
    press(&mut app, KeyCode::ArrowRight);
    for _ in 0..300 {
        app.update();
    }
    let cfg = GameConfig::default();
    let (_, hi) = cfg.arena.walk_range();
    assert_eq!(walker(&app, entity).x, hi);
}

#[test]
fn holding_left_clamps_at_margin() {
    let (mut app, entity) = setup_app();
    press(&mut app, KeyCode::ArrowLeft);
    for _ in 0..300 {
        app.update();
    }
    let cfg = GameConfig::default();
    let (lo, _) = cfg.arena.walk_range();
    let w = walker(&app, entity);
    assert_eq!(w.x, lo);
    assert!(!w.facing_right);
}

#[test]
fn transform_tracks_walker_position() {
    let (mut app, entity) = setup_app();
    press(&mut app, KeyCode::ArrowRight);
    for _ in 0..10 {
        app.update();
    }
    let w = walker(&app, entity);
    let tf = app.world().get::<Transform>(entity).unwrap();
    assert_eq!(tf.translation.x, w.x);
    assert_eq!(tf.translation.y, -10.0);
}

#[test]
fn idle_without_keys() {
    let (mut app, entity) = setup_app();
    app.update();
    let w = walker(&app, entity);
    assert!(!w.walking);
    assert_eq!(w.x, -100.0);
}

#[test]
fn both_keys_cancel_but_count_as_walking() {
    let (mut app, entity) = setup_app();
    press(&mut app, KeyCode::ArrowLeft);
    press(&mut app, KeyCode::ArrowRight);
    app.update();
    let w = walker(&app, entity);
    assert_eq!(w.x, -100.0);
    assert!(w.walking);
    assert!(w.facing_right);
}

#[test]
fn position_always_inside_walk_range() {
    let (mut app, entity) = setup_app();
    let cfg = GameConfig::default();
    let (lo, hi) = cfg.arena.walk_range();
    press(&mut app, KeyCode::ArrowLeft);
    for _ in 0..500 {
        app.update();
        let w = walker(&app, entity);
        assert!(w.x >= lo && w.x <= hi, "x={} out of range", w.x);
    }
}
