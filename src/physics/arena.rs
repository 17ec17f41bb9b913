use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::Ground;
use crate::core::config::GameConfig;

/// Ground slab thickness in arena units.
const GROUND_THICKNESS: f32 = 5.0;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_ground);
    }
}

/// One static body spanning the arena width, sitting on the bottom edge.
/// Created once, never mutated. There are no side or top walls; horizontal
/// containment of raindrops is handled by velocity reflection instead.
///
/// The collider is a sensor: raindrops must keep falling to the despawn line
/// below the floor, so the slab only marks the walking surface.
fn spawn_ground(mut commands: Commands, cfg: Res<GameConfig>) {
    let y = cfg.arena.bottom() + GROUND_THICKNESS * 0.5;
    commands.spawn((
        Ground,
        RigidBody::Fixed,
        Collider::cuboid(cfg.arena.half_width(), GROUND_THICKNESS * 0.5),
        Sensor,
        Transform::from_xyz(0.0, y, 0.0),
        GlobalTransform::default(),
        Sprite {
            color: Color::WHITE,
            custom_size: Some(Vec2::new(cfg.arena.width, GROUND_THICKNESS)),
            ..default()
        },
    ));
}
