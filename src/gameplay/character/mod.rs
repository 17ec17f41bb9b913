pub mod animation;
pub mod assets;
pub mod locomotion;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Character, CharacterSprite};
use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use animation::FrameCycler;
use assets::load_character_sprites;
use locomotion::Walker;

/// Height of the physics body center above the arena bottom.
const BODY_LIFT: f32 = 40.0;
/// Height of the sprite center above the arena bottom.
const SPRITE_LIFT: f32 = 20.0;

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (load_character_sprites, spawn_character).chain(),
        )
        .add_systems(
            Update,
            (locomotion::drive_walker, animation::animate_walker)
                .chain()
                .in_set(PrePhysicsSet),
        );
    }
}

fn spawn_character(mut commands: Commands, cfg: Res<GameConfig>) {
    let c = &cfg.character;
    let body_y = cfg.arena.bottom() + BODY_LIFT;

    commands
        .spawn((
            Character,
            Walker::new(c.start_x),
            FrameCycler::new(c.frame_delay, c.walk_frames),
            Transform::from_xyz(c.start_x, body_y, 0.0),
            GlobalTransform::default(),
            Visibility::default(),
            RigidBody::KinematicPositionBased,
            Collider::cuboid(c.body_width * 0.5, c.body_height * 0.5),
        ))
        .with_children(|parent| {
            parent.spawn((
                CharacterSprite,
                Sprite {
                    custom_size: Some(Vec2::splat(c.sprite_size)),
                    ..default()
                },
                Transform::from_xyz(0.0, SPRITE_LIFT - BODY_LIFT, 1.0),
            ));
        });
}
