use bevy::prelude::*;

use crate::core::components::Character;
use crate::core::config::GameConfig;

/// Keyboard-driven walking state. The x position is authoritative here and
/// written into the kinematic body's `Transform` every frame.
#[derive(Component, Debug, Clone)]
pub struct Walker {
    pub x: f32,
    pub facing_right: bool,
    pub walking: bool,
}

impl Walker {
    pub fn new(x: f32) -> Self {
        Self {
            x,
            facing_right: true,
            walking: false,
        }
    }
}

/// Poll the two direction keys: left decrements, right increments, holding
/// both cancels out but still counts as walking (and faces right, matching
/// the check order). Position is clamped to the walkable range each frame.
pub fn drive_walker(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut q: Query<(&mut Walker, &mut Transform), With<Character>>,
) {
    let Ok((mut walker, mut tf)) = q.single_mut() else {
        return;
    };
    walker.walking = false;
    if keys.pressed(KeyCode::ArrowLeft) {
        walker.x -= cfg.character.walk_speed;
        walker.walking = true;
        walker.facing_right = false;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        walker.x += cfg.character.walk_speed;
        walker.walking = true;
        walker.facing_right = true;
    }
    let (lo, hi) = cfg.arena.walk_range();
    walker.x = walker.x.clamp(lo, hi);
    tf.translation.x = walker.x;
}
