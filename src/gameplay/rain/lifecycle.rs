use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::Raindrop;
use crate::core::config::GameConfig;

/// Elastic bounce off the invisible side walls: any drop past the left or
/// right edge has its horizontal velocity negated. Vertical velocity is left
/// untouched and drops are never removed sideways.
pub fn reflect_drops_at_walls(
    cfg: Res<GameConfig>,
    mut drops: Query<(&Transform, &mut Velocity), With<Raindrop>>,
) {
    let (left, right) = (cfg.arena.left(), cfg.arena.right());
    for (tf, mut vel) in drops.iter_mut() {
        let x = tf.translation.x;
        if x < left || x > right {
            vel.linvel.x = -vel.linvel.x;
        }
    }
}

/// Remove drops that have fallen past the bottom edge plus the despawn
/// margin. Despawning the entity tears down its physics body with it, so the
/// render list and the physics world can never disagree.
pub fn despawn_fallen_drops(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    drops: Query<(Entity, &Transform), With<Raindrop>>,
) {
    let floor = cfg.arena.bottom() - cfg.arena.despawn_margin;
    for (entity, tf) in drops.iter() {
        if tf.translation.y < floor {
            commands.entity(entity).despawn();
        }
    }
}
