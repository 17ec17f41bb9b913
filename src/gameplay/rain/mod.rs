pub mod control;
pub mod lifecycle;
pub mod spawner;

use bevy::prelude::*;

use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use control::RainControl;
use lifecycle::{despawn_fallen_drops, reflect_drops_at_walls};
use spawner::{init_droplet_visual, seed_rain_rate, spawn_raindrops, RainTick};

pub struct RainPlugin;

impl Plugin for RainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RainControl>()
            .init_resource::<RainTick>()
            .add_systems(Startup, (seed_rain_rate, init_droplet_visual))
            .add_systems(
                Update,
                (
                    spawn_raindrops.in_set(PrePhysicsSet),
                    (reflect_drops_at_walls, despawn_fallen_drops)
                        .chain()
                        .in_set(PostPhysicsAdjustSet),
                ),
            );
    }
}
