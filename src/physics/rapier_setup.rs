use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & gravity

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(50.0))
            .add_systems(Update, apply_gravity_config);
    }
}

/// Rapier's context entity appears after plugin startup, so the configured
/// gravity is written on the first frame it exists.
fn apply_gravity_config(
    mut applied: Local<bool>,
    mut rapier_cfg: Query<&mut RapierConfiguration>,
    game_cfg: Res<GameConfig>,
) {
    if *applied && !game_cfg.is_changed() {
        return;
    }
    let Ok(mut rc) = rapier_cfg.single_mut() else {
        return;
    };
    rc.gravity = Vect::new(0.0, game_cfg.gravity.y);
    *applied = true;
}
