use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::core::config::GameConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// 2D camera pinned to the logical arena: the whole 300x100 area stays
/// visible whatever the window size, so simulation coordinates never depend
/// on the surface.
fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: cfg.arena.width,
                min_height: cfg.arena.height,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}
