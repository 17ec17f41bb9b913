use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::core::components::Raindrop;
use crate::core::config::GameConfig;

use super::control::RainControl;

/// Per-frame spawn counter; reset to zero after each spawn.
#[derive(Resource, Default, Debug)]
pub struct RainTick(pub f32);

/// Shared mesh + material for every droplet.
#[derive(Resource)]
pub struct DropletVisual {
    pub mesh: Handle<Mesh>,
    pub material: Handle<ColorMaterial>,
}

pub fn seed_rain_rate(cfg: Res<GameConfig>, mut control: ResMut<RainControl>) {
    control.request(cfg.rain.rate);
}

pub fn init_droplet_visual(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
) {
    let mesh = meshes.add(Mesh::from(Circle {
        radius: cfg.rain.render_diameter * 0.5,
    }));
    let material = materials.add(Color::srgb(0.0, 0.0, 1.0));
    commands.insert_resource(DropletVisual { mesh, material });
}

/// Advance the spawn counter once per frame; when it reaches the interval
/// derived from the current rate, emit one drop at a random x along the top
/// edge with zero initial velocity and reset the counter.
pub fn spawn_raindrops(
    mut commands: Commands,
    mut tick: ResMut<RainTick>,
    control: Res<RainControl>,
    cfg: Res<GameConfig>,
    visual: Res<DropletVisual>,
) {
    tick.0 += 1.0;
    if tick.0 < control.spawn_interval_ticks() {
        return;
    }
    tick.0 = 0.0;

    let mut rng = rand::thread_rng();
    let x = rng.gen_range(cfg.arena.left()..cfg.arena.right());

    commands.spawn((
        Raindrop,
        Transform::from_xyz(x, cfg.arena.top(), 0.0),
        GlobalTransform::default(),
        Visibility::default(),
        RigidBody::Dynamic,
        Collider::ball(cfg.rain.drop_radius),
        Velocity::zero(),
        Friction::coefficient(cfg.rain.friction),
        Restitution::coefficient(cfg.rain.restitution),
        Mesh2d(visual.mesh.clone()),
        MeshMaterial2d(visual.material.clone()),
    ));
}
