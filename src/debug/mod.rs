//! Feature-gated stats overlay (F1). Compiled out entirely without the
//! `debug` cargo feature.

use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::components::Raindrop;
#[cfg(feature = "debug")]
use crate::gameplay::rain::control::RainControl;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    #[cfg(feature = "debug")]
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlayState>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(Update, (toggle_overlay, update_overlay));
    }

    #[cfg(not(feature = "debug"))]
    fn build(&self, _app: &mut App) {}
}

#[cfg(feature = "debug")]
#[derive(Resource, Default)]
pub struct DebugOverlayState {
    pub visible: bool,
}

#[cfg(feature = "debug")]
#[derive(Component)]
struct DebugOverlayText;

#[cfg(feature = "debug")]
fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: 13.0,
            ..Default::default()
        },
        TextColor(Color::srgb(0.75, 0.85, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(4.0),
            right: Val::Px(6.0),
            ..Default::default()
        },
        DebugOverlayText,
    ));
}

#[cfg(feature = "debug")]
fn toggle_overlay(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugOverlayState>) {
    if keys.just_pressed(KeyCode::F1) {
        state.visible = !state.visible;
        info!("debug overlay {}", if state.visible { "on" } else { "off" });
    }
}

#[cfg(feature = "debug")]
fn update_overlay(
    state: Res<DebugOverlayState>,
    time: Res<Time>,
    control: Option<Res<RainControl>>,
    drops: Query<(), With<Raindrop>>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    if !state.visible {
        if !text.0.is_empty() {
            text.0.clear();
        }
        return;
    }
    let rate = control.map(|c| c.rate()).unwrap_or(0);
    let dt = time.delta_secs();
    let fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };
    text.0 = format!("drops {} | rate {}/s | {:.0} fps", drops.iter().count(), rate, fps);
}
