//! On-screen rate readout, help line, and warning text for interactive mode.

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::gameplay::rain::control::RainControl;
use crate::interaction::input::rate_entry::RateEntry;

#[derive(Component)]
struct RateText;

#[derive(Component)]
struct WarningText;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, (update_rate_text, update_warning_text));
    }
}

fn spawn_hud(mut commands: Commands, cfg: Res<GameConfig>) {
    if !cfg.rain.interactive {
        return;
    }

    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: 14.0,
            ..Default::default()
        },
        TextColor(Color::srgb(0.15, 0.15, 0.15)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        RateText,
    ));

    commands.spawn((
        Text::new("digits + Enter set raindrops per second (capped at 50); try above 30"),
        TextFont {
            font_size: 11.0,
            ..Default::default()
        },
        TextColor(Color::srgb(0.35, 0.35, 0.35)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(22.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
    ));

    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: 12.0,
            ..Default::default()
        },
        TextColor(Color::srgb(1.0, 0.0, 0.0)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        WarningText,
    ));
}

fn update_rate_text(
    control: Res<RainControl>,
    entry: Res<RateEntry>,
    mut q_text: Query<&mut Text, With<RateText>>,
) {
    if !control.is_changed() && !entry.is_changed() {
        return;
    }
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    let mut line = format!("Raindrops per second: {}", control.rate());
    if !entry.buffer.is_empty() {
        line.push_str(&format!("  (entry: {}_)", entry.buffer));
    }
    text.0 = line;
}

fn update_warning_text(
    control: Res<RainControl>,
    mut q_text: Query<&mut Text, With<WarningText>>,
) {
    if !control.is_changed() {
        return;
    }
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    text.0 = control.warning.clone().unwrap_or_default();
}
