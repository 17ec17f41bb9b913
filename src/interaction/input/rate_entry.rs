//! Keyboard rate entry: digits build a pending number, Enter commits it
//! through the clamping rule, Up/Down nudge the rate by one.

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::rain::control::RainControl;

/// Longest accepted pending entry; keeps the committed value well inside i64.
const MAX_ENTRY_DIGITS: usize = 6;

#[derive(Resource, Default, Debug)]
pub struct RateEntry {
    pub buffer: String,
}

pub struct RateEntryPlugin;

impl Plugin for RateEntryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RateEntry>()
            .add_systems(Update, rate_entry_keys.in_set(PrePhysicsSet));
    }
}

fn digit_value(key: KeyCode) -> Option<char> {
    Some(match key {
        KeyCode::Digit0 | KeyCode::Numpad0 => '0',
        KeyCode::Digit1 | KeyCode::Numpad1 => '1',
        KeyCode::Digit2 | KeyCode::Numpad2 => '2',
        KeyCode::Digit3 | KeyCode::Numpad3 => '3',
        KeyCode::Digit4 | KeyCode::Numpad4 => '4',
        KeyCode::Digit5 | KeyCode::Numpad5 => '5',
        KeyCode::Digit6 | KeyCode::Numpad6 => '6',
        KeyCode::Digit7 | KeyCode::Numpad7 => '7',
        KeyCode::Digit8 | KeyCode::Numpad8 => '8',
        KeyCode::Digit9 | KeyCode::Numpad9 => '9',
        _ => return None,
    })
}

pub fn rate_entry_keys(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut entry: ResMut<RateEntry>,
    mut control: ResMut<RainControl>,
) {
    if !cfg.rain.interactive {
        return;
    }

    for key in keys.get_just_pressed() {
        if let Some(digit) = digit_value(*key) {
            if entry.buffer.len() < MAX_ENTRY_DIGITS {
                entry.buffer.push(digit);
            }
        }
    }

    if keys.just_pressed(KeyCode::Backspace) {
        entry.buffer.pop();
    }
    if keys.just_pressed(KeyCode::Escape) {
        entry.buffer.clear();
    }
    if keys.just_pressed(KeyCode::Enter) || keys.just_pressed(KeyCode::NumpadEnter) {
        if entry.buffer.is_empty() {
            info!("rate entry committed empty; ignored");
        } else {
            match entry.buffer.parse::<i64>() {
                Ok(raw) => control.request(raw),
                Err(e) => warn!("rate entry '{}' unparsable: {e}", entry.buffer),
            }
            entry.buffer.clear();
        }
    }

    if keys.just_pressed(KeyCode::ArrowUp) {
        let next = control.rate() as i64 + 1;
        control.request(next);
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        let next = control.rate() as i64 - 1;
        control.request(next);
    }
}
