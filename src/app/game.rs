use bevy::prelude::*;

use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::debug::DebugPlugin;
use crate::gameplay::character::CharacterPlugin;
use crate::gameplay::hud::HudPlugin;
use crate::gameplay::lightning::LightningPlugin;
use crate::gameplay::rain::RainPlugin;
use crate::interaction::input::rate_entry::RateEntryPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::arena::ArenaPlugin;
use crate::physics::rapier_setup::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            ArenaPlugin,
            CharacterPlugin,
            RainPlugin,
            LightningPlugin,
            RateEntryPlugin,
            HudPlugin,
            AutoClosePlugin,
            DebugPlugin,
        ));
    }
}
