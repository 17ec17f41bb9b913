use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Handles for the walk cycle and the single idle pose.
#[derive(Resource)]
pub struct CharacterSprites {
    pub walk: Vec<Handle<Image>>,
    pub idle: Handle<Image>,
}

pub fn load_character_sprites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    cfg: Res<GameConfig>,
) {
    let dir = std::path::Path::new("assets/sprites");
    if !dir.exists() {
        warn!(
            "character sprites missing at {}; the walker will render without images",
            dir.display()
        );
    }
    let walk = (1..=cfg.character.walk_frames)
        .map(|i| asset_server.load(format!("sprites/walks/{i}.png")))
        .collect();
    let idle = asset_server.load("sprites/idle/1.png");
    commands.insert_resource(CharacterSprites { walk, idle });
}
