use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Bounds applied to every requested rain rate, wherever it comes from
/// (config file, CLI flag, interactive entry).
pub const MIN_RAIN_RATE: u32 = 1;
pub const MAX_RAIN_RATE: u32 = 50;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 300.0,
            title: "Rain Walker".into(),
            auto_close: 0.0,
        }
    }
}

/// Logical simulation area, centered on the world origin.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    /// Extra fall distance below the bottom edge before a drop despawns.
    pub despawn_margin: f32,
    /// Gap kept between the character and either side edge.
    pub walk_margin: f32,
}
impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 100.0,
            despawn_margin: 10.0,
            walk_margin: 10.0,
        }
    }
}
impl ArenaConfig {
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }
    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }
    pub fn left(&self) -> f32 {
        -self.half_width()
    }
    pub fn right(&self) -> f32 {
        self.half_width()
    }
    pub fn top(&self) -> f32 {
        self.half_height()
    }
    pub fn bottom(&self) -> f32 {
        -self.half_height()
    }
    /// Inclusive x range the character may occupy.
    pub fn walk_range(&self) -> (f32, f32) {
        (self.left() + self.walk_margin, self.right() - self.walk_margin)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -300.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CharacterConfig {
    /// Starting x position in arena units.
    pub start_x: f32,
    /// Horizontal movement per update tick while a direction key is held.
    pub walk_speed: f32,
    /// Number of images in the walk cycle.
    pub walk_frames: usize,
    /// Update ticks between walk-frame advances.
    pub frame_delay: u32,
    /// Rendered sprite edge length (sprites are square).
    pub sprite_size: f32,
    pub body_width: f32,
    pub body_height: f32,
}
impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            start_x: -100.0,
            walk_speed: 1.5,
            walk_frames: 8,
            frame_delay: 5,
            sprite_size: 70.0,
            body_width: 15.0,
            body_height: 20.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RainConfig {
    /// Requested raindrops per second; clamped to 1..=50 at startup.
    pub rate: i64,
    /// Enables keyboard rate entry and the HUD.
    pub interactive: bool,
    pub drop_radius: f32,
    pub render_diameter: f32,
    pub friction: f32,
    pub restitution: f32,
}
impl Default for RainConfig {
    fn default() -> Self {
        Self {
            rate: 5,
            interactive: true,
            drop_radius: 1.0,
            render_diameter: 1.2,
            friction: 0.1,
            restitution: 0.01,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LightningConfig {
    /// Flashes only occur while the effective rain rate exceeds this.
    pub rate_threshold: u32,
    /// Per-frame flash probability while active.
    pub flash_chance: f32,
}
impl Default for LightningConfig {
    fn default() -> Self {
        Self {
            rate_threshold: 30,
            flash_chance: 0.01,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub arena: ArenaConfig,
    pub gravity: GravityConfig,
    pub character: CharacterConfig,
    pub rain: RainConfig,
    pub lightning: LightningConfig,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            arena: Default::default(),
            gravity: Default::default(),
            character: Default::default(),
            rain: Default::default(),
            lightning: Default::default(),
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Non-fatal sanity checks; each returned line is logged at warn level on startup.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            warnings.push(format!(
                "arena dimensions must be positive (got {}x{})",
                self.arena.width, self.arena.height
            ));
        }
        if self.rain.rate < MIN_RAIN_RATE as i64 || self.rain.rate > MAX_RAIN_RATE as i64 {
            warnings.push(format!(
                "rain.rate {} outside {MIN_RAIN_RATE}..={MAX_RAIN_RATE}; it will be clamped",
                self.rain.rate
            ));
        }
        if self.character.walk_frames == 0 {
            warnings.push("character.walk_frames must be at least 1".into());
        }
        if self.character.frame_delay == 0 {
            warnings.push("character.frame_delay must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.lightning.flash_chance) {
            warnings.push(format!(
                "lightning.flash_chance {} outside 0..=1",
                self.lightning.flash_chance
            ));
        }
        if self.gravity.y >= 0.0 {
            warnings.push("gravity.y is not downward; raindrops will never despawn".into());
        }
        warnings
    }

    /// Background clear color (light gray).
    pub fn background_color(&self) -> Color {
        Color::srgb(0.86, 0.86, 0.86)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn walk_range_respects_margin() {
        let arena = ArenaConfig::default();
        let (lo, hi) = arena.walk_range();
        assert_eq!(lo, -140.0);
        assert_eq!(hi, 140.0);
    }

    #[test]
    fn out_of_range_rate_is_flagged() {
        let mut cfg = GameConfig::default();
        cfg.rain.rate = 999;
        assert!(cfg.validate().iter().any(|w| w.contains("rain.rate")));
        cfg.rain.rate = 0;
        assert!(cfg.validate().iter().any(|w| w.contains("rain.rate")));
    }

    #[test]
    fn upward_gravity_is_flagged() {
        let mut cfg = GameConfig::default();
        cfg.gravity.y = 10.0;
        assert!(cfg.validate().iter().any(|w| w.contains("gravity")));
    }
}
