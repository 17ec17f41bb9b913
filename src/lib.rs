pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::components::{Character, Ground, Raindrop};
pub use crate::core::config::{config::GameConfig, config::WindowConfig};
pub use crate::gameplay::rain::control::RainControl;
