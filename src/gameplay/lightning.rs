use bevy::prelude::*;
use rand::Rng;

use crate::core::config::{ArenaConfig, GameConfig};
use crate::gameplay::rain::control::RainControl;

const BOLT_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);

pub struct LightningPlugin;

impl Plugin for LightningPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, flash_lightning);
    }
}

/// A single-frame flash, anchored at the top point of the jagged stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bolt {
    pub top: Vec2,
}

impl Bolt {
    /// The two line segments of the "Z" stroke, as fixed offsets from the top
    /// point (arena units, y up).
    pub fn segments(&self) -> [(Vec2, Vec2); 2] {
        let t = self.top;
        [
            (t, t + Vec2::new(5.0, -5.0)),
            (t + Vec2::new(10.0, -20.0), t + Vec2::new(-5.0, -5.0)),
        ]
    }
}

/// With the given per-frame probability, place a bolt at a uniformly random x
/// and a top point within the upper quarter of the arena.
pub fn roll_bolt(rng: &mut impl Rng, arena: &ArenaConfig, chance: f32) -> Option<Bolt> {
    if rng.gen::<f32>() >= chance {
        return None;
    }
    let x = rng.gen_range(arena.left()..arena.right());
    let below_top = rng.gen_range(0.0..arena.height * 0.25);
    Some(Bolt {
        top: Vec2::new(x, arena.top() - below_top),
    })
}

/// Immediate-mode gizmo lines live one frame, so a successful roll is a
/// complete flash with no state carried over.
pub fn flash_lightning(mut gizmos: Gizmos, control: Res<RainControl>, cfg: Res<GameConfig>) {
    if control.rate() <= cfg.lightning.rate_threshold {
        return;
    }
    let mut rng = rand::thread_rng();
    if let Some(bolt) = roll_bolt(&mut rng, &cfg.arena, cfg.lightning.flash_chance) {
        for (a, b) in bolt.segments() {
            gizmos.line_2d(a, b, BOLT_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn flash_frequency_is_about_one_percent() {
        let arena = ArenaConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut flashes = 0usize;
        for _ in 0..100_000 {
            if roll_bolt(&mut rng, &arena, 0.01).is_some() {
                flashes += 1;
            }
        }
        assert!(
            (700..=1300).contains(&flashes),
            "expected ~1000 flashes in 100k frames, got {flashes}"
        );
    }

    #[test]
    fn thousand_frames_yields_about_ten() {
        let arena = ArenaConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let flashes = (0..1000)
            .filter(|_| roll_bolt(&mut rng, &arena, 0.01).is_some())
            .count();
        assert!((1..=25).contains(&flashes), "got {flashes}");
    }

    #[test]
    fn bolts_spawn_in_top_quarter() {
        let arena = ArenaConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = 0;
        for _ in 0..10_000 {
            if let Some(bolt) = roll_bolt(&mut rng, &arena, 0.5) {
                assert!(bolt.top.x >= arena.left() && bolt.top.x < arena.right());
                assert!(bolt.top.y <= arena.top());
                assert!(bolt.top.y > arena.top() - arena.height * 0.25);
                seen += 1;
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn zero_chance_never_flashes() {
        let arena = ArenaConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        assert!((0..1000).all(|_| roll_bolt(&mut rng, &arena, 0.0).is_none()));
    }
}
