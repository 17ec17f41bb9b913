use bevy::prelude::*;

use crate::core::components::{Character, CharacterSprite};

use super::assets::CharacterSprites;
use super::locomotion::Walker;

/// Bounded walk-frame index advanced on a fixed tick cadence. The index is
/// always in range by construction (modulo arithmetic).
#[derive(Component, Debug, Clone)]
pub struct FrameCycler {
    ticks: u64,
    frame: usize,
    delay: u32,
    frames: usize,
}

impl FrameCycler {
    pub fn new(delay: u32, frames: usize) -> Self {
        Self {
            ticks: 0,
            frame: 0,
            delay: delay.max(1),
            frames: frames.max(1),
        }
    }

    /// Advance one tick; the frame index steps every `delay`-th tick.
    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks % self.delay as u64 == 0 {
            self.frame = (self.frame + 1) % self.frames;
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }
}

/// Tick the cycler every frame (standing still does not pause the cycle) and
/// point the sprite at the current walk frame or the idle pose. Facing left
/// is a horizontal sprite flip.
pub fn animate_walker(
    sprites: Option<Res<CharacterSprites>>,
    mut q: Query<(&Walker, &mut FrameCycler), With<Character>>,
    mut q_sprite: Query<&mut Sprite, With<CharacterSprite>>,
) {
    let Ok((walker, mut cycler)) = q.single_mut() else {
        return;
    };
    cycler.tick();

    let Some(sprites) = sprites else {
        return;
    };
    let Ok(mut sprite) = q_sprite.single_mut() else {
        return;
    };
    let image = if walker.walking {
        sprites.walk.get(cycler.frame()).cloned()
    } else {
        Some(sprites.idle.clone())
    };
    if let Some(image) = image {
        sprite.image = image;
    }
    sprite.flip_x = !walker.facing_right;
}
