//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (input-driven movement, spawning, rate control)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysicsAdjust (boundary reflection, despawn of fallen drops)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // movement / spawns applied before the physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // lightweight corrections after physics
