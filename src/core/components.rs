use bevy::prelude::*;

/// Marker component identifying a falling raindrop entity (holds physics body & visual).
#[derive(Component)]
pub struct Raindrop;

/// Marker component for the walking character entity (kinematic physics body).
#[derive(Component)]
pub struct Character;

/// Tag for the character's sprite child, which carries the animation image.
#[derive(Component)]
pub struct CharacterSprite;

/// Marker component for the static ground body.
#[derive(Component)]
pub struct Ground;
