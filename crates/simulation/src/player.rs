//! The local player and its primary actor.

use bevy::prelude::*;

use crate::power::PowerManager;

/// Marker for a player's primary actor entity.
#[derive(Component, Debug, Default)]
pub struct PlayerActor;

/// Identifies the actor belonging to the player at this keyboard.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalPlayer {
    pub actor: Entity,
}

/// Spawns the local player's actor with an empty [`PowerManager`].
pub fn spawn_local_player(mut commands: Commands) {
    let actor = commands
        .spawn((PlayerActor, PowerManager::default(), Name::new("LocalPlayer")))
        .id();
    commands.insert_resource(LocalPlayer { actor });
    info!("Spawned local player actor {actor}");
}
