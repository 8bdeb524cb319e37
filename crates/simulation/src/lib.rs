use bevy::prelude::*;

pub mod player;
pub mod power;

/// Host-side game state the HUD widgets observe.
///
/// Owns the local player's actor and its [`power::PowerManager`]. Everything
/// here is plain data; the UI only ever reads it.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, player::spawn_local_player);
    }
}
