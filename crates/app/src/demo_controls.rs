//! Keyboard controls that move the local player's power levels, so the bar
//! has something to animate.
//!
//! | Key | Effect |
//! |-----|--------|
//! | P / O | provided power +25 / -25 |
//! | D / F | drained power +25 / -25 |

use bevy::prelude::*;

use simulation::player::LocalPlayer;
use simulation::power::{PowerManager, PowerModel};

const STEP: f32 = 25.0;

pub struct DemoControlsPlugin;

impl Plugin for DemoControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, log_controls)
            .add_systems(Update, demo_power_keybinds);
    }
}

fn log_controls() {
    info!("Power demo: P/O raise/lower supply, D/F raise/lower drain");
}

/// `(provided, drained)` change requested by this frame's key presses.
fn key_delta(keys: &ButtonInput<KeyCode>) -> (f32, f32) {
    let mut provided = 0.0;
    let mut drained = 0.0;
    if keys.just_pressed(KeyCode::KeyP) {
        provided += STEP;
    }
    if keys.just_pressed(KeyCode::KeyO) {
        provided -= STEP;
    }
    if keys.just_pressed(KeyCode::KeyD) {
        drained += STEP;
    }
    if keys.just_pressed(KeyCode::KeyF) {
        drained -= STEP;
    }
    (provided, drained)
}

fn demo_power_keybinds(
    keys: Res<ButtonInput<KeyCode>>,
    local: Option<Res<LocalPlayer>>,
    mut managers: Query<&mut PowerManager>,
) {
    let (dp, dd) = key_delta(&keys);
    if dp == 0.0 && dd == 0.0 {
        return;
    }
    let Some(local) = local else {
        return;
    };
    let Ok(mut pm) = managers.get_mut(local.actor) else {
        warn!("Local player actor has no PowerManager");
        return;
    };

    let provided = pm.power_provided() + dp;
    let drained = pm.power_drained() + dd;
    pm.set_levels(provided, drained);
    info!(
        "Power: provided {} drained {} ({})",
        pm.power_provided(),
        pm.power_drained(),
        pm.power_state().name()
    );
}
