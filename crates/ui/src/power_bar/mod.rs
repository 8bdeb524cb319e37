//! Power bar HUD widget.
//!
//! A vertical bar on the right edge of the screen:
//! - fill height: power provided, against a scale that doubles from 100 MW
//!   until it exceeds both supply and drain
//! - fill color: green / orange / red for normal / low / critical power
//! - indicator sprite: power drained, on the same scale
//! - hover tooltip: `Power Usage: provided/drained`
//!
//! Both fractions ease towards their targets at 30% of the remaining distance
//! per frame.

mod config;
mod error;
mod systems;
mod tests;
mod widget;

use bevy::prelude::*;

pub use config::PowerBarConfig;
pub use error::PowerBarError;
pub use systems::{power_bar_ui, spawn_power_bar, PowerBarHover};
pub use widget::{
    bar_color, power_scale, smooth, tooltip_text, PowerBarWidget, ANIM_RATE, BASE_POWER_SCALE,
    COLOR_CRITICAL, COLOR_LOW, COLOR_NORMAL,
};

/// Plugin that builds the local player's power bar and draws it every frame.
pub struct PowerBarPlugin;

impl Plugin for PowerBarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PowerBarConfig>()
            .add_systems(PostStartup, spawn_power_bar)
            .add_systems(Update, power_bar_ui);
    }
}
