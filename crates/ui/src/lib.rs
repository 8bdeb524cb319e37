use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod power_bar;
pub mod theme;
pub mod tooltip_container;

use tooltip_container::{TooltipContainers, DEFAULT_TOOLTIP_CONTAINER};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        let mut tooltips = TooltipContainers::default();
        tooltips.register(DEFAULT_TOOLTIP_CONTAINER);

        app.add_plugins(EguiPlugin)
            .insert_resource(tooltips)
            .add_systems(Startup, theme::apply_hud_theme)
            .add_plugins(power_bar::PowerBarPlugin)
            .add_systems(
                Update,
                tooltip_container::tooltip_container_ui.after(power_bar::power_bar_ui),
            );
    }
}
