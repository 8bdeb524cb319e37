use bevy::prelude::*;

pub mod bar_renderer;
pub mod chrome;

/// 2D HUD drawing services: the sprite atlas and the immediate-mode renderer
/// used by egui widgets.
///
/// The sidebar sprite sheet is registered with egui at startup, so the egui
/// plugin must be present in the app (the UI plugin adds it).
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<chrome::ChromeProvider>()
            .add_systems(Startup, chrome::register_sidebar_bits);
    }
}
