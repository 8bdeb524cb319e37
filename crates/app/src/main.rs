use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use ui::power_bar::PowerBarConfig;

mod demo_controls;

fn main() -> AppExit {
    // Optional JSON override for the power bar; a bad file is fatal.
    let config = match std::env::var("POWERBAR_CONFIG") {
        Ok(path) => match PowerBarConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load power bar config {path}: {e}");
                return AppExit::error();
            }
        },
        Err(_) => PowerBarConfig::default(),
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Power Bar".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(config)
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
        demo_controls::DemoControlsPlugin,
    ))
    .add_systems(Startup, spawn_camera);

    app.run()
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
