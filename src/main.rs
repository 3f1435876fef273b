//! Apron - scripted airplane taxi, lift-off and parking demo.
//!
//! A Bevy scene with a small fleet of planes driven by per-plane motion
//! controllers and a control panel that broadcasts fleet-wide commands.

use bevy::prelude::*;

mod aircraft;
mod camera;
mod fleet;
mod game_state;
mod ui;
mod world;

fn main() {
    // Force Vulkan backend on Windows (DX12 causes crashes on some systems)
    #[cfg(target_os = "windows")]
    std::env::set_var("WGPU_BACKEND", "vulkan");
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Apron".into(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Simulation clock
        .add_plugins(game_state::GameStatePlugin)
        // Aircraft motion and fleet dispatch
        .add_plugins(aircraft::AircraftPlugin)
        .add_plugins(fleet::FleetPlugin)
        // Scene
        .add_plugins(world::WorldPlugin)
        .add_plugins(camera::CameraPlugin)
        // Control panel and HUD
        .add_plugins(ui::UiPlugin)
        .run();
}
