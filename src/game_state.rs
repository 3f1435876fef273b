//! Simulation clock shared by the aircraft systems.
//!
//! Scales and pauses the frame delta fed into the motion controllers.

use bevy::prelude::*;

pub struct GameStatePlugin;

impl Plugin for GameStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimClock>()
            .add_systems(Update, clock_controls);
    }
}

const MIN_SPEED: f32 = 0.25;
const MAX_SPEED: f32 = 4.0;

/// Controls how fast aircraft time advances.
#[derive(Resource)]
pub struct SimClock {
    /// True if aircraft are frozen (time doesn't advance).
    pub paused: bool,
    /// Speed multiplier: 1.0 = normal, 2.0 = fast, 0.5 = slow.
    pub speed: f32,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            paused: false,
            speed: 1.0,
        }
    }
}

impl SimClock {
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn slower(&mut self) {
        self.speed = (self.speed * 0.5).clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn faster(&mut self) {
        self.speed = (self.speed * 2.0).clamp(MIN_SPEED, MAX_SPEED);
    }
}

fn clock_controls(keys: Res<ButtonInput<KeyCode>>, mut clock: ResMut<SimClock>) {
    if keys.just_pressed(KeyCode::KeyP) {
        clock.toggle_pause();
        if clock.paused {
            info!("Simulation PAUSED");
        } else {
            info!("Simulation RESUMED ({}x speed)", clock.speed);
        }
    }

    if keys.just_pressed(KeyCode::BracketLeft) {
        clock.slower();
        info!("Simulation speed: {}x", clock.speed);
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        clock.faster();
        info!("Simulation speed: {}x", clock.speed);
    }
}
