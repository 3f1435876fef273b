//! Scripted aircraft motion: taxi, lift-off, stop, and return to park.
//!
//! Each aircraft carries a [`PlaneController`] that owns its pose. The
//! per-frame systems here feed it the scaled frame delta and mirror its pose
//! and light state back onto the entity and its light child.

use bevy::prelude::*;

use crate::game_state::SimClock;

pub mod controller;
pub mod flight;
pub mod lift;

pub use controller::{FlightProfile, PlaneController};
pub use flight::FlightPhase;

pub struct AircraftPlugin;

impl Plugin for AircraftPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (capture_home, advance_aircraft, sync_nav_lights).chain(),
        );
    }
}

/// Marker for the light entity bound to an aircraft.
#[derive(Component)]
pub struct NavLight;

/// Snapshots the spawn transform of newly added aircraft as their parking target.
fn capture_home(mut query: Query<(&mut PlaneController, &Transform), Added<PlaneController>>) {
    for (mut plane, transform) in &mut query {
        plane.reset(transform);
    }
}

fn advance_aircraft(
    clock: Res<SimClock>,
    time: Res<Time>,
    mut query: Query<(&mut PlaneController, &mut Transform)>,
) {
    if clock.paused {
        return;
    }

    let delta = time.delta_secs() * clock.speed;
    for (mut plane, mut transform) in &mut query {
        if !matches!(plane.phase(), FlightPhase::Moving | FlightPhase::Parking) {
            continue;
        }
        plane.tick(delta);
        plane.write_transform(&mut transform);
    }
}

fn sync_nav_lights(
    planes: Query<&PlaneController, Changed<PlaneController>>,
    mut lights: Query<&mut Visibility, With<NavLight>>,
) {
    for plane in &planes {
        let Some(light) = plane.light() else {
            continue;
        };
        let Ok(mut visibility) = lights.get_mut(light) else {
            continue;
        };
        let wanted = if plane.is_light_on() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if *visibility != wanted {
            *visibility = wanted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<SimClock>()
            .init_resource::<Time>()
            .add_plugins(AircraftPlugin);
        app
    }

    #[test]
    fn home_is_captured_from_spawn_transform() {
        let mut app = test_app();
        let plane = app
            .world_mut()
            .spawn((
                PlaneController::new(FlightProfile::default()),
                Transform::from_xyz(4.0, 1.0, -2.0),
            ))
            .id();

        app.update();

        let controller = app.world().get::<PlaneController>(plane).unwrap();
        assert_eq!(controller.home().position, Vec3::new(4.0, 1.0, -2.0));
        assert_eq!(controller.position(), Vec3::new(4.0, 1.0, -2.0));
        assert_eq!(controller.phase(), FlightPhase::Idle);
    }

    #[test]
    fn light_visibility_follows_controller() {
        let mut app = test_app();
        let light = app.world_mut().spawn((NavLight, Visibility::Hidden)).id();
        let plane = app
            .world_mut()
            .spawn((
                PlaneController::new(FlightProfile::default()).with_light(light),
                Transform::default(),
            ))
            .id();
        app.update();

        app.world_mut()
            .get_mut::<PlaneController>(plane)
            .unwrap()
            .light_on();
        app.update();
        assert_eq!(
            app.world().get::<Visibility>(light),
            Some(&Visibility::Inherited)
        );

        app.world_mut()
            .get_mut::<PlaneController>(plane)
            .unwrap()
            .light_off();
        app.update();
        assert_eq!(
            app.world().get::<Visibility>(light),
            Some(&Visibility::Hidden)
        );
    }
}
