//! Fleet-wide command dispatch.
//!
//! UI buttons and keyboard shortcuts send [`FleetCommand`] events; the
//! dispatcher fans each one out to every rostered aircraft in registration
//! order.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::aircraft::{FlightPhase, PlaneController};

pub struct FleetPlugin;

impl Plugin for FleetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FleetRoster>()
            .add_event::<FleetCommand>()
            .add_systems(Update, dispatch_fleet_commands);
    }
}

/// Commands broadcast to the whole fleet.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetCommand {
    StartAll,
    ParkAll,
    LightsOn,
    LightsOff,
    /// Hard stop in place for every aircraft.
    HaltAll,
}

impl FleetCommand {
    pub fn label(self) -> &'static str {
        match self {
            FleetCommand::StartAll => "Start",
            FleetCommand::ParkAll => "Park",
            FleetCommand::LightsOn => "Lights On",
            FleetCommand::LightsOff => "Lights Off",
            FleetCommand::HaltAll => "Halt",
        }
    }
}

/// Ordered list of aircraft the dispatcher commands.
///
/// Filled once when the fleet is spawned and read-only afterwards.
#[derive(Resource, Default)]
pub struct FleetRoster {
    planes: Vec<Entity>,
}

impl FleetRoster {
    pub fn new(planes: Vec<Entity>) -> Self {
        Self { planes }
    }

    pub fn planes(&self) -> &[Entity] {
        &self.planes
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}

impl FleetCommand {
    /// Applies this command to a single aircraft.
    pub fn apply_to(self, plane: &mut PlaneController) {
        match self {
            FleetCommand::StartAll => plane.start_moving(),
            FleetCommand::ParkAll => park_if_ready(plane),
            FleetCommand::LightsOn => plane.light_on(),
            FleetCommand::LightsOff => plane.light_off(),
            FleetCommand::HaltAll => plane.stop_moving(),
        }
    }
}

/// Parks an aircraft that has flown its full distance and is not parked yet.
fn park_if_ready(plane: &mut PlaneController) {
    if plane.has_reached_stop_distance() && plane.phase() != FlightPhase::Parked {
        plane.park();
    } else {
        debug!(
            "Plane hasn't reached the stop distance yet, or it's already parked ({:?}, {:.1} traveled)",
            plane.phase(),
            plane.traveled_distance()
        );
    }
}

/// Applies `command` to every plane, in iteration order.
pub fn broadcast<'a>(
    command: FleetCommand,
    planes: impl IntoIterator<Item = &'a mut PlaneController>,
) {
    for plane in planes {
        command.apply_to(plane);
    }
}

fn dispatch_fleet_commands(
    mut commands: EventReader<FleetCommand>,
    roster: Res<FleetRoster>,
    mut planes: Query<(Entity, &mut PlaneController)>,
) {
    for &command in commands.read() {
        info!("Fleet command: {}", command.label());
        if roster.is_empty() {
            debug!("Fleet roster is empty");
            continue;
        }

        let mut by_entity: HashMap<Entity, Mut<PlaneController>> = planes.iter_mut().collect();
        let rostered = roster.planes().iter().filter_map(|entity| {
            let plane = by_entity.remove(entity);
            if plane.is_none() {
                warn!("Fleet roster entry {:?} has no plane controller", entity);
            }
            plane.map(Mut::into_inner)
        });
        broadcast(command, rostered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::FlightProfile;

    fn short_hop() -> FlightProfile {
        FlightProfile {
            stop_distance: 4.0,
            lift_off_distance: 1.0,
            ..default()
        }
    }

    fn grounded(profile: FlightProfile) -> PlaneController {
        let mut plane = PlaneController::new(profile);
        plane.reset(&Transform::default());
        plane
    }

    #[test]
    fn park_all_only_parks_planes_past_stop_distance() {
        let mut fleet = vec![
            grounded(short_hop()),
            grounded(short_hop()),
            grounded(short_hop()),
        ];
        broadcast(FleetCommand::StartAll, fleet.iter_mut());

        // Only the middle plane flies its full distance.
        for _ in 0..10 {
            fleet[1].tick(0.25);
        }
        fleet[0].tick(0.25);
        fleet[2].stop_moving();

        broadcast(FleetCommand::ParkAll, fleet.iter_mut());

        assert_eq!(fleet[0].phase(), FlightPhase::Moving);
        assert_eq!(fleet[1].phase(), FlightPhase::Parking);
        assert_eq!(fleet[2].phase(), FlightPhase::Parked);
    }

    #[test]
    fn park_all_skips_already_parked_plane() {
        let mut plane = grounded(short_hop());
        plane.start_moving();
        for _ in 0..10 {
            plane.tick(0.25);
        }
        plane.park();
        while plane.phase() == FlightPhase::Parking {
            plane.tick(0.25);
        }
        assert!(plane.has_reached_stop_distance());

        broadcast(FleetCommand::ParkAll, std::iter::once(&mut plane));
        assert_eq!(plane.phase(), FlightPhase::Parked);
    }

    #[test]
    fn lights_broadcast_without_lights_is_silent() {
        let mut fleet = vec![grounded(short_hop()), grounded(short_hop())];
        broadcast(FleetCommand::LightsOn, fleet.iter_mut());
        broadcast(FleetCommand::LightsOff, fleet.iter_mut());
        assert!(fleet.iter().all(|plane| !plane.is_light_on()));
    }

    #[test]
    fn lights_broadcast_reaches_every_bound_light() {
        let mut fleet: Vec<PlaneController> = (0..3)
            .map(|i| PlaneController::new(short_hop()).with_light(Entity::from_raw(100 + i)))
            .collect();
        broadcast(FleetCommand::LightsOn, fleet.iter_mut());
        assert!(fleet.iter().all(PlaneController::is_light_on));
        broadcast(FleetCommand::LightsOff, fleet.iter_mut());
        assert!(fleet.iter().all(|plane| !plane.is_light_on()));
    }

    #[test]
    fn dispatcher_commands_rostered_planes_and_skips_stale_entries() {
        let mut app = App::new();
        app.add_plugins(FleetPlugin);

        let rostered = app.world_mut().spawn(grounded(short_hop())).id();
        let unrostered = app.world_mut().spawn(grounded(short_hop())).id();
        let stale = app.world_mut().spawn_empty().id();
        app.insert_resource(FleetRoster::new(vec![stale, rostered]));

        app.world_mut().send_event(FleetCommand::StartAll);
        app.update();

        let phase = |app: &App, entity: Entity| {
            app.world().get::<PlaneController>(entity).unwrap().phase()
        };
        assert_eq!(phase(&app, rostered), FlightPhase::Moving);
        assert_eq!(phase(&app, unrostered), FlightPhase::Idle);

        app.world_mut().send_event(FleetCommand::HaltAll);
        app.update();
        assert_eq!(phase(&app, rostered), FlightPhase::Parked);
    }

    #[test]
    fn dispatcher_parks_only_ready_rostered_planes() {
        let mut app = App::new();
        app.add_plugins(FleetPlugin);

        let flown = || {
            let mut plane = grounded(short_hop());
            plane.start_moving();
            for _ in 0..10 {
                plane.tick(0.25);
            }
            plane
        };
        let mut taxiing = grounded(short_hop());
        taxiing.start_moving();
        taxiing.tick(0.25);

        let ready = app.world_mut().spawn(flown()).id();
        let not_ready = app.world_mut().spawn(taxiing).id();
        let unrostered = app.world_mut().spawn(flown()).id();
        let stale = app.world_mut().spawn_empty().id();
        app.insert_resource(FleetRoster::new(vec![ready, stale, not_ready]));

        app.world_mut().send_event(FleetCommand::ParkAll);
        app.update();

        let phase = |app: &App, entity: Entity| {
            app.world().get::<PlaneController>(entity).unwrap().phase()
        };
        assert_eq!(phase(&app, ready), FlightPhase::Parking);
        assert_eq!(phase(&app, not_ready), FlightPhase::Moving);
        assert_eq!(phase(&app, unrostered), FlightPhase::Idle);
    }
}
