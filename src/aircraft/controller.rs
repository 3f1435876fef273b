//! Per-aircraft motion controller: taxi, lift-off, stop and return to park.

use bevy::prelude::*;

use super::flight::{step_towards, step_towards_point, Attitude, FlightPhase, PhaseCommand};
use super::lift::{LiftBoundaries, LiftCurve};

/// Horizontal distance below which a parking run counts as arrived.
pub const ARRIVAL_EPSILON: f32 = 1e-4;

/// Roll applied when an aircraft reaches its stop distance.
const TURNED_AROUND_ROLL: f32 = 180.0;

/// Tunables for one aircraft. Fixed after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightProfile {
    /// Forward speed (world units/sec), also used for the parking approach.
    pub speed: f32,
    /// Traveled distance at which the lift-off maneuver begins.
    pub lift_off_distance: f32,
    /// Height above home at which the climb levels out.
    pub straighten_height: f32,
    /// Peak nose-up angle (degrees).
    pub max_lift_off_angle: f32,
    /// Pitch rate (degrees/sec).
    pub lift_off_speed: f32,
    /// Climb rate (world units/sec).
    pub vertical_lift_speed: f32,
    /// Traveled distance at which forward motion ends.
    pub stop_distance: f32,
    pub lift_boundaries: LiftBoundaries,
}

impl Default for FlightProfile {
    fn default() -> Self {
        Self {
            speed: 2.0,
            lift_off_distance: 5.0,
            straighten_height: 5.0,
            max_lift_off_angle: 20.0,
            lift_off_speed: 2.0,
            vertical_lift_speed: 1.0,
            stop_distance: 50.0,
            lift_boundaries: LiftBoundaries::Fixed,
        }
    }
}

impl FlightProfile {
    pub fn lift_curve(&self) -> LiftCurve {
        let (pitch_peak, ascend_end) = self.lift_boundaries.resolve(self.stop_distance);
        LiftCurve {
            lift_off_distance: self.lift_off_distance,
            pitch_peak,
            ascend_end,
            straighten_height: self.straighten_height,
            max_angle: self.max_lift_off_angle,
        }
    }
}

/// Captured home transform used as the parking target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HomePose {
    pub position: Vec3,
    pub attitude: Attitude,
}

/// Scripted motion state for one aircraft.
///
/// The controller owns the aircraft's position and attitude; the
/// `advance_aircraft` system copies them into the entity's `Transform`.
#[derive(Component, Debug, Clone)]
pub struct PlaneController {
    profile: FlightProfile,
    curve: LiftCurve,
    home: HomePose,
    position: Vec3,
    attitude: Attitude,
    traveled_distance: f32,
    phase: FlightPhase,
    light_on: bool,
    light: Option<Entity>,
}

impl PlaneController {
    pub fn new(profile: FlightProfile) -> Self {
        Self {
            curve: profile.lift_curve(),
            profile,
            home: HomePose::default(),
            position: Vec3::ZERO,
            attitude: Attitude::default(),
            traveled_distance: 0.0,
            phase: FlightPhase::Idle,
            light_on: false,
            light: None,
        }
    }

    /// Binds the light entity toggled by the light commands.
    pub fn with_light(mut self, light: Entity) -> Self {
        self.light = Some(light);
        self
    }

    /// Captures `transform` as home and returns to a fresh idle state.
    pub fn reset(&mut self, transform: &Transform) {
        self.home = HomePose {
            position: transform.translation,
            attitude: Attitude::from_quat(transform.rotation),
        };
        self.position = self.home.position;
        self.attitude = self.home.attitude;
        self.traveled_distance = 0.0;
        self.phase = FlightPhase::Idle;
        self.light_on = false;
    }

    /// Advances the motion by `delta` seconds. No-op unless moving or parking.
    pub fn tick(&mut self, delta: f32) {
        match self.phase {
            FlightPhase::Moving => self.tick_moving(delta),
            FlightPhase::Parking => self.tick_parking(delta),
            FlightPhase::Idle | FlightPhase::Parked => {}
        }
    }

    fn tick_moving(&mut self, delta: f32) {
        let distance = self.profile.speed * delta;
        self.position += self.attitude.forward() * distance;
        self.traveled_distance += distance;

        if self.traveled_distance >= self.profile.lift_off_distance {
            let altitude = self.position.y - self.home.position.y;
            if altitude < self.curve.target_altitude(self.traveled_distance) {
                self.position.y += self.profile.vertical_lift_speed * delta;
            }

            let target_pitch = self.curve.target_pitch(self.traveled_distance);
            self.attitude.pitch = step_towards(
                self.attitude.pitch,
                target_pitch,
                self.profile.lift_off_speed * delta,
            );
        }

        if self.traveled_distance >= self.profile.stop_distance {
            self.attitude = Attitude {
                yaw: self.attitude.yaw,
                pitch: self.home.attitude.pitch,
                roll: TURNED_AROUND_ROLL,
            };
            self.apply(PhaseCommand::ReachedStop);
        }
    }

    fn tick_parking(&mut self, delta: f32) {
        self.position = step_towards_point(
            self.position,
            self.home.position,
            self.profile.speed * delta,
        );

        // Descent is a snap, unlike the rate-limited climb.
        if self.position.y > self.home.position.y {
            self.position.y = self.home.position.y;
        }

        let horizontal = Vec2::new(
            self.position.x - self.home.position.x,
            self.position.z - self.home.position.z,
        );
        if horizontal.length() <= ARRIVAL_EPSILON {
            self.position = self.home.position;
            self.attitude = self.home.attitude;
            self.apply(PhaseCommand::ArrivedHome);
        }
    }

    pub fn start_moving(&mut self) {
        if self.phase == FlightPhase::Parked {
            self.traveled_distance = 0.0;
        }
        self.apply(PhaseCommand::Start);
    }

    /// Hard stop in place. Unlike [`Self::park`], the aircraft is not returned home.
    pub fn stop_moving(&mut self) {
        self.apply(PhaseCommand::Stop);
    }

    pub fn park(&mut self) {
        self.apply(PhaseCommand::Park);
    }

    pub fn light_on(&mut self) {
        if self.light.is_some() {
            self.light_on = true;
        }
    }

    pub fn light_off(&mut self) {
        if self.light.is_some() {
            self.light_on = false;
        }
    }

    pub fn has_reached_stop_distance(&self) -> bool {
        self.traveled_distance >= self.profile.stop_distance
    }

    fn apply(&mut self, command: PhaseCommand) {
        let Some(next) = self.phase.transition(command) else {
            debug!("Ignoring {:?} while {:?}", command, self.phase);
            return;
        };
        if next != self.phase {
            match command {
                PhaseCommand::ReachedStop => info!("Plane has reached the stop distance"),
                PhaseCommand::ArrivedHome => {
                    info!("Plane has returned to its starting position and is now parked")
                }
                PhaseCommand::Park => info!("Plane is now parking"),
                _ => debug!("Plane phase {:?} -> {:?}", self.phase, next),
            }
        }
        self.phase = next;
    }

    /// Writes the controller's pose into `transform`.
    pub fn write_transform(&self, transform: &mut Transform) {
        transform.translation = self.position;
        transform.rotation = self.attitude.to_quat();
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn traveled_distance(&self) -> f32 {
        self.traveled_distance
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn attitude(&self) -> Attitude {
        self.attitude
    }

    pub fn home(&self) -> HomePose {
        self.home
    }

    pub fn is_light_on(&self) -> bool {
        self.light_on
    }

    pub fn light(&self) -> Option<Entity> {
        self.light
    }
}
