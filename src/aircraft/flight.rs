//! Flight phases, the commands that move between them, and aircraft attitude.

use bevy::prelude::*;

/// Behavioural mode of a single aircraft. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlightPhase {
    /// Standing still, either before the first start or after reaching the stop distance.
    #[default]
    Idle,
    /// Taxiing forward and running the lift-off maneuver.
    Moving,
    /// Returning to the captured home transform.
    Parking,
    /// Stopped. Reached either through parking or a hard stop in place.
    Parked,
}

/// Imperative inputs to the phase machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseCommand {
    Start,
    Stop,
    Park,
    /// Travel passed the stop distance.
    ReachedStop,
    /// Parking run arrived at home.
    ArrivedHome,
}

impl FlightPhase {
    /// Transition table. `None` means the command is ignored in this phase.
    pub fn transition(self, command: PhaseCommand) -> Option<FlightPhase> {
        use FlightPhase::*;
        use PhaseCommand::*;

        match (self, command) {
            (_, Start) => Some(Moving),
            (_, Stop) => Some(Parked),
            (Parked, Park) => None,
            (_, Park) => Some(Parking),
            (Moving, ReachedStop) => Some(Idle),
            (Parking, ArrivedHome) => Some(Parked),
            (_, ReachedStop | ArrivedHome) => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlightPhase::Idle => "IDLE",
            FlightPhase::Moving => "MOVING",
            FlightPhase::Parking => "PARKING",
            FlightPhase::Parked => "PARKED",
        }
    }
}

/// Orientation as yaw/pitch/roll in degrees, applied yaw first, then pitch, then roll.
///
/// Positive pitch raises the nose.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Attitude {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Attitude {
    pub fn from_quat(rotation: Quat) -> Self {
        let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
        Self {
            yaw: yaw.to_degrees(),
            pitch: pitch.to_degrees(),
            roll: roll.to_degrees(),
        }
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    /// Unit vector the nose points along.
    pub fn forward(self) -> Vec3 {
        self.to_quat() * Vec3::NEG_Z
    }
}

/// Moves `current` toward `target` by at most `max_delta`, never overshooting.
pub fn step_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Straight-line step toward `target`; lands exactly on it once within reach.
pub fn step_towards_point(current: Vec3, target: Vec3, max_distance: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_distance || distance <= f32::EPSILON {
        target
    } else {
        current + delta / distance * max_distance
    }
}
