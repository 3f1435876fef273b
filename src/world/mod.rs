//! Airfield scene: ground, sunlight, and the parked fleet.

use bevy::prelude::*;

use crate::aircraft::FlightProfile;

pub mod apron;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AirfieldConfig>()
            .insert_resource(AmbientLight {
                color: Color::srgb(0.85, 0.9, 1.0),
                brightness: 300.0,
            })
            .add_systems(Startup, (setup_ground, apron::spawn_fleet));
    }
}

/// Layout and tuning of the airfield.
#[derive(Resource)]
pub struct AirfieldConfig {
    /// Number of aircraft parked on the apron.
    pub plane_count: usize,
    /// Lateral gap between parking stands.
    pub stand_spacing: f32,
    /// Position of the first stand.
    pub apron_origin: Vec3,
    /// Heading of every stand in degrees (0 = facing -Z).
    pub stand_heading: f32,
    /// Seed for livery selection.
    pub seed: u64,
    /// Motion tunables shared by every aircraft.
    pub profile: FlightProfile,
    /// Ground plane edge length.
    pub ground_size: f32,
}

impl Default for AirfieldConfig {
    fn default() -> Self {
        Self {
            plane_count: 3,
            stand_spacing: 8.0,
            apron_origin: Vec3::new(-8.0, 0.0, 20.0),
            stand_heading: 0.0,
            seed: 4242,
            profile: FlightProfile::default(),
            ground_size: 160.0,
        }
    }
}

impl AirfieldConfig {
    /// Spawn transform of the stand at `index`.
    pub fn stand_transform(&self, index: usize) -> Transform {
        Transform::from_translation(
            self.apron_origin + Vec3::X * self.stand_spacing * index as f32,
        )
        .with_rotation(Quat::from_rotation_y(self.stand_heading.to_radians()))
    }
}

fn setup_ground(
    mut commands: Commands,
    config: Res<AirfieldConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Grass
    commands.spawn((
        Mesh3d(meshes.add(
            Plane3d::default()
                .mesh()
                .size(config.ground_size, config.ground_size),
        )),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.25, 0.42, 0.22),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::default(),
    ));

    // Runway strip running along -Z from the apron
    let runway_width = config.stand_spacing * config.plane_count.max(1) as f32 + 4.0;
    let runway_length = config.profile.stop_distance + 30.0;
    let last_stand = (config.plane_count.max(1) - 1) as f32;
    let runway_center_x = config.apron_origin.x + config.stand_spacing * last_stand * 0.5;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(runway_width, runway_length))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.18, 0.18, 0.2),
            perceptual_roughness: 0.8,
            ..default()
        })),
        Transform::from_xyz(
            runway_center_x,
            0.01,
            config.apron_origin.z - runway_length * 0.5 + 5.0,
        ),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(30.0, 60.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
