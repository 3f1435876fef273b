//! Spawns the fleet onto its parking stands and fills the roster.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::AirfieldConfig;
use crate::aircraft::{NavLight, PlaneController};
use crate::fleet::FleetRoster;

// Livery palette
const LIVERY_COLORS: &[(f32, f32, f32)] = &[
    (0.92, 0.92, 0.94), // White
    (0.75, 0.76, 0.8),  // Silver
    (0.1, 0.2, 0.45),   // Navy
    (0.55, 0.08, 0.1),  // Crimson
    (0.95, 0.7, 0.1),   // Yellow
    (0.15, 0.35, 0.2),  // Green
];

// Airframe dimensions (meters)
const FUSELAGE_LENGTH: f32 = 6.0;
const FUSELAGE_RADIUS: f32 = 0.5;
const WING_SPAN: f32 = 7.0;
const GEAR_HEIGHT: f32 = 0.6;

pub(super) fn spawn_fleet(
    mut commands: Commands,
    config: Res<AirfieldConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let fuselage_mesh = meshes.add(Cuboid::new(
        FUSELAGE_RADIUS * 2.0,
        FUSELAGE_RADIUS * 2.0,
        FUSELAGE_LENGTH,
    ));
    let wing_mesh = meshes.add(Cuboid::new(WING_SPAN, 0.12, 1.4));
    let tail_mesh = meshes.add(Cuboid::new(0.12, 1.2, 1.0));
    let stabilizer_mesh = meshes.add(Cuboid::new(2.4, 0.1, 0.8));
    let lamp_mesh = meshes.add(Sphere::new(0.12));

    let lamp_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.95, 0.85),
        emissive: LinearRgba::rgb(8.0, 7.5, 6.0),
        ..default()
    });

    let mut planes = Vec::with_capacity(config.plane_count);

    for index in 0..config.plane_count {
        let (r, g, b) = LIVERY_COLORS[rng.gen_range(0..LIVERY_COLORS.len())];
        let livery = materials.add(StandardMaterial {
            base_color: Color::srgb(r, g, b),
            perceptual_roughness: 0.35,
            metallic: 0.5,
            ..default()
        });

        // Landing light at the nose, off until commanded
        let light = commands
            .spawn((
                PointLight {
                    color: Color::srgb(1.0, 0.95, 0.85),
                    intensity: 200_000.0,
                    range: 30.0,
                    radius: 0.1,
                    shadows_enabled: false,
                    ..default()
                },
                Mesh3d(lamp_mesh.clone()),
                MeshMaterial3d(lamp_material.clone()),
                Transform::from_xyz(0.0, 0.0, -FUSELAGE_LENGTH * 0.5 - 0.1),
                Visibility::Hidden,
                NavLight,
            ))
            .id();

        let mut stand = config.stand_transform(index);
        stand.translation.y += GEAR_HEIGHT;

        let plane = commands
            .spawn((
                PlaneController::new(config.profile).with_light(light),
                Mesh3d(fuselage_mesh.clone()),
                MeshMaterial3d(livery.clone()),
                stand,
                Name::new(format!("Plane {}", index + 1)),
            ))
            .with_children(|airframe| {
                airframe.spawn((
                    Mesh3d(wing_mesh.clone()),
                    MeshMaterial3d(livery.clone()),
                    Transform::from_xyz(0.0, 0.0, 0.3),
                ));
                airframe.spawn((
                    Mesh3d(tail_mesh.clone()),
                    MeshMaterial3d(livery.clone()),
                    Transform::from_xyz(0.0, 0.8, FUSELAGE_LENGTH * 0.5 - 0.5),
                ));
                airframe.spawn((
                    Mesh3d(stabilizer_mesh.clone()),
                    MeshMaterial3d(livery.clone()),
                    Transform::from_xyz(0.0, 0.2, FUSELAGE_LENGTH * 0.5 - 0.4),
                ));
            })
            .add_child(light)
            .id();

        planes.push(plane);
    }

    info!("Spawned {} planes on the apron", planes.len());
    commands.insert_resource(FleetRoster::new(planes));
}
