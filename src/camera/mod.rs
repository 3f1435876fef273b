//! Perspective camera over the apron with pan and zoom controls.

use bevy::{input::mouse::MouseWheel, prelude::*};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_zoom, camera_pan));
    }
}

/// Orbit parameters for the apron camera.
#[derive(Component)]
pub struct ApronCamera {
    /// Point the camera looks at.
    pub focus: Vec3,
    /// Distance from the focus point.
    pub distance: f32,
    /// Elevation above the horizon in degrees.
    pub elevation: f32,
}

impl Default for ApronCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::new(0.0, 2.0, -5.0),
            distance: 70.0,
            elevation: 30.0,
        }
    }
}

impl ApronCamera {
    fn transform(&self) -> Transform {
        let elevation = self.elevation.to_radians();
        // Looking from behind and to the side of the stands toward the runway
        let offset = Vec3::new(0.6, elevation.tan(), 1.0).normalize() * self.distance;
        Transform::from_translation(self.focus + offset).looking_at(self.focus, Vec3::Y)
    }
}

fn setup_camera(mut commands: Commands) {
    let rig = ApronCamera::default();
    commands.spawn((Camera3d::default(), rig.transform(), rig));
}

fn camera_zoom(
    mut query: Query<(&mut Transform, &mut ApronCamera)>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let scroll: f32 = scroll_events.read().map(|e| e.y).sum();
    if scroll == 0.0 {
        return;
    }

    for (mut transform, mut rig) in &mut query {
        rig.distance = (rig.distance - scroll * 4.0).clamp(15.0, 200.0);
        *transform = rig.transform();
    }
}

fn camera_pan(
    mut query: Query<(&mut Transform, &mut ApronCamera)>,
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let mut direction = Vec3::ZERO;
    let speed = 30.0;

    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        direction.z -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        direction.z += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        direction.x += 1.0;
    }

    if direction == Vec3::ZERO {
        return;
    }

    let delta = direction.normalize() * speed * time.delta_secs();
    for (mut transform, mut rig) in &mut query {
        rig.focus += delta;
        *transform = rig.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rig_keeps_its_distance_and_looks_at_focus() {
        let rig = ApronCamera::default();
        let transform = rig.transform();
        let to_focus = rig.focus - transform.translation;
        assert!((to_focus.length() - rig.distance).abs() < 1e-3);
        assert!(transform.forward().dot(to_focus.normalize()) > 0.999);
        assert!(transform.translation.y > rig.focus.y);
    }
}
