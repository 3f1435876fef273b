//! Fleet control panel and status HUD.

use bevy::prelude::*;

use crate::aircraft::PlaneController;
use crate::fleet::FleetRoster;
use crate::game_state::SimClock;

pub mod control_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(control_panel::ControlPanelPlugin)
            .add_systems(Startup, setup_hud)
            .add_systems(Update, update_fleet_status);
    }
}

/// Marker for the per-plane status text.
#[derive(Component)]
struct FleetStatusText;

fn setup_hud(mut commands: Commands) {
    let panel_bg = Color::srgb(0.04, 0.05, 0.06);
    let border = Color::srgb(0.0, 0.75, 0.35);
    let retro_green = Color::srgb(0.4, 0.95, 0.6);
    let retro_orange = Color::srgb(1.0, 0.6, 0.2);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                right: Val::Px(10.0),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(10.0)),
                border: UiRect::all(Val::Px(1.0)),
                row_gap: Val::Px(6.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(panel_bg),
            BorderColor(border),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("APRON // FLEET STATUS"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(retro_orange),
            ));

            parent.spawn((
                Text::new("--"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(retro_green),
                FleetStatusText,
            ));
        });

    // Bottom control reminder
    commands.spawn((
        Text::new(
            "Enter: Start | K: Park | L/O: Lights | H: Halt | P: Pause | [ ]: Speed | WASD: Pan",
        ),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.65, 0.85, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));
}

fn update_fleet_status(
    roster: Res<FleetRoster>,
    clock: Res<SimClock>,
    planes: Query<&PlaneController>,
    mut query: Query<&mut Text, With<FleetStatusText>>,
) {
    let mut lines = Vec::with_capacity(roster.len() + 1);
    for (index, &entity) in roster.planes().iter().enumerate() {
        let Ok(plane) = planes.get(entity) else {
            continue;
        };
        lines.push(status_line(index, plane));
    }

    let state = if clock.paused { "PAUSED" } else { "LIVE" };
    lines.push(format!("SIM: {:.2}x | {}", clock.speed, state));

    let status = lines.join("\n");
    for mut text in &mut query {
        if **text != status {
            **text = status.clone();
        }
    }
}

fn status_line(index: usize, plane: &PlaneController) -> String {
    format!(
        "#{} {:<8} {:>5.1}m  ALT {:>4.1}  {}",
        index + 1,
        plane.phase().label(),
        plane.traveled_distance(),
        plane.position().y - plane.home().position.y,
        if plane.is_light_on() { "LIGHT" } else { "-" }
    )
}
