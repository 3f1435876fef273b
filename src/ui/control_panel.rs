//! Button panel that sends fleet commands.

use bevy::prelude::*;

use crate::fleet::FleetCommand;

pub struct ControlPanelPlugin;

impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_control_panel).add_systems(
            Update,
            (
                handle_command_buttons,
                handle_keyboard_shortcuts,
                update_button_styles,
            ),
        );
    }
}

/// Marker for a fleet command button.
#[derive(Component)]
struct CommandButton(FleetCommand);

// UI Colors
const PANEL_BG: Color = Color::srgba(0.05, 0.07, 0.06, 0.9);
const BUTTON_IDLE: Color = Color::srgba(0.1, 0.12, 0.11, 0.95);
const BUTTON_HOVER: Color = Color::srgba(0.15, 0.18, 0.16, 0.95);
const BUTTON_PRESSED: Color = Color::srgba(0.2, 0.4, 0.3, 0.95);
const TEXT_COLOR: Color = Color::srgb(0.8, 0.95, 0.85);

fn setup_control_panel(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                padding: UiRect::all(Val::Px(8.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(PANEL_BG),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("FLEET"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));

            spawn_command_button(panel, FleetCommand::StartAll, Color::srgb(0.2, 0.8, 0.3));
            spawn_command_button(panel, FleetCommand::ParkAll, Color::srgb(0.3, 0.5, 0.9));
            spawn_command_button(panel, FleetCommand::LightsOn, Color::srgb(0.95, 0.85, 0.4));
            spawn_command_button(panel, FleetCommand::LightsOff, Color::srgb(0.5, 0.5, 0.5));
        });
}

fn spawn_command_button(parent: &mut ChildBuilder, command: FleetCommand, color: Color) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(120.0),
                height: Val::Px(36.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            BorderColor(color),
            CommandButton(command),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(command.label()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(color),
            ));
        });
}

fn handle_command_buttons(
    interactions: Query<(&Interaction, &CommandButton), (Changed<Interaction>, With<Button>)>,
    mut fleet_commands: EventWriter<FleetCommand>,
) {
    for (interaction, CommandButton(command)) in &interactions {
        if *interaction == Interaction::Pressed {
            fleet_commands.send(*command);
        }
    }
}

fn handle_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut fleet_commands: EventWriter<FleetCommand>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        fleet_commands.send(FleetCommand::StartAll);
    }
    if keyboard.just_pressed(KeyCode::KeyK) {
        fleet_commands.send(FleetCommand::ParkAll);
    }
    if keyboard.just_pressed(KeyCode::KeyL) {
        fleet_commands.send(FleetCommand::LightsOn);
    }
    if keyboard.just_pressed(KeyCode::KeyO) {
        fleet_commands.send(FleetCommand::LightsOff);
    }
    // No button for this one: emergency stop in place
    if keyboard.just_pressed(KeyCode::KeyH) {
        fleet_commands.send(FleetCommand::HaltAll);
    }
}

fn update_button_styles(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<CommandButton>),
    >,
) {
    for (interaction, mut bg) in &mut buttons {
        bg.0 = match *interaction {
            Interaction::Pressed => BUTTON_PRESSED,
            Interaction::Hovered => BUTTON_HOVER,
            Interaction::None => BUTTON_IDLE,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_button_sends_its_command() {
        let mut app = App::new();
        app.add_event::<FleetCommand>()
            .add_systems(Update, handle_command_buttons);

        app.world_mut().spawn((
            Button,
            Interaction::Pressed,
            CommandButton(FleetCommand::ParkAll),
        ));
        app.world_mut()
            .spawn((Button, Interaction::Hovered, CommandButton(FleetCommand::StartAll)));
        app.update();

        let events = app.world().resource::<Events<FleetCommand>>();
        let sent: Vec<FleetCommand> = events.iter_current_update_events().copied().collect();
        assert_eq!(sent, vec![FleetCommand::ParkAll]);
    }
}
