use bevy::prelude::*;
use invaders::plugins::core::CorePlugin;
use invaders::plugins::input::InputPlugin;
use invaders::plugins::ship::PlayerShipPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Invaders".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(CorePlugin)
        .add_plugins(InputPlugin)
        .add_plugins(PlayerShipPlugin)
        .run();
}
