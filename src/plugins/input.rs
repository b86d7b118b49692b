use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::systems::movement::buffer_ship_input;

#[derive(Actionlike, PartialEq, Eq, Clone, Copy, Hash, Debug, Reflect)]
pub enum PlayerAction {
    MoveLeft,
    MoveRight,
    Fire,
}

/// Feeds keyboard input into the `ShipInputBuffer` owned by `PlayerShipPlugin`.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<PlayerAction>::default())
            .add_systems(Update, buffer_ship_input);
    }
}

pub fn get_default_input_map() -> InputMap<PlayerAction> {
    let mut input_map = InputMap::default();

    // Movement (Ship)
    input_map.insert(PlayerAction::MoveLeft, KeyCode::KeyA);
    input_map.insert(PlayerAction::MoveLeft, KeyCode::ArrowLeft);
    input_map.insert(PlayerAction::MoveRight, KeyCode::KeyD);
    input_map.insert(PlayerAction::MoveRight, KeyCode::ArrowRight);

    // Actions
    input_map.insert(PlayerAction::Fire, KeyCode::Space);

    input_map
}
