use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::components::PlayerShip;
use crate::plugins::input::PlayerAction;

/// Buffered input state for ship systems running in FixedUpdate.
/// Movement flags mirror the keys held this frame, so every fixed tick of a
/// frame sees them. A fire press is latched until a fixed tick consumes it.
#[derive(Resource, Debug, Default)]
pub struct ShipInputBuffer {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
}

/// System that captures input state for use by the fixed-tick ship systems.
/// Runs in Update to catch all input events.
pub fn buffer_ship_input(
    action_query: Query<&ActionState<PlayerAction>>,
    mut input_buffer: ResMut<ShipInputBuffer>,
) {
    if let Ok(action_state) = action_query.get_single() {
        input_buffer.move_left = action_state.pressed(&PlayerAction::MoveLeft);
        input_buffer.move_right = action_state.pressed(&PlayerAction::MoveRight);
        input_buffer.fire |= action_state.pressed(&PlayerAction::Fire);
    }
}

/// Clears the latched fire press so it only drives one fixed tick.
pub fn consume_ship_input(mut input_buffer: ResMut<ShipInputBuffer>) {
    input_buffer.fire = false;
}

/// True if moving left would not cross the left border.
pub fn can_move_left(ship: &PlayerShip) -> bool {
    ship.position_x - ship.speed() >= 1
}

/// True if moving right would not cross the right border of a field `screen_width` wide.
pub fn can_move_right(ship: &PlayerShip, screen_width: i32) -> bool {
    ship.position_x + ship.width() + ship.speed() <= screen_width - 1
}
