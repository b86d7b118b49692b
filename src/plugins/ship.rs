use bevy::prelude::*;

use crate::events::{
    BulletFiredEvent, PlayerShipDestroyedEvent, PlayerShipRespawnedEvent, ShipHitEvent,
};
use crate::resources::{ActiveBullets, BulletPool, GameConfig};
use crate::systems::movement::{consume_ship_input, ShipInputBuffer};
use crate::systems::ship::{
    bullet_update_system, player_ship_control_system, player_ship_hit_system,
    player_ship_update_system,
};

/// Plugin that drives the player ship and its bullets.
///
/// All systems run in `FixedUpdate` so cooldowns advance with the fixed game
/// clock. Hits are applied after the clock step so a destruction sequence
/// starts at zero on the tick it is triggered. Input is read from
/// `ShipInputBuffer`, which `InputPlugin` fills; without it the ship only
/// reacts to hits.
pub struct PlayerShipPlugin;

impl Plugin for PlayerShipPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<BulletPool>()
            .init_resource::<ActiveBullets>()
            .init_resource::<ShipInputBuffer>()
            .add_event::<ShipHitEvent>()
            .add_event::<PlayerShipDestroyedEvent>()
            .add_event::<PlayerShipRespawnedEvent>()
            .add_event::<BulletFiredEvent>()
            .add_systems(
                FixedUpdate,
                (
                    player_ship_update_system,
                    player_ship_hit_system,
                    player_ship_control_system,
                    bullet_update_system,
                    consume_ship_input,
                )
                    .chain(),
            );
    }
}
