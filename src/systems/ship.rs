use bevy::prelude::*;

use crate::components::PlayerShip;
use crate::events::{
    BulletFiredEvent, PlayerShipDestroyedEvent, PlayerShipRespawnedEvent, ShipHitEvent,
};
use crate::resources::{ActiveBullets, BulletPool, GameConfig};
use crate::systems::movement::{can_move_left, can_move_right, ShipInputBuffer};

/// System that starts the destruction sequence of ships hit this tick.
///
/// Hits on a ship that is already destroyed are ignored.
pub fn player_ship_hit_system(
    mut hit_events: EventReader<ShipHitEvent>,
    mut ships: Query<&mut PlayerShip>,
    mut destroyed_events: EventWriter<PlayerShipDestroyedEvent>,
) {
    for event in hit_events.read() {
        let Ok(mut ship) = ships.get_mut(event.ship_entity) else {
            warn!("Hit on unknown ship {:?}", event.ship_entity);
            continue;
        };
        if ship.is_destroyed() {
            debug!("Ship {:?} hit while destroyed, ignoring", event.ship_entity);
            continue;
        }

        ship.destroy();
        info!("Player ship destroyed at x={}", ship.position_x);
        destroyed_events.send(PlayerShipDestroyedEvent {
            entity: event.ship_entity,
        });
    }
}

/// System that advances the ship clock by the fixed timestep and
/// applies the destruction effect.
pub fn player_ship_update_system(
    time: Res<Time>,
    mut ships: Query<(Entity, &mut PlayerShip)>,
    mut respawned_events: EventWriter<PlayerShipRespawnedEvent>,
) {
    for (entity, mut ship) in &mut ships {
        if ship.advance(time.delta()) {
            info!("Player ship back in action at x={}", ship.position_x);
            respawned_events.send(PlayerShipRespawnedEvent { entity });
        }
    }
}

/// System that moves and fires the ship from buffered input.
///
/// Input is ignored while the ship is destroyed. Movement stops at the
/// borders of the play field.
pub fn player_ship_control_system(
    config: Res<GameConfig>,
    input_buffer: Res<ShipInputBuffer>,
    mut pool: ResMut<BulletPool>,
    mut bullets: ResMut<ActiveBullets>,
    mut ships: Query<&mut PlayerShip>,
    mut fired_events: EventWriter<BulletFiredEvent>,
) {
    for mut ship in &mut ships {
        if ship.is_destroyed() {
            continue;
        }

        if input_buffer.move_right && can_move_right(&ship, config.screen_width) {
            ship.move_right();
        } else if input_buffer.move_left && can_move_left(&ship) {
            ship.move_left();
        }

        if input_buffer.fire && ship.shoot(&mut pool, &mut bullets.0) {
            if let Some(bullet) = bullets.last() {
                debug!("Bullet fired from ({}, {})", bullet.position_x, bullet.position_y);
                fired_events.send(BulletFiredEvent {
                    x: bullet.position_x,
                    y: bullet.position_y,
                });
            }
        }
    }
}

/// System that moves bullets and returns those that left the play field to the pool.
pub fn bullet_update_system(
    config: Res<GameConfig>,
    mut pool: ResMut<BulletPool>,
    mut bullets: ResMut<ActiveBullets>,
) {
    for bullet in bullets.iter_mut() {
        bullet.update();
    }

    let (gone, active): (Vec<_>, Vec<_>) = bullets
        .drain(..)
        .partition(|bullet| bullet.is_off_screen(config.screen_height));
    bullets.0 = active;
    pool.recycle(gone);
}
