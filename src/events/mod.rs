use bevy::prelude::*;

/// Event sent by collision logic when an enemy bullet hits the player ship.
#[derive(Event, Debug)]
pub struct ShipHitEvent {
    /// The ship that was hit.
    pub ship_entity: Entity,
}

/// Event emitted when the player ship starts its destruction sequence.
#[derive(Event, Debug)]
pub struct PlayerShipDestroyedEvent {
    pub entity: Entity,
}

/// Event emitted once, on the tick the destruction sequence ends.
#[derive(Event, Debug)]
pub struct PlayerShipRespawnedEvent {
    pub entity: Entity,
}

/// Event emitted when the player ship fires a bullet.
#[derive(Event, Debug)]
pub struct BulletFiredEvent {
    /// Spawn position of the bullet.
    pub x: i32,
    pub y: i32,
}
