use std::time::Duration;

use bevy::prelude::*;

use crate::components::cooldown::Cooldown;
use crate::components::Bullet;
use crate::resources::BulletPool;

/// Ship tuning. All durations are in milliseconds of game time.
pub mod ship_config {
    /// Ship width in screen units.
    pub const WIDTH: i32 = 13 * 2;
    /// Ship height in screen units.
    pub const HEIGHT: i32 = 8 * 2;
    /// Horizontal movement per call to `move_left` / `move_right`.
    pub const SPEED: i32 = 2;
    /// Vertical speed of the ship's bullets (negative is upward).
    pub const BULLET_SPEED: i32 = -6;
    /// Minimum time between two shots.
    pub const SHOOTING_INTERVAL: u64 = 750;
    /// Length of the whole destruction sequence.
    pub const DESTRUCTION_TIME: u64 = 1200;
    /// Length of the explosion phase at the start of the sequence.
    pub const EXPLOSION_TIME: u64 = 200;
    /// Interval between two jolts while the wreck is shaking.
    pub const VIBRATION_INTERVAL: u64 = 200;
    /// Horizontal displacement of a single jolt.
    pub const JOLT_DISTANCE: i32 = 10;
}

/// Sprite the renderer should draw for the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipSprite {
    Ship,
    Explosion,
    ShipDestroyed,
}

/// The player-controlled ship.
///
/// Visible state is never stored: it is derived from the destruction and
/// explosion cooldowns whenever it is queried. The only extra state is the
/// direction of the next jolt while the wreck is shaking.
#[derive(Component, Debug, Clone)]
pub struct PlayerShip {
    pub position_x: i32,
    pub position_y: i32,
    shooting_cooldown: Cooldown,
    destruction_cooldown: Cooldown,
    explosion_cooldown: Cooldown,
    vibration_cooldown: Cooldown,
    jolt_right: bool,
}

impl PlayerShip {
    /// Creates a ship with its top-left corner at `(position_x, position_y)`.
    pub fn new(position_x: i32, position_y: i32) -> Self {
        Self {
            position_x,
            position_y,
            shooting_cooldown: Cooldown::from_millis(ship_config::SHOOTING_INTERVAL),
            destruction_cooldown: Cooldown::from_millis(ship_config::DESTRUCTION_TIME),
            explosion_cooldown: Cooldown::from_millis(ship_config::EXPLOSION_TIME),
            vibration_cooldown: Cooldown::from_millis(ship_config::VIBRATION_INTERVAL),
            jolt_right: true,
        }
    }

    pub fn width(&self) -> i32 {
        ship_config::WIDTH
    }

    pub fn height(&self) -> i32 {
        ship_config::HEIGHT
    }

    /// Movement per tick, for the caller's border checks.
    pub fn speed(&self) -> i32 {
        ship_config::SPEED
    }

    /// Moves the ship right. Border clamping is up to the caller.
    pub fn move_right(&mut self) {
        self.position_x += ship_config::SPEED;
    }

    /// Moves the ship left. Border clamping is up to the caller.
    pub fn move_left(&mut self) {
        self.position_x -= ship_config::SPEED;
    }

    /// Fires a bullet upwards from the centre of the ship's top edge.
    ///
    /// Returns false, leaving `bullets` untouched, while the shooting
    /// cooldown is still running.
    pub fn shoot(&mut self, pool: &mut BulletPool, bullets: &mut Vec<Bullet>) -> bool {
        if !self.shooting_cooldown.is_finished() {
            return false;
        }
        self.shooting_cooldown.reset();
        bullets.push(pool.acquire(
            self.position_x + self.width() / 2,
            self.position_y,
            ship_config::BULLET_SPEED,
        ));
        true
    }

    /// Advances every cooldown by `delta` of game time.
    pub fn tick(&mut self, delta: Duration) {
        self.shooting_cooldown.tick(delta);
        self.destruction_cooldown.tick(delta);
        self.explosion_cooldown.tick(delta);
        self.vibration_cooldown.tick(delta);
    }

    /// Applies the destruction effect for the current tick.
    ///
    /// While the wreck is shaking, each elapsed vibration interval jolts the
    /// ship sideways once and restarts the interval.
    pub fn update(&mut self) {
        if self.sprite() != ShipSprite::ShipDestroyed || !self.vibration_cooldown.is_finished() {
            return;
        }
        if self.jolt_right {
            self.position_x += ship_config::JOLT_DISTANCE;
        } else {
            self.position_x -= ship_config::JOLT_DISTANCE;
        }
        self.jolt_right = !self.jolt_right;
        self.vibration_cooldown.reset();
    }

    /// Ticks the ship clock and updates it. Returns true on the step where the
    /// destruction sequence ends and the ship becomes interactive again.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let was_destroyed = self.is_destroyed();
        self.tick(delta);
        self.update();
        was_destroyed && !self.is_destroyed()
    }

    /// Starts the destruction sequence over from the explosion phase.
    pub fn destroy(&mut self) {
        self.destruction_cooldown.reset();
        self.explosion_cooldown.reset();
        self.vibration_cooldown.reset();
        self.jolt_right = true;
    }

    /// True for the whole destruction sequence, explosion included.
    pub fn is_destroyed(&self) -> bool {
        !self.destruction_cooldown.is_finished()
    }

    pub fn sprite(&self) -> ShipSprite {
        if !self.is_destroyed() {
            ShipSprite::Ship
        } else if !self.explosion_cooldown.is_finished() {
            ShipSprite::Explosion
        } else {
            ShipSprite::ShipDestroyed
        }
    }

    /// Time left before the ship can shoot again.
    pub fn shooting_cooldown_remaining(&self) -> Duration {
        self.shooting_cooldown.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Runs `update` every `step` ms for `total` ms, returning the x position after each tick.
    fn run(ship: &mut PlayerShip, step: u64, total: u64) -> Vec<i32> {
        let mut xs = Vec::new();
        for _ in 0..total / step {
            ship.advance(ms(step));
            xs.push(ship.position_x);
        }
        xs
    }

    #[test]
    fn test_new_ship() {
        let ship = PlayerShip::new(224, 490);
        assert_eq!((ship.position_x, ship.position_y), (224, 490));
        assert_eq!((ship.width(), ship.height()), (26, 16));
        assert_eq!(ship.speed(), 2);
        assert!(!ship.is_destroyed());
        assert_eq!(ship.sprite(), ShipSprite::Ship);
    }

    #[test]
    fn test_movement() {
        let mut ship = PlayerShip::new(100, 50);
        ship.move_right();
        assert_eq!(ship.position_x, 102);
        ship.move_left();
        ship.move_left();
        assert_eq!(ship.position_x, 98);
        assert_eq!(ship.position_y, 50);
        assert_eq!(ship.sprite(), ShipSprite::Ship);
    }

    #[test]
    fn test_shoot_spawns_bullet_at_centre() {
        let mut ship = PlayerShip::new(100, 50);
        let mut pool = BulletPool::default();
        let mut bullets = Vec::new();

        assert!(ship.shoot(&mut pool, &mut bullets));
        assert_eq!(bullets, vec![Bullet::new(113, 50, -6)]);
    }

    #[test]
    fn test_shoot_rate_limit() {
        let mut ship = PlayerShip::new(100, 50);
        let mut pool = BulletPool::default();
        let mut bullets = Vec::new();

        assert!(ship.shoot(&mut pool, &mut bullets));
        assert!(!ship.shoot(&mut pool, &mut bullets));
        assert_eq!(bullets.len(), 1);

        ship.tick(ms(749));
        assert!(!ship.shoot(&mut pool, &mut bullets));
        assert_eq!(bullets.len(), 1);

        ship.tick(ms(1));
        assert!(ship.shoot(&mut pool, &mut bullets));
        assert_eq!(bullets.len(), 2);
    }

    #[test]
    fn test_failed_shot_does_not_restart_cooldown() {
        let mut ship = PlayerShip::new(100, 50);
        let mut pool = BulletPool::default();
        let mut bullets = Vec::new();

        ship.shoot(&mut pool, &mut bullets);
        ship.tick(ms(500));
        assert!(!ship.shoot(&mut pool, &mut bullets));
        ship.tick(ms(250));
        assert!(ship.shoot(&mut pool, &mut bullets));
    }

    #[test]
    fn test_shoot_reuses_pooled_bullet() {
        let mut ship = PlayerShip::new(0, 300);
        let mut pool = BulletPool::default();
        pool.recycle(vec![Bullet::new(9, -20, -6)]);
        let mut bullets = Vec::new();

        assert!(ship.shoot(&mut pool, &mut bullets));
        assert!(pool.is_empty());
        assert_eq!(bullets[0], Bullet::new(13, 300, -6));
    }

    #[test]
    fn test_destroyed_window() {
        let mut ship = PlayerShip::new(100, 50);
        ship.destroy();
        assert!(ship.is_destroyed());
        ship.tick(ms(1199));
        assert!(ship.is_destroyed());
        ship.tick(ms(1));
        assert!(!ship.is_destroyed());
    }

    #[test]
    fn test_sprite_phases() {
        let mut ship = PlayerShip::new(100, 50);
        ship.destroy();
        assert_eq!(ship.sprite(), ShipSprite::Explosion);

        ship.advance(ms(199));
        assert_eq!(ship.sprite(), ShipSprite::Explosion);
        assert_eq!(ship.position_x, 100);

        ship.advance(ms(1));
        assert_eq!(ship.sprite(), ShipSprite::ShipDestroyed);

        ship.advance(ms(999));
        assert_eq!(ship.sprite(), ShipSprite::ShipDestroyed);

        ship.advance(ms(1));
        assert_eq!(ship.sprite(), ShipSprite::Ship);
    }

    #[test]
    fn test_vibration_jolts_alternate() {
        let mut ship = PlayerShip::new(100, 50);
        ship.destroy();
        let xs = run(&mut ship, 100, 1400);

        // Jolts at 200, 400, 600, 800 and 1000 ms, none after 1200 ms.
        assert_eq!(
            xs,
            vec![100, 110, 110, 100, 100, 110, 110, 100, 100, 110, 110, 110, 110, 110]
        );
        assert_eq!(ship.sprite(), ShipSprite::Ship);
    }

    #[test]
    fn test_jolt_fires_once_per_interval() {
        let mut ship = PlayerShip::new(100, 50);
        ship.destroy();
        ship.advance(ms(200));
        assert_eq!(ship.position_x, 110);

        // Small steps inside the same interval must not jolt again.
        for _ in 0..19 {
            ship.advance(ms(10));
        }
        assert_eq!(ship.position_x, 110);

        ship.advance(ms(10));
        assert_eq!(ship.position_x, 100);
    }

    #[test]
    fn test_destroy_restarts_sequence() {
        let mut ship = PlayerShip::new(100, 50);
        ship.destroy();
        ship.advance(ms(200));
        ship.advance(ms(200));
        ship.advance(ms(200));
        assert_eq!(ship.position_x, 110);
        assert_eq!(ship.sprite(), ShipSprite::ShipDestroyed);

        ship.destroy();
        assert_eq!(ship.sprite(), ShipSprite::Explosion);
        ship.advance(ms(199));
        assert_eq!(ship.sprite(), ShipSprite::Explosion);
        assert_eq!(ship.position_x, 110);

        // First jolt after a fresh destroy is always to the right.
        ship.advance(ms(1));
        assert_eq!(ship.position_x, 120);

        ship.advance(ms(999));
        assert!(ship.is_destroyed());
    }

    #[test]
    fn test_advance_reports_respawn_once() {
        let mut ship = PlayerShip::new(100, 50);
        assert!(!ship.advance(ms(16)));

        ship.destroy();
        let respawns = (0..100).filter(|_| ship.advance(ms(16))).count();
        assert_eq!(respawns, 1);
        assert!(!ship.is_destroyed());
    }

    #[test]
    fn test_destroy_does_not_touch_shooting() {
        let mut ship = PlayerShip::new(100, 50);
        let mut pool = BulletPool::default();
        let mut bullets = Vec::new();
        ship.destroy();
        assert!(ship.shoot(&mut pool, &mut bullets));
        assert_eq!(ship.shooting_cooldown_remaining(), ms(750));
    }
}
