use bevy::prelude::*;

use crate::components::Bullet;

/// Free list of bullets that left the play field, reused by `acquire`.
#[derive(Resource, Debug, Default)]
pub struct BulletPool {
    free: Vec<Bullet>,
}

impl BulletPool {
    /// Returns a bullet at `(x, y)` moving with `speed`, recycling one if available.
    pub fn acquire(&mut self, x: i32, y: i32, speed: i32) -> Bullet {
        match self.free.pop() {
            Some(mut bullet) => {
                bullet.position_x = x;
                bullet.position_y = y;
                bullet.speed = speed;
                bullet
            }
            None => Bullet::new(x, y, speed),
        }
    }

    /// Returns bullets to the pool.
    pub fn recycle(&mut self, bullets: impl IntoIterator<Item = Bullet>) {
        self.free.extend(bullets);
    }

    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }
}

/// Bullets currently on screen.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct ActiveBullets(pub Vec<Bullet>);
