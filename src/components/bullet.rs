use bevy::prelude::*;

/// Bullet width in screen units.
pub const BULLET_WIDTH: i32 = 3 * 2;
/// Bullet height in screen units.
pub const BULLET_HEIGHT: i32 = 5 * 2;

/// A projectile travelling vertically across the play field.
/// Negative speed moves it towards the top of the screen.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Bullet {
    pub position_x: i32,
    pub position_y: i32,
    /// Vertical displacement per tick.
    pub speed: i32,
}

impl Bullet {
    pub fn new(position_x: i32, position_y: i32, speed: i32) -> Self {
        Self {
            position_x,
            position_y,
            speed,
        }
    }

    /// Moves the bullet one tick along its trajectory.
    pub fn update(&mut self) {
        self.position_y += self.speed;
    }

    pub fn width(&self) -> i32 {
        BULLET_WIDTH
    }

    pub fn height(&self) -> i32 {
        BULLET_HEIGHT
    }

    /// Returns true if no part of the bullet overlaps the vertical range `[0, screen_height)`.
    pub fn is_off_screen(&self, screen_height: i32) -> bool {
        self.position_y + BULLET_HEIGHT <= 0 || self.position_y >= screen_height
    }
}
