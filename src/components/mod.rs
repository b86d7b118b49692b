pub mod ship;
pub mod cooldown;
pub mod bullet;

pub use ship::*;
pub use cooldown::*;
pub use bullet::*;
