pub mod ship;
pub mod movement;

pub use ship::*;
pub use movement::*;
