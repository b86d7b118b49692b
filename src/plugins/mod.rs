pub mod core;
pub mod input;
pub mod ship;
