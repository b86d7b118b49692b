pub mod bullet_pool;
pub mod cli;
pub mod game_config;

pub use bullet_pool::*;
pub use cli::*;
pub use game_config::*;
