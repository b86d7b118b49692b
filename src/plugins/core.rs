use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::components::PlayerShip;
use crate::plugins::input::get_default_input_map;
use crate::resources::{CliArgs, GameConfig};

/// Loads configuration, sets the game tick rate and spawns the player ship.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let cli = CliArgs::parse();
        let config = load_config(&cli);

        app.insert_resource(Time::<Fixed>::from_hz(config.fixed_hz))
            .insert_resource(config)
            .insert_resource(cli)
            .add_systems(Startup, spawn_player_ship);
    }
}

/// Resolves the config file from the CLI or the platform default location.
fn load_config(cli: &CliArgs) -> GameConfig {
    let Some(path) = cli.config_path.clone().or_else(GameConfig::default_path) else {
        warn!("Could not determine config directory, using default config");
        return GameConfig::default();
    };

    let config = GameConfig::load_from_file(&path);
    if cli.write_config {
        if let Err(e) = config.save_to_file(&path) {
            error!("{}", e);
        }
    }
    config
}

fn spawn_player_ship(mut commands: Commands, config: Res<GameConfig>) {
    let (x, y) = config.ship_spawn_position();
    commands.spawn((
        Name::new("Player Ship"),
        PlayerShip::new(x, y),
        InputManagerBundle::with_map(get_default_input_map()),
    ));
    info!("Spawned player ship at ({}, {})", x, y);
}
