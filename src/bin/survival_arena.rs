//! Survival arena: dodge the hunters with WASD for as long as possible.

use mini_arcade::config::ArenaConfig;
use mini_arcade::driver;
use mini_arcade::games::ArenaGame;

fn main() -> std::io::Result<()> {
    driver::run(ArenaGame::new(ArenaConfig::default()))
}
