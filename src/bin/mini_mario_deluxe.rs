//! Mini Mario Deluxe: ENTER to start, ESC to pause, avoid the patrolling
//! enemies while collecting every coin.

use mini_arcade::driver;
use mini_arcade::games::PlatformerGame;

fn main() -> std::io::Result<()> {
    let game = PlatformerGame::deluxe(&mut rand::thread_rng());
    driver::run(game)
}
