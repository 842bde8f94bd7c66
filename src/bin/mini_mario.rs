//! Mini Mario: walk with A/D, jump with Space, collect every coin.

use mini_arcade::driver;
use mini_arcade::games::PlatformerGame;

fn main() -> std::io::Result<()> {
    let game = PlatformerGame::classic(&mut rand::thread_rng());
    driver::run(game)
}
