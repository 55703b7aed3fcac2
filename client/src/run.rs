use ::rand::{SeedableRng, rngs::StdRng};
use macroquad::prelude::{BLACK, clear_background, next_frame};

use crate::config::Config;
use crate::input::{self, Command};
use crate::render;
use engine::Board;

pub struct Game {
    pub board: Board,
    pub seed: u64,
    pub moves: u32,
    config: Config,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let seed = config.seed.unwrap_or_else(::rand::random);
        Self::with_seed(config, seed)
    }

    fn with_seed(config: Config, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::generate(config.width, config.height, &mut rng);

        println!(
            "Generated a {}x{} board from seed {}.",
            config.width, config.height, seed
        );

        Game {
            board,
            seed,
            moves: 0,
            config,
        }
    }

    /// Applies one player command. Returns `false` once the player quits.
    pub fn apply(&mut self, command: Command) -> bool {
        let was_lit = self.board.all_powered();

        let changed = match command {
            Command::Rotate(position) => self.board.rotate(position),
            Command::Relocate(direction) => self.board.relocate_station(direction),
            Command::NewBoard => {
                *self = Self::with_seed(self.config, ::rand::random());
                return true;
            }
            Command::Quit => return false,
        };

        if changed {
            self.moves += 1;
        }

        if !was_lit && self.board.all_powered() {
            println!("Lit up in {} moves.", self.moves);
        }

        true
    }
}

pub async fn run() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    let tile_size = config.tile_size as f32;
    let mut game = Game::new(config);

    loop {
        for command in input::poll_commands(config.tile_size) {
            if !game.apply(command) {
                println!("Quitting.");
                return;
            }
        }

        clear_background(BLACK);
        render::draw_board(&game.board, tile_size);
        if game.board.all_powered() {
            render::draw_win_banner(&game.board, tile_size);
        }

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use engine::{Direction, Position};

    use super::*;

    fn config(width: usize, height: usize) -> Config {
        Config {
            width,
            height,
            seed: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn test_configured_seed_is_reproducible() {
        let first = Game::new(config(5, 4));
        let second = Game::new(config(5, 4));
        assert_eq!(first.seed, 42);
        assert_eq!(first.board, second.board);
    }

    #[test]
    fn test_rotations_count_as_moves() {
        let mut game = Game::new(config(3, 3));
        assert!(game.apply(Command::Rotate(Position::new(1, 1))));
        assert!(game.apply(Command::Rotate(Position::new(9, 9))));
        assert_eq!(game.moves, 1);
    }

    #[test]
    fn test_rejected_relocation_is_not_a_move() {
        let mut game = Game::new(config(3, 3));
        assert!(game.apply(Command::Relocate(Direction::Up)));
        assert!(game.apply(Command::Relocate(Direction::Left)));
        assert_eq!(game.moves, 0);
        assert_eq!(game.board.station(), Some(Position::ORIGIN));
    }

    #[test]
    fn test_new_board_resets_moves() {
        let mut game = Game::new(config(4, 4));
        game.apply(Command::Rotate(Position::new(0, 0)));
        assert!(game.apply(Command::NewBoard));
        assert_eq!(game.moves, 0);
        assert_eq!(game.board.len(), 16);
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let mut game = Game::new(config(2, 2));
        assert!(!game.apply(Command::Quit));
    }

    #[test]
    fn test_empty_board_is_already_won() {
        let game = Game::new(config(0, 0));
        assert!(game.board.all_powered());
    }
}
