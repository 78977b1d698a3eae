use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::PolicyType;
use crate::config::Config;
use crate::gomoku::Board;

/// Everything a command handler may read or change, lives for one connection.
pub struct Session {
    pub board: Board,
    pub policy: PolicyType,
    pub komi: f32,
    pub playouts: usize,
    pub rng: StdRng,
    debug: bool,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Session {
            board: Board::new(config.board_size),
            policy: PolicyType::default(),
            komi: 0.0,
            playouts: config.playouts,
            rng,
            debug: config.debug,
        }
    }

    /// write to the diagnostic stream, only in debug mode
    pub fn debug_msg(&self, msg: &str) {
        if self.debug {
            eprintln!("{msg}");
        }
    }
}
