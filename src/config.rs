use std::str::FromStr;

use crate::gomoku::MAXSIZE;

pub const DEFAULT_BOARD_SIZE: usize = 7;
pub const DEFAULT_PLAYOUTS: usize = 10;

/// Engine settings, read once at startup from `GOMOKU_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub board_size: usize,
    /// write diagnostics to stderr
    pub debug: bool,
    /// simulated games per candidate move
    pub playouts: usize,
    /// fixed seed for the rollout rng, random if unset
    pub seed: Option<u64>,
    /// end the session on internal errors instead of reporting them
    pub fail_fast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            board_size: DEFAULT_BOARD_SIZE,
            debug: false,
            playouts: DEFAULT_PLAYOUTS,
            seed: None,
            fail_fast: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// build a config from any key lookup, unset or invalid values keep their default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Config::default();

        let board_size = parse_var(&lookup, "GOMOKU_BOARD_SIZE", default.board_size)
            .filter(|size| (2..=MAXSIZE).contains(size))
            .unwrap_or_else(|| {
                eprintln!("GOMOKU_BOARD_SIZE has to lie in 2..={MAXSIZE}, using {}", default.board_size);
                default.board_size
            });

        let playouts = parse_var(&lookup, "GOMOKU_PLAYOUTS", default.playouts)
            .filter(|&playouts| playouts > 0)
            .unwrap_or_else(|| {
                eprintln!("GOMOKU_PLAYOUTS has to be positive, using {}", default.playouts);
                default.playouts
            });

        let seed = lookup("GOMOKU_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                eprintln!("Could not parse GOMOKU_SEED \"{raw}\", using a random seed");
                None
            }
        });

        let debug = parse_flag(&lookup, "GOMOKU_DEBUG", default.debug);
        let fail_fast = parse_flag(&lookup, "GOMOKU_FAIL_FAST", default.fail_fast);

        Config {
            board_size,
            debug,
            playouts,
            seed,
            fail_fast,
        }
    }
}

/// None if the variable is set but can't be parsed
fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Option<T> {
    match lookup(key) {
        Some(raw) => raw.trim().parse().ok(),
        None => Some(default),
    }
}

fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    match lookup(key).map(|raw| raw.trim().to_lowercase()) {
        Some(raw) if matches!(raw.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(raw) if matches!(raw.as_str(), "0" | "false" | "no" | "off") => false,
        Some(raw) => {
            eprintln!("Could not parse {key} \"{raw}\", using {default}");
            default
        }
        None => default,
    }
}

/*====================================================================================================================*/
