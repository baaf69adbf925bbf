//! CLI infrastructure for the console game
//!
//! The interactive menu, single games, position hints and computer-only
//! simulations all live here; the binary only parses arguments and
//! dispatches.

pub mod commands;
pub mod config;
pub mod output;

/// Initialize logging. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
