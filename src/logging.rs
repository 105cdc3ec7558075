//! Logger setup for the command-line tool.
//!
//! `RUST_LOG` always wins. Without it this crate logs at `info`, one step
//! louder per `-v`, errors only under `-q`, and dependencies stay at `warn`.

use log::LevelFilter;

pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// `env_logger` filter directive used when `RUST_LOG` is unset.
pub fn default_filter(level: LevelFilter) -> String {
    format!(
        "warn,{}={}",
        env!("CARGO_CRATE_NAME"),
        level.to_string().to_lowercase()
    )
}

pub fn init(level: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(default_filter(level));
    // A second init (tests, embedding) keeps the first logger.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
