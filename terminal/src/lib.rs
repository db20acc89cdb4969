//! Interactive terminal reports and bar charts for even and odd parity.
//!
//! The `paritybit` binary asks for a short binary string, computes both its even and odd parity
//! bits, and then offers a menu:
//!
//! ```txt
//!    1. EVEN PARITY
//!    2. ODD PARITY
//!    3. EVEN PARITY GRAPH
//!    4. ODD PARITY GRAPH
//!    5. EXIT
//! ```
//!
//! Reports are printed to standard output. Graphs take over the terminal (alternate screen) and
//! stay open until a key is pressed.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin paritybit -- --data 1011 --log-level debug
//! ```
//!
//! Logs are written to standard error so they can be redirected away from the menu.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io;
use thiserror::Error;
use tracing::Level;

pub mod chart;
pub mod menu;
pub mod report;
mod session;
pub use session::Session;

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed")]
    Closed,
}

/// Runtime options gathered from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Binary data to use instead of prompting.
    pub data: Option<String>,
    /// Most verbose level emitted by the logger.
    pub log_level: Level,
    /// Whether styled (ANSI) output is allowed.
    pub color: bool,
}

/// Command line definition for the `paritybit` binary.
pub fn command() -> Command {
    Command::new("paritybit")
        .about("Compute and visualize even and odd parity bits")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("data")
                .long("data")
                .required(false)
                .value_parser(value_parser!(String))
                .help("Binary data (4-32 bits) to use instead of prompting"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .required(false)
                .default_value("warn")
                .value_parser(value_parser!(Level))
                .help("Maximum log level written to stderr (error, warn, info, debug, trace)"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disable colored output"),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            data: matches.get_one::<String>("data").cloned(),
            log_level: matches
                .get_one::<Level>("log-level")
                .copied()
                .unwrap_or(Level::WARN),
            color: !matches.get_flag("no-color"),
        }
    }
}
