use std::io;
use terminal::{chart::TerminalViewer, command, Config, Error, Session};
use tracing::{error, info};

fn main() {
    // Parse arguments
    let config = Config::from_matches(&command().get_matches());

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();
    if !config.color {
        colored::control::set_override(false);
    }
    info!(?config, "starting");

    // Run menu
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), TerminalViewer);
    match session.run(config.data.as_deref()) {
        Ok(()) => info!("exited"),
        Err(Error::Closed) => info!("input closed"),
        Err(err) => {
            error!(?err, "session failed");
            std::process::exit(1);
        }
    }
}
