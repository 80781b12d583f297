//! Console noughts and crosses: two local players, one terminal.

use anyhow::Result;
use noughts_cli::{LineConsole, Match};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so the game transcript on stdout stays
    // byte-exact.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut game_match = Match::new(LineConsole::stdio());
    let status = game_match.run()?;
    info!(?status, "exiting");

    Ok(())
}
