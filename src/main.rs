use anyhow::{Context, Result};
use bitchess_core::lut;
use bitchess_engine::MoveEngine;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("bitchess starting");

    lut::init();

    // An optional placement string replaces the starting position.
    let engine = match std::env::args().nth(1) {
        Some(text) => MoveEngine::from_placement(&text)
            .with_context(|| format!("could not set up board from {text:?}"))?,
        None => MoveEngine::new(),
    };

    info!(turn = %engine.turn(), "board ready\n{}", engine.pretty());
    Ok(())
}
