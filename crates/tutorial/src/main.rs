//! Tutorial entry point.

use std::io;

use anyhow::Context;
use fptour_tutorial::TutorialConfig;

fn main() -> anyhow::Result<()> {
    fptour_observability::init();

    let config = TutorialConfig::from_env()?;
    tracing::info!(sections = ?config.sections, "starting tutorial");

    let stdout = io::stdout();
    fptour_tutorial::run(&config, &mut stdout.lock()).context("failed to write tutorial output")?;

    Ok(())
}
