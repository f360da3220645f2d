//! Skirmish demo binary.
//!
//! ```bash
//! SKIRMISH_SEED=7 SKIRMISH_WOLVES=3 cargo run -p skirmish-client
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use skirmish_client::{DemoConfig, demo, logging};
use skirmish_runtime::{FileSnapshotRepository, InMemorySnapshotRepo, Session, SnapshotRepository};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = DemoConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref(), &config.game_id)?;

    tracing::info!(
        game_id = %config.game_id,
        width = config.game.width,
        height = config.game.height,
        wolves = config.wolves,
        villagers = config.villagers,
        persist = config.persist,
        "starting skirmish demo"
    );

    if config.persist {
        let dir = config.snapshot_dir();
        let repository = FileSnapshotRepository::new(&dir)
            .with_context(|| format!("opening snapshot directory {}", dir.display()))?;
        tracing::info!("Snapshots: {}", dir.display());
        play(&config, repository)
    } else {
        play(&config, InMemorySnapshotRepo::new())
    }
}

fn play<R: SnapshotRepository>(config: &DemoConfig, repository: R) -> Result<()> {
    let mut session = Session::create(
        config.game_id.clone(),
        config.game,
        config.seed,
        repository,
    )?;
    tracing::info!(seed = session.game().seed(), "placement seed");

    let mut rng = rand::thread_rng();
    let mut stdout = std::io::stdout().lock();
    let snapshot = demo::run(&mut session, config, &mut rng, &mut stdout)?;

    if config.dump_json {
        serde_json::to_writer_pretty(&mut stdout, &snapshot)?;
        writeln!(stdout)?;
    }
    Ok(())
}
