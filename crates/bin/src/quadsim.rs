//! Quadsim - sprite collision simulation on top of the region quadtree.

mod config;
mod sprite;
mod world;

use std::time::Duration;

use geometry::{Quadrant, Region};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::SimConfig;
use crate::world::World;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Quadsim v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = SimConfig::load()?;
    info!("Loaded configuration");
    info!("  World: {}x{}", config.world.width, config.world.height);
    info!("  Sprites: {}", config.sprites.count);
    info!(
        "  Tree: max {} items per leaf, max depth {}",
        config.tree.max_items, config.tree.max_depth
    );

    let border = Region::try_new(0.0, config.world.width, 0.0, config.world.height)?;
    let mut world = World::new(border, config.tree);
    world.spawn_sprites(&config.sprites, &mut rand::rng());
    info!("World initialized: {} sprites, {:?}", world.len(), world.tree().stats());
    for quadrant in Quadrant::ALL {
        if let Some(child) = world.tree().child(quadrant) {
            debug!("  {:?}: {} sprites", quadrant, child.all_items().len());
        }
    }

    run(&mut world, &config).await;
    Ok(())
}

/// Drive the world for the configured number of ticks.
async fn run(world: &mut World, config: &SimConfig) {
    let tick_duration = Duration::from_millis(config.sim.tick_interval_ms);
    let dt = tick_duration.as_secs_f32();
    let mut ticker = interval(tick_duration);
    // Skip missed ticks so a slow tick does not trigger a burst.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut total_collisions = 0usize;
    let mut peak_collisions = 0usize;

    for tick in 0..config.sim.ticks {
        ticker.tick().await;

        let report = world.tick(dt);
        total_collisions += report.collisions;
        peak_collisions = peak_collisions.max(report.collisions);
        debug!(
            "Tick {}: {} collisions, {} leaves, depth {}, {} stored entries",
            tick,
            report.collisions,
            report.stats.leaves,
            report.stats.max_depth,
            report.stats.stored_entries
        );
    }

    let ticks = config.sim.ticks.max(1) as f64;
    info!(
        "Finished {} ticks: {:.1} collisions per tick on average, peak {}",
        config.sim.ticks,
        total_collisions as f64 / ticks,
        peak_collisions
    );
    info!("Final tree: {:?}", world.tree().stats());
}
