//! # quickactions — preset catalogue dump
//!
//! Composition root for the quick action catalogue.
//!
//! ## Responsibilities
//! - Parse configuration (CLI arg, env vars, config file)
//! - Initialise logging (stderr, so stdout stays pure JSON)
//! - Audit the built-in catalogue and warn about any defect
//! - Print the selected presets as a JSON array
//!
//! ## Dependency rule
//! No domain logic belongs here; it only wires the catalogue to stdout.

use anyhow::Context;
use quickactions::config::Config;
use quickactions::selection::{Selection, render_json};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(arg) = std::env::args().nth(1).filter(|arg| !arg.trim().is_empty()) {
        config.output.selection = arg;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    for issue in quickaction_catalog::audit() {
        tracing::warn!(%issue, "catalogue issue");
    }

    let Ok(selection) = config.output.selection.parse::<Selection>();
    let presets = selection.resolve();
    tracing::info!(%selection, count = presets.len(), "presets selected");
    for preset in &presets {
        tracing::debug!(
            id = %preset.id,
            action_type = %preset.action_type(),
            action = %preset.action,
            "selected preset"
        );
    }

    let json = render_json(&presets, config.output.pretty).context("failed to render presets")?;
    println!("{json}");

    Ok(())
}
