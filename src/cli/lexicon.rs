//! CLI entry-point for inspecting the loaded lexicon.

use anyhow::{Context, Result};
use tracing::instrument;

use crate::{config::Settings, lexicon};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let lexicon = lexicon::load(&settings.drug_table, &settings.drug_columns)
        .await
        .with_context(|| format!("loading lexicon from {}", settings.drug_table))?;
    println!("{}", serde_json::to_string_pretty(&lexicon.stats())?);
    Ok(())
}
