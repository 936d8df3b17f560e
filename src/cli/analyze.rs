//! CLI entry-point for enriching a single article.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    lexicon,
    pipeline::{ArticleInput, DefaultPipeline},
};

/// Args for the `analyze` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Article body text.
    #[arg(long)]
    pub text: String,
    #[arg(long, default_value = "")]
    pub title: String,
    /// Article URL, used for publishing-country inference.
    #[arg(long, default_value = "")]
    pub url: String,
    #[arg(long, default_value = "")]
    pub date: String,
}

#[instrument(skip_all)]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let lexicon = lexicon::load(&settings.drug_table, &settings.drug_columns)
        .await
        .with_context(|| format!("loading lexicon from {}", settings.drug_table))?;
    let pipeline = DefaultPipeline::from_settings(Arc::new(lexicon), &settings)?;

    let article = ArticleInput {
        title: args.title,
        body: args.text,
        article_url: args.url,
        date: args.date,
        ..ArticleInput::default()
    };
    let record = pipeline.enrich(&article).await;
    info!(degraded = ?record.degraded, "article analysed");
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
