//! CLI entry-point for batch enrichment of scraped articles.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};
use walkdir::WalkDir;

use super::OutputFormat;
use crate::{
    config::Settings,
    lexicon,
    pipeline::{ArticleInput, DefaultPipeline, EnrichedRecord, ExportRow},
};

/// Args for the `enrich` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// JSON-lines file of articles, or a directory searched for `*.jsonl`.
    #[arg(long)]
    pub input: PathBuf,
    /// Destination file; defaults to `enriched.<format>` under the outputs dir.
    #[arg(long)]
    pub output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
    /// Articles enriched concurrently (overrides `ENRICH_WORKERS`).
    #[arg(long)]
    pub workers: Option<usize>,
    /// Source URL recorded on articles that carry none.
    #[arg(long)]
    pub source_url: Option<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let lexicon = lexicon::load(&settings.drug_table, &settings.drug_columns)
        .await
        .with_context(|| format!("loading lexicon from {}", settings.drug_table))?;
    let pipeline = Arc::new(DefaultPipeline::from_settings(Arc::new(lexicon), &settings)?);

    let mut articles = read_articles(&args.input)?;
    if let Some(source_url) = &args.source_url {
        for article in articles.iter_mut().filter(|a| a.source_url.trim().is_empty()) {
            article.source_url = source_url.clone();
        }
    }
    let workers = args.workers.unwrap_or(settings.workers).max(1);
    info!(articles = articles.len(), workers, "enriching articles");

    let records: Vec<EnrichedRecord> = stream::iter(articles)
        .map(|article| {
            let pipeline = Arc::clone(&pipeline);
            tokio::spawn(async move { pipeline.enrich(&article).await })
        })
        .buffered(workers)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<_, _>>()
        .context("enrichment task failed")?;

    let output = args.output.clone().unwrap_or_else(|| {
        settings.join_output(format!("enriched.{}", args.format.extension()))
    });
    write_records(&records, &output, args.format)?;

    let degraded = records.iter().filter(|r| r.is_degraded()).count();
    info!(rows = records.len(), degraded, path = %output.display(), "wrote enriched rows");
    Ok(())
}

/// Read articles from a `.jsonl` file or every `.jsonl` file below a directory.
/// Unparseable lines are logged and skipped.
pub fn read_articles(input: &Path) -> Result<Vec<ArticleInput>> {
    let files: Vec<PathBuf> = if input.is_dir() {
        WalkDir::new(input)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "jsonl"))
            .collect()
    } else {
        vec![input.to_path_buf()]
    };

    let mut articles = Vec::new();
    for path in files {
        let file = File::open(&path).with_context(|| format!("open {path:?}"))?;
        for (lineno, line) in BufReader::new(file).lines().enumerate() {
            let line = line.with_context(|| format!("read {path:?}"))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ArticleInput>(&line) {
                Ok(article) => articles.push(article),
                Err(err) => warn!(
                    path = %path.display(),
                    line = lineno + 1,
                    %err,
                    "skipping malformed article"
                ),
            }
        }
    }
    Ok(articles)
}

/// Write records in the requested format, creating parent directories.
pub fn write_records(records: &[EnrichedRecord], path: &Path, format: OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent:?}"))?;
    }
    match format {
        OutputFormat::Csv => {
            let mut writer =
                csv::Writer::from_path(path).with_context(|| format!("create {path:?}"))?;
            for record in records {
                writer.serialize(ExportRow::from(record))?;
            }
            writer.flush()?;
        }
        OutputFormat::Jsonl => {
            let file = File::create(path).with_context(|| format!("create {path:?}"))?;
            let mut writer = BufWriter::new(file);
            for record in records {
                serde_json::to_writer(&mut writer, record)?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
