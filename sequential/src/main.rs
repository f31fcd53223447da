use anyhow::Result;
use clap::{Parser, ValueEnum};
use sequential::{init_logger, Pipeline, RunConfig};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AppName {
    /// word count
    Wc,
    /// inverted index: word -> files containing it
    Indexer,
}

#[derive(Parser, Debug)]
#[command(about = "Run a MapReduce job on one machine")]
struct Cli {
    #[arg(short, long, value_enum)]
    app_name: AppName,
    /// Fix the value shuffle for repeatable runs
    #[arg(short, long)]
    seed: Option<u64>,
    /// Start the result file with a UTF-8 BOM
    #[arg(long)]
    bom: bool,
    /// Also log to a daily rolling file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Input file or directory
    source: PathBuf,
    /// Result file, replaced if it exists
    target: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logger(cli.log_dir.as_deref())?;

    let config = RunConfig::new(&cli.source, &cli.target)
        .shuffle_seed(cli.seed)
        .write_bom(cli.bom);
    let mut pipeline = Pipeline::new(config);
    match cli.app_name {
        AppName::Wc => pipeline.run(&app_wc::WordCount, &app_wc::WordCount)?,
        AppName::Indexer => pipeline.run(&app_indexer::Indexer, &app_indexer::Indexer)?,
    }
    Ok(())
}
