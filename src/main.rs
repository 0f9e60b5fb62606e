use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use listing_normalizer::app::normalize_use_case::NormalizeUseCase;
use listing_normalizer::config::Config;
use listing_normalizer::infra::csv_sink::CsvFileSink;
use listing_normalizer::infra::csv_source::CsvFileSource;
use listing_normalizer::infra::jsonl_sink::JsonLinesDocumentSink;
use listing_normalizer::logging;
use listing_normalizer::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "listing_normalizer")]
#[command(about = "Real-estate listing extract normalizer")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize one CSV extract into canonical table and document outputs
    Normalize {
        /// Input CSV extract
        #[arg(long)]
        input: PathBuf,
        /// Canonical table output (CSV)
        #[arg(long, default_value = "output/transactions.csv")]
        table_out: PathBuf,
        /// Document output (JSON-Lines, nulls omitted)
        #[arg(long, default_value = "output/transactions.jsonl")]
        docs_out: PathBuf,
        /// Pipeline configuration file
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            input,
            table_out,
            docs_out,
            config,
        } => {
            let config = Config::load_or_default(&config)?;
            info!(input = %input.display(), "starting normalization run");

            let use_case = NormalizeUseCase::new(
                Box::new(CsvFileSource::new(&input)),
                Box::new(CsvFileSink::new(&table_out)),
                Box::new(JsonLinesDocumentSink::new(&docs_out)),
                Pipeline::standard(&config),
            );

            match use_case.run().await {
                Ok(summary) => {
                    info!("normalization finished");
                    println!("\n📊 Normalization results for {}:", input.display());
                    println!("   Rows: {}", summary.rows);
                    println!("   Columns: {}", summary.columns);
                    println!("   Table output: {}", table_out.display());
                    println!("   Document output: {}", docs_out.display());
                }
                Err(e) => {
                    error!("normalization failed: {}", e);
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
