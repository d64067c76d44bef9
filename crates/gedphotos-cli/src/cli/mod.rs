//! CLI for gedphotos.

use anyhow::Result;
use clap::Parser;
use gedphotos_core::config::{self, GedphotosConfig};
use gedphotos_core::fetch::{CurlFetcher, FetchOptions};
use gedphotos_core::input::validate_input_file;
use gedphotos_core::scanner::{process_gedcom_file, ScanSummary};
use std::path::PathBuf;

/// Download the photos linked from person records in a GEDCOM file.
#[derive(Debug, Parser)]
#[command(name = "gedphotos", version)]
#[command(about = "Download person photos referenced by a GEDCOM file", long_about = None)]
pub struct Cli {
    /// Path to the GEDCOM file.
    pub ged_file: PathBuf,

    /// Directory to save photos in (default: `photos`, or `output_dir` from config.toml).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        validate_input_file(&self.ged_file)?;

        let cfg = match config::load_or_init() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("could not load config, using defaults: {:#}", e);
                GedphotosConfig::default()
            }
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let output_dir = self.output_dir.unwrap_or_else(|| cfg.output_dir.clone());
        let fetcher = CurlFetcher::new(FetchOptions::from(cfg));
        let summary = process_gedcom_file(&self.ged_file, &output_dir, &fetcher)?;
        println!("{}", summary_line(&summary));
        Ok(())
    }
}

fn summary_line(s: &ScanSummary) -> String {
    format!(
        "Done: {} person(s), {} photo(s) downloaded, {} failed, {} skipped",
        s.persons, s.downloaded, s.failed, s.skipped
    )
}
