//! Scan driver: reads lines, feeds the scanner, fetches photos one at a time.

use super::{RecordScanner, ScanEvent};
use crate::fetch::PhotoFetcher;
use crate::logging;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Counters for one scan. Download failures are counted, never propagated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub persons: u64,
    pub photo_lines: u64,
    /// Photo lines dropped because name/date were missing or did not parse.
    pub skipped: u64,
    pub downloaded: u64,
    pub failed: u64,
    pub bytes_written: u64,
}

/// Creates `output_dir` (and parents) if missing, then scans `gedcom_path`.
pub fn process_gedcom_file<F: PhotoFetcher>(
    gedcom_path: &Path,
    output_dir: &Path,
    fetcher: &F,
) -> Result<ScanSummary> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let file =
        File::open(gedcom_path).with_context(|| format!("open {}", gedcom_path.display()))?;
    tracing::info!(
        input = %gedcom_path.display(),
        output_dir = %output_dir.display(),
        "scanning GEDCOM file"
    );
    run_scan(BufReader::new(file), output_dir, fetcher)
}

/// Scans `reader` line by line, fetching each identified photo into `output_dir`.
///
/// `\n`, `\r\n` and a bare `\r` all end a line; blank lines are dropped.
/// Lines that are not valid UTF-8 are decoded lossily. Only a read error on
/// `reader` itself aborts the scan.
pub fn run_scan<R: BufRead, F: PhotoFetcher>(
    mut reader: R,
    output_dir: &Path,
    fetcher: &F,
) -> Result<ScanSummary> {
    let mut scanner = RecordScanner::new();
    let mut summary = ScanSummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0u64;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("read line {}", line_no + 1))?;
        if n == 0 {
            break;
        }
        // A CR-terminated file arrives as one chunk; split it back into lines.
        for raw in buf
            .split(|b| *b == b'\r' || *b == b'\n')
            .filter(|piece| !piece.is_empty())
        {
            line_no += 1;
            let line = String::from_utf8_lossy(raw);
            let event = scanner.step(&line);
            handle_event(event, &scanner, line_no, output_dir, fetcher, &mut summary);
        }
    }

    tracing::info!(
        persons = summary.persons,
        photo_lines = summary.photo_lines,
        skipped = summary.skipped,
        downloaded = summary.downloaded,
        failed = summary.failed,
        bytes = summary.bytes_written,
        "scan finished"
    );
    Ok(summary)
}

fn handle_event<F: PhotoFetcher>(
    event: ScanEvent,
    scanner: &RecordScanner,
    line_no: u64,
    output_dir: &Path,
    fetcher: &F,
    summary: &mut ScanSummary,
) {
    match event {
        ScanEvent::PersonStarted => summary.persons += 1,
        ScanEvent::Photo(photo) => {
            summary.photo_lines += 1;
            let target = photo.target_path(output_dir);
            println!("Downloading {} to {}", photo.url, target.display());
            match fetcher.fetch(&photo.url, &target) {
                Ok(bytes) => {
                    tracing::debug!(
                        url = %photo.url,
                        path = %target.display(),
                        bytes,
                        "photo saved"
                    );
                    summary.downloaded += 1;
                    summary.bytes_written += bytes;
                }
                Err(e) => {
                    // The stderr subscriber already shows the warning below.
                    if !logging::logs_to_stderr() {
                        eprintln!("Error downloading {}: {}", photo.url, e);
                    }
                    tracing::warn!(
                        url = %photo.url,
                        path = %target.display(),
                        kind = e.kind(),
                        "Error downloading {}: {}",
                        photo.url,
                        e
                    );
                    summary.failed += 1;
                }
            }
        }
        ScanEvent::PhotoWithoutNameOrDate { url } => {
            summary.photo_lines += 1;
            summary.skipped += 1;
            tracing::debug!(line = line_no, url = %url, "photo before name and date, skipped");
        }
        ScanEvent::PhotoUnidentified {
            url,
            name_line,
            date_line,
        } => {
            summary.photo_lines += 1;
            summary.skipped += 1;
            tracing::warn!(
                line = line_no,
                record = scanner.current().record.as_deref().unwrap_or("-"),
                url = %url,
                name = %name_line,
                date = %date_line,
                "cannot build identifier from name/date, photo skipped"
            );
        }
        ScanEvent::Ignored => {}
    }
}
