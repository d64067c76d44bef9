//! Record scanner: walks GEDCOM lines and decides which photos to fetch.
//!
//! [`RecordScanner::step`] is pure: it updates the current [`PersonContext`]
//! and returns a [`ScanEvent`] for photo lines, without touching the network
//! or the filesystem. [`run_scan`] feeds it lines and performs the fetches.

mod run;

pub use run::{process_gedcom_file, run_scan, ScanSummary};

use crate::gedcom::GedcomLine;
use crate::person_id::build_identifier;
use crate::photo::PhotoReference;

/// What the scanner knows about the person record currently being read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonContext {
    /// The `0 @I..@ INDI` line that opened this record (None before the first record).
    pub record: Option<String>,
    pub name_line: Option<String>,
    pub date_line: Option<String>,
    /// Photos numbered so far for this person.
    pub photo_count: u32,
}

/// Coarse per-person state; photos download only in `HaveNameAndDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonState {
    Idle,
    HaveName,
    HaveDate,
    HaveNameAndDate,
}

impl PersonContext {
    fn for_record(line: &str) -> Self {
        Self {
            record: Some(line.to_string()),
            ..Self::default()
        }
    }

    pub fn state(&self) -> PersonState {
        match (&self.name_line, &self.date_line) {
            (Some(_), Some(_)) => PersonState::HaveNameAndDate,
            (Some(_), None) => PersonState::HaveName,
            (None, Some(_)) => PersonState::HaveDate,
            (None, None) => PersonState::Idle,
        }
    }
}

/// Outcome of feeding one line to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A new person record began.
    PersonStarted,
    /// Photo line with a usable identifier: fetch it.
    Photo(PhotoReference),
    /// Photo line seen before both name and date were captured.
    PhotoWithoutNameOrDate { url: String },
    /// Photo line whose name or date line did not parse.
    PhotoUnidentified {
        url: String,
        name_line: String,
        date_line: String,
    },
    /// Name/date captured, or a line the scan does not care about.
    Ignored,
}

/// Line-by-line state machine over a GEDCOM file.
#[derive(Debug, Default)]
pub struct RecordScanner {
    current: PersonContext,
}

impl RecordScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &PersonContext {
        &self.current
    }

    /// Processes one raw line (surrounding whitespace is trimmed here).
    pub fn step(&mut self, raw: &str) -> ScanEvent {
        match GedcomLine::classify(raw.trim()) {
            GedcomLine::PersonStart(line) => {
                self.current = PersonContext::for_record(line);
                ScanEvent::PersonStarted
            }
            GedcomLine::Name(line) => {
                self.current.name_line = Some(line.to_string());
                ScanEvent::Ignored
            }
            GedcomLine::Date(line) => {
                self.current.date_line = Some(line.to_string());
                ScanEvent::Ignored
            }
            GedcomLine::File(url) => self.photo(url),
            GedcomLine::Other => ScanEvent::Ignored,
        }
    }

    fn photo(&mut self, url: &str) -> ScanEvent {
        let (name_line, date_line) = match (&self.current.name_line, &self.current.date_line) {
            (Some(n), Some(d)) => (n, d),
            _ => {
                return ScanEvent::PhotoWithoutNameOrDate {
                    url: url.to_string(),
                }
            }
        };
        match build_identifier(name_line, date_line) {
            Some(person) => {
                self.current.photo_count += 1;
                ScanEvent::Photo(PhotoReference {
                    url: url.to_string(),
                    person,
                    seq: self.current.photo_count,
                })
            }
            None => ScanEvent::PhotoUnidentified {
                url: url.to_string(),
                name_line: name_line.clone(),
                date_line: date_line.clone(),
            },
        }
    }
}
