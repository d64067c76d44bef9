//! GEDCOM line classification.
//!
//! Only four line shapes matter to the photo scan; everything else is
//! [`GedcomLine::Other`]. Matching is purely by fixed textual prefix, the
//! level/tag structure of the file is not validated.

const PERSON_PREFIX: &str = "0 @I";
const PERSON_TOKEN: &str = " INDI";
const NAME_PREFIX: &str = "1 NAME ";
const DATE_PREFIX: &str = "2 DATE ";
const FILE_PREFIX: &str = "2 FILE ";

/// A trimmed input line, classified by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GedcomLine<'a> {
    /// `0 @I...@ INDI`: start of a new person record.
    PersonStart(&'a str),
    /// `1 NAME ...`: the whole line, kept verbatim.
    Name(&'a str),
    /// `2 DATE ...`: the whole line, kept verbatim.
    Date(&'a str),
    /// `2 FILE <url>`: the URL after the prefix.
    File(&'a str),
    Other,
}

impl<'a> GedcomLine<'a> {
    /// Classify a line. The caller is expected to have trimmed it already.
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with(PERSON_PREFIX) && line.contains(PERSON_TOKEN) {
            GedcomLine::PersonStart(line)
        } else if line.starts_with(NAME_PREFIX) {
            GedcomLine::Name(line)
        } else if line.starts_with(DATE_PREFIX) {
            GedcomLine::Date(line)
        } else if let Some(url) = line.strip_prefix(FILE_PREFIX) {
            GedcomLine::File(url)
        } else {
            GedcomLine::Other
        }
    }
}
