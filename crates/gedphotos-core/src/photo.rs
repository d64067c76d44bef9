//! Photo references and their local filenames.

use crate::person_id::PersonId;
use std::path::{Path, PathBuf};

const PHOTO_EXTENSION: &str = "jpg";

/// A photo to fetch: source URL and the file it is saved as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoReference {
    pub url: String,
    pub person: PersonId,
    /// 1-based position of this photo within the person's record.
    pub seq: u32,
}

impl PhotoReference {
    /// `<identifier>_<seq:02>.jpg`. Sequences above 99 widen rather than wrap.
    pub fn filename(&self) -> String {
        format!("{}_{:02}.{}", self.person, self.seq, PHOTO_EXTENSION)
    }

    pub fn target_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person_id::build_identifier;

    fn john() -> PersonId {
        build_identifier("1 NAME John /Smith/", "2 DATE 15 Jan 1980").unwrap()
    }

    #[test]
    fn filename_zero_pads_sequence() {
        let p = PhotoReference {
            url: "http://example.com/a.jpg".to_string(),
            person: john(),
            seq: 1,
        };
        assert_eq!(p.filename(), "1980-01-15_john_smith_01.jpg");
        assert_eq!(
            p.target_path(Path::new("photos")),
            PathBuf::from("photos/1980-01-15_john_smith_01.jpg")
        );
    }

    #[test]
    fn filename_ignores_url_extension() {
        let p = PhotoReference {
            url: "http://example.com/scan.png".to_string(),
            person: john(),
            seq: 12,
        };
        assert_eq!(p.filename(), "1980-01-15_john_smith_12.jpg");
    }

    #[test]
    fn filename_three_digit_sequence() {
        let p = PhotoReference {
            url: String::new(),
            person: john(),
            seq: 100,
        };
        assert_eq!(p.filename(), "1980-01-15_john_smith_100.jpg");
    }
}
