//! Person identifier derivation.
//!
//! Combines a `2 DATE` birth date and a `1 NAME` line into a stable,
//! filesystem-safe string such as `1980-01-15_john_smith`.

mod date;
mod name;
mod sanitize;

pub use date::{month_number, parse_date_line, BirthDate};
pub use name::{parse_name_line, PersonName};
pub use sanitize::normalize_name_part;

use std::fmt;

/// Identifier of the form `<YYYY-MM-DD>_<given parts>_<surname>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonId(String);

impl PersonId {
    /// Builds the identifier from already-parsed fields.
    pub fn from_parts(name: &PersonName, date: &BirthDate) -> Self {
        let mut parts: Vec<&str> = name.given.iter().map(String::as_str).collect();
        parts.push(&name.surname);
        let name_part = normalize_name_part(&parts.join("_"));
        PersonId(format!("{}_{}", date, name_part))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the identifier from raw `1 NAME` and `2 DATE` lines.
///
/// Returns `None` if either line fails to parse; never panics on malformed input.
///
/// # Examples
///
/// - `build_identifier("1 NAME John /Smith/", "2 DATE 15 Jan 1980")` → `1980-01-15_john_smith`
/// - `build_identifier("1 NAME John Smith", "2 DATE 15 Jan 1980")` → `None`
pub fn build_identifier(name_line: &str, date_line: &str) -> Option<PersonId> {
    let name = parse_name_line(name_line)?;
    let date = parse_date_line(date_line)?;
    Some(PersonId::from_parts(&name, &date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_basic_identifier() {
        let id = build_identifier("1 NAME John /Smith/", "2 DATE 15 Jan 1980").unwrap();
        assert_eq!(id.as_str(), "1980-01-15_john_smith");
    }

    #[test]
    fn is_deterministic() {
        let a = build_identifier("1 NAME Ada /Lovelace/", "2 DATE 10 DEC 1815");
        let b = build_identifier("1 NAME Ada /Lovelace/", "2 DATE 10 DEC 1815");
        assert_eq!(a, b);
        assert_eq!(a.unwrap().to_string(), "1815-12-10_ada_lovelace");
    }

    #[test]
    fn multiple_given_names_joined() {
        let id = build_identifier("1 NAME Mary Anne /Jones/", "2 DATE 2 Feb 1902").unwrap();
        assert_eq!(id.as_str(), "1902-02-02_mary_anne_jones");
    }

    #[test]
    fn punctuation_and_diacritics_stripped() {
        let id =
            build_identifier("1 NAME Jean-Luc /D'Arcy/", "2 DATE 5 May 1950").unwrap();
        assert_eq!(id.as_str(), "1950-05-05_jeanluc_darcy");
        let id = build_identifier("1 NAME José /Núñez/", "2 DATE 5 May 1950").unwrap();
        assert_eq!(id.as_str(), "1950-05-05_jos_nez");
    }

    #[test]
    fn empty_surname_leaves_trailing_underscore() {
        let id = build_identifier("1 NAME Cher //", "2 DATE 20 May 1946").unwrap();
        assert_eq!(id.as_str(), "1946-05-20_cher_");
    }

    #[test]
    fn long_day_digits_pass_through() {
        let id = build_identifier("1 NAME John /Smith/", "2 DATE 99999999999 Jan 1980").unwrap();
        assert_eq!(id.as_str(), "1980-01-99999999999_john_smith");
    }

    #[test]
    fn malformed_name_yields_none() {
        assert!(build_identifier("1 NAME John Smith", "2 DATE 15 Jan 1980").is_none());
    }

    #[test]
    fn malformed_date_yields_none() {
        assert!(build_identifier("1 NAME John /Smith/", "2 DATE ABT 1980").is_none());
        assert!(build_identifier("1 NAME John /Smith/", "2 DATE 15 Foo 1980").is_none());
    }
}
