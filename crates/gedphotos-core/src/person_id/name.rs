//! `1 NAME` line parsing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Given names followed by a space, then the surname between slashes.
/// Both groups are lazy so the first `/.../` pair wins.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^1 NAME (.*?) /(.*?)/").expect("valid NAME regex")
});

/// Name fields extracted from a `1 NAME` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    /// Given-name parts in order, split on whitespace.
    pub given: Vec<String>,
    pub surname: String,
}

/// Parses `1 NAME <given> /<surname>/`. Returns `None` when the line does not match.
///
/// A name with no given part still needs the space before the first slash
/// (`1 NAME  /Smith/`); `1 NAME /Smith/` does not match.
pub fn parse_name_line(line: &str) -> Option<PersonName> {
    let caps = NAME_RE.captures(line)?;
    let given = caps.get(1)?.as_str().trim();
    let surname = caps.get(2)?.as_str().trim();
    Some(PersonName {
        given: given.split_whitespace().map(str::to_string).collect(),
        surname: surname.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name() {
        let n = parse_name_line("1 NAME John /Smith/").unwrap();
        assert_eq!(n.given, vec!["John"]);
        assert_eq!(n.surname, "Smith");
    }

    #[test]
    fn multiple_given_names() {
        let n = parse_name_line("1 NAME Mary  Anne Louise /O'Brien/").unwrap();
        assert_eq!(n.given, vec!["Mary", "Anne", "Louise"]);
        assert_eq!(n.surname, "O'Brien");
    }

    #[test]
    fn suffix_after_surname_is_ignored() {
        let n = parse_name_line("1 NAME John /Smith/ Jr.").unwrap();
        assert_eq!(n.given, vec!["John"]);
        assert_eq!(n.surname, "Smith");
    }

    #[test]
    fn surname_is_trimmed_and_may_be_empty() {
        let n = parse_name_line("1 NAME John / Smith /").unwrap();
        assert_eq!(n.surname, "Smith");
        let n = parse_name_line("1 NAME John //").unwrap();
        assert_eq!(n.surname, "");
    }

    #[test]
    fn missing_surname_delimiters() {
        assert!(parse_name_line("1 NAME John Smith").is_none());
        assert!(parse_name_line("1 NAME John /Smith").is_none());
    }

    #[test]
    fn surname_only_needs_leading_space() {
        assert!(parse_name_line("1 NAME /Smith/").is_none());
        let n = parse_name_line("1 NAME  /Smith/").unwrap();
        assert!(n.given.is_empty());
        assert_eq!(n.surname, "Smith");
    }

    #[test]
    fn wrong_prefix() {
        assert!(parse_name_line("2 NAME John /Smith/").is_none());
        assert!(parse_name_line("").is_none());
    }
}
