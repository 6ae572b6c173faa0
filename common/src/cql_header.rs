//! Reading and rewriting the `library <name> version '<version>'` declaration
//! at the top of a CQL document.
//!
//! The structured name and version of a record are authoritative. Before a
//! save the declaration is brought in line with them and the caller is told
//! whether anything had to change.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^library\s+("[^"]+"|[^\s"]+)(?:\s+version\s+'([^']*)')?"#)
        .expect("library header pattern compiles")
});

/// The library declaration found in a CQL document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CqlHeader {
    pub name: String,
    pub version: Option<String>,
    /// Byte range of the declaration line, without its line terminator.
    pub line: Range<usize>,
}

impl CqlHeader {
    /// Finds the declaration. Only blank lines and comments may precede it;
    /// a document whose first statement is something else has no header.
    pub fn parse(cql: &str) -> Option<CqlHeader> {
        let mut offset = 0;
        let mut in_block_comment = false;

        for raw in cql.split_inclusive('\n') {
            let start = offset;
            offset += raw.len();
            let content = raw.trim_end_matches(['\n', '\r']);
            let trimmed = content.trim();

            if in_block_comment {
                if trimmed.contains("*/") {
                    in_block_comment = false;
                }
                continue;
            }
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }
            if trimmed.starts_with("/*") {
                in_block_comment = !trimmed.contains("*/");
                continue;
            }

            let captures = HEADER_RE.captures(trimmed)?;
            let name = captures.get(1)?.as_str().trim_matches('"').to_string();
            let version = captures.get(2).map(|m| m.as_str().to_string());
            return Some(CqlHeader {
                name,
                version,
                line: start..start + content.len(),
            });
        }
        None
    }
}

/// Outcome of [`synchronize_header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSync {
    pub cql: String,
    pub overwritten: bool,
}

/// Rewrites the declaration so it names `name` and, when given, `version`.
///
/// With `version` set to `None` the version already in the declaration is
/// kept. Documents without a declaration are returned untouched.
pub fn synchronize_header(cql: &str, name: &str, version: Option<&str>) -> HeaderSync {
    let unchanged = || HeaderSync {
        cql: cql.to_string(),
        overwritten: false,
    };

    let Some(header) = CqlHeader::parse(cql) else {
        return unchanged();
    };

    let name_differs = header.name != name;
    let version_differs = version.is_some_and(|v| header.version.as_deref() != Some(v));
    if !name_differs && !version_differs {
        return unchanged();
    }

    let declaration = match version.or(header.version.as_deref()) {
        Some(v) => format!("library {name} version '{v}'"),
        None => format!("library {name}"),
    };

    let mut rewritten = String::with_capacity(cql.len() + declaration.len());
    rewritten.push_str(&cql[..header.line.start]);
    rewritten.push_str(&declaration);
    rewritten.push_str(&cql[header.line.end..]);

    HeaderSync {
        cql: rewritten,
        overwritten: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_version() {
        let header = CqlHeader::parse("library TestCql version '1.0.000'\nusing FHIR version '4.0.1'").unwrap();
        assert_eq!(header.name, "TestCql");
        assert_eq!(header.version.as_deref(), Some("1.0.000"));
        assert_eq!(header.line, 0..33);
    }

    #[test]
    fn skips_comments_before_the_declaration() {
        let cql = "// generated\n/* multi\n line */\n\n  library \"Quoted\" version '2'\n";
        let header = CqlHeader::parse(cql).unwrap();
        assert_eq!(header.name, "Quoted");
        assert_eq!(header.version.as_deref(), Some("2"));
        assert_eq!(&cql[header.line.clone()], "  library \"Quoted\" version '2'");
    }

    #[test]
    fn no_header_when_first_statement_is_not_a_declaration() {
        assert_eq!(CqlHeader::parse(""), None);
        assert_eq!(CqlHeader::parse("some cql string"), None);
        assert_eq!(CqlHeader::parse("using QICore version '4.1.1'\nlibrary Late"), None);
    }

    #[test]
    fn malformed_version_clause_is_ignored() {
        let header = CqlHeader::parse("library UpdatedNameTets versionsszz '0.0.000'").unwrap();
        assert_eq!(header.name, "UpdatedNameTets");
        assert_eq!(header.version, None);
    }

    #[test]
    fn rewrites_whole_line_when_name_differs() {
        let synced = synchronize_header(
            "library UpdatedNameTets versionsszz '0.0.000'\ndefine X: 1",
            "UpdatedName1",
            Some("1.0.000"),
        );
        assert!(synced.overwritten);
        assert_eq!(synced.cql, "library UpdatedName1 version '1.0.000'\ndefine X: 1");
    }

    #[test]
    fn rewrites_version_only() {
        let synced = synchronize_header("library Lib version '0.0.000'\r\nx", "Lib", Some("1.2.000"));
        assert!(synced.overwritten);
        assert_eq!(synced.cql, "library Lib version '1.2.000'\r\nx");
    }

    #[test]
    fn keeps_header_version_when_none_is_authoritative() {
        let synced = synchronize_header("library Old version '0.1.000'", "New", None);
        assert!(synced.overwritten);
        assert_eq!(synced.cql, "library New version '0.1.000'");

        let synced = synchronize_header("library Old", "New", None);
        assert_eq!(synced.cql, "library New");
    }

    #[test]
    fn matching_header_is_left_alone() {
        let cql = "library Library1 version '1.0.000'\n";
        let synced = synchronize_header(cql, "Library1", Some("1.0.000"));
        assert_eq!(synced, HeaderSync { cql: cql.to_string(), overwritten: false });

        let synced = synchronize_header(cql, "Library1", None);
        assert!(!synced.overwritten);
    }

    #[test]
    fn text_without_header_is_untouched() {
        let synced = synchronize_header("define X: 1", "Lib", Some("1.0.000"));
        assert_eq!(synced.cql, "define X: 1");
        assert!(!synced.overwritten);
    }
}
