//! Line-oriented input parsing.
//!
//! A line that fails to parse never aborts the run: it becomes a
//! [`ParseIssue`] carrying its line number and processing continues with the
//! remaining lines. Blank lines are skipped silently.

use std::io::BufRead;

use serde::Serialize;

use super::Level;
use crate::error::Result;

/// One input line: a sequence of levels plus its 1-based source line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub line: usize,
    pub levels: Vec<Level>,
}

/// A line that could not be parsed. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseIssue {
    pub line: usize,
    pub token: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ParsedReports {
    pub reports: Vec<Report>,
    pub issues: Vec<ParseIssue>,
}

/// Two equal-length columns collected from two-token lines.
#[derive(Debug, Default)]
pub struct ParsedPairs {
    pub left: Vec<Level>,
    pub right: Vec<Level>,
    pub issues: Vec<ParseIssue>,
}

impl ParsedPairs {
    #[must_use]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Parse each non-empty line as a whitespace-separated sequence of levels.
pub fn parse_reports<R: BufRead>(reader: R) -> Result<ParsedReports> {
    let mut parsed = ParsedReports::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let line_no = idx + 1;
        match parse_levels(text, line_no) {
            Ok(levels) => parsed.reports.push(Report {
                line: line_no,
                levels,
            }),
            Err(issue) => parsed.issues.push(issue),
        }
    }

    Ok(parsed)
}

/// Parse each non-empty line as exactly two levels, one per column.
pub fn parse_pairs<R: BufRead>(reader: R) -> Result<ParsedPairs> {
    let mut parsed = ParsedPairs::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let line_no = idx + 1;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != 2 {
            parsed.issues.push(ParseIssue {
                line: line_no,
                token: text.to_string(),
                message: format!("expected 2 fields, found {}", tokens.len()),
            });
            continue;
        }

        match (parse_level(tokens[0], line_no), parse_level(tokens[1], line_no)) {
            (Ok(left), Ok(right)) => {
                parsed.left.push(left);
                parsed.right.push(right);
            }
            (Err(issue), _) | (_, Err(issue)) => parsed.issues.push(issue),
        }
    }

    Ok(parsed)
}

fn parse_levels(text: &str, line: usize) -> std::result::Result<Vec<Level>, ParseIssue> {
    text.split_whitespace()
        .map(|token| parse_level(token, line))
        .collect()
}

fn parse_level(token: &str, line: usize) -> std::result::Result<Level, ParseIssue> {
    token.parse::<Level>().map_err(|err| ParseIssue {
        line,
        token: token.to_string(),
        message: err.to_string(),
    })
}
