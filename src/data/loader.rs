use std::path::{Path, PathBuf};

use super::error::AggregateError;
use super::model::{ChainQuery, ChainSeries, ChainSet, Diagnostic};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the requested parameter from every chain of `query`.
///
/// Chains are read one after another in ascending index order. A chain whose
/// header lacks the parameter is left out of the result; an unreadable file
/// aborts the whole run.
pub fn aggregate(query: &ChainQuery) -> Result<ChainSet, AggregateError> {
    let count = query.chain_count.get();
    let mut series = Vec::new();
    let mut diagnostics = Vec::new();

    for index in 1..=count {
        let path = chain_file_path(&query.directory, &query.basename, index);
        let text = std::fs::read_to_string(&path).map_err(|source| AggregateError::Read {
            path: path.clone(),
            source,
        })?;

        let parsed = parse_chain(&text, &query.parameter, &path);
        diagnostics.extend(parsed.diagnostics);
        if let Some(values) = parsed.values {
            log::debug!("{}: {} values of '{}'", path.display(), values.len(), query.parameter);
            series.push(ChainSeries { index, values });
        }
    }

    Ok(ChainSet {
        parameter: query.parameter.clone(),
        requested: count,
        series,
        diagnostics,
    })
}

/// `{directory}/{basename}.{index}.txt`
pub fn chain_file_path(directory: &Path, basename: &str, index: usize) -> PathBuf {
    directory.join(format!("{basename}.{index}.txt"))
}

// ---------------------------------------------------------------------------
// Header / row classification
// ---------------------------------------------------------------------------

/// Outcome of looking a parameter up in a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLookup {
    /// Index into the whitespace-split data row.
    Column(usize),
    /// No header token matches.
    NotFound,
    /// Only the leading token matched; the row's last cell is read.
    Last,
}

/// Find the data column of `parameter` in a header line.
///
/// Matching is exact and case-insensitive; the first match wins. Header
/// token `p` maps to data column `p - 1`: Cobaya headers start with a `#`
/// token that has no counterpart in the data rows. A match on the leading
/// token wraps around to the last cell of each row.
pub fn resolve_column(header: &str, parameter: &str) -> ColumnLookup {
    let wanted = parameter.to_lowercase();
    match header
        .split_whitespace()
        .position(|token| token.to_lowercase() == wanted)
    {
        Some(0) => ColumnLookup::Last,
        Some(p) => ColumnLookup::Column(p - 1),
        None => ColumnLookup::NotFound,
    }
}

/// Whether an already-trimmed line is a data row.
///
/// Only the first character decides: it must be an ASCII digit. Rows
/// starting with `-` or `.` are therefore not data.
pub fn is_data_row(trimmed: &str) -> bool {
    trimmed.chars().next().is_some_and(|c| c.is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Single chain parsing
// ---------------------------------------------------------------------------

/// Result of parsing one chain file's contents.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedChain {
    /// `None` when the chain has to be omitted (parameter not resolvable).
    pub values: Option<Vec<f64>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Extract `parameter` from the text of one chain file.
///
/// `path` is only used to label diagnostics.
pub fn parse_chain(text: &str, parameter: &str, path: &Path) -> ParsedChain {
    let mut diagnostics = Vec::new();
    let mut lines = text.lines();

    let Some(header) = lines.next() else {
        report(&mut diagnostics, Diagnostic::MissingHeader { path: path.to_path_buf() });
        return ParsedChain { values: None, diagnostics };
    };

    let lookup = match resolve_column(header, parameter) {
        ColumnLookup::NotFound => {
            report(
                &mut diagnostics,
                Diagnostic::ParameterNotFound {
                    path: path.to_path_buf(),
                    parameter: parameter.to_string(),
                },
            );
            return ParsedChain { values: None, diagnostics };
        }
        found => found,
    };

    let mut values = Vec::new();
    // Header is line 1.
    for (line_number, line) in lines.enumerate().map(|(i, l)| (i + 2, l)) {
        let line = line.trim();
        if !is_data_row(line) {
            continue;
        }
        let mut cells = line.split_whitespace();
        let cell = match lookup {
            ColumnLookup::Column(c) => cells.nth(c),
            _ => cells.last(),
        };
        match cell.and_then(|cell| cell.parse::<f64>().ok()) {
            Some(v) => values.push(v),
            None => report(
                &mut diagnostics,
                Diagnostic::UnparsableRow {
                    path: path.to_path_buf(),
                    line_number,
                    line: line.to_string(),
                },
            ),
        }
    }

    ParsedChain {
        values: Some(values),
        diagnostics,
    }
}

fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    log::warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}
