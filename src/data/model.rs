use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ChainQuery – what to load
// ---------------------------------------------------------------------------

/// Everything the loader needs for one run, decoupled from the UI widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainQuery {
    /// Directory holding the chain files.
    pub directory: PathBuf,
    /// Base name; chain `i` lives in `{basename}.{i}.txt`.
    pub basename: String,
    /// Column to extract, matched case-insensitively against the header.
    pub parameter: String,
    /// Number of chains, read as indices `1..=chain_count`.
    pub chain_count: NonZeroUsize,
}

// ---------------------------------------------------------------------------
// ChainSeries – one chain's values
// ---------------------------------------------------------------------------

/// The values of the requested parameter for a single chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSeries {
    /// 1-based chain index taken from the file name.
    pub index: usize,
    /// Parameter values in file line order.
    pub values: Vec<f64>,
}

impl ChainSeries {
    /// Display label, e.g. `Chain 3`.
    pub fn label(&self) -> String {
        chain_label(self.index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub fn chain_label(index: usize) -> String {
    format!("Chain {index}")
}

// ---------------------------------------------------------------------------
// Diagnostic – recoverable problems met while loading
// ---------------------------------------------------------------------------

/// A non-fatal event. The affected chain or row is left out of the result.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The header has no token matching the parameter; the chain is omitted.
    ParameterNotFound { path: PathBuf, parameter: String },
    /// The file is empty, so there is no header to search.
    MissingHeader { path: PathBuf },
    /// A data row whose target cell is missing or not a number.
    UnparsableRow {
        path: PathBuf,
        /// 1-based line number within the file.
        line_number: usize,
        line: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ParameterNotFound { path, parameter } => write!(
                f,
                "Parameter '{parameter}' not found in file {}.",
                path.display()
            ),
            Diagnostic::MissingHeader { path } => {
                write!(f, "File {} has no header line.", path.display())
            }
            Diagnostic::UnparsableRow {
                path,
                line_number,
                line,
            } => write!(
                f,
                "Skipping line due to conversion error: {line} ({}:{line_number})",
                path.display()
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// ChainSet – the complete result of one run
// ---------------------------------------------------------------------------

/// All chains loaded for one query, in ascending chain index order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSet {
    /// Parameter the values belong to (as requested, used for axis labels).
    pub parameter: String,
    /// Chain count that was asked for; may exceed `series.len()`.
    pub requested: usize,
    /// One entry per chain whose header contained the parameter.
    pub series: Vec<ChainSeries>,
    /// Recoverable problems, in the order they were met.
    pub diagnostics: Vec<Diagnostic>,
}

impl ChainSet {
    /// Look up a series by its label (`"Chain 2"`).
    pub fn get(&self, label: &str) -> Option<&ChainSeries> {
        self.series.iter().find(|s| s.label() == label)
    }

    /// Labels in display order.
    pub fn labels(&self) -> Vec<String> {
        self.series.iter().map(ChainSeries::label).collect()
    }

    /// Number of chains that produced a series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of samples across all chains.
    pub fn total_samples(&self) -> usize {
        self.series.iter().map(ChainSeries::len).sum()
    }
}
