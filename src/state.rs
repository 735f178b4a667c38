use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::data::loader;
use crate::data::model::{ChainQuery, ChainSet};

// ---------------------------------------------------------------------------
// Input form
// ---------------------------------------------------------------------------

/// Raw text of the four form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainForm {
    pub directory: String,
    pub basename: String,
    pub chain_count: String,
    pub parameter: String,
}

impl Default for ChainForm {
    fn default() -> Self {
        Self {
            directory: String::new(),
            basename: "test".to_string(),
            chain_count: "8".to_string(),
            parameter: "chi2".to_string(),
        }
    }
}

/// Form input that cannot be turned into a [`ChainQuery`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a valid number of chains (got '{0}').")]
    InvalidChainCount(String),
}

impl ChainForm {
    /// Validate the fields into a query. The directory is used verbatim;
    /// the other fields are trimmed.
    pub fn to_query(&self) -> Result<ChainQuery, FormError> {
        let count_text = self.chain_count.trim();
        let chain_count = count_text
            .parse::<NonZeroUsize>()
            .map_err(|_| FormError::InvalidChainCount(count_text.to_string()))?;

        Ok(ChainQuery {
            directory: PathBuf::from(&self.directory),
            basename: self.basename.trim().to_string(),
            parameter: self.parameter.trim().to_string(),
            chain_count,
        })
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Debug, Default)]
pub struct AppState {
    /// Form field contents.
    pub form: ChainForm,

    /// Chains from the last successful run (None until the first plot).
    pub chains: Option<ChainSet>,

    /// Error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Put a picked directory into the form.
    pub fn set_directory(&mut self, path: &Path) {
        self.form.directory = path.display().to_string();
    }

    /// Validate the form, load the chains and keep the result for plotting.
    ///
    /// On failure the previous plot is cleared and the error is shown.
    pub fn plot_chains(&mut self) {
        let query = match self.form.to_query() {
            Ok(q) => q,
            Err(e) => {
                log::error!("{e}");
                self.status_message = Some(e.to_string());
                return;
            }
        };

        match loader::aggregate(&query) {
            Ok(set) => {
                log::info!(
                    "Loaded '{}' from {} of {} chains ({} samples)",
                    set.parameter,
                    set.len(),
                    set.requested,
                    set.total_samples()
                );
                self.chains = Some(set);
                self.status_message = None;
            }
            Err(e) => {
                let err = anyhow::Error::new(e);
                log::error!("Failed to load chains: {err:#}");
                self.status_message = Some(format!("Error: {err:#}"));
                self.chains = None;
            }
        }
    }

    /// Recoverable problems of the last run.
    pub fn diagnostic_count(&self) -> usize {
        self.chains.as_ref().map_or(0, |c| c.diagnostics.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(count: &str) -> ChainForm {
        ChainForm {
            chain_count: count.to_string(),
            ..ChainForm::default()
        }
    }

    #[test]
    fn defaults_match_cobaya_test_run() {
        let f = ChainForm::default();
        assert_eq!(f.basename, "test");
        assert_eq!(f.chain_count, "8");
        assert_eq!(f.parameter, "chi2");
        assert!(f.directory.is_empty());
    }

    #[test]
    fn to_query_trims_fields() {
        let f = ChainForm {
            directory: "/runs".to_string(),
            basename: " test ".to_string(),
            chain_count: " 4\n".to_string(),
            parameter: " H0 ".to_string(),
        };
        let q = f.to_query().expect("valid form");
        assert_eq!(q.directory, PathBuf::from("/runs"));
        assert_eq!(q.basename, "test");
        assert_eq!(q.parameter, "H0");
        assert_eq!(q.chain_count.get(), 4);
    }

    #[test]
    fn to_query_rejects_non_numeric_and_zero_counts() {
        assert_eq!(
            form("eight").to_query(),
            Err(FormError::InvalidChainCount("eight".to_string()))
        );
        assert!(form("0").to_query().is_err());
        assert!(form("-2").to_query().is_err());
        assert!(form("").to_query().is_err());
    }

    #[test]
    fn plot_chains_stores_result() {
        let dir = tempfile::tempdir().expect("tempdir");
        for i in 1..=2 {
            std::fs::write(
                dir.path().join(format!("test.{i}.txt")),
                "# weight minuslogpost chi2\n1 1.0 2.0\n1 1.5 3.0\n",
            )
            .expect("write chain");
        }

        let mut state = AppState::default();
        state.set_directory(dir.path());
        state.form.chain_count = "2".to_string();
        state.plot_chains();

        let chains = state.chains.as_ref().expect("chains loaded");
        assert_eq!(chains.labels(), vec!["Chain 1", "Chain 2"]);
        assert!(state.status_message.is_none());
        assert_eq!(state.diagnostic_count(), 0);
    }

    #[test]
    fn plot_chains_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = AppState::default();
        state.set_directory(dir.path());
        state.plot_chains();

        assert!(state.chains.is_none());
        let msg = state.status_message.expect("error shown");
        assert!(msg.contains("test.1.txt"), "{msg}");
    }

    #[test]
    fn plot_chains_rejects_bad_count_without_loading() {
        let mut state = AppState::default();
        state.form.chain_count = "many".to_string();
        state.plot_chains();

        assert!(state.chains.is_none());
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("valid number of chains")));
    }
}
