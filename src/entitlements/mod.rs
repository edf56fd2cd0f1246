mod document;
mod domains;

use std::path::{Path, PathBuf};

use plist::Dictionary;
use serde::Serialize;

use crate::config::HostEntry;
use document::Loaded;

pub use domains::{associated_domains, merge_associated_domains, ASSOCIATED_DOMAINS_KEY};

/// Errors raised while producing entitlements files.
#[derive(Debug, thiserror::Error)]
pub enum EntitlementsError {
    #[error("refusing to overwrite malformed entitlements file {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
    #[error("failed to serialize entitlements for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What happened to one entitlements file during a run.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileState {
    /// No file existed; a new one was written.
    Created,
    /// An existing dictionary was merged and rewritten.
    Updated,
    /// An unreadable or malformed file was replaced.
    Recovered,
}

/// Outcome for a single target file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub state: FileState,
}

/// Outcome of a [`EntitlementsGenerator::generate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub associated_domains: Vec<String>,
    pub debug: FileReport,
    pub release: FileReport,
}

/// Writes the debug and release entitlements files for one iOS project.
///
/// Target paths are derived once from the project root and name:
/// `<root>/platforms/ios/<name>/Entitlements-{Debug,Release}.plist`.
#[derive(Debug, Clone)]
pub struct EntitlementsGenerator {
    debug_path: PathBuf,
    release_path: PathBuf,
    strict: bool,
}

impl EntitlementsGenerator {
    pub fn new(project_root: &Path, project_name: &str) -> Self {
        let dir = project_root.join("platforms").join("ios").join(project_name);
        Self {
            debug_path: dir.join("Entitlements-Debug.plist"),
            release_path: dir.join("Entitlements-Release.plist"),
            strict: false,
        }
    }

    /// Fail on a malformed existing file instead of replacing it.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn debug_path(&self) -> &Path {
        &self.debug_path
    }

    pub fn release_path(&self) -> &Path {
        &self.release_path
    }

    /// Merge the associated domains for `hosts` into both entitlements files.
    ///
    /// Both documents are loaded and merged before anything is written, so a
    /// strict-mode failure on either file leaves both untouched. Write errors
    /// are returned as-is; nothing is retried.
    pub fn generate(&self, hosts: &[HostEntry]) -> Result<GenerateReport, EntitlementsError> {
        let domains = associated_domains(hosts);
        tracing::debug!(count = domains.len(), "computed associated domains");

        let (debug_doc, debug_state) = self.prepare(&self.debug_path, &domains)?;
        let (release_doc, release_state) = self.prepare(&self.release_path, &domains)?;

        document::store(&self.debug_path, &debug_doc)?;
        tracing::info!(path = %self.debug_path.display(), state = ?debug_state, "wrote debug entitlements");
        document::store(&self.release_path, &release_doc)?;
        tracing::info!(path = %self.release_path.display(), state = ?release_state, "wrote release entitlements");

        Ok(GenerateReport {
            associated_domains: domains,
            debug: FileReport {
                path: self.debug_path.clone(),
                state: debug_state,
            },
            release: FileReport {
                path: self.release_path.clone(),
                state: release_state,
            },
        })
    }

    fn prepare(
        &self,
        path: &Path,
        domains: &[String],
    ) -> Result<(Dictionary, FileState), EntitlementsError> {
        let (start, state) = match document::load(path) {
            Loaded::Missing => (Dictionary::new(), FileState::Created),
            Loaded::Existing(doc) => (doc, FileState::Updated),
            Loaded::Malformed(reason) if self.strict => {
                return Err(EntitlementsError::Malformed {
                    path: path.to_path_buf(),
                    reason,
                })
            }
            Loaded::Malformed(reason) => {
                tracing::warn!(
                    path = %path.display(),
                    %reason,
                    "existing entitlements file is malformed; replacing it"
                );
                (Dictionary::new(), FileState::Recovered)
            }
        };
        Ok((merge_associated_domains(start, domains), state))
    }
}
