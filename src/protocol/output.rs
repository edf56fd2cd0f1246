use serde::Serialize;

use crate::entitlements::{FileReport, GenerateReport};

/// The report printed on stdout after the hook runs.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HookOutput {
    /// Both entitlements files were written.
    #[serde(rename_all = "camelCase")]
    Written {
        project_name: String,
        associated_domains: Vec<String>,
        debug: FileReport,
        release: FileReport,
    },
    /// Nothing was done for this build.
    Skipped { reason: String },
}

impl HookOutput {
    pub fn written(project_name: impl Into<String>, report: GenerateReport) -> Self {
        HookOutput::Written {
            project_name: project_name.into(),
            associated_domains: report.associated_domains,
            debug: report.debug,
            release: report.release,
        }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        HookOutput::Skipped {
            reason: reason.into(),
        }
    }
}
