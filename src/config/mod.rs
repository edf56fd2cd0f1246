mod document;
mod host;

use std::path::{Path, PathBuf};

pub use host::HostEntry;

use document::ConfigDocument;

/// Config file looked up under the project root when `--config` is absent.
pub const DEFAULT_FILE_NAME: &str = "entitlements.kdl";

/// Top-level configuration loaded from a KDL file.
#[derive(Debug, Default)]
pub struct Config {
    /// Project name from the `name` node; `None` when the file omits it.
    pub project_name: Option<String>,
    /// Hosts from the `universal-links` block, in document order.
    pub hosts: Vec<HostEntry>,
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    ParseError(String),
    #[error("invalid config: {0}")]
    ValidationError(String),
}

impl Config {
    /// Load a config from a KDL file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let doc = ConfigDocument::load(path)?;
        Self::from_document(&doc)
    }

    /// Parse a KDL string into a Config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc = ConfigDocument::parse(content)?;
        Self::from_document(&doc)
    }

    /// Default config location for a project root.
    pub fn default_path(project_root: &Path) -> PathBuf {
        project_root.join(DEFAULT_FILE_NAME)
    }

    fn from_document(doc: &ConfigDocument) -> Result<Self, ConfigError> {
        Ok(Config {
            project_name: parse_project_name(doc)?,
            hosts: host::parse_hosts(doc)?,
        })
    }
}

/// Read the single `name "…"` node at the top level.
fn parse_project_name(doc: &ConfigDocument) -> Result<Option<String>, ConfigError> {
    let nodes = doc.top_level("name");
    let node = match nodes.as_slice() {
        [] => return Ok(None),
        [node] => node,
        [_, second, ..] => {
            return Err(ConfigError::ValidationError(format!(
                "line {}: name is declared more than once",
                second.line()
            )))
        }
    };

    let line = node.line();
    let name = match node.string_values().as_slice() {
        [name] if node.entry_count() == 1 => name.to_string(),
        _ => {
            return Err(ConfigError::ValidationError(format!(
                "line {line}: name takes exactly one string"
            )))
        }
    };
    check_project_name(&name)
        .map_err(|problem| ConfigError::ValidationError(format!("line {line}: name {problem}")))?;
    Ok(Some(name))
}

/// Check that a project name is a single directory component.
///
/// The name becomes `platforms/ios/<name>`, so anything that would move the
/// output outside that directory is rejected. Returns a description of the
/// problem on failure.
pub fn check_project_name(name: &str) -> Result<(), String> {
    let problem = if name.trim().is_empty() {
        "must not be empty"
    } else if name == "." || name == ".." {
        "must not be '.' or '..'"
    } else if name.contains(['/', '\\']) {
        "must not contain path separators"
    } else if Path::new(name).is_absolute() {
        "must not be an absolute path"
    } else {
        return Ok(());
    };
    Err(format!("'{name}' {problem}"))
}
