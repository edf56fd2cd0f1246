//! Host entries declared in the `universal-links` block.

use super::document::ConfigDocument;
use super::ConfigError;

/// KDL section holding the host list.
pub(super) const SECTION: &str = "universal-links";

/// A single domain to declare as an associated domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub name: String,
    /// 1-based line in the config file; 0 for entries built in code.
    pub line: usize,
}

impl HostEntry {
    /// Build a host entry not backed by a config file.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line: 0,
        }
    }
}

/// Collect host entries from the `universal-links` block in document order.
///
/// A missing block yields an empty list. Each `host` node contributes one
/// entry per string argument, so `host "a.com" "b.com"` is two hosts.
pub(super) fn parse_hosts(doc: &ConfigDocument) -> Result<Vec<HostEntry>, ConfigError> {
    let Some(section) = doc.section(SECTION) else {
        return Ok(Vec::new());
    };

    let mut hosts = Vec::new();
    for node in section.nodes() {
        let line = node.line();
        if node.name() != "host" {
            return Err(ConfigError::ValidationError(format!(
                "line {line}: unknown node '{}' in {SECTION} block; expected 'host'",
                node.name()
            )));
        }

        let values = node.string_values();
        if values.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "line {line}: host node needs at least one domain name"
            )));
        }
        if values.len() != node.entry_count() {
            return Err(ConfigError::ValidationError(format!(
                "line {line}: host node accepts only string domain names"
            )));
        }

        for value in values {
            validate_host_name(value, line)?;
            hosts.push(HostEntry {
                name: value.to_string(),
                line,
            });
        }
    }
    Ok(hosts)
}

/// Reject values that cannot form an `applinks:<host>` entry.
fn validate_host_name(name: &str, line: usize) -> Result<(), ConfigError> {
    let problem = if name.is_empty() {
        "is empty"
    } else if name.contains("://") {
        "must not include a scheme"
    } else if name.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else if name.contains('/') {
        "must not contain a path"
    } else {
        return Ok(());
    };
    Err(ConfigError::ValidationError(format!(
        "line {line}: host name '{name}' {problem}"
    )))
}
