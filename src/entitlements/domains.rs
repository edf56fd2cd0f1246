use std::collections::HashSet;

use plist::{Dictionary, Value};

use crate::config::HostEntry;

/// Entitlement key holding the associated-domains list.
pub const ASSOCIATED_DOMAINS_KEY: &str = "com.apple.developer.associated-domains";

/// Service prefix for universal links.
const APPLINKS_PREFIX: &str = "applinks:";

/// Build the `applinks:<host>` list for the given hosts.
///
/// Order follows the first occurrence of each entry; later duplicates are
/// dropped.
pub fn associated_domains(hosts: &[HostEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    hosts
        .iter()
        .map(|host| format!("{APPLINKS_PREFIX}{}", host.name))
        .filter(|domain| seen.insert(domain.clone()))
        .collect()
}

/// Return `document` with the associated-domains key replaced by `domains`.
///
/// Every other key is carried over untouched. An existing key keeps its
/// position; a new one is appended.
pub fn merge_associated_domains(mut document: Dictionary, domains: &[String]) -> Dictionary {
    let value = Value::Array(domains.iter().cloned().map(Value::String).collect());
    document.insert(ASSOCIATED_DOMAINS_KEY.to_string(), value);
    document
}
