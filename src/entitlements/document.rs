//! Reading and writing entitlements property lists on disk.

use std::io::Cursor;
use std::path::Path;

use plist::{Dictionary, Value};

use super::EntitlementsError;

/// Result of reading an entitlements file before merging.
#[derive(Debug)]
pub(super) enum Loaded {
    /// No file at the path yet.
    Missing,
    /// File parsed into a top-level dictionary.
    Existing(Dictionary),
    /// File exists but could not be read or is not a dictionary plist.
    Malformed(String),
}

/// Read the property list at `path`.
///
/// XML and binary plists are both accepted. Only a missing file maps to
/// [`Loaded::Missing`]; every other failure is reported as malformed so the
/// caller can decide whether to overwrite it.
pub(super) fn load(path: &Path) -> Loaded {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Loaded::Missing,
        Err(e) => return Loaded::Malformed(format!("unreadable: {e}")),
    };

    match Value::from_reader(Cursor::new(bytes)) {
        Ok(Value::Dictionary(document)) => Loaded::Existing(document),
        Ok(_) => Loaded::Malformed("top-level value is not a dictionary".to_string()),
        Err(e) => Loaded::Malformed(format!("invalid property list: {e}")),
    }
}

/// Serialize `document` as an XML plist and write it to `path`.
///
/// Parent directories are created first. Existing content is replaced.
pub(super) fn store(path: &Path, document: &Dictionary) -> Result<(), EntitlementsError> {
    let mut buf = Vec::new();
    plist::to_writer_xml(&mut buf, document).map_err(|source| EntitlementsError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    buf.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| EntitlementsError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, buf).map_err(|source| EntitlementsError::Write {
        path: path.to_path_buf(),
        source,
    })
}
