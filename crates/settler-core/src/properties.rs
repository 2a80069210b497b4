use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use settler_util::errors::SettlerError;

/// A loaded Java-style properties file.
///
/// Supports the subset the host build actually writes: `key=value` and
/// `key: value` lines, `#`/`!` comments, blank lines, surrounding
/// whitespace trimmed. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct PropertiesFile {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl PropertiesFile {
    /// Read and parse a properties file from disk.
    pub fn load(path: &Path) -> Result<Self, SettlerError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            entries: parse(&content),
        })
    }

    /// Look up a key, returning `None` if it is not present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key that must be present and non-empty.
    ///
    /// Absence (or an empty value) is a fatal configuration error, not a
    /// recoverable condition.
    pub fn require(&self, key: &str) -> Result<&str, SettlerError> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(SettlerError::MissingConfigurationKey {
                key: key.to_string(),
                path: self.path.clone(),
            }),
        }
    }

    /// Path this file was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the file held no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse(content: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }
        // First separator wins, whichever of `=` / `:` comes earlier.
        let separator = match (trimmed.find('='), trimmed.find(':')) {
            (Some(eq), Some(colon)) => Some(eq.min(colon)),
            (Some(eq), None) => Some(eq),
            (None, Some(colon)) => Some(colon),
            (None, None) => None,
        };
        if let Some(at) = separator {
            let (key, value) = trimmed.split_at(at);
            map.insert(key.trim().to_string(), value[1..].trim().to_string());
        }
    }
    map
}
