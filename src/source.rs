//! Configuration sources: string-keyed lookup providers
//!
//! Sources are deliberately thin adapters. All parsing and validation lives
//! in the value types; a source only answers "what raw string, if any, is
//! stored under this key".

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigResult;

/// A provider of raw string values arranged by string keys
pub trait Source {
    /// Look up the raw value stored under `key`, if any
    fn lookup(&self, key: &str) -> Option<String>;
}

/// A [`Source`] backed by an in-memory map.
///
/// Values of any type can be inserted; non-string values are stringified
/// with their [`ToString`] form when the map is built.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    entries: HashMap<String, String>,
}

impl MapSource {
    /// Create an empty map source
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, stringifying the value
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.entries.insert(key.into(), value.to_string());
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the source holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Source for MapSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

impl From<HashMap<String, String>> for MapSource {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (key, value) in iter {
            source.insert(key, value);
        }
        source
    }
}

/// A [`Source`] backed by a properties file.
///
/// The accepted format is the flat `key=value` (or `key: value`) line
/// format: `#` and `!` start comment lines, blank lines are ignored, and
/// keys and values are trimmed. Nested or structured formats are out of
/// scope by design.
#[derive(Debug, Clone)]
pub struct PropertiesSource {
    entries: HashMap<String, String>,
}

impl PropertiesSource {
    /// Read and parse a properties file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let source = Self::parse(&content);
        log::debug!(
            "loaded {} properties from {}",
            source.entries.len(),
            path.display()
        );
        Ok(source)
    }

    /// Parse properties from an in-memory string
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let (key, value) = match line.find(['=', ':']) {
                Some(at) => (&line[..at], &line[at + 1..]),
                None => (line, ""),
            };
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }
        Self { entries }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the source holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Source for PropertiesSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// A [`Source`] backed by process environment variables.
///
/// A key like `server.port` is looked up as `PREFIX_SERVER_PORT`: the key is
/// uppercased, dots and dashes become underscores, and the prefix (when not
/// empty) is prepended with an underscore separator.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    /// Create an environment source with no prefix
    pub fn new() -> Self {
        Self::with_prefix("")
    }

    /// Create an environment source with the given variable prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn variable_name(&self, key: &str) -> String {
        let mapped: String = key
            .chars()
            .map(|c| match c {
                '.' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        if self.prefix.is_empty() {
            mapped
        } else {
            format!("{}_{}", self.prefix, mapped)
        }
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for EnvSource {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(self.variable_name(key)).ok()
    }
}
