//! Configuration keys: named, typed, optionally-defaulted property descriptors

use crate::error::ConfigResult;
use crate::source::Source;
use crate::types::ValueType;

/// A configuration property descriptor.
///
/// A key binds an identifier to a [`ValueType`] and an optional default.
/// Resolving it against a [`Source`] looks the identifier up, runs the raw
/// string through the type's pipeline, and substitutes the default when no
/// value is produced. Keys are immutable after construction; identifier
/// uniqueness across a process is the caller's responsibility.
pub struct Key<V: ValueType> {
    name: String,
    value_type: V,
    default: Option<V::Value>,
}

impl<V: ValueType> Key<V>
where
    V::Value: Clone,
{
    /// Create a key with no default value
    pub fn new(name: impl Into<String>, value_type: V) -> Self {
        Self {
            name: name.into(),
            value_type,
            default: None,
        }
    }

    /// Create a key with a default value
    pub fn with_default(name: impl Into<String>, value_type: V, default: V::Value) -> Self {
        Self {
            name: name.into(),
            value_type,
            default: Some(default),
        }
    }

    /// The key's identifier in the configuration source
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type governing how this key's value is parsed and validated
    pub fn value_type(&self) -> &V {
        &self.value_type
    }

    /// The configured default value, if any
    pub fn default_value(&self) -> Option<&V::Value> {
        self.default.as_ref()
    }

    /// Resolve this key against a source.
    ///
    /// A missing key with a configured default returns the default without
    /// consulting the type, so the key-level default always takes precedence
    /// over any type-level defaulting in the postcondition stage. Otherwise
    /// the raw value runs through the type's pipeline, and the default backs
    /// an absent result. Format and constraint errors propagate; they are
    /// never swallowed by defaulting.
    pub fn resolve<S: Source + ?Sized>(&self, source: &S) -> ConfigResult<Option<V::Value>> {
        let raw = source.lookup(&self.name);
        if raw.is_none() && self.default.is_some() {
            log::debug!("key '{}' not set, using default", self.name);
            return Ok(self.default.clone());
        }
        let parsed = self.value_type.process(raw.as_deref())?;
        if parsed.is_none() && self.default.is_some() {
            log::debug!("key '{}' resolved to no value, using default", self.name);
        }
        Ok(parsed.or_else(|| self.default.clone()))
    }
}
