//! String-valued types

use std::marker::PhantomData;

use crate::error::{ConfigError, ConfigResult};
use crate::types::{find_variant, ValueType, Variants};

/// A trimming pass-through string type with an optional predicate.
#[derive(Debug, Clone, Copy)]
pub struct StringType {
    predicate: Option<fn(&str) -> bool>,
    predicate_description: &'static str,
}

impl StringType {
    /// Accept any string
    pub const fn new() -> Self {
        Self {
            predicate: None,
            predicate_description: "",
        }
    }

    /// Accept only strings satisfying `predicate`; `description` names the
    /// rule in constraint-violation messages
    pub const fn matching(predicate: fn(&str) -> bool, description: &'static str) -> Self {
        Self {
            predicate: Some(predicate),
            predicate_description: description,
        }
    }
}

impl Default for StringType {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueType for StringType {
    type Value = String;

    fn convert(&self, normalized: &str) -> ConfigResult<Option<String>> {
        Ok(Some(normalized.to_string()))
    }

    fn check_postconditions(&self, value: String) -> ConfigResult<Option<String>> {
        if let Some(predicate) = self.predicate {
            if !predicate(&value) {
                return Err(ConfigError::constraint(
                    &value,
                    format!("does not match '{}'", self.predicate_description),
                ));
            }
        }
        Ok(Some(value))
    }

    fn description(&self) -> String {
        if self.predicate.is_none() {
            "Any string.".to_string()
        } else {
            self.predicate_description.to_string()
        }
    }
}

/// A type accepting one of a fixed selection of named variants.
///
/// An exact name match is always preferred. With case-insensitive matching
/// enabled, an inexact name resolves to the first case-insensitive match in
/// declaration order, so variants that differ only by case resolve
/// deterministically.
#[derive(Debug, Clone, Copy)]
pub struct OneOf<T: Variants> {
    case_sensitive: bool,
    _variants: PhantomData<T>,
}

impl<T: Variants> OneOf<T> {
    /// Match variant names exactly
    pub const fn new() -> Self {
        Self {
            case_sensitive: true,
            _variants: PhantomData,
        }
    }

    /// Fall back to case-insensitive matching when no exact match exists
    pub const fn case_insensitive() -> Self {
        Self {
            case_sensitive: false,
            _variants: PhantomData,
        }
    }

    /// Whether matching requires an exact-case name
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn variant_names() -> String {
        T::VARIANTS
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<T: Variants> Default for OneOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Variants> ValueType for OneOf<T> {
    type Value = T;

    fn convert(&self, normalized: &str) -> ConfigResult<Option<T>> {
        find_variant(normalized, self.case_sensitive)
            .map(Some)
            .ok_or_else(|| {
                ConfigError::constraint(
                    normalized,
                    format!("not one of {{ {} }}", Self::variant_names()),
                )
            })
    }

    fn description(&self) -> String {
        format!(
            "A case-{}sensitive string matching one of {{ {} }}.",
            if self.case_sensitive { "" } else { "in" },
            Self::variant_names(),
        )
    }
}
