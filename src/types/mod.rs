//! Value types: the strategy objects that turn raw strings into typed values
//!
//! Every type runs the same three-stage pipeline: precondition normalization,
//! conversion, postcondition constraints. Absence (`None`) flows through a
//! channel of its own and always means "no value, use the default" — it is
//! never an error, and errors are never silently defaulted.

pub mod network;
pub mod numeric;
pub mod strings;
pub mod units;

use std::borrow::Cow;

use crate::error::ConfigResult;

/// Trim leading and trailing whitespace, normalizing a blank result to absent.
///
/// This is the stock precondition behavior. Implementations that layer extra
/// normalization on top of `check_preconditions` should start from this.
pub fn trim_to_none(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// A reusable strategy defining how a raw string becomes a validated typed
/// value.
///
/// Implementations hold at most immutable parameters (radix, bounds) and are
/// safely shared across any number of keys and concurrent resolutions.
pub trait ValueType {
    /// The target type a successful resolution produces
    type Value;

    /// Validate and normalize the raw string before conversion.
    ///
    /// The default trims whitespace and treats a blank result as absent,
    /// which short-circuits the rest of the pipeline.
    fn check_preconditions<'a>(&self, raw: Option<&'a str>) -> ConfigResult<Option<Cow<'a, str>>> {
        Ok(trim_to_none(raw).map(Cow::Borrowed))
    }

    /// Convert a present, normalized string into a value.
    ///
    /// Returning `Ok(None)` signals absence; malformed input must be a
    /// [`ConfigError::Format`](crate::ConfigError::Format) error instead.
    fn convert(&self, normalized: &str) -> ConfigResult<Option<Self::Value>>;

    /// Apply domain constraints to the converted value.
    ///
    /// The default accepts everything. Returning `Ok(None)` falls back to
    /// the default value; a violated constraint is a hard error.
    fn check_postconditions(&self, value: Self::Value) -> ConfigResult<Option<Self::Value>> {
        Ok(Some(value))
    }

    /// Run the full pipeline: preconditions, then conversion, then
    /// postconditions. Absence at any stage short-circuits the rest.
    fn process(&self, raw: Option<&str>) -> ConfigResult<Option<Self::Value>> {
        let normalized = match self.check_preconditions(raw)? {
            Some(normalized) => normalized,
            None => return Ok(None),
        };
        match self.convert(&normalized)? {
            Some(value) => self.check_postconditions(value),
            None => Ok(None),
        }
    }

    /// Human-readable description of the accepted input, for documentation
    /// and error messages
    fn description(&self) -> String;
}

/// A closed set of named variants in declaration order.
///
/// Backs both the one-of string type and unit-suffix resolution.
pub trait Variants: Copy + Sized + 'static {
    /// All variants, in declaration order
    const VARIANTS: &'static [Self];

    /// The variant's name as it appears in configuration values
    fn name(&self) -> &'static str;
}

/// Resolve a name to a variant.
///
/// An exact match always wins. When `case_sensitive` is false and no exact
/// match exists, the first case-insensitive match in declaration order is
/// taken, so variants differing only by case resolve deterministically.
pub fn find_variant<T: Variants>(name: &str, case_sensitive: bool) -> Option<T> {
    if let Some(exact) = T::VARIANTS.iter().find(|v| v.name() == name) {
        return Some(*exact);
    }
    if !case_sensitive {
        return T::VARIANTS
            .iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
            .copied();
    }
    None
}
