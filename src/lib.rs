//! Typed, validated configuration keys with unit-aware quantities
//!
//! This crate lets callers declare typed configuration properties ("keys")
//! that are retrieved from string-keyed sources, then deterministically
//! parsed, validated, and defaulted into a target type. Every type runs the
//! same three-stage pipeline (precondition check, conversion, postcondition
//! check), and the quantity subsystem parses magnitudes with optional unit
//! suffixes such as `"500ms"` and compares them across units without
//! needless precision loss.
//!
//! ```
//! use propkey::{DurationType, Key, MapSource, PortType, TimeUnit};
//!
//! let mut source = MapSource::new();
//! source.insert("server.port", "8080");
//! source.insert("server.timeout", "500ms");
//!
//! let port = Key::with_default("server.port", PortType::ANY, 80);
//! let timeout = Key::new("server.timeout", DurationType::non_negative());
//!
//! assert_eq!(port.resolve(&source).unwrap(), Some(8080));
//! let timeout = timeout.resolve(&source).unwrap().unwrap();
//! assert_eq!(timeout.magnitude(), 500);
//! assert_eq!(timeout.unit(), TimeUnit::Millis);
//! ```
//!
//! Keys and types are immutable after construction and hold no interior
//! mutability, so they are freely shared across threads. Resolution is a
//! pure, bounded-time computation: one source lookup, one parse.

pub mod error;
pub mod key;
pub mod source;
pub mod types;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use key::Key;
pub use source::{EnvSource, MapSource, PropertiesSource, Source};
pub use types::{ValueType, Variants};

// Re-export the stock value types
pub use types::network::PortType;
pub use types::numeric::{IntegerRangeType, IntegerType, LongRangeType, LongType};
pub use types::strings::{OneOf, StringType};
pub use types::units::{DurationType, Quantity, QuantityType, TimeUnit, Unit};
