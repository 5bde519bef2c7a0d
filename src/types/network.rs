//! Network-oriented types

use crate::error::{ConfigError, ConfigResult};
use crate::types::numeric::IntegerRangeType;
use crate::types::ValueType;

const PORT_MIN: i32 = 0;
const PORT_MAX: i32 = 65535;

/// An integer port number in the range 0-65535.
///
/// Presets cover the RFC 6335 port categories; custom sub-ranges must fall
/// within 0-65535.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortType {
    range: IntegerRangeType,
}

impl PortType {
    /// System Ports (0-1023), also known as Well Known Ports (RFC 6335)
    pub const SYSTEM: PortType = PortType {
        range: IntegerRangeType::closed(0, 1023),
    };

    /// User Ports (1024-49151), also known as Registered Ports (RFC 6335)
    pub const USER: PortType = PortType {
        range: IntegerRangeType::closed(1024, 49151),
    };

    /// Dynamic Ports (49152-65535), also known as Private or Ephemeral
    /// Ports (RFC 6335)
    pub const DYNAMIC: PortType = PortType {
        range: IntegerRangeType::closed(49152, 65535),
    };

    /// Any valid port
    pub const ANY: PortType = PortType {
        range: IntegerRangeType::closed(PORT_MIN, PORT_MAX),
    };

    /// Create a port type restricted to a sub-range; bounds outside 0-65535
    /// or out of order are rejected at construction
    pub fn new(lower: i32, upper: i32) -> ConfigResult<Self> {
        for bound in [lower, upper] {
            if !(PORT_MIN..=PORT_MAX).contains(&bound) {
                return Err(ConfigError::Construction(format!(
                    "port bound {bound} is not in the range [{PORT_MIN},{PORT_MAX}]"
                )));
            }
        }
        Ok(Self {
            range: IntegerRangeType::new(lower, upper)?,
        })
    }

    /// The inclusive lower bound
    pub fn lower_bound(&self) -> i32 {
        self.range.lower_bound()
    }

    /// The inclusive upper bound
    pub fn upper_bound(&self) -> i32 {
        self.range.upper_bound()
    }
}

impl ValueType for PortType {
    type Value = i32;

    fn convert(&self, normalized: &str) -> ConfigResult<Option<i32>> {
        self.range.convert(normalized)
    }

    fn check_postconditions(&self, value: i32) -> ConfigResult<Option<i32>> {
        self.range.check_postconditions(value)
    }

    fn description(&self) -> String {
        format!(
            "A port number in the range [{},{}].",
            self.range.lower_bound(),
            self.range.upper_bound(),
        )
    }
}
